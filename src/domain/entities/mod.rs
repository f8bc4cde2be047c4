//! Core domain entities.
//!
//! Entities are plain data structures without business logic.
//!
//! # Entity Types
//!
//! - [`Actor`] - The user a request runs for (possibly anonymous)
//! - [`PhoneNumber`] - A phone number registered for SMS reports
//! - [`SmsCredentials`] / [`SmsProviderInfo`] - SMS provider account and catalog
//! - [`Country`] / [`Continent`] - Reference data shown on the settings page

pub mod actor;
pub mod country;
pub mod messaging;

pub use actor::Actor;
pub use country::{Continent, Country, UNKNOWN_COUNTRY};
pub use messaging::{PhoneNumber, SmsCredentials, SmsProviderInfo};

//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`persistence`] - PostgreSQL repository implementations
//! - [`reference`] - In-memory reference data and IP locator
//! - [`sms`] - SMS provider clients

pub mod persistence;
pub mod reference;
pub mod sms;

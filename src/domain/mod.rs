//! Domain layer containing business entities and interfaces.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`report`] - Report value types: periods, segments, data tables
//! - [`repositories`] - Data access trait definitions
//! - [`ports`] - Reference data and SMS provider interfaces
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Traits define contracts implemented by the infrastructure layer
//! - Business logic lives in services (see [`crate::application::services`])

pub mod entities;
pub mod ports;
pub mod report;
pub mod repositories;

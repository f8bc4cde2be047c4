//! Data Transfer Objects for API requests and responses.
//!
//! Query DTOs use Serde for decoding and validator for input validation.

pub mod health;
pub mod report;

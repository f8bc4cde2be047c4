//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod reports;

pub use health::health_handler;
pub use reports::{visit_frequency_handler, visits_summary_handler};

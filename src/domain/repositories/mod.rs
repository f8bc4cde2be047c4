//! Repository trait definitions for the domain layer.
//!
//! These traits abstract data access and are implemented by concrete
//! repositories in `crate::infrastructure::persistence`. Mock implementations
//! are generated via `mockall` for unit tests.
//!
//! # Available Repositories
//!
//! - [`VisitsRepository`] - Visit log aggregation for reports
//! - [`MessagingRepository`] - SMS account settings and phone numbers
//! - [`TokenRepository`] - Users and API token authentication

pub mod messaging_repository;
pub mod token_repository;
pub mod visits_repository;

pub use messaging_repository::MessagingRepository;
pub use token_repository::{ApiToken, TokenRepository};
pub use visits_repository::{VisitsAggregate, VisitsRepository};

#[cfg(test)]
pub use messaging_repository::MockMessagingRepository;
#[cfg(test)]
pub use token_repository::MockTokenRepository;
#[cfg(test)]
pub use visits_repository::MockVisitsRepository;

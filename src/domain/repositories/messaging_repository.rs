//! Repository trait for mobile messaging settings.

use crate::domain::entities::{PhoneNumber, SmsCredentials};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the SMS account and users' phone numbers.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgMessagingRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessagingRepository: Send + Sync {
    /// Whether every user may manage the SMS account, not only superusers.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delegated_management(&self) -> Result<bool, AppError>;

    /// Enables or disables delegated account management.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn set_delegated_management(&self, delegated: bool) -> Result<(), AppError>;

    /// Returns the configured provider credentials, if any.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn sms_credentials(&self) -> Result<Option<SmsCredentials>, AppError>;

    /// Stores provider credentials, replacing previous ones.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn set_sms_credentials(&self, credentials: SmsCredentials) -> Result<(), AppError>;

    /// Lists the phone numbers registered by a user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn phone_numbers(&self, login: &str) -> Result<Vec<PhoneNumber>, AppError>;

    /// Registers a phone number for a user, not yet validated.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the user already registered this number.
    /// Returns [`AppError::Internal`] on database errors.
    async fn add_phone_number(&self, login: &str, number: &str) -> Result<PhoneNumber, AppError>;
}

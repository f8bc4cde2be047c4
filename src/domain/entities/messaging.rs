//! Mobile messaging entities: SMS account state and phone numbers.

use serde::Serialize;

/// A phone number registered by a user to receive SMS reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhoneNumber {
    /// Number in international form, e.g. `+33612345678`.
    pub number: String,
    /// Whether the user confirmed ownership with the verification code.
    pub validated: bool,
}

impl PhoneNumber {
    /// Creates a new PhoneNumber instance.
    pub fn new(number: String, validated: bool) -> Self {
        Self { number, validated }
    }
}

/// Credentials of the SMS provider account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmsCredentials {
    pub provider: String,
    pub api_key: String,
}

/// An SMS provider that can be selected on the settings page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SmsProviderInfo {
    pub name: String,
    pub description: String,
}

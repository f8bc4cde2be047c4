//! Interfaces to collaborators that are not repositories: reference data
//! lookups and the SMS provider.

use std::net::IpAddr;

use crate::domain::entities::{Continent, SmsCredentials, SmsProviderInfo};
use crate::error::AppError;
use async_trait::async_trait;

/// Read-only country reference data.
///
/// Country codes are lowercase ISO 3166-1 alpha-2.
pub trait CountryDirectory: Send + Sync {
    /// All known countries with their continent, in display order.
    fn countries(&self) -> Vec<(String, Continent)>;

    /// International calling code of a country, without the leading `+`.
    fn calling_code(&self, country_code: &str) -> Option<String>;

    /// Country name in `language`, falling back to the uppercase code.
    fn country_name(&self, country_code: &str, language: &str) -> String;

    /// Country most associated with a bare language code (`ja` -> `jp`).
    fn country_for_language(&self, language: &str) -> Option<String>;

    /// Returns true if the code names a known country.
    fn is_known_country(&self, country_code: &str) -> bool {
        self.countries().iter().any(|(code, _)| code == country_code)
    }
}

/// Resolves a client IP address to a country code.
pub trait IpCountryLocator: Send + Sync {
    fn locate(&self, ip: IpAddr) -> Option<String>;
}

/// Access to the SMS provider account.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SmsGateway: Send + Sync {
    /// Providers that can be configured.
    fn available_providers(&self) -> Vec<SmsProviderInfo>;

    /// Remaining credit as reported by the provider, e.g. `"Balance: 42"`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the provider is unknown.
    /// Returns [`AppError::Internal`] if the provider cannot be reached.
    async fn credit_left(&self, credentials: &SmsCredentials) -> Result<String, AppError>;
}

/// Liveness check of a backing store, used by the health endpoint.
#[async_trait]
pub trait HealthProbe: Send + Sync {
    /// Returns a short status line when the store answers.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store cannot be queried.
    async fn check(&self) -> Result<String, AppError>;
}

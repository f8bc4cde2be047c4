//! Mobile messaging settings page data.

use std::net::IpAddr;
use std::sync::{Arc, LazyLock};

use regex::Regex;
use serde_json::json;

use crate::domain::entities::{
    Actor, Country, PhoneNumber, SmsProviderInfo, UNKNOWN_COUNTRY,
};
use crate::domain::ports::{CountryDirectory, IpCountryLocator, SmsGateway};
use crate::domain::repositories::MessagingRepository;
use crate::error::AppError;

/// Matches a language tag such as `en`, `pt-br`, `zh_TW` or `zh-Hant-TW`.
///
/// A four-letter script subtag is skipped. The region must be a whole
/// subtag, so `sr-Latn` has no region.
static LANGUAGE_TAG_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([a-zA-Z]{2,3})(?:[-_][a-zA-Z]{4})?(?:[-_]([a-zA-Z]{2}))?(?:$|[-_,;])").unwrap()
});

const SETTINGS_MENU: &str = "Personal Settings";
const MESSAGING_MENU: &str = "Mobile Messaging";

/// Everything the mobile messaging settings template displays.
#[derive(Debug, Clone, PartialEq)]
pub struct MessagingSettingsView {
    pub is_superuser: bool,
    pub delegated_management: bool,
    pub credential_supplied: bool,
    /// Superuser, or any user when management is delegated.
    pub account_managed_by_current_user: bool,
    /// Set only when credentials exist and the account is managed by the viewer.
    pub provider: Option<String>,
    /// Set only when credentials exist and the account is managed by the viewer.
    pub credit_left: Option<String>,
    pub sms_providers: Vec<SmsProviderInfo>,
    pub countries: Vec<Country>,
    pub default_country: String,
    pub phone_numbers: Vec<PhoneNumber>,
    pub help_add_phone: String,
}

/// Gathers SMS account state, reference data and the viewer's phone numbers.
///
/// All collaborators are injected, there is no global lookup.
pub struct MessagingSettingsService {
    repository: Arc<dyn MessagingRepository>,
    directory: Arc<dyn CountryDirectory>,
    gateway: Arc<dyn SmsGateway>,
    ip_locator: Arc<dyn IpCountryLocator>,
}

impl MessagingSettingsService {
    /// Creates a new messaging settings service.
    pub fn new(
        repository: Arc<dyn MessagingRepository>,
        directory: Arc<dyn CountryDirectory>,
        gateway: Arc<dyn SmsGateway>,
        ip_locator: Arc<dyn IpCountryLocator>,
    ) -> Self {
        Self {
            repository,
            directory,
            gateway,
            ip_locator,
        }
    }

    /// Builds the settings page data for `actor`.
    ///
    /// `client_ip` feeds the default country guess.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] for the anonymous actor, before
    /// any collaborator is queried.
    /// Collaborator errors are returned unchanged.
    pub async fn settings_view(
        &self,
        actor: &Actor,
        client_ip: Option<IpAddr>,
    ) -> Result<MessagingSettingsView, AppError> {
        if actor.is_anonymous() {
            return Err(AppError::unauthorized(
                "Unauthorized",
                json!({ "reason": "You must be logged in to manage mobile messaging" }),
            ));
        }

        let delegated_management = self.repository.delegated_management().await?;
        let credentials = self.repository.sms_credentials().await?;
        let credential_supplied = credentials.is_some();
        let account_managed_by_current_user = actor.is_superuser || delegated_management;

        let (provider, credit_left) = match credentials {
            Some(credentials) if account_managed_by_current_user => {
                let credit = self.gateway.credit_left(&credentials).await?;
                (Some(credentials.provider), Some(credit))
            }
            _ => (None, None),
        };

        let countries = self.countries(&actor.language);
        let default_country = self.guess_default_country(&actor.language, client_ip);
        let phone_numbers = self.repository.phone_numbers(&actor.login).await?;

        tracing::debug!(
            login = %actor.login,
            countries = countries.len(),
            phone_numbers = phone_numbers.len(),
            default_country = %default_country,
            "Built mobile messaging settings"
        );

        Ok(MessagingSettingsView {
            is_superuser: actor.is_superuser,
            delegated_management,
            credential_supplied,
            account_managed_by_current_user,
            provider,
            credit_left,
            sms_providers: self.gateway.available_providers(),
            countries,
            default_country,
            phone_numbers,
            help_add_phone: format!(
                "You can add, validate and remove phone numbers from {SETTINGS_MENU} > {MESSAGING_MENU}."
            ),
        })
    }

    /// Countries that have a calling code, with names in `language`.
    pub fn countries(&self, language: &str) -> Vec<Country> {
        self.directory
            .countries()
            .into_iter()
            .filter_map(|(code, _continent)| {
                let calling_code = self.directory.calling_code(&code)?;
                Some(Country {
                    name: self.directory.country_name(&code, language),
                    code,
                    calling_code,
                })
            })
            .collect()
    }

    /// Best guess of the viewer's country.
    ///
    /// Tried in order: the IP locator, the region subtag of the language
    /// (`pt-br` -> `br`), the country most associated with the bare
    /// language. Falls back to [`UNKNOWN_COUNTRY`].
    pub fn guess_default_country(&self, language: &str, client_ip: Option<IpAddr>) -> String {
        if let Some(code) = client_ip.and_then(|ip| self.ip_locator.locate(ip)) {
            return code.to_lowercase();
        }

        let tag = language.split([',', ';']).next().unwrap_or_default().trim();
        if let Some(captures) = LANGUAGE_TAG_REGEX.captures(tag) {
            if let Some(region) = captures.get(2) {
                let region = region.as_str().to_lowercase();
                if self.directory.is_known_country(&region) {
                    return region;
                }
            }

            let language = captures[1].to_lowercase();
            if let Some(code) = self.directory.country_for_language(&language) {
                return code;
            }
        }

        UNKNOWN_COUNTRY.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Continent, SmsCredentials};
    use crate::domain::ports::MockSmsGateway;
    use crate::domain::repositories::MockMessagingRepository;
    use crate::infrastructure::reference::{NullIpLocator, StaticCountryDirectory};
    use std::collections::HashMap;

    struct FixedIpLocator(&'static str);

    impl IpCountryLocator for FixedIpLocator {
        fn locate(&self, _ip: IpAddr) -> Option<String> {
            Some(self.0.to_string())
        }
    }

    fn directory() -> Arc<StaticCountryDirectory> {
        Arc::new(StaticCountryDirectory::new(
            vec![
                ("a1", Continent::Unknown, "Anonymous Proxy"),
                ("br", Continent::SouthAmerica, "Brazil"),
                ("fr", Continent::Europe, "France"),
                ("jp", Continent::Asia, "Japan"),
            ],
            HashMap::from([("br", "55"), ("fr", "33"), ("jp", "81")]),
            HashMap::from([("fr", "fr"), ("ja", "jp")]),
        ))
    }

    fn service(repo: MockMessagingRepository, gateway: MockSmsGateway) -> MessagingSettingsService {
        MessagingSettingsService::new(
            Arc::new(repo),
            directory(),
            Arc::new(gateway),
            Arc::new(NullIpLocator),
        )
    }

    fn providers() -> Vec<SmsProviderInfo> {
        vec![SmsProviderInfo {
            name: "StubbedProvider".to_string(),
            description: "Test provider".to_string(),
        }]
    }

    fn credentials() -> SmsCredentials {
        SmsCredentials {
            provider: "StubbedProvider".to_string(),
            api_key: "key".to_string(),
        }
    }

    fn user(superuser: bool) -> Actor {
        Actor::new("alice".to_string(), superuser, "fr".to_string())
    }

    #[tokio::test]
    async fn test_anonymous_is_rejected_without_side_effects() {
        let mut repo = MockMessagingRepository::new();
        repo.expect_delegated_management().times(0);
        repo.expect_sms_credentials().times(0);
        repo.expect_phone_numbers().times(0);
        let mut gateway = MockSmsGateway::new();
        gateway.expect_credit_left().times(0);
        gateway.expect_available_providers().times(0);

        let result = service(repo, gateway)
            .settings_view(&Actor::anonymous(), None)
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Unauthorized { .. }));
    }

    #[tokio::test]
    async fn test_superuser_sees_provider_and_credit() {
        let mut repo = MockMessagingRepository::new();
        repo.expect_delegated_management().times(1).returning(|| Ok(false));
        repo.expect_sms_credentials()
            .times(1)
            .returning(|| Ok(Some(credentials())));
        repo.expect_phone_numbers()
            .withf(|login| login == "alice")
            .times(1)
            .returning(|_| Ok(vec![PhoneNumber::new("+33612345678".to_string(), true)]));

        let mut gateway = MockSmsGateway::new();
        gateway
            .expect_credit_left()
            .withf(|c| c.api_key == "key")
            .times(1)
            .returning(|_| Ok("Balance: 42".to_string()));
        gateway.expect_available_providers().returning(providers);

        let view = service(repo, gateway)
            .settings_view(&user(true), None)
            .await
            .unwrap();

        assert!(view.is_superuser);
        assert!(!view.delegated_management);
        assert!(view.credential_supplied);
        assert!(view.account_managed_by_current_user);
        assert_eq!(view.provider.as_deref(), Some("StubbedProvider"));
        assert_eq!(view.credit_left.as_deref(), Some("Balance: 42"));
        assert_eq!(view.sms_providers, providers());
        assert_eq!(view.phone_numbers.len(), 1);
        assert_eq!(view.default_country, "fr");
        assert!(view.help_add_phone.contains("Mobile Messaging"));
    }

    #[tokio::test]
    async fn test_regular_user_without_delegation_gets_no_credit() {
        let mut repo = MockMessagingRepository::new();
        repo.expect_delegated_management().returning(|| Ok(false));
        repo.expect_sms_credentials()
            .returning(|| Ok(Some(credentials())));
        repo.expect_phone_numbers().returning(|_| Ok(vec![]));

        let mut gateway = MockSmsGateway::new();
        gateway.expect_credit_left().times(0);
        gateway.expect_available_providers().returning(providers);

        let view = service(repo, gateway)
            .settings_view(&user(false), None)
            .await
            .unwrap();

        assert!(view.credential_supplied);
        assert!(!view.account_managed_by_current_user);
        assert!(view.provider.is_none());
        assert!(view.credit_left.is_none());
    }

    #[tokio::test]
    async fn test_delegated_management_lets_regular_user_manage() {
        let mut repo = MockMessagingRepository::new();
        repo.expect_delegated_management().returning(|| Ok(true));
        repo.expect_sms_credentials().returning(|| Ok(None));
        repo.expect_phone_numbers().returning(|_| Ok(vec![]));

        let mut gateway = MockSmsGateway::new();
        gateway.expect_credit_left().times(0);
        gateway.expect_available_providers().returning(Vec::new);

        let view = service(repo, gateway)
            .settings_view(&user(false), None)
            .await
            .unwrap();

        assert!(view.account_managed_by_current_user);
        assert!(!view.credential_supplied);
        assert!(view.provider.is_none());
    }

    #[tokio::test]
    async fn test_gateway_error_propagates() {
        let mut repo = MockMessagingRepository::new();
        repo.expect_delegated_management().returning(|| Ok(false));
        repo.expect_sms_credentials()
            .returning(|| Ok(Some(credentials())));

        let mut gateway = MockSmsGateway::new();
        gateway
            .expect_credit_left()
            .returning(|_| Err(AppError::internal("Provider unreachable", json!({}))));

        let err = service(repo, gateway)
            .settings_view(&user(true), None)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Internal { .. }));
    }

    #[test]
    fn test_countries_without_calling_code_are_excluded() {
        let service = service(MockMessagingRepository::new(), MockSmsGateway::new());
        let countries = service.countries("en");

        let codes: Vec<_> = countries.iter().map(|c| c.code.as_str()).collect();
        assert_eq!(codes, ["br", "fr", "jp"]);
        assert_eq!(countries[0].name, "Brazil");
        assert_eq!(countries[0].calling_code, "55");
    }

    #[test]
    fn test_guess_country_from_language() {
        let service = service(MockMessagingRepository::new(), MockSmsGateway::new());

        assert_eq!(service.guess_default_country("pt-br", None), "br");
        assert_eq!(service.guess_default_country("pt_BR", None), "br");
        assert_eq!(service.guess_default_country("ja", None), "jp");
        assert_eq!(service.guess_default_country("fr-ch, fr;q=0.9", None), "fr");
        assert_eq!(service.guess_default_country("de", None), "xx");
        assert_eq!(service.guess_default_country("", None), "xx");
    }

    #[test]
    fn test_script_subtag_is_not_a_region() {
        let service = MessagingSettingsService::new(
            Arc::new(MockMessagingRepository::new()),
            Arc::new(StaticCountryDirectory::default()),
            Arc::new(MockSmsGateway::new()),
            Arc::new(NullIpLocator),
        );

        assert_eq!(service.guess_default_country("sr-Latn", None), "rs");
        assert_eq!(service.guess_default_country("az-Cyrl", None), "az");
        assert_eq!(service.guess_default_country("zh-Hant-TW", None), "tw");
        assert_eq!(service.guess_default_country("en-GB-oxendict", None), "gb");
        assert_eq!(service.guess_default_country("lo", None), "la");
    }

    #[test]
    fn test_ip_locator_wins_over_language() {
        let service = MessagingSettingsService::new(
            Arc::new(MockMessagingRepository::new()),
            directory(),
            Arc::new(MockSmsGateway::new()),
            Arc::new(FixedIpLocator("JP")),
        );

        let ip: IpAddr = "203.0.113.9".parse().unwrap();
        assert_eq!(service.guess_default_country("pt-br", Some(ip)), "jp");
        assert_eq!(service.guess_default_country("pt-br", None), "br");
    }
}

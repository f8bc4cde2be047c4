//! Provider catalog behind the [`SmsGateway`] port.

use async_trait::async_trait;
use serde_json::json;

use super::clockwork::ClockworkClient;
use crate::domain::entities::{SmsCredentials, SmsProviderInfo};
use crate::domain::ports::SmsGateway;
use crate::error::AppError;

pub const CLOCKWORK: &str = "Clockwork";
pub const STUBBED_PROVIDER: &str = "StubbedProvider";

/// Gateway that asks the configured provider for the account credit.
///
/// `StubbedProvider` is offered only when a stub credit is configured. It
/// never leaves the process and reports that credit.
pub struct ProviderSmsGateway {
    clockwork: ClockworkClient,
    stub_credit: Option<String>,
}

impl ProviderSmsGateway {
    pub fn new(clockwork: ClockworkClient, stub_credit: Option<String>) -> Self {
        Self {
            clockwork,
            stub_credit,
        }
    }
}

#[async_trait]
impl SmsGateway for ProviderSmsGateway {
    fn available_providers(&self) -> Vec<SmsProviderInfo> {
        let mut providers = vec![SmsProviderInfo {
            name: CLOCKWORK.to_string(),
            description: "Sends SMS through the Clockwork API. An API key is required."
                .to_string(),
        }];

        if self.stub_credit.is_some() {
            providers.push(SmsProviderInfo {
                name: STUBBED_PROVIDER.to_string(),
                description: "Does not send anything. Reports a fixed credit, for testing."
                    .to_string(),
            });
        }

        providers
    }

    async fn credit_left(&self, credentials: &SmsCredentials) -> Result<String, AppError> {
        match (credentials.provider.as_str(), &self.stub_credit) {
            (CLOCKWORK, _) => self.clockwork.credit_left(&credentials.api_key).await,
            (STUBBED_PROVIDER, Some(credit)) => {
                tracing::debug!("Reporting stubbed SMS credit");
                Ok(credit.clone())
            }
            _ => Err(AppError::bad_request(
                "Unknown SMS provider",
                json!({ "provider": credentials.provider }),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn credentials(provider: &str) -> SmsCredentials {
        SmsCredentials {
            provider: provider.to_string(),
            api_key: "key".to_string(),
        }
    }

    fn gateway(base_url: &str, stub_credit: Option<&str>) -> ProviderSmsGateway {
        ProviderSmsGateway::new(
            ClockworkClient::new(base_url).unwrap(),
            stub_credit.map(str::to_string),
        )
    }

    fn names(gateway: &ProviderSmsGateway) -> Vec<String> {
        gateway
            .available_providers()
            .into_iter()
            .map(|p| p.name)
            .collect()
    }

    #[test]
    fn test_stubbed_provider_listed_only_when_configured() {
        assert_eq!(names(&gateway("http://localhost", None)), ["Clockwork"]);
        assert_eq!(
            names(&gateway("http://localhost", Some("Balance: 1"))),
            ["Clockwork", "StubbedProvider"]
        );
    }

    #[tokio::test]
    async fn test_clockwork_credit_comes_from_the_api() {
        let server = MockServer::start_async().await;
        let credit_mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/credit.aspx").query_param("key", "key");
                then.status(200).body("Credit: 17");
            })
            .await;

        let gateway = gateway(&server.base_url(), Some("Balance: 42"));
        let credit = gateway.credit_left(&credentials("Clockwork")).await.unwrap();

        credit_mock.assert_async().await;
        assert_eq!(credit, "Credit: 17");
    }

    #[tokio::test]
    async fn test_stubbed_provider_reports_configured_credit() {
        let gateway = gateway("http://127.0.0.1:1", Some("Balance: 42"));

        let credit = gateway
            .credit_left(&credentials("StubbedProvider"))
            .await
            .unwrap();
        assert_eq!(credit, "Balance: 42");
    }

    #[tokio::test]
    async fn test_stubbed_provider_unknown_when_not_configured() {
        let gateway = gateway("http://127.0.0.1:1", None);

        let err = gateway
            .credit_left(&credentials("StubbedProvider"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_credit_left_rejects_unknown_provider() {
        let gateway = gateway("http://127.0.0.1:1", Some("Balance: 42"));

        let err = gateway
            .credit_left(&credentials("Carrier Pigeon"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));
    }
}

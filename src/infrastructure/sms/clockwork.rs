//! Clockwork HTTP API client.

use std::time::Duration;

use reqwest::Client;
use serde_json::json;

use crate::error::AppError;

/// Production endpoint of the Clockwork HTTP API.
pub const CLOCKWORK_API_URL: &str = "https://api.mediaburst.co.uk/http";

const CREDIT_RESOURCE: &str = "/credit.aspx";

/// Clockwork answers failures with `200 OK` and a body such as
/// `Error 2: Invalid username or password`.
const ERROR_MARKER: &str = "Error";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Client for the account endpoints of Clockwork.
pub struct ClockworkClient {
    http: Client,
    base_url: String,
}

impl ClockworkClient {
    /// Creates a client for the API rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>) -> Result<Self, AppError> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| {
                AppError::internal("Failed to build HTTP client", json!({ "reason": e.to_string() }))
            })?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Remaining credit of the account owning `api_key`, as worded by Clockwork.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if Clockwork rejects the key.
    /// Returns [`AppError::Internal`] if the API cannot be reached or answers
    /// with a non-success status.
    pub async fn credit_left(&self, api_key: &str) -> Result<String, AppError> {
        let url = format!("{}{CREDIT_RESOURCE}", self.base_url);
        tracing::debug!(%url, "Requesting SMS credit from Clockwork");

        let response = self
            .http
            .get(&url)
            .query(&[("key", api_key)])
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "Clockwork is unreachable");
                AppError::internal("SMS provider is unreachable", json!({ "provider": "Clockwork" }))
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%status, "Clockwork answered with an error status");
            return Err(AppError::internal(
                "SMS provider request failed",
                json!({ "provider": "Clockwork", "status": status.as_u16() }),
            ));
        }

        let body = response.text().await.map_err(|e| {
            AppError::internal(
                "Failed to read SMS provider response",
                json!({ "reason": e.to_string() }),
            )
        })?;
        let body = body.trim();

        if body.contains(ERROR_MARKER) {
            tracing::warn!(response = %body, "Clockwork rejected the request");
            return Err(AppError::bad_request(
                "SMS provider rejected the request",
                json!({ "provider": "Clockwork", "response": body }),
            ));
        }

        Ok(body.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[tokio::test]
    async fn test_credit_left_returns_provider_wording() {
        let server = MockServer::start_async().await;
        let credit_mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/credit.aspx")
                    .query_param("key", "secret");
                then.status(200).body("Credit: 1234\r\n");
            })
            .await;

        let client = ClockworkClient::new(server.base_url()).unwrap();
        let credit = client.credit_left("secret").await.unwrap();

        credit_mock.assert_async().await;
        assert_eq!(credit, "Credit: 1234");
    }

    #[tokio::test]
    async fn test_credit_left_rejected_key() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/credit.aspx");
                then.status(200).body("Error 2: Invalid API Key");
            })
            .await;

        let client = ClockworkClient::new(server.base_url()).unwrap();
        let err = client.credit_left("wrong").await.unwrap_err();

        assert!(matches!(err, AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_credit_left_server_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/credit.aspx");
                then.status(500);
            })
            .await;

        let client = ClockworkClient::new(format!("{}/", server.base_url())).unwrap();
        let err = client.credit_left("secret").await.unwrap_err();

        assert!(matches!(err, AppError::Internal { .. }));
    }

    #[tokio::test]
    async fn test_credit_left_unreachable() {
        let client = ClockworkClient::new("http://127.0.0.1:1").unwrap();
        let err = client.credit_left("secret").await.unwrap_err();

        assert!(matches!(err, AppError::Internal { .. }));
    }
}

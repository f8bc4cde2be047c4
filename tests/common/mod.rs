#![allow(dead_code)]

use analytics_console::application::services::{
    AuthService, MessagingSettingsService, VisitFrequencyService, VisitsSummaryReport,
    VisitsSummaryService, hash_token,
};
use analytics_console::domain::entities::{Actor, PhoneNumber, SmsCredentials};
use analytics_console::domain::ports::HealthProbe;
use analytics_console::domain::report::{DateRange, Segment};
use analytics_console::domain::repositories::{
    ApiToken, MessagingRepository, TokenRepository, VisitsAggregate, VisitsRepository,
};
use analytics_console::error::AppError;
use analytics_console::infrastructure::reference::{NullIpLocator, StaticCountryDirectory};
use analytics_console::infrastructure::sms::{ClockworkClient, ProviderSmsGateway};
use analytics_console::routes::router_without_rate_limits;
use analytics_console::state::AppState;
use async_trait::async_trait;
use axum_test::TestServer;
use chrono::Utc;
use serde_json::json;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

pub const SIGNING_SECRET: &str = "test-signing-secret";
pub const SUPERUSER_TOKEN: &str = "superuser-token";
pub const USER_TOKEN: &str = "user-token";
pub const REVOKED_TOKEN: &str = "revoked-token";
pub const SITE_ID: i64 = 1;
pub const SMS_CREDIT: &str = "Balance: 42";
/// Nothing listens there; tests that reach Clockwork pass a mock server URL.
pub const UNREACHABLE_CLOCKWORK: &str = "http://127.0.0.1:1";

/// Token store keyed by hash; revoked tokens are simply absent.
pub struct FakeTokenRepository {
    actors: HashMap<String, Actor>,
    unavailable: bool,
}

impl FakeTokenRepository {
    pub fn new() -> Self {
        let mut actors = HashMap::new();
        actors.insert(
            hash_token(SIGNING_SECRET, SUPERUSER_TOKEN).unwrap(),
            Actor::new("root".to_string(), true, "fr-CA".to_string()),
        );
        actors.insert(
            hash_token(SIGNING_SECRET, USER_TOKEN).unwrap(),
            Actor::new("alice".to_string(), false, "ja".to_string()),
        );
        Self {
            actors,
            unavailable: false,
        }
    }

    /// A store whose lookups fail as if the database were down.
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::new()
        }
    }
}

#[async_trait]
impl TokenRepository for FakeTokenRepository {
    async fn find_actor(&self, token_hash: &str) -> Result<Option<Actor>, AppError> {
        if self.unavailable {
            return Err(AppError::internal(
                "Database error",
                json!({ "reason": "connection refused" }),
            ));
        }
        Ok(self.actors.get(token_hash).cloned())
    }

    async fn update_last_used(&self, _token_hash: &str) -> Result<(), AppError> {
        Ok(())
    }

    async fn upsert_user(&self, actor: Actor) -> Result<Actor, AppError> {
        Ok(actor)
    }

    async fn create_token(
        &self,
        login: &str,
        name: &str,
        token_hash: &str,
    ) -> Result<ApiToken, AppError> {
        Ok(ApiToken {
            id: 1,
            login: login.to_string(),
            name: name.to_string(),
            token_hash: token_hash.to_string(),
            created_at: Utc::now(),
            revoked_at: None,
        })
    }

    async fn list_tokens(&self) -> Result<Vec<ApiToken>, AppError> {
        Ok(vec![])
    }

    async fn find_by_id(&self, _id: i64) -> Result<Option<ApiToken>, AppError> {
        Ok(None)
    }

    async fn find_by_name(&self, _name: &str) -> Result<Option<ApiToken>, AppError> {
        Ok(None)
    }

    async fn revoke_token(&self, _id: i64) -> Result<(), AppError> {
        Ok(())
    }
}

/// Visit log with a single site and fixed counters.
///
/// Records every segment it is asked to aggregate.
pub struct FakeVisitsRepository {
    pub aggregate: VisitsAggregate,
    pub segments: Mutex<Vec<String>>,
}

impl FakeVisitsRepository {
    pub fn new() -> Self {
        Self {
            aggregate: VisitsAggregate {
                nb_uniq_visitors: 3,
                nb_visits: 4,
                nb_actions: 10,
                nb_visits_converted: 1,
                bounce_count: 2,
                sum_visit_length: 600,
                max_actions: 5,
            },
            segments: Mutex::new(Vec::new()),
        }
    }

    pub fn recorded_segments(&self) -> Vec<String> {
        self.segments.lock().unwrap().clone()
    }
}

#[async_trait]
impl VisitsRepository for FakeVisitsRepository {
    async fn site_exists(&self, site_id: i64) -> Result<bool, AppError> {
        Ok(site_id == SITE_ID)
    }

    async fn aggregate(
        &self,
        _site_id: i64,
        _range: DateRange,
        segment: &Segment,
    ) -> Result<VisitsAggregate, AppError> {
        self.segments
            .lock()
            .unwrap()
            .push(segment.as_str().to_string());
        Ok(self.aggregate)
    }
}

/// In-memory SMS account settings and phone numbers.
#[derive(Default)]
pub struct FakeMessagingRepository {
    pub delegated: Mutex<bool>,
    pub credentials: Mutex<Option<SmsCredentials>>,
    pub phones: Mutex<HashMap<String, Vec<PhoneNumber>>>,
}

impl FakeMessagingRepository {
    pub fn with_phone(self, login: &str, number: &str, validated: bool) -> Self {
        self.phones
            .lock()
            .unwrap()
            .entry(login.to_string())
            .or_default()
            .push(PhoneNumber::new(number.to_string(), validated));
        self
    }

    pub fn with_credentials(self, provider: &str) -> Self {
        *self.credentials.lock().unwrap() = Some(SmsCredentials {
            provider: provider.to_string(),
            api_key: "key".to_string(),
        });
        self
    }
}

#[async_trait]
impl MessagingRepository for FakeMessagingRepository {
    async fn delegated_management(&self) -> Result<bool, AppError> {
        Ok(*self.delegated.lock().unwrap())
    }

    async fn set_delegated_management(&self, delegated: bool) -> Result<(), AppError> {
        *self.delegated.lock().unwrap() = delegated;
        Ok(())
    }

    async fn sms_credentials(&self) -> Result<Option<SmsCredentials>, AppError> {
        Ok(self.credentials.lock().unwrap().clone())
    }

    async fn set_sms_credentials(&self, credentials: SmsCredentials) -> Result<(), AppError> {
        *self.credentials.lock().unwrap() = Some(credentials);
        Ok(())
    }

    async fn phone_numbers(&self, login: &str) -> Result<Vec<PhoneNumber>, AppError> {
        Ok(self
            .phones
            .lock()
            .unwrap()
            .get(login)
            .cloned()
            .unwrap_or_default())
    }

    async fn add_phone_number(&self, login: &str, number: &str) -> Result<PhoneNumber, AppError> {
        let phone = PhoneNumber::new(number.to_string(), false);
        self.phones
            .lock()
            .unwrap()
            .entry(login.to_string())
            .or_default()
            .push(phone.clone());
        Ok(phone)
    }
}

pub struct FakeHealthProbe {
    pub healthy: bool,
}

#[async_trait]
impl HealthProbe for FakeHealthProbe {
    async fn check(&self) -> Result<String, AppError> {
        if self.healthy {
            Ok("Connected, 1 site(s)".to_string())
        } else {
            Err(AppError::internal("Database error", json!({})))
        }
    }
}

/// Shared state wired with in-memory fakes.
pub struct TestApp {
    pub state: AppState,
    pub visits: Arc<FakeVisitsRepository>,
}

/// Knobs for [`create_test_app_with`].
pub struct TestOptions {
    pub messaging: FakeMessagingRepository,
    pub tokens: FakeTokenRepository,
    pub healthy: bool,
    pub clockwork_url: String,
}

impl Default for TestOptions {
    fn default() -> Self {
        Self {
            messaging: FakeMessagingRepository::default(),
            tokens: FakeTokenRepository::new(),
            healthy: true,
            clockwork_url: UNREACHABLE_CLOCKWORK.to_string(),
        }
    }
}

pub fn create_test_app(messaging: FakeMessagingRepository, healthy: bool) -> TestApp {
    create_test_app_with(TestOptions {
        messaging,
        healthy,
        ..TestOptions::default()
    })
}

pub fn create_test_app_with(options: TestOptions) -> TestApp {
    let visits = Arc::new(FakeVisitsRepository::new());

    let token_repository: Arc<dyn TokenRepository> = Arc::new(options.tokens);
    let visits_repository: Arc<dyn VisitsRepository> = visits.clone();
    let visits_summary: Arc<dyn VisitsSummaryReport> =
        Arc::new(VisitsSummaryService::new(visits_repository));

    let messaging_settings = MessagingSettingsService::new(
        Arc::new(options.messaging),
        Arc::new(StaticCountryDirectory::default()),
        Arc::new(ProviderSmsGateway::new(
            ClockworkClient::new(options.clockwork_url).unwrap(),
            Some(SMS_CREDIT.to_string()),
        )),
        Arc::new(NullIpLocator::new()),
    );

    let state = AppState {
        auth_service: Arc::new(AuthService::new(
            token_repository,
            SIGNING_SECRET.to_string(),
        )),
        visit_frequency: Arc::new(VisitFrequencyService::new(visits_summary.clone())),
        visits_summary,
        messaging_settings: Arc::new(messaging_settings),
        database: Arc::new(FakeHealthProbe {
            healthy: options.healthy,
        }),
        behind_proxy: false,
    };

    TestApp { state, visits }
}

pub fn create_test_state() -> AppState {
    create_test_app(FakeMessagingRepository::default(), true).state
}

/// Full application router, without rate limiting.
pub fn test_server(state: AppState) -> TestServer {
    TestServer::new(router_without_rate_limits(state)).unwrap()
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

//! Mock blog backend for integration tests
//!
//! Wraps a wiremock [`MockServer`] and builds an [`AppContext`] pointed at
//! it, with tokens kept in memory. Contexts spawn onto the current tokio
//! runtime, so tests using them need the multi-thread flavor to let
//! requests progress while the test polls.

use std::sync::Arc;
use std::time::Duration;

use lagerblogs::egui_app::{AppContext, Config, MemoryTokenStore, TokenStore};
use lagerblogs::shared::AppConfig;
use serde_json::Value;
use tokio::runtime::Handle;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TEST_TOKEN: &str = "access-abc";

pub struct TestBackend {
    pub server: MockServer,
    pub tokens: Arc<MemoryTokenStore>,
    pub ctx: AppContext,
}

impl TestBackend {
    /// Backend with no stored token
    pub async fn start() -> Self {
        Self::with_tokens(MemoryTokenStore::new()).await
    }

    /// Backend whose token store already holds [`TEST_TOKEN`]
    pub async fn signed_in() -> Self {
        Self::with_tokens(MemoryTokenStore::with_access_token(TEST_TOKEN)).await
    }

    async fn with_tokens(tokens: MemoryTokenStore) -> Self {
        let server = MockServer::start().await;
        let tokens = Arc::new(tokens);
        let config = Config::with_builder(
            AppConfig::builder()
                .server_url(server.uri())
                .request_timeout_secs(5),
        )
        .expect("mock server uri is a valid url");
        let store: Arc<dyn TokenStore> = tokens.clone();
        let ctx = AppContext::new(config, store, Handle::current());
        Self { server, tokens, ctx }
    }

    pub async fn mock_get(&self, route: &str, status: u16, body: Value) {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// `GET /auth/users/me/` for [`TEST_TOKEN`]
    pub async fn mock_me(&self, user: Value) {
        Mock::given(method("GET"))
            .and(path("/auth/users/me/"))
            .and(header("authorization", format!("Bearer {}", TEST_TOKEN).as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(user))
            .mount(&self.server)
            .await;
    }

    /// Resolve the session from the stored token
    pub async fn sign_in(&self, user: Value) {
        self.mock_me(user).await;
        let resolved = self.ctx.session.load_user().await;
        assert!(resolved.is_some(), "session did not resolve");
    }
}

/// Poll `step` until it reports done, yielding to the runtime in between.
/// Panics after two seconds.
pub async fn settle<F: FnMut() -> bool>(mut step: F) {
    for _ in 0..200 {
        if step() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("condition not reached within 2s");
}

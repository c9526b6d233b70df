//! Application context
//!
//! Everything a screen needs from the outside world, bundled in one cheap
//! clone: the API client, the shared session, and a handle to the runtime
//! that executes network futures.

use std::future::Future;
use std::sync::Arc;

use tokio::runtime::Handle;

use crate::egui_app::api::BlogApiClient;
use crate::egui_app::config::Config;
use crate::egui_app::session::SessionStore;
use crate::egui_app::task::ScreenTask;
use crate::egui_app::token_store::TokenStore;

#[derive(Clone)]
pub struct AppContext {
    pub api: BlogApiClient,
    pub session: Arc<SessionStore>,
    runtime: Handle,
}

impl AppContext {
    pub fn new(config: Config, tokens: Arc<dyn TokenStore>, runtime: Handle) -> Self {
        let api = BlogApiClient::new(config);
        let session = Arc::new(SessionStore::new(api.clone(), tokens));
        Self { api, session, runtime }
    }

    /// Run `future` on the shared runtime, scoped to the returned task
    pub fn spawn<T, F>(&self, future: F) -> ScreenTask<T>
    where
        T: Send + 'static,
        F: Future<Output = T> + Send + 'static,
    {
        ScreenTask::spawn(&self.runtime, future)
    }
}

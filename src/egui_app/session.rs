//! Session Store
//!
//! Single source of truth for "is anyone logged in, and who". One
//! [`SessionStore`] is created at startup and shared as an `Arc` through the
//! [`AppContext`](crate::egui_app::context::AppContext).
//!
//! ```text
//! Unknown ──load_user──▶ Anonymous ──login──▶ Authenticated
//!    │                      ▲                      │
//!    └──────load_user───────┼──────────────────────┘
//!                           └────────logout────────┘
//! ```
//!
//! Every failure while resolving the session degrades to `Anonymous` and is
//! only logged. Token refresh is not implemented; an expired access token
//! behaves like any other rejected one.

use std::sync::{Arc, RwLock};

use thiserror::Error;

use crate::egui_app::api::{ApiError, BlogApiClient};
use crate::egui_app::token_store::{StoreError, TokenStore, ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY};
use crate::egui_app::types::{LoginRequest, UserInfo};

/// Session state machine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionStatus {
    /// Initial state, before the first `load_user` resolves
    Unknown,
    Anonymous,
    Authenticated(UserInfo),
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl SessionError {
    /// Text for an alert: the backend's detail or `fallback`
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            SessionError::Api(e) => e.user_message(fallback),
            SessionError::Store(e) => e.to_string(),
        }
    }
}

pub struct SessionStore {
    api: BlogApiClient,
    tokens: Arc<dyn TokenStore>,
    status: RwLock<SessionStatus>,
}

impl SessionStore {
    pub fn new(api: BlogApiClient, tokens: Arc<dyn TokenStore>) -> Self {
        Self {
            api,
            tokens,
            status: RwLock::new(SessionStatus::Unknown),
        }
    }

    pub fn status(&self) -> SessionStatus {
        match self.status.read() {
            Ok(status) => status.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// The signed-in user, if any
    pub fn user(&self) -> Option<UserInfo> {
        match self.status() {
            SessionStatus::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.status(), SessionStatus::Authenticated(_))
    }

    pub fn is_resolved(&self) -> bool {
        self.status() != SessionStatus::Unknown
    }

    /// Current persisted access token. Storage errors are logged and read as
    /// "no token".
    pub fn access_token(&self) -> Option<String> {
        match self.tokens.get(ACCESS_TOKEN_KEY) {
            Ok(token) => token.filter(|t| !t.is_empty()),
            Err(e) => {
                tracing::error!("[SESSION] Failed to read access token: {}", e);
                None
            }
        }
    }

    /// Resolve the persisted token into a user.
    ///
    /// Without a token no request is made. Any failure leaves the session
    /// anonymous.
    pub async fn load_user(&self) -> Option<UserInfo> {
        let Some(token) = self.access_token() else {
            tracing::info!("[SESSION] No stored token, continuing anonymously");
            self.set_status(SessionStatus::Anonymous);
            return None;
        };

        match self.api.me(&token).await {
            Ok(user) => {
                tracing::info!("[SESSION] ✓ Resolved session for {}", user.email);
                self.set_status(SessionStatus::Authenticated(user.clone()));
                Some(user)
            }
            Err(e) => {
                tracing::error!("[SESSION] Failed to load user: {}", e);
                self.set_status(SessionStatus::Anonymous);
                None
            }
        }
    }

    /// Exchange credentials for tokens, persist them and resolve the user.
    ///
    /// Input is expected to be validated already. Returns the resolved user,
    /// which may be `None` if the follow-up `load_user` failed.
    pub async fn login(&self, email: &str, password: &str) -> Result<Option<UserInfo>, SessionError> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let tokens = self.api.login(&request).await?;

        self.tokens.set(ACCESS_TOKEN_KEY, &tokens.access)?;
        self.tokens.set(REFRESH_TOKEN_KEY, &tokens.refresh)?;
        tracing::info!("[SESSION] Stored tokens for {}", email);

        Ok(self.load_user().await)
    }

    /// Forget the persisted tokens and the resolved user.
    ///
    /// The session always ends up anonymous; storage errors are logged.
    pub fn logout(&self) {
        for key in [ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY] {
            if let Err(e) = self.tokens.remove(key) {
                tracing::error!("[SESSION] Logout error removing {}: {}", key, e);
            }
        }
        self.set_status(SessionStatus::Anonymous);
        tracing::info!("[SESSION] Logged out");
    }

    fn set_status(&self, status: SessionStatus) {
        match self.status.write() {
            Ok(mut guard) => *guard = status,
            Err(poisoned) => *poisoned.into_inner() = status,
        }
    }
}

/**
 * Shared Types Module
 *
 * App view states, user info and the auth request/response bodies.
 */

use serde::{Deserialize, Serialize};

/// Current app view/mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppView {
    /// Shown until the stored session has been resolved
    Splash,
    /// Landing page for visitors
    Welcome,
    Login,
    Register,
    /// Post feed for signed-in users
    Home,
    NewPost,
    Profile,
    /// Detail of a single post
    BlogDetail(i64),
}

impl AppView {
    /// Views that act on the signed-in user's account
    pub fn requires_session(&self) -> bool {
        matches!(self, AppView::NewPost | AppView::Profile)
    }
}

/// User information returned by `GET /auth/users/me/`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: i64,
    pub username: String,
    pub email: String,
}

/// Body of `POST /api/login/`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Token pair returned by a successful login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

/// Body of `POST /api/register/`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub username: String,
    pub password: String,
}

//! Screen state
//!
//! Each screen owns its form input, fetched data and in-flight
//! [`ScreenTask`](crate::egui_app::task::ScreenTask)s. Screens never navigate
//! or raise dialogs themselves; they push [`ScreenEvent`]s that
//! [`AppState`](crate::egui_app::state::AppState) applies after the frame.
//!
//! Keeping this module free of egui lets the integration tests drive every
//! screen against a mock backend.

use crate::egui_app::types::AppView;

pub mod auth;
pub mod blog_detail;
pub mod feed;
pub mod new_post;
pub mod profile;

pub use auth::{LoginScreen, RegisterScreen};
pub use blog_detail::BlogDetailScreen;
pub use feed::{FeedScreen, POPULAR_TAGS};
pub use new_post::NewPostScreen;
pub use profile::ProfileScreen;

/// One-shot modal message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

impl Alert {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }
}

/// Destructive action waiting for the user's confirmation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmAction {
    DeletePost(i64),
    DeleteComment(i64),
}

impl ConfirmAction {
    pub fn title(&self) -> &'static str {
        "Confirm Delete"
    }

    pub fn message(&self) -> &'static str {
        match self {
            ConfirmAction::DeletePost(_) => "Are you sure you want to delete this post?",
            ConfirmAction::DeleteComment(_) => "Are you sure you want to delete this comment?",
        }
    }
}

/// Requests a screen makes of the app shell
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenEvent {
    Navigate(AppView),
    Alert(Alert),
    Confirm(ConfirmAction),
    Logout,
}

impl ScreenEvent {
    pub fn alert(title: impl Into<String>, message: impl Into<String>) -> Self {
        ScreenEvent::Alert(Alert::new(title, message))
    }
}

//! Form validation
//!
//! Client-side checks run before any request leaves the app. A form that
//! fails validation never reaches the network.

use std::path::PathBuf;
use std::sync::LazyLock;

use regex::Regex;

use crate::shared::error::FieldErrors;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// Whether `email` has the `local@domain.tld` shape
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

fn check_email(email: &str, errors: &mut FieldErrors) {
    if email.is_empty() {
        errors.insert("email", "Email is required");
    } else if !is_valid_email(email) {
        errors.insert("email", "Enter a valid email address");
    }
}

/// Login screen input
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();
        check_email(&self.email, &mut errors);
        if self.password.is_empty() {
            errors.insert("password", "Password is required");
        }
        errors.into_result()
    }
}

/// Registration screen input
#[derive(Debug, Clone, Default)]
pub struct RegisterForm {
    pub email: String,
    pub username: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterForm {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();
        check_email(&self.email, &mut errors);
        if self.username.is_empty() {
            errors.insert("username", "Username is required");
        }
        if self.password.is_empty() {
            errors.insert("password", "Password is required");
        }
        if self.password != self.confirm_password {
            errors.insert("confirm_password", "Passwords do not match");
        }
        errors.into_result()
    }
}

/// New post screen input
#[derive(Debug, Clone, Default)]
pub struct NewPostForm {
    pub title: String,
    pub content: String,
    pub caption: String,
    /// Comma-separated, sent to the backend verbatim
    pub tags: String,
    /// Selected category ids in selection order
    pub categories: Vec<i64>,
    pub image: Option<PathBuf>,
}

impl NewPostForm {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();
        if self.title.is_empty() {
            errors.insert("title", "Title is required");
        }
        if self.content.is_empty() {
            errors.insert("content", "Content is required");
        }
        errors.into_result()
    }

    /// Select `id` if unselected, otherwise unselect it
    pub fn toggle_category(&mut self, id: i64) {
        if let Some(pos) = self.categories.iter().position(|&c| c == id) {
            self.categories.remove(pos);
        } else {
            self.categories.push(id);
        }
    }

    pub fn has_category(&self, id: i64) -> bool {
        self.categories.contains(&id)
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

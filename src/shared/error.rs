//! Shared Error Types
//!
//! Errors that are not tied to the network layer: client-side form
//! validation.
//!
//! Form validation collects every failing field into [`FieldErrors`] so a
//! screen can show one message under each input at once.
//!
//! # Usage
//!
//! ```rust
//! use lagerblogs::shared::error::{FieldErrors, SharedError};
//!
//! let mut errors = FieldErrors::default();
//! errors.insert("email", "Email is required");
//! assert_eq!(errors.get("email"), Some("Email is required"));
//!
//! let error = SharedError::validation("email", "Email is required");
//! assert!(error.to_string().contains("email"));
//! ```
use std::collections::BTreeMap;

use thiserror::Error;

/// Shared error types
#[derive(Debug, Error, Clone)]
pub enum SharedError {
    /// Data validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Per-field validation messages for one form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<&'static str, String>,
}

impl FieldErrors {
    pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    /// Message for `field`, if it failed validation
    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    /// Forget the message for `field`, typically once the user edits it
    pub fn clear(&mut self, field: &str) {
        self.errors.remove(field);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// `Ok(())` when no field failed, otherwise the collected errors
    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    /// Each failing field as a [`SharedError::ValidationError`]
    pub fn to_errors(&self) -> impl Iterator<Item = SharedError> + '_ {
        self.errors
            .iter()
            .map(|(field, message)| SharedError::validation(*field, message.clone()))
    }
}

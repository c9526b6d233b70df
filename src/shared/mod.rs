//! Shared Module
//!
//! Platform-agnostic types used by the client: the backend's blog records,
//! form validation, the reusable list filter, configuration and errors.
//! Nothing in here touches the network or the UI toolkit.

/// Posts, comments and categories
pub mod blog;

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Client-side form validation
pub mod validation;

/// Query-driven filtering of fetched collections
pub mod list_filter;

pub use blog::{Author, Category, Comment, Post};
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
pub use error::{FieldErrors, SharedError};
pub use list_filter::{EmptyState, ListFilter, Searchable};

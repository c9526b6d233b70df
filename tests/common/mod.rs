//! Common test utilities and helpers
//!
//! This module provides shared utilities for all tests including:
//! - A wiremock-backed blog backend
//! - JSON fixtures for posts, comments and users
//! - Custom assertion macros

pub mod assertions;
pub mod mock_backend;

// Re-export commonly used utilities
pub use assertions::*;
pub use fixtures::*;
pub use mock_backend::*;

//! egui Native Desktop App Module
//!
//! A desktop client for the Lager Blogs REST backend, built on egui/eframe.
//!
//! # Architecture
//!
//! - **`config`** - Backend URL, timeouts and token file location
//! - **`api`** - Async REST client for every backend endpoint
//! - **`token_store`** - Persisted access/refresh tokens
//! - **`session`** - Shared session store: token, resolved user, login/logout
//! - **`task`** - Screen-scoped background tasks that abort on drop
//! - **`context`** - The bundle of client, session and runtime handed to screens
//! - **`collection`** - Fetched lists wired to a search filter
//! - **`screens`** - Per-screen state and behaviour, free of egui
//! - **`state`** - The mounted screen, navigation and dialogs
//! - **`views`** - egui rendering for each screen
//! - **`theme`** - Colors and frame builders
//! - **`main`** - Application entry point (binary)
//!
//! # Module Structure
//!
//! ```text
//! egui_app/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Main application entry point
//! ├── config.rs       - Configuration management
//! ├── api.rs          - Backend client
//! ├── session.rs      - Session store
//! ├── screens/        - Screen state
//! ├── state/          - App shell state
//! ├── views/          - egui views
//! └── theme/          - Colors and styles
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! // Run the desktop app:
//! // BLOG_API_URL=http://127.0.0.1:8000 cargo run --bin lagerblogs
//! ```

pub mod api;
pub mod collection;
pub mod config;
pub mod context;
pub mod screens;
pub mod session;
pub mod state;
pub mod task;
pub mod theme;
pub mod token_store;
pub mod types;
pub mod views;

// Re-export commonly used types
pub use api::{ApiError, BlogApiClient};
pub use config::Config;
pub use context::AppContext;
pub use session::{SessionError, SessionStatus, SessionStore};
pub use state::AppState;
pub use token_store::{FileTokenStore, MemoryTokenStore, StoreError, TokenStore};
pub use types::{AppView, UserInfo};

//! Lager Blogs - Desktop Client Library
//!
//! A native client for the Lager Blogs REST backend: browse and search posts,
//! sign in, write posts, comment, and bookmark.
//!
//! # Module Structure
//!
//! - **`shared`** - Types with no UI or network dependency
//!   - Post, comment and category records
//!   - Form validation and per-field errors
//!   - The reusable list filter
//!   - Configuration file layer
//!
//! - **`egui_app`** - Native desktop app (egui/eframe)
//!   - REST client and session store
//!   - Screen state and egui views
//!
//! # Usage
//!
//! ```rust,no_run
//! use lagerblogs::egui_app::{AppState, Config};
//!
//! let state = AppState::new(Config::new()).expect("runtime");
//! // Hand `state` to an eframe::App and call `state.update()` every frame.
//! # drop(state);
//! ```
//!
//! # Thread Safety
//!
//! - **UI**: egui is single-threaded immediate mode; screens are polled once per frame
//! - **Network**: requests run on a tokio runtime; the session store is `Arc`-shared
//!   and guarded by an `RwLock`

/// Shared types and data structures
pub mod shared;

/// egui native desktop app
pub mod egui_app;

//! Theme Module
//!
//! Color scheme and styling for the blog client:
//!
//! - Color constants for the blue theme
//! - Frame builders for panels, cards and dialogs
//! - Button helpers
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::egui_app::theme::{colors, styles};
//!
//! styles::apply_global_theme(ctx);
//! styles::card_frame().show(ui, |ui| {
//!     ui.colored_label(colors::TEXT_PRIMARY, "Post title");
//! });
//! ```

pub mod colors;
pub mod styles;

pub use colors::*;
pub use styles::*;

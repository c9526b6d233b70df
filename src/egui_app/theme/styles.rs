//! Theme Styling Functions
//!
//! Helpers for applying the blue color scheme consistently across all views.

use eframe::egui::{self, Color32, CornerRadius, Stroke};
use super::colors;

/// Apply the global theme to the egui context
pub fn apply_global_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();
    style.visuals = egui::Visuals::light();

    // Window styling
    style.visuals.window_fill = colors::CARD_BG;
    style.visuals.window_stroke = Stroke::new(1.0, colors::CARD_BORDER);

    // Panel styling
    style.visuals.panel_fill = colors::PAGE_BG;

    // Widget styling
    style.visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, colors::TEXT_PRIMARY);
    style.visuals.widgets.hovered.bg_fill = colors::SELECTED_ITEM;
    style.visuals.widgets.active.bg_fill = colors::BUTTON_PRIMARY;
    style.visuals.widgets.active.fg_stroke = Stroke::new(1.0, colors::TEXT_LIGHT);

    // Selection color
    style.visuals.selection.bg_fill = colors::SELECTED_ITEM;
    style.visuals.selection.stroke = Stroke::new(1.0, colors::ACCENT);

    style.spacing.item_spacing = egui::vec2(8.0, 6.0);

    ctx.set_style(style);
}

/// Create a frame style for the top bar
pub fn top_bar_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::TOP_BAR_BG)
        .inner_margin(egui::Margin::symmetric(12, 8))
}

/// Create a frame style for the bottom tab bar
pub fn tab_bar_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::TAB_BAR_BG)
        .stroke(Stroke::new(1.0, colors::SEPARATOR))
        .inner_margin(egui::Margin::symmetric(12, 6))
}

/// Create a frame style for the main content area
pub fn page_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::PAGE_BG)
        .inner_margin(egui::Margin::symmetric(16, 12))
}

/// Create a frame for post and comment cards
pub fn card_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::CARD_BG)
        .stroke(Stroke::new(1.0, colors::CARD_BORDER))
        .corner_radius(CornerRadius::same(8))
        .inner_margin(egui::Margin::symmetric(12, 10))
}

/// Create a frame for a tag chip
pub fn tag_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::TAG_BG)
        .corner_radius(CornerRadius::same(12))
        .inner_margin(egui::Margin::symmetric(10, 4))
}

/// Create a frame for modal dialogs
pub fn modal_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::CARD_BG)
        .stroke(Stroke::new(1.0, colors::CARD_BORDER))
        .corner_radius(CornerRadius::same(12))
        .inner_margin(egui::Margin::same(20))
        .shadow(egui::epaint::Shadow {
            offset: [0, 4],
            blur: 12,
            spread: 0,
            color: Color32::from_black_alpha(60),
        })
}

/// Filled button with light text
pub fn primary_button(text: &str) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(text.to_owned()).color(colors::TEXT_LIGHT))
        .fill(colors::BUTTON_PRIMARY)
        .stroke(Stroke::NONE)
        .corner_radius(CornerRadius::same(6))
}

/// Destructive action button
pub fn danger_button(text: &str) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(text.to_owned()).color(colors::TEXT_LIGHT))
        .fill(colors::BUTTON_DANGER)
        .stroke(Stroke::NONE)
        .corner_radius(CornerRadius::same(6))
}

use eframe::egui;

use crate::egui_app::screens::{FeedScreen, ScreenEvent};
use crate::egui_app::theme::{colors, styles};
use crate::egui_app::types::{AppView, UserInfo};
use crate::egui_app::views::components;

const NO_POSTS: &str = "No posts yet.";

/// Public landing page with login and register entry points
pub fn render_welcome(ui: &mut egui::Ui, feed: &mut FeedScreen, events: &mut Vec<ScreenEvent>) {
    ui.vertical_centered(|ui| {
        ui.add_space(12.0);
        ui.colored_label(colors::ACCENT, egui::RichText::new("Lager Blogs").size(36.0).strong());
        ui.colored_label(colors::TEXT_SECONDARY, "Read what people are writing about.");
        ui.add_space(12.0);

        ui.horizontal(|ui| {
            let total = 120.0 * 2.0 + 10.0;
            ui.add_space(((ui.available_width() - total) / 2.0).max(0.0));
            if ui.add(styles::primary_button("Login").min_size(egui::vec2(120.0, 32.0))).clicked() {
                events.push(ScreenEvent::Navigate(AppView::Login));
            }
            ui.add_space(10.0);
            if ui
                .add(egui::Button::new("Register").fill(colors::BUTTON_SECONDARY).min_size(egui::vec2(120.0, 32.0)))
                .clicked()
            {
                events.push(ScreenEvent::Navigate(AppView::Register));
            }
        });
    });
    ui.add_space(16.0);

    feed_body(ui, feed, events);
}

/// Signed-in feed
pub fn render_home(ui: &mut egui::Ui, feed: &mut FeedScreen, user: Option<&UserInfo>, events: &mut Vec<ScreenEvent>) {
    if let Some(user) = user {
        ui.colored_label(
            colors::TEXT_PRIMARY,
            egui::RichText::new(format!("Hello, {}", user.username)).size(20.0).strong(),
        );
        ui.add_space(8.0);
    }

    feed_body(ui, feed, events);
}

fn feed_body(ui: &mut egui::Ui, feed: &mut FeedScreen, events: &mut Vec<ScreenEvent>) {
    components::search_bar(ui, &mut feed.posts, "Search blogs...");
    ui.add_space(8.0);
    components::popular_tags(ui);
    ui.add_space(12.0);
    ui.separator();
    components::post_list(ui, &feed.posts, NO_POSTS, events);
}

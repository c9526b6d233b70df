use eframe::egui;

use crate::egui_app::screens::{ProfileScreen, ScreenEvent};
use crate::egui_app::theme::{colors, styles};
use crate::egui_app::views::components;

pub fn render(ui: &mut egui::Ui, screen: &mut ProfileScreen, events: &mut Vec<ScreenEvent>) {
    styles::card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.vertical(|ui| match &screen.user {
                Some(user) => {
                    ui.label(egui::RichText::new(&user.username).size(22.0).strong().color(colors::TEXT_PRIMARY));
                    ui.colored_label(colors::TEXT_SECONDARY, user.email.as_str());
                }
                None => {
                    ui.colored_label(colors::TEXT_SECONDARY, "Not signed in");
                }
            });

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.add(styles::danger_button("Logout")).clicked() {
                    events.push(ScreenEvent::Logout);
                }
                ui.colored_label(colors::ACCENT, format!("{} posts", screen.post_count()));
            });
        });
    });
    ui.add_space(12.0);

    components::search_bar(ui, &mut screen.posts, "Search your posts...");
    ui.add_space(8.0);
    components::post_list(ui, &screen.posts, "No posts yet.", events);
}

use eframe::egui;

use crate::egui_app::screens::ScreenEvent;
use crate::egui_app::state::{AppState, Screen};
use crate::egui_app::theme::{colors, styles};
use crate::egui_app::types::AppView;

pub mod auth_view;
pub mod components;
pub mod detail_view;
pub mod feed_view;
pub mod new_post_view;
pub mod profile_view;

pub fn render_top_bar(ctx: &egui::Context, state: &mut AppState) {
    egui::TopBottomPanel::top("top_panel")
        .frame(styles::top_bar_frame())
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.colored_label(colors::TEXT_LIGHT, egui::RichText::new("Lager Blogs").size(18.0).strong());

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.add_space(8.0);
                    if let Some(user) = state.current_user() {
                        if ui.button("Logout").clicked() {
                            state.push_event(ScreenEvent::Logout);
                        }
                        ui.colored_label(colors::TEXT_LIGHT, format!("@{}", user.username));
                    }
                });
            });
        });
}

/// Home / New Post / Profile tabs, shown while signed in
pub fn render_tab_bar(ctx: &egui::Context, state: &mut AppState) {
    if state.current_user().is_none() || matches!(state.screen, Screen::Splash) {
        return;
    }

    egui::TopBottomPanel::bottom("tab_bar")
        .frame(styles::tab_bar_frame())
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                for (view, label) in [
                    (AppView::Home, "🏠 Home"),
                    (AppView::NewPost, "➕ New Post"),
                    (AppView::Profile, "👤 Profile"),
                ] {
                    let selected = state.current_view == view;
                    if ui.selectable_label(selected, label).clicked() && !selected {
                        state.push_event(ScreenEvent::Navigate(view));
                    }
                }
            });
        });
}

pub fn render_main_panel(ctx: &egui::Context, state: &mut AppState) {
    let user = state.current_user();
    let mut events = Vec::new();

    egui::CentralPanel::default()
        .frame(styles::page_frame())
        .show(ctx, |ui| match &mut state.screen {
            Screen::Splash => {
                ui.vertical_centered(|ui| {
                    ui.add_space(ui.available_height() / 2.0 - 20.0);
                    ui.spinner();
                });
            }
            Screen::Welcome(feed) => feed_view::render_welcome(ui, feed, &mut events),
            Screen::Login(login) => auth_view::render_login(ui, login, &mut events),
            Screen::Register(register) => auth_view::render_register(ui, register, &mut events),
            Screen::Home(feed) => feed_view::render_home(ui, feed, user.as_ref(), &mut events),
            Screen::NewPost(new_post) => new_post_view::render(ui, new_post),
            Screen::Profile(profile) => profile_view::render(ui, profile, &mut events),
            Screen::Detail(detail) => detail_view::render(ui, detail, &mut events),
        });

    for event in events {
        state.push_event(event);
    }
}

/// Alert and confirmation windows, drawn over everything else
pub fn render_dialogs(ctx: &egui::Context, state: &mut AppState) {
    if let Some(alert) = state.alert.clone() {
        egui::Window::new(alert.title.as_str())
            .id(egui::Id::new("alert_dialog"))
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .frame(styles::modal_frame())
            .show(ctx, |ui| {
                ui.label(egui::RichText::new(&alert.message).color(colors::TEXT_PRIMARY));
                ui.add_space(12.0);
                if ui.add(styles::primary_button("OK")).clicked() {
                    state.dismiss_alert();
                }
            });
    }

    if let Some(action) = state.confirm {
        egui::Window::new(action.title())
            .id(egui::Id::new("confirm_dialog"))
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .frame(styles::modal_frame())
            .show(ctx, |ui| {
                ui.label(egui::RichText::new(action.message()).color(colors::TEXT_PRIMARY));
                ui.add_space(12.0);
                ui.horizontal(|ui| {
                    if ui.button("Cancel").clicked() {
                        state.cancel_confirm();
                    }
                    if ui.add(styles::danger_button("Delete")).clicked() {
                        state.accept_confirm();
                    }
                });
            });
    }
}

use eframe::egui;

use crate::egui_app::screens::{LoginScreen, RegisterScreen, ScreenEvent};
use crate::egui_app::theme::{colors, styles};
use crate::egui_app::types::AppView;
use crate::egui_app::views::components::form_field;

const FORM_WIDTH: f32 = 320.0;

pub fn render_login(ui: &mut egui::Ui, screen: &mut LoginScreen, events: &mut Vec<ScreenEvent>) {
    centered_form(ui, "Welcome Back", |ui| {
        let form = &mut screen.form;
        let errors = &mut screen.errors;

        if form_field(ui, "Email", &mut form.email, errors.get("email"), false) {
            errors.clear("email");
        }
        if form_field(ui, "Password", &mut form.password, errors.get("password"), true) {
            errors.clear("password");
        }

        ui.add_space(12.0);
        let login = ui.add_enabled(
            !screen.is_loading(),
            styles::primary_button("Login").min_size(egui::vec2(FORM_WIDTH, 36.0)),
        );
        if login.clicked() {
            screen.submit();
        }

        ui.add_space(8.0);
        if ui.link("Don't have an account? Register").clicked() {
            events.push(ScreenEvent::Navigate(AppView::Register));
        }
        if ui.link("Back").clicked() {
            events.push(ScreenEvent::Navigate(AppView::Welcome));
        }

        if screen.is_loading() {
            loading_row(ui);
        }
    });
}

pub fn render_register(ui: &mut egui::Ui, screen: &mut RegisterScreen, events: &mut Vec<ScreenEvent>) {
    centered_form(ui, "Create Account", |ui| {
        let form = &mut screen.form;
        let errors = &mut screen.errors;

        if form_field(ui, "Email", &mut form.email, errors.get("email"), false) {
            errors.clear("email");
        }
        if form_field(ui, "Username", &mut form.username, errors.get("username"), false) {
            errors.clear("username");
        }
        if form_field(ui, "Password", &mut form.password, errors.get("password"), true) {
            errors.clear("password");
        }
        if form_field(
            ui,
            "Confirm Password",
            &mut form.confirm_password,
            errors.get("confirm_password"),
            true,
        ) {
            errors.clear("confirm_password");
        }

        ui.add_space(12.0);
        let register = ui.add_enabled(
            !screen.is_loading(),
            styles::primary_button("Register").min_size(egui::vec2(FORM_WIDTH, 36.0)),
        );
        if register.clicked() {
            screen.submit();
        }

        ui.add_space(8.0);
        if ui.link("Already have an account? Login").clicked() {
            events.push(ScreenEvent::Navigate(AppView::Login));
        }

        if screen.is_loading() {
            loading_row(ui);
        }
    });
}

fn centered_form(ui: &mut egui::Ui, heading: &str, add_contents: impl FnOnce(&mut egui::Ui)) {
    let available_rect = ui.available_rect_before_wrap();

    ui.scope_builder(egui::UiBuilder::new().max_rect(available_rect), |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            ui.label(egui::RichText::new("Lager Blogs").size(32.0).strong().color(colors::ACCENT));
            ui.add_space(12.0);
            ui.label(egui::RichText::new(heading).size(22.0).color(colors::TEXT_PRIMARY));
            ui.add_space(20.0);

            styles::card_frame().show(ui, |ui| {
                ui.set_width(FORM_WIDTH);
                ui.with_layout(egui::Layout::top_down(egui::Align::Min), add_contents);
            });
        });
    });
}

fn loading_row(ui: &mut egui::Ui) {
    ui.add_space(10.0);
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new("Loading...").color(colors::TEXT_SECONDARY));
        ui.spinner();
    });
}

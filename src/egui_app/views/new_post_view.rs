use eframe::egui;

use crate::egui_app::screens::NewPostScreen;
use crate::egui_app::theme::{colors, styles};
use crate::egui_app::views::components::form_field;

pub fn render(ui: &mut egui::Ui, screen: &mut NewPostScreen) {
    egui::ScrollArea::vertical().show(ui, |ui| {
        ui.label(egui::RichText::new("New Post").size(22.0).strong().color(colors::TEXT_PRIMARY));
        ui.add_space(8.0);

        styles::card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());

            if form_field(ui, "Title", &mut screen.form.title, screen.errors.get("title"), false) {
                screen.errors.clear("title");
            }

            ui.label(egui::RichText::new("Content").color(colors::TEXT_SECONDARY));
            let content = ui.add(
                egui::TextEdit::multiline(&mut screen.form.content)
                    .desired_rows(8)
                    .desired_width(f32::INFINITY),
            );
            if content.changed() {
                screen.errors.clear("content");
            }
            if let Some(error) = screen.errors.get("content") {
                ui.colored_label(colors::ERROR, error);
            }
            ui.add_space(6.0);

            form_field(ui, "Caption", &mut screen.form.caption, None, false);
            form_field(ui, "Tags (comma separated)", &mut screen.form.tags, None, false);

            ui.label(egui::RichText::new("Categories").color(colors::TEXT_SECONDARY));
            if screen.categories_loading() {
                ui.spinner();
            }
            ui.horizontal_wrapped(|ui| {
                for category in &screen.categories {
                    let mut selected = screen.form.has_category(category.id);
                    if ui.toggle_value(&mut selected, category.name.as_str()).changed() {
                        screen.form.toggle_category(category.id);
                    }
                }
            });
            ui.add_space(6.0);

            let mut image = screen.image_input.clone();
            if form_field(ui, "Image file (optional)", &mut image, None, false) {
                screen.set_image_path(image);
            }

            ui.add_space(12.0);
            let submit = ui.add_enabled(
                !screen.is_loading(),
                styles::primary_button("Publish").min_size(egui::vec2(160.0, 36.0)),
            );
            if submit.clicked() {
                screen.submit();
            }
            if screen.is_loading() {
                ui.spinner();
            }
        });
    });
}

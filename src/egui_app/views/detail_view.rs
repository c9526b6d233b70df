use eframe::egui;

use crate::egui_app::screens::{BlogDetailScreen, ScreenEvent};
use crate::egui_app::theme::{colors, styles};
use crate::egui_app::types::AppView;

pub fn render(ui: &mut egui::Ui, screen: &mut BlogDetailScreen, events: &mut Vec<ScreenEvent>) {
    let back_to = if screen.current_user().is_some() {
        AppView::Home
    } else {
        AppView::Welcome
    };
    if ui.link("← Back").clicked() {
        events.push(ScreenEvent::Navigate(back_to));
    }
    ui.add_space(8.0);

    if screen.is_loading() {
        ui.vertical_centered(|ui| ui.spinner());
        return;
    }

    egui::ScrollArea::vertical().show(ui, |ui| {
        render_post(ui, screen, events);
        ui.add_space(16.0);
        render_comments(ui, screen, events);
    });
}

fn render_post(ui: &mut egui::Ui, screen: &mut BlogDetailScreen, events: &mut Vec<ScreenEvent>) {
    let Some(post) = screen.post.clone() else {
        ui.colored_label(colors::TEXT_SECONDARY, "No Posts...");
        return;
    };

    styles::card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(&post.title).size(24.0).strong().color(colors::TEXT_PRIMARY));

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if screen.is_owner() {
                    if ui.add(styles::danger_button("Delete")).clicked() {
                        screen.request_delete_post(events);
                    }
                } else if screen.current_user().is_some() {
                    let (label, color) = if screen.is_saved {
                        ("★ Saved", colors::SUCCESS)
                    } else {
                        ("☆ Save", colors::ACCENT)
                    };
                    if ui.add(egui::Button::new(egui::RichText::new(label).color(color))).clicked() {
                        screen.toggle_save();
                    }
                }
            });
        });

        ui.horizontal(|ui| {
            if let Some(author) = &post.author {
                ui.colored_label(colors::ACCENT, format!("@{}", author.username));
            }
            ui.colored_label(colors::TEXT_SECONDARY, post.display_date());
        });

        if let Some(image) = post.image.as_deref().filter(|i| !i.is_empty()) {
            ui.hyperlink_to("View image", image);
        }
        if let Some(caption) = post.caption.as_deref().filter(|c| !c.is_empty()) {
            ui.colored_label(colors::TEXT_SECONDARY, egui::RichText::new(caption).italics());
        }
        ui.add_space(8.0);
        ui.label(egui::RichText::new(&post.content).color(colors::TEXT_PRIMARY));
    });
}

fn render_comments(ui: &mut egui::Ui, screen: &mut BlogDetailScreen, events: &mut Vec<ScreenEvent>) {
    ui.label(egui::RichText::new("Comments").size(18.0).strong().color(colors::TEXT_PRIMARY));
    ui.add_space(6.0);

    if screen.current_user().is_some() {
        ui.horizontal(|ui| {
            ui.add(
                egui::TextEdit::singleline(&mut screen.new_comment)
                    .hint_text("Write a comment...")
                    .desired_width(ui.available_width() - 90.0),
            );
            let post = ui.add_enabled(!screen.is_adding_comment(), styles::primary_button("Post"));
            if post.clicked() {
                screen.add_comment();
            }
        });
    } else {
        ui.colored_label(colors::TEXT_SECONDARY, "Please log in to post a comment.");
    }
    ui.add_space(8.0);

    if screen.comments.is_empty() {
        ui.colored_label(colors::TEXT_SECONDARY, "No comments yet.");
        return;
    }

    let mut delete = None;
    for comment in &screen.comments {
        styles::card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.colored_label(colors::ACCENT, egui::RichText::new(&comment.author).strong());
                ui.colored_label(colors::TEXT_SECONDARY, comment.display_date());
                if screen.can_delete_comment(comment) {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let idle = !screen.is_deleting_comment();
                        if ui.add_enabled(idle, egui::Button::new("🗑").small()).clicked() {
                            delete = Some(comment.id);
                        }
                    });
                }
            });
            ui.label(egui::RichText::new(&comment.text).color(colors::TEXT_PRIMARY));
        });
        ui.add_space(6.0);
    }

    if let Some(comment_id) = delete {
        screen.request_delete_comment(comment_id, events);
    }
}

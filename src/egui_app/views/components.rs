//! Reusable widgets: search bar, tag chips, post cards and the list body
//! shared by the welcome, home and profile views.

use eframe::egui;

use crate::egui_app::collection::{FilteredCollection, LoadState};
use crate::egui_app::screens::{ScreenEvent, POPULAR_TAGS};
use crate::egui_app::theme::{colors, styles};
use crate::egui_app::types::AppView;
use crate::shared::blog::Post;
use crate::shared::list_filter::EmptyState;

/// Render the search bar. Edits go straight into the collection's filter.
pub fn search_bar<T>(ui: &mut egui::Ui, collection: &mut FilteredCollection<T>, hint: &str) {
    ui.horizontal(|ui| {
        ui.label("🔍");

        let mut query = collection.query().to_string();
        let response = ui.add(
            egui::TextEdit::singleline(&mut query)
                .hint_text(hint)
                .desired_width(ui.available_width() - 40.0),
        );
        if response.changed() {
            collection.set_query(query);
        }

        // Clear button
        if !collection.query().is_empty() && ui.button("✕").clicked() {
            collection.set_query(String::new());
        }
    });
}

pub fn popular_tags(ui: &mut egui::Ui) {
    ui.label(egui::RichText::new("Popular Tags").strong().color(colors::TEXT_PRIMARY));
    ui.horizontal_wrapped(|ui| {
        for tag in POPULAR_TAGS {
            styles::tag_frame().show(ui, |ui| {
                ui.colored_label(colors::ACCENT, tag);
            });
        }
    });
}

/// One post row; clicking the title opens the detail screen
pub fn post_card(ui: &mut egui::Ui, post: &Post, events: &mut Vec<ScreenEvent>) {
    styles::card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());

        let title = egui::RichText::new(&post.title).size(18.0).strong().color(colors::TEXT_PRIMARY);
        if ui.add(egui::Label::new(title).sense(egui::Sense::click())).clicked() {
            events.push(ScreenEvent::Navigate(AppView::BlogDetail(post.id)));
        }

        ui.horizontal(|ui| {
            if let Some(author) = &post.author {
                ui.colored_label(colors::ACCENT, format!("@{}", author.username));
            }
            ui.colored_label(colors::TEXT_SECONDARY, post.display_date());
        });

        if let Some(caption) = post.caption.as_deref().filter(|c| !c.is_empty()) {
            ui.colored_label(colors::TEXT_SECONDARY, egui::RichText::new(caption).italics());
        }
        ui.colored_label(colors::TEXT_PRIMARY, excerpt(&post.content, 160));
    });
    ui.add_space(8.0);
}

/// Loading spinner, error text, empty placeholder or the post cards
pub fn post_list(
    ui: &mut egui::Ui,
    collection: &FilteredCollection<Post>,
    no_items: &str,
    events: &mut Vec<ScreenEvent>,
) {
    match collection.state() {
        LoadState::Loading => {
            ui.vertical_centered(|ui| {
                ui.add_space(20.0);
                ui.spinner();
            });
        }
        LoadState::Failed(message) => {
            ui.colored_label(colors::ERROR, format!("Error: {}", message));
        }
        LoadState::Loaded => match collection.empty_state() {
            Some(EmptyState::NoItems) => {
                ui.colored_label(colors::TEXT_SECONDARY, no_items);
            }
            Some(EmptyState::NoMatches) => {
                ui.colored_label(colors::TEXT_SECONDARY, "No blogs found matching your search");
            }
            None => {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    for post in collection.view() {
                        post_card(ui, post, events);
                    }
                });
            }
        },
    }
}

/// Single-line text input with its validation message underneath.
/// Editing the field clears its message.
pub fn form_field(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut String,
    error: Option<&str>,
    password: bool,
) -> bool {
    ui.label(egui::RichText::new(label).color(colors::TEXT_SECONDARY));
    let response = ui.add(
        egui::TextEdit::singleline(value)
            .password(password)
            .desired_width(f32::INFINITY),
    );
    if let Some(error) = error {
        ui.colored_label(colors::ERROR, error);
    }
    ui.add_space(6.0);
    response.changed()
}

fn excerpt(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}…", &text[..idx]),
        None => text.to_string(),
    }
}

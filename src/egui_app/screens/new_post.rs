//! New post form: title, content, caption, tags, categories and an optional
//! image file. Categories are fetched with the bearer token on mount.

use crate::egui_app::api::ApiError;
use crate::egui_app::context::AppContext;
use crate::egui_app::screens::ScreenEvent;
use crate::egui_app::task::{take_ready, ScreenTask};
use crate::egui_app::types::AppView;
use crate::shared::blog::Category;
use crate::shared::error::FieldErrors;
use crate::shared::validation::NewPostForm;

pub struct NewPostScreen {
    ctx: AppContext,
    pub form: NewPostForm,
    pub errors: FieldErrors,
    pub categories: Vec<Category>,
    /// Raw text of the image path field
    pub image_input: String,
    pending_categories: Option<ScreenTask<Result<Vec<Category>, ApiError>>>,
    pending_submit: Option<ScreenTask<Result<(), ApiError>>>,
}

impl NewPostScreen {
    pub fn new(ctx: AppContext) -> Self {
        let pending_categories = match ctx.session.access_token() {
            Some(token) => {
                let api = ctx.api.clone();
                Some(ctx.spawn(async move { api.list_categories(Some(&token)).await }))
            }
            None => {
                tracing::warn!("[NEW_POST] No auth token found.");
                None
            }
        };

        Self {
            ctx,
            form: NewPostForm::default(),
            errors: FieldErrors::default(),
            categories: Vec::new(),
            image_input: String::new(),
            pending_categories,
            pending_submit: None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.pending_submit.is_some()
    }

    pub fn categories_loading(&self) -> bool {
        self.pending_categories.is_some()
    }

    /// Copy the image path field into the form. Blank input clears it.
    pub fn set_image_path(&mut self, path: impl Into<String>) {
        self.image_input = path.into();
        let trimmed = self.image_input.trim();
        self.form.image = (!trimmed.is_empty()).then(|| trimmed.into());
    }

    pub fn submit(&mut self) -> bool {
        if self.pending_submit.is_some() {
            return false;
        }
        if let Err(errors) = self.form.validate() {
            for error in errors.to_errors() {
                tracing::debug!("[NEW_POST] {}", error);
            }
            self.errors = errors;
            return false;
        }
        self.errors = FieldErrors::default();

        let api = self.ctx.api.clone();
        let session = self.ctx.session.clone();
        let form = self.form.clone();
        self.pending_submit = Some(self.ctx.spawn(async move {
            let token = session.access_token();
            api.create_post(token.as_deref(), &form).await
        }));
        true
    }

    pub fn poll(&mut self, events: &mut Vec<ScreenEvent>) {
        match take_ready(&mut self.pending_categories) {
            Some(Ok(categories)) => {
                tracing::debug!("[NEW_POST] Loaded {} categories", categories.len());
                self.categories = categories;
            }
            Some(Err(e)) => tracing::error!("[NEW_POST] Failed to fetch categories: {}", e),
            None => {}
        }

        match take_ready(&mut self.pending_submit) {
            Some(Ok(())) => {
                tracing::info!("[NEW_POST] Created post '{}'", self.form.title);
                events.push(ScreenEvent::alert("Success", "The blog created successfully."));
                self.form.clear();
                self.image_input.clear();
                events.push(ScreenEvent::Navigate(AppView::Home));
            }
            Some(Err(e)) => {
                tracing::error!("[NEW_POST] Create post failed: {}", e);
                events.push(ScreenEvent::alert(
                    "Add blog Failed",
                    e.user_message("Something went wrong. Try again later."),
                ));
            }
            None => {}
        }
    }
}

/**
 * Authentication Screens
 *
 * Login and registration forms. Both validate locally first; a form with
 * field errors never sends a request.
 */

use crate::egui_app::api::ApiError;
use crate::egui_app::context::AppContext;
use crate::egui_app::screens::ScreenEvent;
use crate::egui_app::session::SessionError;
use crate::egui_app::task::{take_ready, ScreenTask};
use crate::egui_app::types::{AppView, RegisterRequest, UserInfo};
use crate::shared::error::FieldErrors;
use crate::shared::validation::{LoginForm, RegisterForm};

pub struct LoginScreen {
    ctx: AppContext,
    pub form: LoginForm,
    pub errors: FieldErrors,
    pending: Option<ScreenTask<Result<Option<UserInfo>, SessionError>>>,
}

impl LoginScreen {
    pub fn new(ctx: AppContext) -> Self {
        Self {
            ctx,
            form: LoginForm::default(),
            errors: FieldErrors::default(),
            pending: None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// Validate and, if valid, start the login request.
    /// Returns whether a request was sent.
    pub fn submit(&mut self) -> bool {
        if self.pending.is_some() {
            return false;
        }
        if let Err(errors) = self.form.validate() {
            for error in errors.to_errors() {
                tracing::debug!("[LOGIN] {}", error);
            }
            self.errors = errors;
            return false;
        }
        self.errors = FieldErrors::default();

        let session = self.ctx.session.clone();
        let email = self.form.email.clone();
        let password = self.form.password.clone();
        self.pending = Some(self.ctx.spawn(async move { session.login(&email, &password).await }));
        true
    }

    pub fn poll(&mut self, events: &mut Vec<ScreenEvent>) {
        match take_ready(&mut self.pending) {
            Some(Ok(user)) => {
                match user {
                    Some(user) => tracing::info!("[LOGIN] ✓ Authentication successful: {}", user.email),
                    None => tracing::warn!("[LOGIN] Tokens stored but the user could not be resolved"),
                }
                self.form.password.clear();
                events.push(ScreenEvent::Navigate(AppView::Home));
            }
            Some(Err(e)) => {
                tracing::error!("[LOGIN] ✗ Authentication failed: {}", e);
                events.push(ScreenEvent::alert("Login Failed", e.user_message("Invalid credentials")));
            }
            None => {}
        }
    }
}

pub struct RegisterScreen {
    ctx: AppContext,
    pub form: RegisterForm,
    pub errors: FieldErrors,
    pending: Option<ScreenTask<Result<(), ApiError>>>,
}

impl RegisterScreen {
    pub fn new(ctx: AppContext) -> Self {
        Self {
            ctx,
            form: RegisterForm::default(),
            errors: FieldErrors::default(),
            pending: None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    pub fn submit(&mut self) -> bool {
        if self.pending.is_some() {
            return false;
        }
        if let Err(errors) = self.form.validate() {
            for error in errors.to_errors() {
                tracing::debug!("[REGISTER] {}", error);
            }
            self.errors = errors;
            return false;
        }
        self.errors = FieldErrors::default();

        let api = self.ctx.api.clone();
        let request = RegisterRequest {
            email: self.form.email.clone(),
            username: self.form.username.clone(),
            password: self.form.password.clone(),
        };
        self.pending = Some(self.ctx.spawn(async move { api.register(&request).await }));
        true
    }

    pub fn poll(&mut self, events: &mut Vec<ScreenEvent>) {
        match take_ready(&mut self.pending) {
            Some(Ok(())) => {
                tracing::info!("[REGISTER] Account created for {}", self.form.email);
                events.push(ScreenEvent::alert("Success", "Account created. Please log in."));
                events.push(ScreenEvent::Navigate(AppView::Login));
            }
            Some(Err(e)) => {
                tracing::error!("[REGISTER] Registration failed: {}", e);
                events.push(ScreenEvent::alert(
                    "Registration Failed",
                    e.user_message("Something went wrong. Try again later."),
                ));
            }
            None => {}
        }
    }
}

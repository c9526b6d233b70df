use std::io;
use std::sync::Arc;

use tokio::runtime::Runtime;

use crate::egui_app::config::Config;
use crate::egui_app::context::AppContext;
use crate::egui_app::screens::{
    Alert, BlogDetailScreen, ConfirmAction, FeedScreen, LoginScreen, NewPostScreen, ProfileScreen,
    RegisterScreen, ScreenEvent,
};
use crate::egui_app::session::SessionStatus;
use crate::egui_app::task::{take_ready, ScreenTask};
use crate::egui_app::token_store::FileTokenStore;
use crate::egui_app::types::{AppView, UserInfo};

/// The mounted screen. Replacing it drops the old screen and aborts its
/// in-flight requests.
pub enum Screen {
    Splash,
    Welcome(FeedScreen),
    Login(LoginScreen),
    Register(RegisterScreen),
    Home(FeedScreen),
    NewPost(NewPostScreen),
    Profile(ProfileScreen),
    Detail(BlogDetailScreen),
}

/// Central application state shared across egui views.
pub struct AppState {
    pub ctx: AppContext,
    pub screen: Screen,
    pub current_view: AppView,
    pub alert: Option<Alert>,
    pub confirm: Option<ConfirmAction>,
    startup: Option<ScreenTask<Option<UserInfo>>>,
    events: Vec<ScreenEvent>,
    // Declared last: screens abort their tasks before the runtime shuts down.
    _runtime: Option<Runtime>,
}

impl AppState {
    /// Build the app with its own multi-thread runtime and the on-disk token file.
    pub fn new(config: Config) -> io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("lagerblogs-net")
            .enable_all()
            .build()?;

        let tokens = Arc::new(FileTokenStore::new(config.token_path()));
        tracing::info!("[APP] Token file: {}", tokens.path().display());
        let ctx = AppContext::new(config, tokens, runtime.handle().clone());

        let mut state = Self::with_context(ctx);
        state._runtime = Some(runtime);
        Ok(state)
    }

    /// Build the app on an existing context. Starts resolving the session.
    pub fn with_context(ctx: AppContext) -> Self {
        let session = ctx.session.clone();
        let startup = Some(ctx.spawn(async move { session.load_user().await }));

        Self {
            ctx,
            screen: Screen::Splash,
            current_view: AppView::Splash,
            alert: None,
            confirm: None,
            startup,
            events: Vec::new(),
            _runtime: None,
        }
    }

    pub fn session_status(&self) -> SessionStatus {
        self.ctx.session.status()
    }

    pub fn current_user(&self) -> Option<UserInfo> {
        self.ctx.session.user()
    }

    /// Once per frame: apply finished tasks, then the events they raised.
    pub fn update(&mut self) {
        self.check_startup();

        let mut events = std::mem::take(&mut self.events);
        match &mut self.screen {
            Screen::Splash => {}
            Screen::Welcome(feed) | Screen::Home(feed) => feed.poll(),
            Screen::Login(login) => login.poll(&mut events),
            Screen::Register(register) => register.poll(&mut events),
            Screen::NewPost(new_post) => new_post.poll(&mut events),
            Screen::Profile(profile) => profile.poll(),
            Screen::Detail(detail) => detail.poll(&mut events),
        }
        self.apply_events(events);
    }

    fn check_startup(&mut self) {
        if self.startup.is_none() {
            return;
        }
        // A cancelled lookup routes as anonymous.
        let resolved = take_ready(&mut self.startup);
        if resolved.is_none() && self.startup.is_some() {
            return;
        }

        let target = if self.ctx.session.is_authenticated() {
            AppView::Home
        } else {
            AppView::Welcome
        };
        tracing::info!("[APP] Session resolved, routing to {:?}", target);
        self.navigate(target);
    }

    /// Queue an event from a view. Applied on the next [`update`](Self::update).
    pub fn push_event(&mut self, event: ScreenEvent) {
        self.events.push(event);
    }

    /// Apply events in order
    pub fn apply_events(&mut self, events: Vec<ScreenEvent>) {
        for event in events {
            match event {
                ScreenEvent::Navigate(view) => self.navigate(view),
                ScreenEvent::Alert(alert) => {
                    tracing::debug!("[APP] Alert: {} - {}", alert.title, alert.message);
                    self.alert = Some(alert);
                }
                ScreenEvent::Confirm(action) => self.confirm = Some(action),
                ScreenEvent::Logout => self.logout(),
            }
        }
    }

    /// Mount a fresh screen for `view`. New post and profile need a signed-in
    /// user and fall back to the welcome screen otherwise.
    pub fn navigate(&mut self, view: AppView) {
        let view = if view.requires_session() && !self.ctx.session.is_authenticated() {
            tracing::warn!("[APP] {:?} requires a session, showing welcome", view);
            AppView::Welcome
        } else {
            view
        };

        tracing::debug!("[APP] Navigate {:?} -> {:?}", self.current_view, view);
        self.confirm = None;
        self.screen = match view {
            AppView::Splash => Screen::Splash,
            AppView::Welcome => Screen::Welcome(FeedScreen::new(&self.ctx, "WELCOME")),
            AppView::Login => Screen::Login(LoginScreen::new(self.ctx.clone())),
            AppView::Register => Screen::Register(RegisterScreen::new(self.ctx.clone())),
            AppView::Home => Screen::Home(FeedScreen::new(&self.ctx, "HOME")),
            AppView::NewPost => Screen::NewPost(NewPostScreen::new(self.ctx.clone())),
            AppView::Profile => Screen::Profile(ProfileScreen::new(&self.ctx)),
            AppView::BlogDetail(id) => Screen::Detail(BlogDetailScreen::new(self.ctx.clone(), id)),
        };
        self.current_view = view;
    }

    pub fn logout(&mut self) {
        tracing::info!("[APP] Logging out");
        self.ctx.session.logout();
        self.alert = None;
        self.navigate(AppView::Welcome);
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    pub fn cancel_confirm(&mut self) {
        self.confirm = None;
    }

    /// Run the pending confirmation on the detail screen, if still mounted.
    pub fn accept_confirm(&mut self) {
        let Some(action) = self.confirm.take() else {
            return;
        };
        match &mut self.screen {
            Screen::Detail(detail) => detail.confirm(action),
            _ => tracing::warn!("[APP] Dropping confirmation {:?}, screen changed", action),
        }
    }
}

//! App shell: startup routing, navigation, dialogs and logout

use std::time::Duration;

use lagerblogs::egui_app::screens::{ConfirmAction, ScreenEvent};
use lagerblogs::egui_app::state::Screen;
use lagerblogs::egui_app::token_store::ACCESS_TOKEN_KEY;
use lagerblogs::egui_app::{AppState, AppView, SessionStatus, TokenStore};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::common::*;

async fn started(backend: &TestBackend) -> AppState {
    let mut app = AppState::with_context(backend.ctx.clone());
    assert_eq!(app.current_view, AppView::Splash);
    settle(|| {
        app.update();
        app.current_view != AppView::Splash
    })
    .await;
    app
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_startup_without_token_shows_welcome() {
    let backend = TestBackend::start().await;
    backend.mock_get("/api/posts/", 200, json!([])).await;

    let app = started(&backend).await;

    assert_eq!(app.current_view, AppView::Welcome);
    assert!(matches!(app.screen, Screen::Welcome(_)));
    assert_eq!(app.session_status(), SessionStatus::Anonymous);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_startup_with_valid_token_shows_home() {
    let backend = TestBackend::signed_in().await;
    backend.mock_me(user_json(7, "reader")).await;
    backend.mock_get("/api/posts/", 200, json!([])).await;

    let app = started(&backend).await;

    assert_eq!(app.current_view, AppView::Home);
    assert_eq!(app.current_user().map(|u| u.username), Some("reader".to_string()));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_startup_with_rejected_token_shows_welcome() {
    let backend = TestBackend::signed_in().await;
    backend.mock_get("/auth/users/me/", 401, json!({})).await;
    backend.mock_get("/api/posts/", 200, json!([])).await;

    let app = started(&backend).await;
    assert_eq!(app.current_view, AppView::Welcome);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_logout_returns_to_welcome() {
    let backend = TestBackend::signed_in().await;
    backend.mock_me(user_json(7, "reader")).await;
    backend.mock_get("/api/posts/", 200, json!([])).await;

    let mut app = started(&backend).await;
    assert_eq!(app.current_view, AppView::Home);

    app.push_event(ScreenEvent::Logout);
    app.update();

    assert_eq!(app.current_view, AppView::Welcome);
    assert!(app.current_user().is_none());
    assert_eq!(backend.tokens.get(ACCESS_TOKEN_KEY).unwrap(), None);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_account_views_require_a_session() {
    let backend = TestBackend::start().await;
    backend.mock_get("/api/posts/", 200, json!([])).await;

    let mut app = started(&backend).await;
    app.navigate(AppView::Profile);
    assert_eq!(app.current_view, AppView::Welcome);

    app.navigate(AppView::NewPost);
    assert_eq!(app.current_view, AppView::Welcome);

    app.navigate(AppView::Home);
    assert_eq!(app.current_view, AppView::Home);
    assert!(matches!(app.screen, Screen::Home(_)));

    app.navigate(AppView::Login);
    assert!(matches!(app.screen, Screen::Login(_)));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_login_lands_on_home_when_user_lookup_fails() {
    let backend = TestBackend::start().await;
    backend.mock_get("/api/posts/", 200, json!([])).await;
    Mock::given(method("POST"))
        .and(path("/api/login/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(tokens_json()))
        .mount(&backend.server)
        .await;
    backend.mock_get("/auth/users/me/", 500, json!({})).await;

    let mut app = started(&backend).await;
    app.navigate(AppView::Login);
    match &mut app.screen {
        Screen::Login(login) => {
            login.form.email = "reader@example.com".to_string();
            login.form.password = "hunter22".to_string();
            assert!(login.submit());
        }
        _ => panic!("expected the login screen"),
    }

    settle(|| {
        app.update();
        app.current_view != AppView::Login
    })
    .await;

    assert_eq!(app.current_view, AppView::Home);
    assert!(matches!(app.screen, Screen::Home(_)));
    assert!(app.alert.is_none());
    assert_eq!(backend.tokens.get(ACCESS_TOKEN_KEY).unwrap().as_deref(), Some("access-abc"));
    assert_eq!(app.session_status(), SessionStatus::Anonymous);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_alerts_and_confirmations_are_held_until_dismissed() {
    let backend = TestBackend::start().await;
    backend.mock_get("/api/posts/", 200, json!([])).await;
    backend.mock_get("/api/posts/5/", 200, post_json(5, "Cats", "meow", 3)).await;
    backend.mock_get("/api/comments/", 200, json!([])).await;

    let mut app = started(&backend).await;
    app.apply_events(vec![ScreenEvent::alert("Saved", "Post saved")]);
    assert_eq!(app.alert.as_ref().map(|a| a.title.as_str()), Some("Saved"));
    app.dismiss_alert();
    assert!(app.alert.is_none());

    app.navigate(AppView::BlogDetail(5));
    app.apply_events(vec![ScreenEvent::Confirm(ConfirmAction::DeleteComment(3))]);
    assert_eq!(app.confirm, Some(ConfirmAction::DeleteComment(3)));
    app.cancel_confirm();
    assert!(app.confirm.is_none());

    app.apply_events(vec![ScreenEvent::Confirm(ConfirmAction::DeletePost(5))]);
    app.navigate(AppView::Welcome);
    assert!(app.confirm.is_none());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_navigating_away_discards_pending_results() {
    let backend = TestBackend::start().await;
    backend.mock_get("/api/posts/", 200, json!([])).await;
    Mock::given(method("GET"))
        .and(path("/api/posts/5/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(post_json(5, "Slow", "post", 3))
                .set_delay(Duration::from_millis(300)),
        )
        .mount(&backend.server)
        .await;
    backend.mock_get("/api/comments/", 200, json!([])).await;

    let mut app = started(&backend).await;
    app.navigate(AppView::BlogDetail(5));
    app.navigate(AppView::Welcome);

    tokio::time::sleep(Duration::from_millis(400)).await;
    app.update();

    assert_eq!(app.current_view, AppView::Welcome);
    assert!(app.alert.is_none());
}

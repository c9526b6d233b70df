//! Blog detail screen: comments, bookmarks and deletion

use std::time::Duration;

use lagerblogs::egui_app::screens::{BlogDetailScreen, ConfirmAction, ScreenEvent};
use lagerblogs::egui_app::AppView;
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::common::*;

const POST_ID: i64 = 5;

/// Signed in as user 7 ("reader"); post 5 is written by `author_id`.
async fn detail_backend(author_id: i64, saved: bool) -> TestBackend {
    let backend = TestBackend::signed_in().await;
    backend.sign_in(user_json(7, "reader")).await;
    backend
        .mock_get("/api/posts/5/", 200, post_json(POST_ID, "Cats", "meow", author_id))
        .await;
    backend
        .mock_get(
            "/api/comments/",
            200,
            json!([
                comment_json(11, POST_ID, "reader", "My own comment"),
                comment_json(12, POST_ID, "someone", "Another comment"),
            ]),
        )
        .await;
    backend
        .mock_get("/api/posts/5/is-saved/", 200, json!({ "is_saved": saved }))
        .await;
    backend
}

async fn mounted(backend: &TestBackend, events: &mut Vec<ScreenEvent>) -> BlogDetailScreen {
    let mut screen = BlogDetailScreen::new(backend.ctx.clone(), POST_ID);
    settle(|| {
        screen.poll(events);
        screen.post.is_some() && screen.comments.len() == 2
    })
    .await;
    screen
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_detail_loads_post_comments_and_saved_flag() {
    let backend = detail_backend(8, true).await;
    let mut events = Vec::new();
    let mut screen = mounted(&backend, &mut events).await;

    settle(|| {
        screen.poll(&mut events);
        screen.is_saved
    })
    .await;

    assert_eq!(screen.post.as_ref().map(|p| p.title.as_str()), Some("Cats"));
    assert!(!screen.is_owner());
    assert!(screen.can_delete_comment(&screen.comments[0]));
    assert!(!screen.can_delete_comment(&screen.comments[1]));
    assert!(events.is_empty());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_owner_is_recognised() {
    let backend = detail_backend(7, false).await;
    let mut events = Vec::new();
    let screen = mounted(&backend, &mut events).await;
    assert!(screen.is_owner());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_missing_post_is_logged_not_alerted() {
    let backend = TestBackend::start().await;
    backend.mock_get("/api/posts/404/", 404, json!({ "detail": "Not found." })).await;
    backend.mock_get("/api/comments/", 200, json!([])).await;

    let mut screen = BlogDetailScreen::new(backend.ctx.clone(), 404);
    let mut events = Vec::new();
    settle(|| {
        screen.poll(&mut events);
        !screen.is_loading()
    })
    .await;

    assert!(screen.post.is_none());
    assert!(events.is_empty());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_new_comment_is_prepended() {
    let backend = detail_backend(8, false).await;
    Mock::given(method("POST"))
        .and(path("/api/comments/"))
        .respond_with(ResponseTemplate::new(201).set_body_json(comment_json(13, POST_ID, "reader", "Fresh")))
        .expect(1)
        .mount(&backend.server)
        .await;

    let mut events = Vec::new();
    let mut screen = mounted(&backend, &mut events).await;

    screen.new_comment = "   ".to_string();
    assert!(!screen.add_comment());

    screen.new_comment = "Fresh".to_string();
    assert!(screen.add_comment());
    settle(|| {
        screen.poll(&mut events);
        screen.comments.len() == 3
    })
    .await;

    assert_eq!(screen.comments[0].id, 13);
    assert!(screen.new_comment.is_empty());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_delete_comment_after_confirmation() {
    let backend = detail_backend(8, false).await;
    Mock::given(method("DELETE"))
        .and(path("/api/comments/11/"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&backend.server)
        .await;

    let mut events = Vec::new();
    let mut screen = mounted(&backend, &mut events).await;

    screen.request_delete_comment(11, &mut events);
    assert_eq!(events, vec![ScreenEvent::Confirm(ConfirmAction::DeleteComment(11))]);
    events.clear();

    screen.confirm(ConfirmAction::DeleteComment(11));
    settle(|| {
        screen.poll(&mut events);
        screen.comments.len() == 1
    })
    .await;

    assert_eq!(screen.comments[0].id, 12);
    assert!(events.is_empty());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_second_comment_delete_waits_for_the_first() {
    let backend = detail_backend(8, false).await;
    Mock::given(method("DELETE"))
        .and(path("/api/comments/11/"))
        .respond_with(ResponseTemplate::new(204).set_delay(Duration::from_millis(200)))
        .expect(1)
        .mount(&backend.server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/comments/12/"))
        .respond_with(ResponseTemplate::new(204))
        .expect(0)
        .mount(&backend.server)
        .await;

    let mut events = Vec::new();
    let mut screen = mounted(&backend, &mut events).await;

    screen.confirm(ConfirmAction::DeleteComment(11));
    assert!(screen.is_deleting_comment());
    tokio::time::sleep(Duration::from_millis(50)).await;
    screen.confirm(ConfirmAction::DeleteComment(12));

    settle(|| {
        screen.poll(&mut events);
        !screen.is_deleting_comment()
    })
    .await;

    let shown: Vec<i64> = screen.comments.iter().map(|c| c.id).collect();
    assert_eq!(shown, vec![12]);
    assert!(events.is_empty());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_failed_comment_delete_alerts() {
    let backend = detail_backend(8, false).await;
    Mock::given(method("DELETE"))
        .and(path("/api/comments/11/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&backend.server)
        .await;

    let mut events = Vec::new();
    let mut screen = mounted(&backend, &mut events).await;
    screen.confirm(ConfirmAction::DeleteComment(11));
    settle(|| {
        screen.poll(&mut events);
        !events.is_empty()
    })
    .await;

    assert_eq!(events, vec![ScreenEvent::alert("Error", "Unable to delete comment.")]);
    assert_eq!(screen.comments.len(), 2);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_delete_post_navigates_home() {
    let backend = detail_backend(7, false).await;
    Mock::given(method("DELETE"))
        .and(path("/api/posts/5/"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&backend.server)
        .await;

    let mut events = Vec::new();
    let mut screen = mounted(&backend, &mut events).await;
    screen.request_delete_post(&mut events);
    assert_eq!(events, vec![ScreenEvent::Confirm(ConfirmAction::DeletePost(POST_ID))]);
    events.clear();

    screen.confirm(ConfirmAction::DeletePost(POST_ID));
    settle(|| {
        screen.poll(&mut events);
        !events.is_empty()
    })
    .await;

    assert_eq!(events, vec![ScreenEvent::Navigate(AppView::Home)]);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_failed_post_delete_alerts() {
    let backend = detail_backend(7, false).await;
    Mock::given(method("DELETE"))
        .and(path("/api/posts/5/"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({ "detail": "Forbidden" })))
        .mount(&backend.server)
        .await;

    let mut events = Vec::new();
    let mut screen = mounted(&backend, &mut events).await;
    screen.confirm(ConfirmAction::DeletePost(POST_ID));
    settle(|| {
        screen.poll(&mut events);
        !events.is_empty()
    })
    .await;

    assert_eq!(events, vec![ScreenEvent::alert("Error", "Unable to delete the post.")]);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_toggle_save_flips_flag_and_alerts() {
    let backend = detail_backend(8, true).await;
    Mock::given(method("POST"))
        .and(path("/api/posts/5/toggle-save/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "Post removed from saved" })))
        .expect(1)
        .mount(&backend.server)
        .await;

    let mut events = Vec::new();
    let mut screen = mounted(&backend, &mut events).await;
    settle(|| {
        screen.poll(&mut events);
        screen.is_saved
    })
    .await;

    screen.toggle_save();
    settle(|| {
        screen.poll(&mut events);
        !events.is_empty()
    })
    .await;

    assert!(!screen.is_saved);
    assert_eq!(events, vec![ScreenEvent::alert("Removed", "Post removed from saved")]);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_toggle_save_failure_keeps_flag() {
    let backend = detail_backend(8, false).await;
    Mock::given(method("POST"))
        .and(path("/api/posts/5/toggle-save/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&backend.server)
        .await;

    let mut events = Vec::new();
    let mut screen = mounted(&backend, &mut events).await;
    screen.toggle_save();
    settle(|| {
        screen.poll(&mut events);
        !events.is_empty()
    })
    .await;

    assert!(!screen.is_saved);
    assert_eq!(events, vec![ScreenEvent::alert("Error", "Something went wrong.")]);
}

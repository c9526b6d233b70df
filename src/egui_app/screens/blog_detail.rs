//! Blog Detail Screen
//!
//! Shows one post with its comments. On mount the post and its comments are
//! requested independently; whichever resolves first is applied first. The
//! saved flag is requested once the post is known.
//!
//! Fetch failures here are logged only. Mutations (delete, save) report
//! failures through alerts; adding a comment logs failures only.

use crate::egui_app::api::ApiError;
use crate::egui_app::context::AppContext;
use crate::egui_app::screens::{ConfirmAction, ScreenEvent};
use crate::egui_app::task::{take_ready, ScreenTask};
use crate::egui_app::types::{AppView, UserInfo};
use crate::shared::blog::{Comment, NewComment, Post};

pub struct BlogDetailScreen {
    ctx: AppContext,
    post_id: i64,
    pub post: Option<Post>,
    pub comments: Vec<Comment>,
    pub new_comment: String,
    pub is_saved: bool,

    pending_post: Option<ScreenTask<Result<Post, ApiError>>>,
    pending_comments: Option<ScreenTask<Result<Vec<Comment>, ApiError>>>,
    pending_saved: Option<ScreenTask<Result<bool, ApiError>>>,
    pending_add_comment: Option<ScreenTask<Result<Comment, ApiError>>>,
    deleting_comment: Option<i64>,
    pending_delete_comment: Option<ScreenTask<Result<(), ApiError>>>,
    pending_delete_post: Option<ScreenTask<Result<(), ApiError>>>,
    pending_toggle_save: Option<ScreenTask<Result<Option<String>, ApiError>>>,
}

impl BlogDetailScreen {
    pub fn new(ctx: AppContext, post_id: i64) -> Self {
        let api = ctx.api.clone();
        let pending_post = Some(ctx.spawn(async move { api.get_post(post_id).await }));
        let api = ctx.api.clone();
        let pending_comments = Some(ctx.spawn(async move { api.list_comments(post_id).await }));

        Self {
            ctx,
            post_id,
            post: None,
            comments: Vec::new(),
            new_comment: String::new(),
            is_saved: false,
            pending_post,
            pending_comments,
            pending_saved: None,
            pending_add_comment: None,
            deleting_comment: None,
            pending_delete_comment: None,
            pending_delete_post: None,
            pending_toggle_save: None,
        }
    }

    /// Still waiting for the post itself
    pub fn is_loading(&self) -> bool {
        self.post.is_none() && self.pending_post.is_some()
    }

    pub fn is_adding_comment(&self) -> bool {
        self.pending_add_comment.is_some()
    }

    /// A confirmed comment delete has not settled yet
    pub fn is_deleting_comment(&self) -> bool {
        self.deleting_comment.is_some()
    }

    pub fn current_user(&self) -> Option<UserInfo> {
        self.ctx.session.user()
    }

    /// The current user wrote the post
    pub fn is_owner(&self) -> bool {
        match (&self.post, self.current_user()) {
            (Some(post), Some(user)) => post.is_owned_by(user.id),
            _ => false,
        }
    }

    /// The current user wrote `comment`
    pub fn can_delete_comment(&self, comment: &Comment) -> bool {
        self.current_user()
            .is_some_and(|user| user.username == comment.author)
    }

    pub fn poll(&mut self, events: &mut Vec<ScreenEvent>) {
        match take_ready(&mut self.pending_post) {
            Some(Ok(post)) => {
                tracing::debug!("[DETAIL] Loaded post {}", post.id);
                self.post = Some(post);
                self.fetch_saved_status();
            }
            Some(Err(e)) => tracing::error!("[DETAIL] Failed to fetch post {}: {}", self.post_id, e),
            None => {}
        }

        match take_ready(&mut self.pending_comments) {
            Some(Ok(comments)) => self.comments = comments,
            Some(Err(e)) => tracing::error!("[DETAIL] Failed to fetch comments: {}", e),
            None => {}
        }

        match take_ready(&mut self.pending_saved) {
            Some(Ok(saved)) => self.is_saved = saved,
            Some(Err(e)) => tracing::warn!("[DETAIL] Check saved status failed: {}", e),
            None => {}
        }

        match take_ready(&mut self.pending_add_comment) {
            Some(Ok(comment)) => {
                self.comments.insert(0, comment);
                self.new_comment.clear();
            }
            Some(Err(e)) => tracing::error!("[DETAIL] Failed to add comment: {}", e),
            None => {}
        }

        match take_ready(&mut self.pending_delete_comment) {
            Some(Ok(())) => {
                if let Some(comment_id) = self.deleting_comment.take() {
                    self.comments.retain(|c| c.id != comment_id);
                }
            }
            Some(Err(e)) => {
                tracing::error!("[DETAIL] Failed to delete comment {:?}: {}", self.deleting_comment.take(), e);
                events.push(ScreenEvent::alert("Error", "Unable to delete comment."));
            }
            None => {
                if self.pending_delete_comment.is_none() {
                    self.deleting_comment = None;
                }
            }
        }

        match take_ready(&mut self.pending_delete_post) {
            Some(Ok(())) => {
                tracing::info!("[DETAIL] Deleted post {}", self.post_id);
                events.push(ScreenEvent::Navigate(AppView::Home));
            }
            Some(Err(e)) => {
                tracing::error!("[DETAIL] Failed to delete post {}: {}", self.post_id, e);
                events.push(ScreenEvent::alert("Error", "Unable to delete the post."));
            }
            None => {}
        }

        match take_ready(&mut self.pending_toggle_save) {
            Some(Ok(message)) => {
                self.is_saved = !self.is_saved;
                let title = if self.is_saved { "Saved" } else { "Removed" };
                events.push(ScreenEvent::alert(title, message.unwrap_or_default()));
            }
            Some(Err(e)) => {
                tracing::error!("[DETAIL] Save/Unsave failed: {}", e);
                events.push(ScreenEvent::alert("Error", "Something went wrong."));
            }
            None => {}
        }
    }

    /// Post the comment typed so far. Blank input is ignored.
    pub fn add_comment(&mut self) -> bool {
        let text = self.new_comment.trim();
        if text.is_empty() || self.pending_add_comment.is_some() {
            return false;
        }

        let comment = NewComment {
            text: self.new_comment.clone(),
            post: self.post_id,
            author: self.current_user().map(|u| u.id),
        };
        let api = self.ctx.api.clone();
        let session = self.ctx.session.clone();
        self.pending_add_comment = Some(self.ctx.spawn(async move {
            let token = session.access_token();
            api.add_comment(token.as_deref(), &comment).await
        }));
        true
    }

    /// Ask for confirmation before deleting a comment
    pub fn request_delete_comment(&self, comment_id: i64, events: &mut Vec<ScreenEvent>) {
        events.push(ScreenEvent::Confirm(ConfirmAction::DeleteComment(comment_id)));
    }

    /// Ask for confirmation before deleting the post
    pub fn request_delete_post(&self, events: &mut Vec<ScreenEvent>) {
        events.push(ScreenEvent::Confirm(ConfirmAction::DeletePost(self.post_id)));
    }

    /// Run a confirmed destructive action
    pub fn confirm(&mut self, action: ConfirmAction) {
        match action {
            ConfirmAction::DeleteComment(comment_id) => self.delete_comment(comment_id),
            ConfirmAction::DeletePost(post_id) => self.delete_post(post_id),
        }
    }

    fn delete_comment(&mut self, comment_id: i64) {
        if let Some(in_flight) = self.deleting_comment {
            tracing::warn!("[DETAIL] Comment {} still deleting, ignoring {}", in_flight, comment_id);
            return;
        }
        let api = self.ctx.api.clone();
        let session = self.ctx.session.clone();
        self.deleting_comment = Some(comment_id);
        self.pending_delete_comment = Some(self.ctx.spawn(async move {
            let token = session.access_token();
            api.delete_comment(token.as_deref(), comment_id).await
        }));
    }

    fn delete_post(&mut self, post_id: i64) {
        if self.pending_delete_post.is_some() {
            return;
        }
        let api = self.ctx.api.clone();
        let session = self.ctx.session.clone();
        self.pending_delete_post = Some(self.ctx.spawn(async move {
            let token = session.access_token();
            api.delete_post(token.as_deref(), post_id).await
        }));
    }

    /// Flip the bookmark on the loaded post
    pub fn toggle_save(&mut self) {
        let Some(post_id) = self.post.as_ref().map(|p| p.id) else {
            return;
        };
        if self.pending_toggle_save.is_some() {
            return;
        }
        let api = self.ctx.api.clone();
        let session = self.ctx.session.clone();
        self.pending_toggle_save = Some(self.ctx.spawn(async move {
            let token = session.access_token();
            api.toggle_save(token.as_deref(), post_id).await
        }));
    }

    fn fetch_saved_status(&mut self) {
        let Some(post_id) = self.post.as_ref().map(|p| p.id) else {
            return;
        };
        let Some(token) = self.ctx.session.access_token() else {
            tracing::debug!("[DETAIL] No token, skipping saved status");
            return;
        };
        let api = self.ctx.api.clone();
        self.pending_saved = Some(self.ctx.spawn(async move { api.is_saved(Some(&token), post_id).await }));
    }
}

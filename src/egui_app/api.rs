//! Blog API Client
//!
//! Async functions for every backend endpoint the client uses. The client is
//! cheap to clone; screens clone it into the futures they spawn.
//!
//! Authenticated calls take the bearer token explicitly. Callers read it from
//! the [`SessionStore`](crate::egui_app::session::SessionStore) right before
//! the request so a logout is picked up immediately.

use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::egui_app::config::Config;
use crate::egui_app::types::{LoginRequest, RegisterRequest, TokenPair, UserInfo};
use crate::shared::blog::{
    Category, Comment, ErrorDetail, NewComment, Post, SavedStatus, ToggleSaveResponse,
};
use crate::shared::validation::NewPostForm;

/// Failures talking to the backend
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    /// Non-2xx response; `detail` is the backend's own message if it sent one
    #[error("Request failed with status code {status}")]
    Rejected { status: u16, detail: Option<String> },

    #[error("Failed to parse response: {0}")]
    Decode(String),

    #[error("Not authenticated")]
    Unauthenticated,

    #[error("Failed to read image: {0}")]
    Attachment(String),
}

impl ApiError {
    /// Backend-provided message, if any
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Rejected { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// Text for an alert: the backend's detail or `fallback`
    pub fn user_message(&self, fallback: &str) -> String {
        self.detail().unwrap_or(fallback).to_string()
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Blog API client
#[derive(Debug, Clone)]
pub struct BlogApiClient {
    config: Config,
    client: Client,
}

impl BlogApiClient {
    pub fn new(config: Config) -> Self {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!("[API] Falling back to default HTTP client: {}", e);
                Client::new()
            });
        Self { config, client }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Exchange credentials for an access/refresh token pair
    pub async fn login(&self, request: &LoginRequest) -> Result<TokenPair, ApiError> {
        let url = self.config.api_url("/api/login/");
        tracing::debug!("[API] POST {}", url);
        fetch_json(self.client.post(&url).json(request)).await
    }

    /// Create an account; the response body is not used
    pub async fn register(&self, request: &RegisterRequest) -> Result<(), ApiError> {
        let url = self.config.api_url("/api/register/");
        tracing::debug!("[API] POST {}", url);
        send(self.client.post(&url).json(request)).await.map(|_| ())
    }

    /// Resolve a token into the user it belongs to
    pub async fn me(&self, token: &str) -> Result<UserInfo, ApiError> {
        let url = self.config.api_url("/auth/users/me/");
        tracing::debug!("[API] GET {}", url);
        fetch_json(self.client.get(&url).bearer_auth(token)).await
    }

    /// Full post collection, in server order
    pub async fn list_posts(&self, token: Option<&str>) -> Result<Vec<Post>, ApiError> {
        let url = self.config.api_url("/api/posts/");
        tracing::debug!("[API] GET {}", url);
        let mut request = self.client.get(&url);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        fetch_json(request).await
    }

    pub async fn get_post(&self, post_id: i64) -> Result<Post, ApiError> {
        let url = self.config.api_url(&format!("/api/posts/{}/", post_id));
        tracing::debug!("[API] GET {}", url);
        fetch_json(self.client.get(&url)).await
    }

    /// Publish a post as a multipart form
    pub async fn create_post(&self, token: Option<&str>, form: &NewPostForm) -> Result<(), ApiError> {
        let token = token.ok_or(ApiError::Unauthenticated)?;
        let url = self.config.api_url("/api/posts/");

        let mut body = Form::new()
            .text("title", form.title.clone())
            .text("content", form.content.clone())
            .text("caption", form.caption.clone())
            .text("tags", form.tags.clone());
        for id in &form.categories {
            body = body.text("categories", id.to_string());
        }
        if let Some(path) = &form.image {
            let bytes = tokio::fs::read(path)
                .await
                .map_err(|e| ApiError::Attachment(format!("{}: {}", path.display(), e)))?;
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "image.jpg".to_string());
            let part = Part::bytes(bytes)
                .file_name(name)
                .mime_str("image/jpeg")
                .map_err(|e| ApiError::Attachment(e.to_string()))?;
            body = body.part("image", part);
        }

        tracing::debug!("[API] POST {} (multipart)", url);
        send(self.client.post(&url).bearer_auth(token).multipart(body))
            .await
            .map(|_| ())
    }

    pub async fn delete_post(&self, token: Option<&str>, post_id: i64) -> Result<(), ApiError> {
        let token = token.ok_or(ApiError::Unauthenticated)?;
        let url = self.config.api_url(&format!("/api/posts/{}/", post_id));
        tracing::debug!("[API] DELETE {}", url);
        send(self.client.delete(&url).bearer_auth(token)).await.map(|_| ())
    }

    /// Comments on `post_id`, in server order
    pub async fn list_comments(&self, post_id: i64) -> Result<Vec<Comment>, ApiError> {
        let url = self.config.api_url("/api/comments/");
        tracing::debug!("[API] GET {}?post={}", url, post_id);
        fetch_json(self.client.get(&url).query(&[("post", post_id)])).await
    }

    pub async fn add_comment(&self, token: Option<&str>, comment: &NewComment) -> Result<Comment, ApiError> {
        let token = token.ok_or(ApiError::Unauthenticated)?;
        let url = self.config.api_url("/api/comments/");
        tracing::debug!("[API] POST {}", url);
        fetch_json(self.client.post(&url).bearer_auth(token).json(comment)).await
    }

    pub async fn delete_comment(&self, token: Option<&str>, comment_id: i64) -> Result<(), ApiError> {
        let token = token.ok_or(ApiError::Unauthenticated)?;
        let url = self.config.api_url(&format!("/api/comments/{}/", comment_id));
        tracing::debug!("[API] DELETE {}", url);
        send(self.client.delete(&url).bearer_auth(token)).await.map(|_| ())
    }

    /// Whether the current user bookmarked `post_id`
    pub async fn is_saved(&self, token: Option<&str>, post_id: i64) -> Result<bool, ApiError> {
        let token = token.ok_or(ApiError::Unauthenticated)?;
        let url = self.config.api_url(&format!("/api/posts/{}/is-saved/", post_id));
        tracing::debug!("[API] GET {}", url);
        let status: SavedStatus = fetch_json(self.client.get(&url).bearer_auth(token)).await?;
        Ok(status.is_saved)
    }

    /// Flip the bookmark on `post_id`; returns the backend's message
    pub async fn toggle_save(&self, token: Option<&str>, post_id: i64) -> Result<Option<String>, ApiError> {
        let token = token.ok_or(ApiError::Unauthenticated)?;
        let url = self.config.api_url(&format!("/api/posts/{}/toggle-save/", post_id));
        tracing::debug!("[API] POST {}", url);
        let response = send(self.client.post(&url).bearer_auth(token).json(&serde_json::json!({}))).await?;
        let text = response.text().await?;
        if text.trim().is_empty() {
            return Ok(None);
        }
        let body: ToggleSaveResponse =
            serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(body.message)
    }

    pub async fn list_categories(&self, token: Option<&str>) -> Result<Vec<Category>, ApiError> {
        let token = token.ok_or(ApiError::Unauthenticated)?;
        let url = self.config.api_url("/api/categories/");
        tracing::debug!("[API] GET {}", url);
        fetch_json(self.client.get(&url).bearer_auth(token)).await
    }
}

/// Send a request and turn non-2xx statuses into [`ApiError::Rejected`]
async fn send(request: RequestBuilder) -> Result<Response, ApiError> {
    let response = request.send().await?;
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let detail = serde_json::from_str::<ErrorDetail>(&body).ok().map(|e| e.detail);
    tracing::warn!("[API] Request failed: {} - {}", status, body);
    Err(ApiError::Rejected {
        status: status.as_u16(),
        detail,
    })
}

async fn fetch_json<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, ApiError> {
    let response = send(request).await?;
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

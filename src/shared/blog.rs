/**
 * Blog Data Structures
 *
 * Records returned by the blog backend: posts, comments and categories.
 * They are deserialized straight from the REST responses and rendered by
 * the egui screens without further transformation.
 */
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::shared::list_filter::Searchable;

/// Author summary embedded in a post record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Author {
    pub id: i64,
    pub username: String,
}

/// A single blog post
///
/// `author` is optional because some list endpoints omit it; the detail
/// endpoint always includes it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Post {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<Author>,
}

impl Post {
    /// Id of the post's author, if the record carries one
    pub fn author_id(&self) -> Option<i64> {
        self.author.as_ref().map(|a| a.id)
    }

    /// Whether `user_id` wrote this post
    pub fn is_owned_by(&self, user_id: i64) -> bool {
        self.author_id() == Some(user_id)
    }

    /// Creation date formatted for list rows, e.g. `Tue Jun 03 2025`
    pub fn display_date(&self) -> String {
        display_date(&self.created_at)
    }
}

impl Searchable for Post {
    fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle) || self.content.to_lowercase().contains(needle)
    }
}

/// A comment attached to a post
///
/// The backend serializes `author` as the commenter's username.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Comment {
    pub id: i64,
    pub text: String,
    pub author: String,
    #[serde(default)]
    pub post: Option<i64>,
    #[serde(default)]
    pub created_at: String,
}

impl Comment {
    pub fn display_date(&self) -> String {
        display_date(&self.created_at)
    }
}

/// Post category offered on the new post screen
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

/// Body of `POST /api/comments/`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewComment {
    pub text: String,
    pub post: i64,
    pub author: Option<i64>,
}

/// Response of `GET /api/posts/{id}/is-saved/`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedStatus {
    pub is_saved: bool,
}

/// Response of `POST /api/posts/{id}/toggle-save/`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToggleSaveResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// Error body the backend attaches to rejected requests
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub detail: String,
}

/// Format a backend timestamp as `Www Mmm dd yyyy`.
///
/// Accepts RFC 3339, naive `YYYY-MM-DDTHH:MM:SS[.f]` and plain dates.
/// Anything else is returned unchanged.
pub fn display_date(raw: &str) -> String {
    const FORMAT: &str = "%a %b %d %Y";

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format(FORMAT).to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format(FORMAT).to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format(FORMAT).to_string();
    }
    raw.to_string()
}

//! Fetched, searchable collections
//!
//! [`FilteredCollection`] pairs a [`ListFilter`] with the request that fills
//! it. Home, welcome and profile all use it; they differ only in the fetch
//! future and the match predicate they pass in.
//!
//! A failed fetch is final for the collection. Building a new collection (the
//! screen being re-entered) is the only way to retry.

use std::future::Future;

use crate::egui_app::api::ApiError;
use crate::egui_app::context::AppContext;
use crate::egui_app::task::{take_ready, ScreenTask};
use crate::shared::list_filter::{EmptyState, ListFilter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Loaded,
    Failed(String),
}

pub struct FilteredCollection<T> {
    label: &'static str,
    filter: ListFilter<T>,
    state: LoadState,
    pending: Option<ScreenTask<Result<Vec<T>, ApiError>>>,
}

impl<T: Send + 'static> FilteredCollection<T> {
    /// Start fetching into `filter`. `label` prefixes log lines.
    pub fn fetch<F>(ctx: &AppContext, label: &'static str, filter: ListFilter<T>, fetch: F) -> Self
    where
        F: Future<Output = Result<Vec<T>, ApiError>> + Send + 'static,
    {
        tracing::debug!("[{}] Fetching collection", label);
        Self {
            label,
            filter,
            state: LoadState::Loading,
            pending: Some(ctx.spawn(fetch)),
        }
    }
}

impl<T> FilteredCollection<T> {
    /// Apply a finished fetch. Returns true when the state changed.
    pub fn poll(&mut self) -> bool {
        match take_ready(&mut self.pending) {
            Some(Ok(items)) => {
                tracing::info!("[{}] Loaded {} items", self.label, items.len());
                self.filter.set_source(items);
                self.state = LoadState::Loaded;
                true
            }
            Some(Err(e)) => {
                tracing::error!("[{}] Error fetching collection: {}", self.label, e);
                self.state = LoadState::Failed(e.to_string());
                true
            }
            None => {
                if self.pending.is_none() && self.state == LoadState::Loading {
                    self.state = LoadState::Failed("Request was cancelled".to_string());
                    return true;
                }
                false
            }
        }
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == LoadState::Loading
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn query(&self) -> &str {
        self.filter.query()
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.filter.set_query(query);
    }

    pub fn view(&self) -> impl Iterator<Item = &T> + '_ {
        self.filter.view()
    }

    pub fn source_len(&self) -> usize {
        self.filter.source().len()
    }

    pub fn empty_state(&self) -> Option<EmptyState> {
        self.filter.empty_state()
    }

    pub fn filter(&self) -> &ListFilter<T> {
        &self.filter
    }
}

//! Client-side list filtering
//!
//! [`ListFilter`] keeps a fetched collection (the *source*) together with a
//! live search query and the derived *view*. The view is recomputed eagerly on
//! every change to either input, so it can never be stale.
//!
//! Matching is plain case-insensitive substring containment. A query that is
//! empty after trimming shows the whole source.

/// Items that can be matched against a lowercased search needle
pub trait Searchable {
    /// `needle` is already lowercased; implementors fold their own fields.
    fn matches(&self, needle: &str) -> bool;
}

/// Why a view is empty
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyState {
    /// Nothing was fetched
    NoItems,
    /// Items exist but none match the query
    NoMatches,
}

/// Source collection, query and derived view for one list screen
pub struct ListFilter<T> {
    source: Vec<T>,
    query: String,
    visible: Vec<usize>,
    matcher: fn(&T, &str) -> bool,
}

impl<T: Searchable> Default for ListFilter<T> {
    fn default() -> Self {
        Self::new(|item: &T, needle: &str| item.matches(needle))
    }
}

impl<T> ListFilter<T> {
    /// Create an empty filter using `matcher` as the match predicate
    pub fn new(matcher: fn(&T, &str) -> bool) -> Self {
        Self {
            source: Vec::new(),
            query: String::new(),
            visible: Vec::new(),
            matcher,
        }
    }

    /// Replace the source collection
    pub fn set_source(&mut self, items: Vec<T>) {
        self.source = items;
        self.recompute();
    }

    /// Update the search query
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.recompute();
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn source(&self) -> &[T] {
        &self.source
    }

    /// Items currently visible, in source order
    pub fn view(&self) -> impl Iterator<Item = &T> + '_ {
        self.visible.iter().map(move |&i| &self.source[i])
    }

    pub fn view_len(&self) -> usize {
        self.visible.len()
    }

    /// Reason the view is empty, or `None` if it has items
    pub fn empty_state(&self) -> Option<EmptyState> {
        if !self.visible.is_empty() {
            None
        } else if self.source.is_empty() {
            Some(EmptyState::NoItems)
        } else {
            Some(EmptyState::NoMatches)
        }
    }

    /// Drop source items that fail `keep`, e.g. after a delete
    pub fn retain(&mut self, keep: impl FnMut(&T) -> bool) {
        self.source.retain(keep);
        self.recompute();
    }

    fn recompute(&mut self) {
        if self.query.trim().is_empty() {
            self.visible = (0..self.source.len()).collect();
            return;
        }

        let needle = self.query.to_lowercase();
        let matcher = self.matcher;
        self.visible = self
            .source
            .iter()
            .enumerate()
            .filter(|(_, item)| matcher(item, &needle))
            .map(|(i, _)| i)
            .collect();
    }
}

impl<T: Clone> ListFilter<T> {
    /// Owned copy of the current view
    pub fn view_cloned(&self) -> Vec<T> {
        self.view().cloned().collect()
    }
}

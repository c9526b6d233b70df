//! Public post feed shared by the welcome and home screens.

use crate::egui_app::collection::FilteredCollection;
use crate::egui_app::context::AppContext;
use crate::shared::blog::Post;
use crate::shared::list_filter::ListFilter;

/// Tags shown above the feed
pub const POPULAR_TAGS: [&str; 7] = [
    "Politics",
    "Music",
    "Sports",
    "Technology",
    "Food",
    "Travel",
    "Fashion",
];

pub struct FeedScreen {
    pub posts: FilteredCollection<Post>,
}

impl FeedScreen {
    /// Fetch `GET /api/posts/` without credentials. `label` tags log lines.
    pub fn new(ctx: &AppContext, label: &'static str) -> Self {
        let api = ctx.api.clone();
        let posts = FilteredCollection::fetch(ctx, label, ListFilter::default(), async move {
            api.list_posts(None).await
        });
        Self { posts }
    }

    pub fn poll(&mut self) {
        self.posts.poll();
    }
}

//! Profile screen: the signed-in user's own posts.

use crate::egui_app::api::ApiError;
use crate::egui_app::collection::FilteredCollection;
use crate::egui_app::context::AppContext;
use crate::egui_app::types::UserInfo;
use crate::shared::blog::Post;
use crate::shared::list_filter::ListFilter;

pub struct ProfileScreen {
    pub user: Option<UserInfo>,
    pub posts: FilteredCollection<Post>,
}

impl ProfileScreen {
    /// Fetches the full post list with the bearer token and keeps the posts
    /// written by the current user. Without a user nothing matches.
    pub fn new(ctx: &AppContext) -> Self {
        let user = ctx.session.user();
        let user_id = user.as_ref().map(|u| u.id);
        let session = ctx.session.clone();
        let api = ctx.api.clone();

        let posts = FilteredCollection::fetch(ctx, "PROFILE", ListFilter::default(), async move {
            let token = session.access_token();
            let posts = api.list_posts(token.as_deref()).await?;
            Ok::<_, ApiError>(
                posts
                    .into_iter()
                    .filter(|post| user_id.is_some_and(|id| post.is_owned_by(id)))
                    .collect::<Vec<Post>>(),
            )
        });

        Self { user, posts }
    }

    pub fn poll(&mut self) {
        self.posts.poll();
    }

    /// Number of posts the user has written
    pub fn post_count(&self) -> usize {
        self.posts.source_len()
    }
}

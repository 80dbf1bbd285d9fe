//! News feed state: fetched posts plus locally composed ones.
//!
//! SYSTEM CONTEXT
//! ==============
//! Backs `/investor/news-feed`. Posts composed here exist only in memory
//! and sit above the fetched ones.

#[cfg(test)]
#[path = "news_feed_test.rs"]
mod news_feed_test;

use time::OffsetDateTime;
use uuid::Uuid;

use crate::net::feed::FeedError;
use crate::net::types::NewsPost;

pub const CURRENT_USER_NAME: &str = "Current User";
pub const CURRENT_USER_INITIAL: &str = "CU";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NewsFeedState {
    pub posts: Vec<NewsPost>,
    pub loading: bool,
    pub error: Option<String>,
}

impl NewsFeedState {
    pub fn begin_loading(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Record a fetch outcome. Posts composed before the fetch finished stay
    /// on top.
    pub fn finish(&mut self, result: Result<Vec<NewsPost>, FeedError>) {
        self.loading = false;
        match result {
            Ok(fetched) => {
                log::debug!("loaded {} posts", fetched.len());
                self.posts.retain(|p| p.user_name == CURRENT_USER_NAME);
                self.posts.extend(fetched);
            }
            Err(e) => {
                log::error!("news feed fetch failed: {e}");
                self.error = Some(e.to_string());
            }
        }
    }

    /// Prepend a post by the current user. Blank text is ignored.
    pub fn submit_post(&mut self, text: &str, now: OffsetDateTime) -> bool {
        if text.trim().is_empty() {
            return false;
        }
        let post = NewsPost {
            id: Uuid::new_v4().to_string(),
            user_name: CURRENT_USER_NAME.to_owned(),
            user_initial: CURRENT_USER_INITIAL.to_owned(),
            posted_at: now,
            main_text: text.to_owned(),
            side_text: None,
            image_url: None,
        };
        log::debug!("composed post {}", post.id);
        self.posts.insert(0, post);
        true
    }
}

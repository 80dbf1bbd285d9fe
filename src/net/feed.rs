//! Simulated fetches for notifications and news feed posts.
//!
//! The browser build waits a fixed delay (via `gloo-timers`) before
//! resolving, standing in for network latency; native builds resolve
//! immediately. Neither fetch is cancellable.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "feed_test.rs"]
mod feed_test;

use super::mock;
use super::types::{NewsPost, Notification};
use crate::config::AppConfig;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FeedError {
    #[error("feed unavailable: {0}")]
    Unavailable(String),
}

/// Mock data source with configurable latency and an optional forced failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MockFeed {
    pub notifications_delay_ms: u32,
    pub news_feed_delay_ms: u32,
    /// Make every fetch fail, exercising the page-level error path.
    pub fail: bool,
}

impl MockFeed {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            notifications_delay_ms: config.notifications_delay_ms,
            news_feed_delay_ms: config.news_feed_delay_ms,
            fail: false,
        }
    }

    /// Fetch the notification inbox.
    ///
    /// # Errors
    ///
    /// Returns `FeedError::Unavailable` when the feed is set to fail.
    pub async fn fetch_notifications(&self) -> Result<Vec<Notification>, FeedError> {
        simulate_latency(self.notifications_delay_ms).await;
        self.check("notifications")?;
        Ok(mock::notifications())
    }

    /// Fetch news feed posts.
    ///
    /// # Errors
    ///
    /// Returns `FeedError::Unavailable` when the feed is set to fail.
    pub async fn fetch_news_posts(&self) -> Result<Vec<NewsPost>, FeedError> {
        simulate_latency(self.news_feed_delay_ms).await;
        self.check("news feed")?;
        Ok(mock::news_posts())
    }

    fn check(&self, what: &str) -> Result<(), FeedError> {
        if self.fail {
            log::error!("{what} fetch failed");
            return Err(FeedError::Unavailable(what.to_owned()));
        }
        Ok(())
    }
}

async fn simulate_latency(ms: u32) {
    #[cfg(feature = "csr")]
    {
        gloo_timers::future::TimeoutFuture::new(ms).await;
    }
    #[cfg(not(feature = "csr"))]
    {
        log::trace!("skipping {ms}ms simulated latency");
    }
}

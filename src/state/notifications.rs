//! Notification inbox state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Backs the `/notifications` page. The page starts a fetch through
//! `net::feed::MockFeed` on mount and reports the outcome here.

#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

use crate::net::feed::FeedError;
use crate::net::types::Notification;

/// Page-level message shown when the inbox cannot be fetched.
pub const LOAD_ERROR_MESSAGE: &str = "Failed to load notifications. Please try again.";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NotificationsState {
    pub items: Vec<Notification>,
    pub loading: bool,
    pub error: Option<String>,
    pub unread_only: bool,
}

impl NotificationsState {
    pub fn begin_loading(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Record a fetch outcome. A failure keeps whatever was loaded before.
    pub fn finish(&mut self, result: Result<Vec<Notification>, FeedError>) {
        self.loading = false;
        match result {
            Ok(items) => {
                log::debug!("loaded {} notifications", items.len());
                self.items = items;
                self.error = None;
            }
            Err(e) => {
                log::error!("notifications fetch failed: {e}");
                self.error = Some(LOAD_ERROR_MESSAGE.to_owned());
            }
        }
    }

    pub fn toggle_unread_only(&mut self) {
        self.unread_only = !self.unread_only;
    }

    pub fn mark_all_read(&mut self) {
        for item in &mut self.items {
            item.read = true;
        }
    }

    /// Notifications passing the unread-only toggle, in fetch order.
    pub fn visible(&self) -> Vec<&Notification> {
        self.items.iter().filter(|n| !self.unread_only || !n.read).collect()
    }

    /// True when nothing visible is unread; disables "Mark All as Read".
    pub fn all_visible_read(&self) -> bool {
        self.visible().iter().all(|n| n.read)
    }

    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|n| !n.read).count()
    }
}

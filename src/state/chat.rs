//! Conversation store and chat session controller.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided as `RwSignal<ChatState>` by the composition root and shared by
//! the conversation list and the `/chats/:username` page. The route handle is
//! the source of truth for selection: pages feed it to `sync_with_route`, and
//! user clicks go through `select_conversation`, which hands back the path to
//! navigate to.
//!
//! DESIGN
//! ======
//! Operations are plain methods on plain data so they can run in unit tests
//! without a reactive runtime. Effects the view must perform (navigate,
//! redirect, scroll) are returned or signalled through counters rather than
//! performed here.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use std::collections::HashMap;

use time::OffsetDateTime;

use crate::net::mock;
use crate::net::types::{Conversation, Message, PLACEHOLDER_AVATAR, SELF_AVATAR, SELF_SENDER};
use crate::routes::AppRoute;

/// Outcome of reconciling the selection with the `:username` route parameter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RouteSync {
    /// The handle matched a different conversation, which is now selected.
    Selected(String),
    /// No handle, or the handle matches the current selection.
    Unchanged,
    /// No conversation has this handle; the caller should go back to `/chats`.
    NotFound,
}

/// Chat state: the conversation store plus the session's selection and draft.
#[derive(Clone, Debug)]
pub struct ChatState {
    pub conversations: Vec<Conversation>,
    /// Ordered message history keyed by conversation id.
    pub messages: HashMap<String, Vec<Message>>,
    pub selected_id: Option<String>,
    /// Compose-field contents.
    pub draft: String,
    /// Incremented whenever the message view should scroll to the bottom.
    pub scroll_seq: u64,
}

impl Default for ChatState {
    fn default() -> Self {
        Self::new(mock::conversations(), mock::conversation_messages())
    }
}

impl ChatState {
    pub fn new(conversations: Vec<Conversation>, messages: HashMap<String, Vec<Message>>) -> Self {
        Self { conversations, messages, selected_id: None, draft: String::new(), scroll_seq: 0 }
    }

    pub fn find_by_username(&self, username: &str) -> Option<&Conversation> {
        self.conversations.iter().find(|c| c.username == username)
    }

    pub fn selected_conversation(&self) -> Option<&Conversation> {
        let id = self.selected_id.as_deref()?;
        self.conversations.iter().find(|c| c.id == id)
    }

    pub fn messages_for(&self, conversation_id: &str) -> &[Message] {
        self.messages.get(conversation_id).map_or(&[], Vec::as_slice)
    }

    pub fn selected_messages(&self) -> &[Message] {
        self.selected_id.as_deref().map_or(&[], |id| self.messages_for(id))
    }

    /// Select a conversation and mark it read.
    ///
    /// Returns the path the caller should navigate to, or `None` if no
    /// conversation has this id. Re-selecting the current conversation
    /// changes nothing.
    pub fn select_conversation(&mut self, conversation_id: &str) -> Option<String> {
        let username = self
            .conversations
            .iter()
            .find(|c| c.id == conversation_id)
            .map(|c| c.username.clone())?;
        self.mark_selected(conversation_id);
        Some(AppRoute::Chat { username }.path())
    }

    /// Send the compose draft to the selected conversation.
    ///
    /// Returns whether a message was appended. The draft is cleared only on
    /// success.
    pub fn send_message(&mut self, now: OffsetDateTime) -> bool {
        let text = std::mem::take(&mut self.draft);
        if self.send_text(&text, now) {
            return true;
        }
        self.draft = text;
        false
    }

    /// Append an outbound message with `text` to the selected conversation.
    ///
    /// Blank text or no selection is a silent no-op returning `false`.
    pub fn send_text(&mut self, text: &str, now: OffsetDateTime) -> bool {
        if text.trim().is_empty() {
            return false;
        }
        let Some(id) = self.selected_id.clone() else {
            log::debug!("send ignored: no conversation selected");
            return false;
        };

        let thread = self.messages.entry(id.clone()).or_default();
        let next_id = u32::try_from(thread.len()).map_or(u32::MAX, |len| len.saturating_add(1));
        thread.push(Message {
            id: next_id,
            sender: SELF_SENDER.to_owned(),
            text: text.to_owned(),
            timestamp: now,
            is_sent: true,
            avatar: SELF_AVATAR.to_owned(),
        });

        if let Some(conv) = self.conversations.iter_mut().find(|c| c.id == id) {
            text.clone_into(&mut conv.text);
            conv.date = now.date();
            conv.unread = false;
        }
        self.scroll_seq += 1;
        log::debug!("sent message {next_id} to {id}");
        true
    }

    /// Empty a conversation's history. The conversation itself stays listed.
    ///
    /// Returns `false` if no conversation has this id.
    pub fn delete_conversation_messages(&mut self, conversation_id: &str) -> bool {
        if !self.conversations.iter().any(|c| c.id == conversation_id) {
            return false;
        }
        self.messages.insert(conversation_id.to_owned(), Vec::new());
        log::info!("cleared messages for {conversation_id}");
        true
    }

    /// Reconcile the selection with the `:username` route parameter.
    pub fn sync_with_route(&mut self, username: Option<&str>) -> RouteSync {
        let Some(username) = username.filter(|u| !u.is_empty()) else {
            return RouteSync::Unchanged;
        };
        let Some(id) = self.find_by_username(username).map(|c| c.id.clone()) else {
            log::debug!("no conversation for handle {username}");
            return RouteSync::NotFound;
        };
        if self.selected_id.as_deref() == Some(id.as_str()) {
            return RouteSync::Unchanged;
        }
        self.mark_selected(&id);
        RouteSync::Selected(id)
    }

    /// Drop the selection, as on the bare `/chats` route.
    ///
    /// Returns whether anything was selected.
    pub fn clear_selection(&mut self) -> bool {
        let cleared = self.selected_id.take();
        if let Some(id) = &cleared {
            log::debug!("deselected {id}");
        }
        cleared.is_some()
    }

    /// Avatar for a message sender label.
    pub fn avatar_for(&self, sender: &str) -> &str {
        if sender == SELF_SENDER {
            return SELF_AVATAR;
        }
        self.conversations
            .iter()
            .find(|c| c.name == sender)
            .map_or(PLACEHOLDER_AVATAR, |c| c.avatar.as_str())
    }

    pub fn unread_count(&self) -> usize {
        self.conversations.iter().filter(|c| c.unread).count()
    }

    fn mark_selected(&mut self, conversation_id: &str) {
        if self.selected_id.as_deref() != Some(conversation_id) {
            self.selected_id = Some(conversation_id.to_owned());
            self.scroll_seq += 1;
        }
        if let Some(conv) = self.conversations.iter_mut().find(|c| c.id == conversation_id) {
            conv.unread = false;
        }
    }
}

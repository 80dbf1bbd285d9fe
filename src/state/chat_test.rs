use super::*;
use time::macros::{date, datetime};

fn now() -> OffsetDateTime {
    datetime!(2025-06-10 09:15 UTC)
}

fn counts(state: &ChatState) -> HashMap<String, usize> {
    state.messages.iter().map(|(id, msgs)| (id.clone(), msgs.len())).collect()
}

// =============================================================
// Selection
// =============================================================

#[test]
fn default_state_has_seeded_conversations_and_no_selection() {
    let state = ChatState::default();
    assert_eq!(state.conversations.len(), 4);
    assert!(state.selected_id.is_none());
    assert!(state.selected_messages().is_empty());
    assert_eq!(state.unread_count(), 2);
}

#[test]
fn select_conversation_returns_chat_path() {
    let mut state = ChatState::default();
    assert_eq!(state.select_conversation("conv_002").as_deref(), Some("/chats/janesmith"));
    assert_eq!(state.selected_id.as_deref(), Some("conv_002"));
    assert_eq!(state.selected_conversation().map(|c| c.name.as_str()), Some("Jane Smith"));
    assert_eq!(state.selected_messages().len(), 2);
}

#[test]
fn selecting_unread_conversation_clears_only_its_flag() {
    let mut state = ChatState::default();
    state.select_conversation("conv_002");
    let unread: Vec<_> = state.conversations.iter().filter(|c| c.unread).map(|c| c.id.as_str()).collect();
    assert_eq!(unread, vec!["conv_004"]);
}

#[test]
fn select_unknown_conversation_changes_nothing() {
    let mut state = ChatState::default();
    assert!(state.select_conversation("conv_999").is_none());
    assert!(state.selected_id.is_none());
    assert_eq!(state.scroll_seq, 0);
}

#[test]
fn reselecting_current_conversation_is_idempotent() {
    let mut state = ChatState::default();
    state.select_conversation("conv_001");
    let seq = state.scroll_seq;
    assert_eq!(state.select_conversation("conv_001").as_deref(), Some("/chats/mohamedg"));
    assert_eq!(state.scroll_seq, seq);
    assert_eq!(state.selected_id.as_deref(), Some("conv_001"));
}

// =============================================================
// Sending
// =============================================================

#[test]
fn send_appends_one_message_to_selected_conversation() {
    let mut state = ChatState::default();
    state.select_conversation("conv_001");
    let before = counts(&state);
    state.draft = "Sounds good".to_owned();

    assert!(state.send_message(now()));

    let after = counts(&state);
    assert_eq!(after["conv_001"], before["conv_001"] + 1);
    for id in ["conv_002", "conv_003", "conv_004"] {
        assert_eq!(after[id], before[id]);
    }
    let last = state.selected_messages().last().unwrap();
    assert_eq!(last.id, 4);
    assert_eq!(last.sender, "You");
    assert_eq!(last.text, "Sounds good");
    assert!(last.is_sent);
    assert_eq!(last.timestamp, now());
    assert!(state.draft.is_empty());
}

#[test]
fn send_updates_conversation_preview_and_date() {
    let mut state = ChatState::default();
    state.select_conversation("conv_004");
    assert!(state.send_text("See you then", now()));
    let conv = state.selected_conversation().unwrap();
    assert_eq!(conv.text, "See you then");
    assert_eq!(conv.date, date!(2025-06-10));
    assert!(!conv.unread);
}

#[test]
fn blank_send_leaves_all_counts_unchanged() {
    let mut state = ChatState::default();
    state.select_conversation("conv_001");
    let before = counts(&state);
    let seq = state.scroll_seq;
    state.draft = "   \n\t".to_owned();

    assert!(!state.send_message(now()));

    assert_eq!(counts(&state), before);
    assert_eq!(state.scroll_seq, seq);
    assert_eq!(state.draft, "   \n\t");
}

#[test]
fn send_without_selection_is_silent_noop() {
    let mut state = ChatState::default();
    let before = counts(&state);
    state.draft = "hello".to_owned();
    assert!(!state.send_message(now()));
    assert_eq!(counts(&state), before);
    assert_eq!(state.draft, "hello");
}

#[test]
fn send_requests_scroll_to_bottom() {
    let mut state = ChatState::default();
    state.select_conversation("conv_003");
    let seq = state.scroll_seq;
    state.send_text("ping", now());
    assert_eq!(state.scroll_seq, seq + 1);
}

#[test]
fn send_to_conversation_without_history_starts_at_one() {
    let mut state = ChatState::new(crate::net::mock::conversations(), HashMap::new());
    state.select_conversation("conv_003");
    state.send_text("first", now());
    assert_eq!(state.selected_messages().len(), 1);
    assert_eq!(state.selected_messages()[0].id, 1);
}

// =============================================================
// Deleting
// =============================================================

#[test]
fn delete_clears_history_but_keeps_conversation() {
    let mut state = ChatState::default();
    assert!(state.delete_conversation_messages("conv_001"));
    assert!(state.messages_for("conv_001").is_empty());
    assert!(state.find_by_username("mohamedg").is_some());
    assert_eq!(state.messages_for("conv_002").len(), 2);
}

#[test]
fn delete_unknown_conversation_returns_false() {
    let mut state = ChatState::default();
    assert!(!state.delete_conversation_messages("conv_999"));
    assert!(!state.messages.contains_key("conv_999"));
}

#[test]
fn send_after_delete_restarts_ids() {
    let mut state = ChatState::default();
    state.select_conversation("conv_001");
    state.delete_conversation_messages("conv_001");
    state.send_text("fresh start", now());
    assert_eq!(state.selected_messages()[0].id, 1);
}

// =============================================================
// Route sync
// =============================================================

#[test]
fn sync_with_known_handle_selects_it() {
    let mut state = ChatState::default();
    assert_eq!(state.sync_with_route(Some("sarahlee")), RouteSync::Selected("conv_004".to_owned()));
    assert!(!state.selected_conversation().unwrap().unread);
}

#[test]
fn sync_with_current_handle_is_unchanged() {
    let mut state = ChatState::default();
    state.select_conversation("conv_004");
    assert_eq!(state.sync_with_route(Some("sarahlee")), RouteSync::Unchanged);
}

#[test]
fn sync_without_handle_is_unchanged() {
    let mut state = ChatState::default();
    assert_eq!(state.sync_with_route(None), RouteSync::Unchanged);
    assert_eq!(state.sync_with_route(Some("")), RouteSync::Unchanged);
    assert!(state.selected_id.is_none());
}

#[test]
fn sync_with_unknown_handle_is_not_found() {
    let mut state = ChatState::default();
    state.select_conversation("conv_001");
    assert_eq!(state.sync_with_route(Some("nobody")), RouteSync::NotFound);
    assert_eq!(state.selected_id.as_deref(), Some("conv_001"));
}

#[test]
fn redirect_after_unknown_handle_lands_on_empty_selection() {
    let mut state = ChatState::default();
    state.sync_with_route(Some("mohamedg"));
    assert_eq!(state.sync_with_route(Some("nobody")), RouteSync::NotFound);
    assert!(state.clear_selection());
    assert!(state.selected_id.is_none());
    assert!(state.selected_conversation().is_none());
    assert!(state.selected_messages().is_empty());
}

#[test]
fn clear_selection_without_selection_is_noop() {
    let mut state = ChatState::default();
    assert!(!state.clear_selection());
    assert!(state.selected_id.is_none());
}

#[test]
fn clear_selection_keeps_history_and_read_flags() {
    let mut state = ChatState::default();
    state.select_conversation("conv_002");
    let before = counts(&state);
    state.clear_selection();
    assert_eq!(counts(&state), before);
    assert!(!state.conversations.iter().any(|c| c.id == "conv_002" && c.unread));
}

// =============================================================
// Avatars
// =============================================================

#[test]
fn avatar_for_self_uses_self_avatar() {
    assert_eq!(ChatState::default().avatar_for("You"), SELF_AVATAR);
}

#[test]
fn avatar_for_participant_uses_conversation_avatar() {
    assert_eq!(ChatState::default().avatar_for("Jane Smith"), "/assets/avatars/avatar3.svg");
}

#[test]
fn avatar_for_stranger_uses_placeholder() {
    assert_eq!(ChatState::default().avatar_for("Somebody Else"), PLACEHOLDER_AVATAR);
}

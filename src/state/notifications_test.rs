use super::*;
use crate::net::mock;

fn loaded() -> NotificationsState {
    let mut state = NotificationsState::default();
    state.begin_loading();
    state.finish(Ok(mock::notifications()));
    state
}

#[test]
fn begin_loading_sets_flag_and_clears_error() {
    let mut state = NotificationsState { error: Some("old".to_owned()), ..NotificationsState::default() };
    state.begin_loading();
    assert!(state.loading);
    assert!(state.error.is_none());
}

#[test]
fn finish_ok_stores_items() {
    let state = loaded();
    assert!(!state.loading);
    assert_eq!(state.items.len(), 9);
    assert_eq!(state.unread_count(), 5);
}

#[test]
fn finish_err_sets_page_message_and_keeps_items() {
    let mut state = loaded();
    state.begin_loading();
    state.finish(Err(FeedError::Unavailable("notifications".to_owned())));
    assert!(!state.loading);
    assert_eq!(state.error.as_deref(), Some(LOAD_ERROR_MESSAGE));
    assert_eq!(state.items.len(), 9);
}

#[test]
fn unread_only_hides_read_items() {
    let mut state = loaded();
    state.toggle_unread_only();
    let ids: Vec<_> = state.visible().iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "3", "5", "8", "9"]);
    state.toggle_unread_only();
    assert_eq!(state.visible().len(), 9);
}

#[test]
fn mark_all_read_clears_unread() {
    let mut state = loaded();
    assert!(!state.all_visible_read());
    state.mark_all_read();
    assert_eq!(state.unread_count(), 0);
    assert!(state.all_visible_read());
}

#[test]
fn unread_view_is_empty_after_mark_all_read() {
    let mut state = loaded();
    state.toggle_unread_only();
    state.mark_all_read();
    assert!(state.visible().is_empty());
    assert!(state.all_visible_read());
}

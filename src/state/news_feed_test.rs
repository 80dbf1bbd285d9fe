use super::*;
use crate::net::mock;
use time::macros::datetime;

fn now() -> OffsetDateTime {
    datetime!(2025-06-02 08:00 UTC)
}

#[test]
fn finish_ok_stores_fetched_posts() {
    let mut state = NewsFeedState::default();
    state.begin_loading();
    assert!(state.loading);
    state.finish(Ok(mock::news_posts()));
    assert!(!state.loading);
    assert_eq!(state.posts.len(), 3);
}

#[test]
fn finish_err_records_message() {
    let mut state = NewsFeedState::default();
    state.begin_loading();
    state.finish(Err(FeedError::Unavailable("news feed".to_owned())));
    assert!(state.posts.is_empty());
    assert!(state.error.is_some());
}

#[test]
fn submit_post_prepends_current_user_post() {
    let mut state = NewsFeedState::default();
    state.finish(Ok(mock::news_posts()));
    assert!(state.submit_post("Raised our seed round", now()));

    assert_eq!(state.posts.len(), 4);
    let first = &state.posts[0];
    assert_eq!(first.user_name, "Current User");
    assert_eq!(first.user_initial, "CU");
    assert_eq!(first.main_text, "Raised our seed round");
    assert_eq!(first.posted_at, now());
    assert_eq!(state.posts[1].user_name, "Mohamed G");
}

#[test]
fn blank_post_is_ignored() {
    let mut state = NewsFeedState::default();
    assert!(!state.submit_post("  \n", now()));
    assert!(state.posts.is_empty());
}

#[test]
fn composed_posts_get_distinct_ids() {
    let mut state = NewsFeedState::default();
    state.submit_post("one", now());
    state.submit_post("two", now());
    assert_ne!(state.posts[0].id, state.posts[1].id);
}

#[test]
fn posts_composed_during_fetch_stay_on_top() {
    let mut state = NewsFeedState::default();
    state.begin_loading();
    state.submit_post("early bird", now());
    state.finish(Ok(mock::news_posts()));
    assert_eq!(state.posts.len(), 4);
    assert_eq!(state.posts[0].main_text, "early bird");
}

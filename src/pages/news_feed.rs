//! Investor news feed at `/investor/news-feed`.
//!
//! SYSTEM CONTEXT
//! ==============
//! Posts are fetched from the mock feed the first time the page mounts and
//! kept in the shared `RwSignal<NewsFeedState>`, so returning to the page
//! does not refetch. The compose box prepends local posts immediately.

use leptos::prelude::*;

use crate::net::feed::MockFeed;
use crate::net::types::NewsPost;
use crate::state::news_feed::NewsFeedState;
use crate::util::clock::{now_utc, time_ago};

fn load(feed: MockFeed, state: RwSignal<NewsFeedState>) {
    state.update(NewsFeedState::begin_loading);
    leptos::task::spawn_local(async move {
        let result = feed.fetch_news_posts().await;
        state.update(|s| s.finish(result));
    });
}

#[component]
fn PostCard(post: NewsPost) -> impl IntoView {
    let posted = time_ago(post.posted_at, now_utc());
    view! {
        <article class="news-post">
            <header class="news-post__header">
                <span class="news-post__avatar" aria-hidden="true">{post.user_initial}</span>
                <div>
                    <span class="news-post__author">{post.user_name}</span>
                    <time class="news-post__time" datetime=post.posted_at.to_string()>{posted}</time>
                </div>
            </header>
            <p class="news-post__text">{post.main_text}</p>
            {post.side_text.map(|side| view! { <p class="news-post__aside">{side}</p> })}
            {post.image_url.map(|src| view! { <img class="news-post__image" src=src alt="" loading="lazy"/> })}
        </article>
    }
}

#[component]
pub fn NewsFeedPage() -> impl IntoView {
    let state = expect_context::<RwSignal<NewsFeedState>>();
    let feed = expect_context::<MockFeed>();
    let draft = RwSignal::new(String::new());

    let should_load = state.with_untracked(|s| s.posts.is_empty() && !s.loading);
    if should_load {
        load(feed, state);
    }

    let on_post = move |_| {
        let text = draft.get();
        if state.try_update(|s| s.submit_post(&text, now_utc())).unwrap_or_default() {
            draft.set(String::new());
        }
    };

    view! {
        <section class="news-feed">
            <h1>"News Feed"</h1>
            <div class="news-feed__compose">
                <textarea
                    aria-label="Write a post"
                    placeholder="Share an update with your network"
                    prop:value=move || draft.get()
                    on:input=move |ev| draft.set(event_target_value(&ev))
                ></textarea>
                <button
                    class="btn btn--primary"
                    disabled=move || draft.with(|d| d.trim().is_empty())
                    on:click=on_post
                >
                    "Post"
                </button>
            </div>

            <Show when=move || state.with(|s| s.error.is_some())>
                <div class="news-feed__error" role="alert">
                    <p>{move || state.with(|s| s.error.clone().unwrap_or_default())}</p>
                    <button class="btn" on:click=move |_| load(feed, state)>
                        "Retry"
                    </button>
                </div>
            </Show>

            <Show when=move || state.with(|s| s.loading)>
                <p class="page-loading" role="status">"Loading posts..."</p>
            </Show>

            <div class="news-feed__posts">
                {move || {
                    state
                        .with(|s| s.posts.clone())
                        .into_iter()
                        .map(|post| view! { <PostCard post/> })
                        .collect_view()
                }}
            </div>
        </section>
    }
}

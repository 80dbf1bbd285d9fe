//! Notification inbox at `/notifications`.
//!
//! Every mount refetches; a failed fetch shows one page-level alert and
//! keeps whatever was already listed.

use leptos::prelude::*;

use crate::net::feed::MockFeed;
use crate::net::types::{Notification, NotificationKind};
use crate::state::notifications::NotificationsState;
use crate::util::clock::{now_utc, time_ago};

fn kind_icon(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Status => "/assets/icons/status.svg",
        NotificationKind::Message => "/assets/icons/message.svg",
        NotificationKind::Alert => "/assets/icons/alert.svg",
    }
}

#[component]
fn NotificationItem(notification: Notification) -> impl IntoView {
    let when = time_ago(notification.timestamp, now_utc());
    view! {
        <li class="notification" class:notification--unread=!notification.read>
            <img class="notification__icon" src=kind_icon(notification.kind) alt="" aria-hidden="true"/>
            <div class="notification__body">
                <h3>{notification.title}</h3>
                <p>{notification.message}</p>
                <time datetime=notification.timestamp.to_string()>{when}</time>
            </div>
        </li>
    }
}

#[component]
pub fn NotificationsPage() -> impl IntoView {
    let state = expect_context::<RwSignal<NotificationsState>>();
    let feed = expect_context::<MockFeed>();

    state.update(NotificationsState::begin_loading);
    leptos::task::spawn_local(async move {
        let result = feed.fetch_notifications().await;
        state.update(|s| s.finish(result));
    });

    view! {
        <section class="notifications" aria-labelledby="notifications-heading">
            <header class="notifications__header">
                <h1 id="notifications-heading">"Notifications"</h1>
                <label class="notifications__toggle">
                    <input
                        type="checkbox"
                        prop:checked=move || state.with(|s| s.unread_only)
                        on:change=move |_| state.update(NotificationsState::toggle_unread_only)
                    />
                    "Unread only"
                </label>
                <button
                    class="btn"
                    disabled=move || state.with(NotificationsState::all_visible_read)
                    on:click=move |_| state.update(NotificationsState::mark_all_read)
                >
                    "Mark All as Read"
                </button>
            </header>

            <Show when=move || state.with(|s| s.error.is_some())>
                <p class="notifications__error" role="alert">
                    {move || state.with(|s| s.error.clone().unwrap_or_default())}
                </p>
            </Show>

            {move || {
                let (loading, visible) =
                    state.with(|s| (s.loading, s.visible().into_iter().cloned().collect::<Vec<_>>()));
                if loading && visible.is_empty() {
                    return view! { <p class="page-loading" role="status">"Loading notifications..."</p> }
                        .into_any();
                }
                if visible.is_empty() {
                    return view! { <p class="empty-state">"You're all caught up."</p> }.into_any();
                }
                view! {
                    <ul class="notifications__list">
                        {visible.into_iter().map(|notification| view! { <NotificationItem notification/> }).collect_view()}
                    </ul>
                }
                    .into_any()
            }}
        </section>
    }
}

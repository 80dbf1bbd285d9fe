//! Signed-in chrome: the auth gate and the investor header.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route in `app::App` renders through `Protected`, which
//! applies `routes::guard` to the current location and wraps the page in the
//! investor header.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::{use_location, use_navigate};

use crate::net::auth::AuthService;
use crate::routes::{AppRoute, guard};
use crate::state::auth::AuthState;
use crate::state::chat::ChatState;
use crate::state::notifications::NotificationsState;

/// Render `children` only for a signed-in user; otherwise redirect.
#[component]
pub fn Protected(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let location = use_location();
    let navigate = use_navigate();

    Effect::new(move || {
        let route = AppRoute::parse(&location.pathname.get());
        if let Some(target) = auth.with(|a| guard(&route, a)) {
            navigate(&target.path(), NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    view! {
        <InvestorHeader/>
        <main class="investor-layout__content">
            <Show
                when=move || auth.with(AuthState::is_authenticated)
                fallback=move || {
                    view! {
                        <p class="page-loading">
                            {move || if auth.with(|a| a.loading) { "Loading..." } else { "Redirecting to login..." }}
                        </p>
                    }
                }
            >
                {children()}
            </Show>
        </main>
    }
}

/// Top navigation for the investor area.
#[component]
pub fn InvestorHeader() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let chat = expect_context::<RwSignal<ChatState>>();
    let notifications = expect_context::<RwSignal<NotificationsState>>();
    let service = expect_context::<AuthService>();
    let navigate = use_navigate();

    let on_logout = move |_| {
        let service = service.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            auth.update(|a| a.loading = true);
            match service.logout().await {
                Ok(()) => {
                    auth.update(AuthState::apply_logout);
                    navigate(&AppRoute::Login.path(), NavigateOptions::default());
                }
                Err(e) => {
                    log::error!("logout failed: {e}");
                    auth.update(|a| a.loading = false);
                }
            }
        });
    };

    let badge = |count: usize| (count > 0).then(|| view! { <span class="nav-badge">{count}</span> });

    view! {
        <header class="investor-header">
            <A href="/" attr:class="investor-header__brand">"CoreUp"</A>
            <nav class="investor-header__nav" aria-label="Investor navigation">
                <A href="/investor/portfolio">"Portfolio"</A>
                <A href="/investor/matches">"Matches"</A>
                <A href="/investor/news-feed">"News Feed"</A>
                <A href="/investor/search">"Search"</A>
                <A href="/chats">"Messages" {move || badge(chat.with(ChatState::unread_count))}</A>
                <A href="/notifications">
                    "Notifications" {move || badge(notifications.with(NotificationsState::unread_count))}
                </A>
                <A href="/investor/profile/contact/edit">"Profile"</A>
            </nav>
            <span class="investor-header__user">{move || auth.with(|a| a.user_name().unwrap_or_default().to_owned())}</span>
            <button class="btn investor-header__logout" on:click=on_logout disabled=move || auth.with(|a| a.loading)>
                "Logout"
            </button>
        </header>
    }
}

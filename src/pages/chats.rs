//! Chat screens at `/chats` and `/chats/:username`.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both routes render the same two-column layout and the route drives
//! selection. Bare `/chats` always clears it and shows the placeholder; on
//! `/chats/:username` an unknown handle sends the user back to `/chats` with
//! history replaced.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::chat_panel::ChatPanel;
use crate::components::conversation_list::ConversationList;
use crate::routes::AppRoute;
use crate::state::chat::{ChatState, RouteSync};

#[component]
fn ChatLayout() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    view! {
        <div class="chat-layout">
            <ConversationList/>
            <Show
                when=move || chat.with(|c| c.selected_id.is_some())
                fallback=|| {
                    view! {
                        <div class="chat-layout__placeholder">
                            <p>"Select a conversation to start chatting"</p>
                        </div>
                    }
                }
            >
                <ChatPanel/>
            </Show>
        </div>
    }
}

#[component]
pub fn ChatsPage() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    // Runs on every arrival at `/chats`, including the unknown-handle redirect.
    Effect::new(move || {
        if chat.with_untracked(|c| c.selected_id.is_some()) {
            chat.update(|c| {
                c.clear_selection();
            });
        }
    });
    view! { <ChatLayout/> }
}

#[component]
pub fn ChatPage() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let params = use_params_map();
    let navigate = use_navigate();

    Effect::new(move || {
        let username = params.with(|p| p.get("username"));
        let mut outcome = RouteSync::Unchanged;
        chat.update(|c| outcome = c.sync_with_route(username.as_deref()));
        if outcome == RouteSync::NotFound {
            log::warn!("unknown chat handle {username:?}, returning to chats");
            navigate(&AppRoute::Chats.path(), NavigateOptions { replace: true, ..Default::default() });
        }
    });

    view! { <ChatLayout/> }
}

//! Left column of the chats screen.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::chat::ChatState;
use crate::util::clock::short_date;

#[component]
pub fn ConversationList() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let navigate = use_navigate();

    let rows = move || chat.with(|c| (c.conversations.clone(), c.selected_id.clone()));

    view! {
        <aside class="conversation-list" aria-label="Conversations">
            <ul>
                {move || {
                    let (conversations, selected) = rows();
                    conversations
                        .into_iter()
                        .map(|conv| {
                            let is_selected = selected.as_deref() == Some(conv.id.as_str());
                            let id = conv.id.clone();
                            let navigate = navigate.clone();
                            let on_select = move |_| {
                                let mut path = None;
                                chat.update(|c| path = c.select_conversation(&id));
                                if let Some(path) = path {
                                    navigate(&path, NavigateOptions::default());
                                }
                            };
                            view! {
                                <li
                                    class="conversation-list__item"
                                    class:conversation-list__item--selected=is_selected
                                    class:conversation-list__item--unread=conv.unread
                                >
                                    <button type="button" on:click=on_select aria-current=is_selected.to_string()>
                                        <img class="avatar" src=conv.avatar alt=""/>
                                        <span class="conversation-list__name">{conv.name}</span>
                                        <span class="conversation-list__preview">{conv.text}</span>
                                        <time class="conversation-list__date">{short_date(conv.date)}</time>
                                    </button>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
        </aside>
    }
}

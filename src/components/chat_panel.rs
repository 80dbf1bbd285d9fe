//! Message history and compose box for the selected conversation.

use leptos::html::Div;
use leptos::prelude::*;

use crate::state::chat::ChatState;
use crate::util::clock::{clock_time, now_utc};

#[component]
pub fn ChatPanel() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let history_ref = NodeRef::<Div>::new();

    // Scroll to the newest message whenever the store asks for it.
    Effect::new(move || {
        let seq = chat.with(|c| c.scroll_seq);
        #[cfg(feature = "csr")]
        if let Some(el) = history_ref.get() {
            el.set_scroll_top(el.scroll_height());
        }
        log::trace!("scroll request {seq}");
    });

    let on_send = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        chat.update(|c| {
            c.send_message(now_utc());
        });
    };

    let on_clear = move |_| {
        chat.update(|c| {
            if let Some(id) = c.selected_id.clone() {
                c.delete_conversation_messages(&id);
            }
        });
    };

    let header = move || chat.with(|c| c.selected_conversation().map(|conv| (conv.name.clone(), conv.avatar.clone())));

    view! {
        <section class="chat-panel" aria-label="Conversation">
            <header class="chat-panel__header">
                {move || header().map(|(name, avatar)| view! {
                    <img class="avatar" src=avatar alt=""/>
                    <h2>{name}</h2>
                })}
                <button type="button" class="btn chat-panel__clear" on:click=on_clear>"Delete messages"</button>
            </header>
            <div class="chat-panel__history" node_ref=history_ref role="log" aria-live="polite">
                {move || {
                    chat.with(|c| {
                        c.selected_messages()
                            .iter()
                            .map(|m| {
                                let avatar = c.avatar_for(&m.sender).to_owned();
                                view! {
                                    <div class="message" class:message--sent=m.is_sent>
                                        <img class="avatar" src=avatar alt=""/>
                                        <div class="message__bubble">
                                            <span class="message__sender">{m.sender.clone()}</span>
                                            <p class="message__text">{m.text.clone()}</p>
                                            <time class="message__time">{clock_time(m.timestamp)}</time>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()
                    })
                }}
            </div>
            <form class="chat-panel__compose" on:submit=on_send>
                <input
                    type="text"
                    placeholder="Type a message..."
                    aria-label="Message"
                    prop:value=move || chat.with(|c| c.draft.clone())
                    on:input=move |ev| chat.update(|c| c.draft = event_target_value(&ev))
                />
                <button class="btn" type="submit" disabled=move || chat.with(|c| c.draft.trim().is_empty())>
                    "Send"
                </button>
            </form>
        </section>
    }
}

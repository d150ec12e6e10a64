//! Message list for a single conversation.

use leptos::prelude::*;

use crate::net::types::Message;

/// Renders the messages of one conversation in delivery order.
#[component]
pub fn MessageList(messages: Vec<Message>) -> impl IntoView {
    if messages.is_empty() {
        return view! { <p class="message-list__empty">"No messages yet."</p> }.into_any();
    }

    view! {
        <ul class="message-list">
            {messages
                .into_iter()
                .map(|m| {
                    let sender = format!("@{}", m.handle);
                    view! {
                        <li class="message-list__item">
                            <span class="message-list__sender">{sender}</span>
                            <p class="message-list__body">{m.message}</p>
                            <time class="message-list__time">{m.created_at}</time>
                        </li>
                    }
                })
                .collect::<Vec<_>>()}
        </ul>
    }
    .into_any()
}

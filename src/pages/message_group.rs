//! Message-group detail page: one conversation plus a send form.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::message_list::MessageList;
use crate::net::api;
use crate::state::auth::AuthState;

/// Conversation with the handle captured from the route.
/// Redirects to `/signin` without a session.
#[component]
pub fn MessageGroupPage(handle: String) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    Effect::new(move || {
        let state = auth.get();
        if !state.loading && state.user.is_none() {
            navigate("/signin", NavigateOptions::default());
        }
    });

    let title = format!("@{handle}");
    let receiver = handle.clone();

    let messages = LocalResource::new(move || {
        let handle = handle.clone();
        async move { api::fetch_messages(&handle).await }
    });

    let draft = RwSignal::new(String::new());

    let on_send = Callback::new(move |()| {
        let body = draft.get();
        let body = body.trim();
        if body.is_empty() {
            return;
        }

        #[cfg(feature = "csr")]
        {
            let body = body.to_owned();
            let receiver = receiver.clone();
            let messages = messages.clone();
            leptos::task::spawn_local(async move {
                if api::create_message(&receiver, &body).await.is_some() {
                    draft.set(String::new());
                    messages.refetch();
                }
            });
        }

        #[cfg(not(feature = "csr"))]
        let _ = (&receiver, &messages);
    });

    view! {
        <div class="message-group-page">
            <header class="page__header">
                <h1>{title}</h1>
            </header>

            <Suspense fallback=move || view! { <p>"Loading messages..."</p> }>
                {move || messages.get().map(|list| view! { <MessageList messages=list/> })}
            </Suspense>

            <div class="message-form">
                <input
                    class="message-form__input"
                    type="text"
                    placeholder="Send a message"
                    prop:value=move || draft.get()
                    on:input=move |ev| draft.set(event_target_value(&ev))
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            on_send.run(());
                        }
                    }
                />
                <button class="btn btn--primary" on:click=move |_| on_send.run(())>
                    "Send"
                </button>
            </div>
        </div>
    }
}

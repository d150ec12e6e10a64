//! Home feed page listing recent cruds with a post form.

use leptos::prelude::*;

use crate::components::activity_feed::ActivityFeed;
use crate::net::api;

const MESSAGE_MAX_CHARS: usize = 280;

/// Home feed — fetches recent activity on mount and offers a post form.
#[component]
pub fn HomeFeedPage() -> impl IntoView {
    let activities = LocalResource::new(|| api::fetch_home_feed());
    let draft = RwSignal::new(String::new());

    let on_post = move |_| {
        let message = draft.get();
        let message = message.trim();
        if message.is_empty() || message.chars().count() > MESSAGE_MAX_CHARS {
            return;
        }

        #[cfg(feature = "csr")]
        {
            let message = message.to_owned();
            let activities = activities.clone();
            leptos::task::spawn_local(async move {
                if api::create_activity(&message).await.is_some() {
                    draft.set(String::new());
                    activities.refetch();
                }
            });
        }

        #[cfg(not(feature = "csr"))]
        let _ = &activities;
    };

    view! {
        <div class="home-feed-page">
            <header class="page__header">
                <h1>"Home"</h1>
            </header>

            <div class="activity-form">
                <textarea
                    class="activity-form__input"
                    placeholder="What would you like to say?"
                    prop:value=move || draft.get()
                    on:input=move |ev| draft.set(event_target_value(&ev))
                ></textarea>
                <button class="btn btn--primary" on:click=on_post>
                    "Crud"
                </button>
            </div>

            <Suspense fallback=move || view! { <p>"Loading feed..."</p> }>
                {move || {
                    activities.get().map(|list| view! { <ActivityFeed activities=list/> })
                }}
            </Suspense>
        </div>
    }
}

//! User feed page showing one user's cruds.

use leptos::prelude::*;

use crate::components::activity_feed::ActivityFeed;
use crate::net::api;

/// User feed — renders the cruds of the handle captured from the route.
#[component]
pub fn UserFeedPage(handle: String) -> impl IntoView {
    let title = format!("@{handle}");

    let activities = LocalResource::new(move || {
        let handle = handle.clone();
        async move { api::fetch_user_feed(&handle).await }
    });

    view! {
        <div class="user-feed-page">
            <header class="page__header">
                <h1>{title}</h1>
            </header>

            <Suspense fallback=move || view! { <p>"Loading feed..."</p> }>
                {move || {
                    activities.get().map(|list| view! { <ActivityFeed activities=list/> })
                }}
            </Suspense>
        </div>
    }
}

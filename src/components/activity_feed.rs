//! Feed list shared by the home and user feed pages.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::types::Activity;

/// Renders a list of cruds, newest first as delivered by the server.
#[component]
pub fn ActivityFeed(activities: Vec<Activity>) -> impl IntoView {
    if activities.is_empty() {
        return view! { <p class="activity-feed__empty">"Nothing here yet."</p> }.into_any();
    }

    view! {
        <ul class="activity-feed">
            {activities
                .into_iter()
                .map(|a| {
                    let profile = format!("/@{}", a.handle);
                    let handle = format!("@{}", a.handle);
                    let counts = format!("{} likes, {} replies", a.likes_count, a.replies_count);
                    view! {
                        <li class="activity-feed__item">
                            <A href=profile>{handle}</A>
                            <p class="activity-feed__message">{a.message}</p>
                            <span class="activity-feed__counts">{counts}</span>
                            <time class="activity-feed__time">{a.created_at}</time>
                        </li>
                    }
                })
                .collect::<Vec<_>>()}
        </ul>
    }
    .into_any()
}

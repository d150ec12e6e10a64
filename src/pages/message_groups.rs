//! Message-group list page: one entry per conversation partner.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::net::api;
use crate::state::auth::AuthState;

/// Conversation list — links each partner to `/messages/@{handle}`.
/// Redirects to `/signin` without a session.
#[component]
pub fn MessageGroupsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    Effect::new(move || {
        let state = auth.get();
        if !state.loading && state.user.is_none() {
            navigate("/signin", NavigateOptions::default());
        }
    });

    let groups = LocalResource::new(|| api::fetch_message_groups());

    view! {
        <div class="message-groups-page">
            <header class="page__header">
                <h1>"Messages"</h1>
            </header>

            <Suspense fallback=move || view! { <p>"Loading conversations..."</p> }>
                {move || {
                    groups
                        .get()
                        .map(|list| {
                            if list.is_empty() {
                                view! {
                                    <p class="message-groups__empty">"No conversations yet."</p>
                                }
                                    .into_any()
                            } else {
                                view! {
                                    <ul class="message-groups">
                                        {list
                                            .into_iter()
                                            .map(|g| {
                                                let href = format!("/messages/@{}", g.handle);
                                                let label = format!("{} @{}", g.display_name, g.handle);
                                                view! {
                                                    <li class="message-groups__item">
                                                        <A href=href>{label}</A>
                                                    </li>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </ul>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}

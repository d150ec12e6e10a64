//! Fallback page for paths the route table does not know.

use leptos::prelude::*;
use leptos_router::components::A;

/// Rendered by the shell whenever resolution reports no match.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found-page">
            <h1>"Page not found"</h1>
            <p>
                "Nothing lives at this address. " <A href="/">"Back to the feed"</A>
            </p>
        </div>
    }
}

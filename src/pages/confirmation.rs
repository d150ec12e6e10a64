//! Confirmation page: enter the emailed code for a fresh account.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

/// Confirmation-code form for the email captured from the route.
/// Code verification belongs to the auth collaborator; on submit the page
/// moves on to `/signin`.
#[component]
pub fn ConfirmationPage(email: String) -> impl IntoView {
    let prompt = format!("We sent a code to {email}.");
    let code = RwSignal::new(String::new());

    let navigate = use_navigate();

    let on_submit = move |_| {
        if code.get().trim().is_empty() {
            return;
        }
        navigate("/signin", NavigateOptions::default());
    };

    view! {
        <div class="confirmation-page">
            <h1>"Confirm your email"</h1>
            <p class="confirmation-page__prompt">{prompt}</p>

            <label class="form__label">
                "Confirmation code"
                <input
                    class="form__input"
                    type="text"
                    prop:value=move || code.get()
                    on:input=move |ev| code.set(event_target_value(&ev))
                />
            </label>

            <button class="btn btn--primary" on:click=on_submit>
                "Confirm"
            </button>
        </div>
    }
}

//! Password recovery page.

use leptos::prelude::*;

/// Recovery form. The auth collaborator sends the reset email; the page
/// only acknowledges the request.
#[component]
pub fn RecoverPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let sent = RwSignal::new(false);

    let on_submit = move |_| {
        if email.get().contains('@') {
            sent.set(true);
        }
    };

    view! {
        <div class="recover-page">
            <h1>"Recover your password"</h1>

            <Show
                when=move || sent.get()
                fallback=move || {
                    view! {
                        <label class="form__label">
                            "Email"
                            <input
                                class="form__input"
                                type="email"
                                prop:value=move || email.get()
                                on:input=move |ev| email.set(event_target_value(&ev))
                            />
                        </label>
                        <button class="btn btn--primary" on:click=on_submit>
                            "Send recovery email"
                        </button>
                    }
                }
            >
                <p class="recover-page__sent">"Check your email for a reset link."</p>
            </Show>
        </div>
    }
}

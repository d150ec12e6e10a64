//! Signup page: collects account details and hands off to confirmation.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

/// Signup form. Account creation itself belongs to the auth collaborator;
/// on submit the page moves to `/confirm/{email}` for the emailed code.
#[component]
pub fn SignupPage() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let handle = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let navigate = use_navigate();

    let on_submit = move |_| {
        let address = email.get();
        if name.get().trim().is_empty()
            || handle.get().trim().is_empty()
            || password.get().is_empty()
            || !address.contains('@')
        {
            return;
        }
        navigate(&format!("/confirm/{address}"), NavigateOptions::default());
    };

    view! {
        <div class="signup-page">
            <h1>"Sign up to create a Cruddur account"</h1>

            <label class="form__label">
                "Name"
                <input
                    class="form__input"
                    type="text"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
            </label>
            <label class="form__label">
                "Email"
                <input
                    class="form__input"
                    type="email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
            </label>
            <label class="form__label">
                "Username"
                <input
                    class="form__input"
                    type="text"
                    prop:value=move || handle.get()
                    on:input=move |ev| handle.set(event_target_value(&ev))
                />
            </label>
            <label class="form__label">
                "Password"
                <input
                    class="form__input"
                    type="password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
            </label>

            <button class="btn btn--primary" on:click=on_submit>
                "Sign Up"
            </button>

            <p class="form__footer">
                "Already have an account? " <A href="/signin">"Sign in"</A>
            </p>
        </div>
    }
}

//! Signin page: collects credentials and installs the session.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::net::types::CurrentUser;
use crate::state::auth::AuthState;

/// Signin form. Credential exchange belongs to the auth collaborator;
/// this page records the resulting session and returns home.
#[component]
pub fn SigninPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let navigate = use_navigate();

    let on_submit = move |_| {
        let address = email.get();
        let Some((local, _)) = address.split_once('@') else {
            return;
        };
        if local.is_empty() || password.get().is_empty() {
            return;
        }

        let handle = local.to_owned();
        auth.update(|state| {
            state.user = Some(CurrentUser {
                handle: handle.clone(),
                display_name: handle,
            });
            state.loading = false;
        });
        navigate("/", NavigateOptions::default());
    };

    view! {
        <div class="signin-page">
            <h1>"Sign into your Cruddur account"</h1>

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
                "Password"
                <input
                    class="form__input"
                    type="password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
            </label>

            <button class="btn btn--primary" on:click=on_submit>
                "Sign In"
            </button>

            <p class="form__footer">
                <A href="/forgot">"Forgot password?"</A>
            </p>
            <p class="form__footer">
                "Need an account? " <A href="/signup">"Sign up"</A>
            </p>
        </div>
    }
}

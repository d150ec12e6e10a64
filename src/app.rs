//! Root application component: auth bootstrap, contexts, and route dispatch.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::components::Router;
use leptos_router::hooks::use_location;

use crate::auth::{self, CognitoAuth};
use crate::pages::confirmation::ConfirmationPage;
use crate::pages::home_feed::HomeFeedPage;
use crate::pages::message_group::MessageGroupPage;
use crate::pages::message_groups::MessageGroupsPage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::recover::RecoverPage;
use crate::pages::signin::SigninPage;
use crate::pages::signup::SignupPage;
use crate::pages::user_feed::UserFeedPage;
use crate::routes::{self, Page, RouteMatch};
use crate::state::auth::AuthState;

/// Root application component.
///
/// Configures the authentication collaborator once, provides the session
/// context, and mounts the router shell. Auth configuration and route
/// resolution are independent; neither waits on the other.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // One-time bootstrap of the auth collaborator. A failure is reported
    // and the shell keeps rendering; signed-out flows still work.
    if let Err(err) = auth::configure_auth(&CognitoAuth) {
        #[cfg(feature = "csr")]
        log::error!("auth configuration failed: {err}");
        #[cfg(not(feature = "csr"))]
        let _ = err;
    }

    let auth_state = RwSignal::new(AuthState::default());
    provide_context(auth_state);

    view! {
        <Stylesheet id="leptos" href="/pkg/cruddur.css"/>
        <Title text="Cruddur"/>

        <Router>
            <main class="app-shell">
                <RouteDispatch/>
            </main>
        </Router>
    }
}

/// Resolves the current location against the route table and renders the
/// matched page, or the not-found fallback on `NoMatch`.
#[component]
fn RouteDispatch() -> impl IntoView {
    let location = use_location();
    move || match routes::resolve(&location.pathname.get()) {
        Ok(matched) => page_view(&matched),
        Err(_) => view! { <NotFoundPage/> }.into_any(),
    }
}

/// Maps a resolved page identity to its component, forwarding captures.
fn page_view(matched: &RouteMatch) -> AnyView {
    let capture = |name: &str| matched.param(name).unwrap_or_default().to_owned();
    match matched.page {
        Page::HomeFeed => view! { <HomeFeedPage/> }.into_any(),
        Page::UserFeed => {
            let handle = capture("handle");
            view! { <UserFeedPage handle=handle/> }.into_any()
        }
        Page::MessageGroups => view! { <MessageGroupsPage/> }.into_any(),
        Page::MessageGroup => {
            let handle = capture("handle");
            view! { <MessageGroupPage handle=handle/> }.into_any()
        }
        Page::Signup => view! { <SignupPage/> }.into_any(),
        Page::Signin => view! { <SigninPage/> }.into_any(),
        Page::Confirmation => {
            let email = capture("email");
            view! { <ConfirmationPage email=email/> }.into_any()
        }
        Page::Recover => view! { <RecoverPage/> }.into_any(),
    }
}

use super::*;

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_no_user() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(!state.signed_in());
}

#[test]
fn auth_state_default_not_loading() {
    let state = AuthState::default();
    assert!(!state.loading);
}

#[test]
fn auth_state_signed_in_with_user() {
    let state = AuthState {
        user: Some(CurrentUser {
            handle: "alice".to_owned(),
            display_name: "Alice".to_owned(),
        }),
        loading: false,
    };
    assert!(state.signed_in());
}

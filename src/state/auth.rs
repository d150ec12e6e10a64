#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::CurrentUser;

/// Session state tracking the signed-in user and loading status.
///
/// Provided as an `RwSignal` context from the root component; pages that
/// require a session redirect to `/signin` when `user` stays empty.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<CurrentUser>,
    pub loading: bool,
}

impl AuthState {
    /// True once a user session is present.
    pub fn signed_in(&self) -> bool {
        self.user.is_some()
    }
}

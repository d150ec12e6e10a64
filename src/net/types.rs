//! Wire types for the crud backend's JSON API.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A single crud (post) in a feed.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Activity {
    pub uuid: String,
    pub handle: String,
    pub message: String,
    pub created_at: String,
    #[serde(default)]
    pub expires_at: Option<String>,
    #[serde(default)]
    pub likes_count: i64,
    #[serde(default)]
    pub replies_count: i64,
}

/// One conversation partner in the message-group list.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct MessageGroup {
    pub uuid: String,
    pub handle: String,
    pub display_name: String,
}

/// A direct message within a conversation.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Message {
    pub uuid: String,
    pub handle: String,
    pub message: String,
    pub created_at: String,
}

/// The signed-in user as the rest of the UI sees it.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct CurrentUser {
    pub handle: String,
    pub display_name: String,
}

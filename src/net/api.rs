//! REST helpers for the crud backend.
//!
//! Browser builds (`csr`): real HTTP calls via `gloo-net`.
//! Native builds: inert stubs so pages compile and tests run without a
//! network.
//!
//! ERROR HANDLING
//! ==============
//! List fetchers degrade to an empty list and creators to `None`, so a
//! failed request renders an empty state instead of crashing the page.

#![allow(clippy::unused_async)]

use super::types::{Activity, Message, MessageGroup};

/// Fetch the home feed from `/api/activities/home`.
pub async fn fetch_home_feed() -> Vec<Activity> {
    #[cfg(feature = "csr")]
    {
        fetch_list("/api/activities/home").await
    }
    #[cfg(not(feature = "csr"))]
    {
        Vec::new()
    }
}

/// Fetch one user's feed from `/api/activities/@{handle}`.
pub async fn fetch_user_feed(handle: &str) -> Vec<Activity> {
    #[cfg(feature = "csr")]
    {
        fetch_list(&format!("/api/activities/@{handle}")).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = handle;
        Vec::new()
    }
}

/// Fetch the conversation list from `/api/message_groups`.
pub async fn fetch_message_groups() -> Vec<MessageGroup> {
    #[cfg(feature = "csr")]
    {
        fetch_list("/api/message_groups").await
    }
    #[cfg(not(feature = "csr"))]
    {
        Vec::new()
    }
}

/// Fetch one conversation from `/api/messages/@{handle}`.
pub async fn fetch_messages(handle: &str) -> Vec<Message> {
    #[cfg(feature = "csr")]
    {
        fetch_list(&format!("/api/messages/@{handle}")).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = handle;
        Vec::new()
    }
}

/// Post a new crud via `POST /api/activities`. The server enforces the
/// 280-character cap and applies its default TTL.
pub async fn create_activity(message: &str) -> Option<Activity> {
    #[cfg(feature = "csr")]
    {
        post_json("/api/activities", &serde_json::json!({ "message": message })).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = message;
        None
    }
}

/// Send a direct message via `POST /api/messages`.
pub async fn create_message(receiver_handle: &str, message: &str) -> Option<Message> {
    #[cfg(feature = "csr")]
    {
        post_json(
            "/api/messages",
            &serde_json::json!({
                "user_receiver_handle": receiver_handle,
                "message": message,
            }),
        )
        .await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (receiver_handle, message);
        None
    }
}

#[cfg(feature = "csr")]
async fn fetch_list<T: serde::de::DeserializeOwned>(url: &str) -> Vec<T> {
    let Ok(resp) = gloo_net::http::Request::get(url).send().await else {
        return Vec::new();
    };
    if !resp.ok() {
        return Vec::new();
    }
    resp.json::<Vec<T>>().await.unwrap_or_default()
}

#[cfg(feature = "csr")]
async fn post_json<T: serde::de::DeserializeOwned>(
    url: &str,
    body: &serde_json::Value,
) -> Option<T> {
    let resp = gloo_net::http::Request::post(url)
        .json(body)
        .ok()?
        .send()
        .await
        .ok()?;
    if !resp.ok() {
        return None;
    }
    resp.json::<T>().await.ok()
}

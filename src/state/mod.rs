//! Reactive application state provided via Leptos context.

pub mod auth;

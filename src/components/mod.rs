//! Shared render components used across pages.

pub mod activity_feed;
pub mod message_list;

//! Page components bound by the route table.

pub mod confirmation;
pub mod home_feed;
pub mod message_group;
pub mod message_groups;
pub mod not_found;
pub mod recover;
pub mod signin;
pub mod signup;
pub mod user_feed;

//! Network layer: REST helpers and the wire types they decode.

pub mod api;
pub mod types;

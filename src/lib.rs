//! Server directory backend.
//!
//! Serves a listing of community servers that clients filter by category, by the
//! caller's memberships, by id, and by quantity.

pub mod model;
pub mod server;

//! Data transfer objects shared by every API endpoint.
//!
//! These types define the JSON wire format. Server-side domain models convert into them
//! at the controller boundary via `into_dto()`.

pub mod api;
pub mod category;
pub mod server;

//! Business logic layer.
//!
//! Services sit between controllers and repositories: they load domain models through
//! the data layer and apply the rules that are not plain persistence, such as the
//! server listing filters and the category deletion guard.

pub mod category;
pub mod server;

#[cfg(test)]
mod test;

//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models (or joined entity bundles) to keep the service layer free of query code.

pub mod category;
pub mod channel;
pub mod server;
pub mod user;

#[cfg(test)]
mod test;

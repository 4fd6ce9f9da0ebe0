//! HTTP request handlers.
//!
//! Controllers extract request data, resolve the caller, call a service, and convert the
//! resulting domain models into DTOs.

pub mod category;
pub mod server;

#[cfg(test)]
mod test;

//! Request guards and session wrappers.
//!
//! - `session` - Type-safe access to the authenticated user id stored in the session
//! - `auth` - Resolves the calling identity used by identity-scoped listing filters

pub mod auth;
pub mod session;

#[cfg(test)]
mod test;

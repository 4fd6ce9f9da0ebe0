//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories take the ids of the rows they depend on, so
//! tests stay explicit about foreign key relationships.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::create_user(&db).await?;
//!     let category = factory::create_category(&db).await?;
//!
//!     // Create with all dependencies
//!     let (owner, category, server) =
//!         factory::helpers::create_server_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let server = factory::server::ServerFactory::new(&db, owner.id, category.id)
//!     .name("Rust Users")
//!     .members(&[alice.id, bob.id])
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `category` - Create category entities
//! - `server` - Create server entities and their memberships
//! - `channel` - Create channel entities
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod category;
pub mod channel;
pub mod helpers;
pub mod server;
pub mod user;

pub use category::create_category;
pub use channel::create_channel;
pub use server::create_server;
pub use user::create_user;

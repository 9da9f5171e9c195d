//! Factory methods for creating test data.
//!
//! Factories insert rows with sensible defaults, reducing boilerplate in tests.
//! Each entity has a `Factory` builder for customization and a `create_*`
//! convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::create_user(&db).await?;
//! let gaming = factory::create_category_named(&db, "gaming").await?;
//! let server = factory::helpers::create_server_with_members(&db, gaming.id, &[user.id]).await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `category` - Create category entities
//! - `server` - Create server entities
//! - `server_member` - Create membership rows
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod category;
pub mod helpers;
pub mod server;
pub mod server_member;
pub mod user;

pub use category::{create_category, create_category_named};
pub use server::create_server;
pub use server_member::{create_member, create_members};
pub use user::create_user;

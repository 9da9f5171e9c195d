//! djchat Test Utils
//!
//! Shared testing utilities for the djchat backend. Tests get an in-memory SQLite
//! database with exactly the tables they ask for, an optional session backed by the
//! same database, and factories for inserting users, categories, servers and
//! memberships with sensible defaults.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing database connection and session
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Database-backed builders for test rows
//! - **fixture**: In-memory entity models that never touch the database
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn lists_servers() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new().with_server_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let (owner, category, server) = factory::helpers::create_server_with_dependencies(db).await?;
//!     // ...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;

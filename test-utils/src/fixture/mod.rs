//! Test fixtures providing reusable test data without database insertion.
//!
//! Unlike factories, fixtures do NOT insert data into the database. Use them for
//! unit tests of pure conversion and filtering code.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let server = fixture::server::entity();
//! let category = fixture::category::entity();
//! ```

pub mod category;
pub mod server;

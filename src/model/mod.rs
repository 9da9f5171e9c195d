//! Data transfer objects exchanged over the HTTP API.
//!
//! These types define the JSON shapes of requests and responses. Server-side
//! domain models live in `crate::server::model` and convert into these at the
//! controller boundary.

pub mod api;
pub mod server;
pub mod user;

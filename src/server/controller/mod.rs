//! HTTP request handlers.
//!
//! Controllers resolve the caller, convert DTOs to domain parameters, call into
//! the service layer and convert the results back to DTOs.

pub mod auth;
pub mod server;

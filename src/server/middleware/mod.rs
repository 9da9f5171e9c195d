//! Request middleware helpers for sessions and authentication.

pub mod auth;
pub mod session;

//! Service layer for business logic and orchestration.
//!
//! Services sit between the controller (API) layer and the data (repository) layer.
//! They work with domain models rather than DTOs or entity models and coordinate
//! repository calls with external services such as the Discord API.

pub mod auth;
pub mod server;

#[cfg(test)]
mod test;

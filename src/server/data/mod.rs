//! Database repository layer.
//!
//! Repositories use SeaORM entity models internally and return domain models so the
//! service layer never sees database types. All queries go through these structs.

pub mod server;
pub mod user;

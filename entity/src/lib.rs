//! SeaORM entities for the djchat schema.
//!
//! Tables are created by the `migration` crate; the entities here mirror those
//! tables column for column. Test code builds the same schema straight from these
//! entities through `test_utils::builder::TestBuilder`.

pub mod prelude;

pub mod category;
pub mod server;
pub mod server_member;
pub mod user;

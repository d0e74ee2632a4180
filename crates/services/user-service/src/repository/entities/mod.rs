//! SeaORM entities for the user tables.

pub mod role;
pub mod user;
pub mod user_role;

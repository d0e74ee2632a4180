//! Repository layer for data access.

pub mod entities;
mod user_store;

#[cfg(any(test, feature = "test-utils"))]
pub use user_store::MockUserStore;
pub use user_store::{UserStore, UserStoreImpl};

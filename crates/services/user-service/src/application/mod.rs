//! Application layer - entry point used by the delivery adapters.

mod user_facade;

pub use user_facade::UserFacade;

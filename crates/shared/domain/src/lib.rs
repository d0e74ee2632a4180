//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! Entities establish their invariants at construction time; persistence
//! lives in the user-service crate and rebuilds entities via `restore`.

pub mod command;
pub mod constants;
pub mod error;
pub mod role;
pub mod token;
pub mod user;

pub use command::{RegisterUser, SaveRole};
pub use constants::*;
pub use error::{DomainError, DomainResult};
pub use role::Role;
pub use token::{RandomTokenGenerator, TokenGenerator};
pub use user::{User, UserProfile};

//! Common utilities shared across the workspace crates.
//!
//! This crate provides:
//! - Unified error handling with HTTP conversion
//! - The `CommonResponse` envelope wrapping every HTTP body
//! - Configuration structures

pub mod config;
pub mod error;
pub mod response;

pub use config::*;
pub use error::{AppError, AppResult};
pub use response::{CommonResponse, ErrorCode, ResultKind};

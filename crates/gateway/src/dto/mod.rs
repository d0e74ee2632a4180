//! Request/response bodies and their conversion to domain commands.

pub mod mapper;
pub mod user_dto;

pub use user_dto::{RegisterResponse, RegisterUserRequest};

//! Conversions between HTTP bodies and domain values.
//!
//! The `of_*` functions lift the plain conversions over `Option` so an
//! absent input always maps to an absent output.

use domain::RegisterUser;

use super::user_dto::{RegisterResponse, RegisterUserRequest};

impl From<RegisterUserRequest> for RegisterUser {
    fn from(request: RegisterUserRequest) -> Self {
        RegisterUser {
            username: request.username,
        }
    }
}

impl From<String> for RegisterResponse {
    fn from(user_token: String) -> Self {
        RegisterResponse { user_token }
    }
}

pub fn of_request(request: Option<RegisterUserRequest>) -> Option<RegisterUser> {
    request.map(RegisterUser::from)
}

pub fn of_token(user_token: Option<String>) -> Option<RegisterResponse> {
    user_token.map(RegisterResponse::from)
}

//! User facade - thin application boundary over `UserService`.
//!
//! HTTP handlers and the CLI talk to this type only, so use cases that
//! span several services have a single place to be composed.

use std::sync::Arc;

use common::AppResult;
use domain::{RegisterUser, SaveRole};

use crate::service::UserService;

#[derive(Clone)]
pub struct UserFacade {
    user_service: Arc<dyn UserService>,
}

impl UserFacade {
    pub fn new(user_service: Arc<dyn UserService>) -> Self {
        Self { user_service }
    }

    /// Register a user, returning the new user token
    pub async fn register_user(&self, command: RegisterUser) -> AppResult<String> {
        self.user_service.register_user(command).await
    }

    pub async fn save_role(&self, command: SaveRole) -> AppResult<()> {
        self.user_service.save_role(command).await
    }
}

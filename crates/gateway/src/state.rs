//! Application state for dependency injection.

use std::sync::Arc;

use user_service_lib::{Database, UserFacade};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub user_facade: Arc<UserFacade>,
    pub database: Database,
}

impl AppState {
    /// Create new app state.
    pub fn new(user_facade: Arc<UserFacade>, database: Database) -> Self {
        Self {
            user_facade,
            database,
        }
    }
}

//! User service configuration.

use common::DatabaseConfig;

/// User service configuration.
#[derive(Debug, Clone, Default)]
pub struct UserServiceConfig {
    /// Connection pool settings for the user tables
    pub database: DatabaseConfig,
}

impl UserServiceConfig {
    /// Load configuration from environment variables.
    ///
    /// `USER_SERVICE_DATABASE_URL` takes precedence over `DATABASE_URL`.
    pub fn from_env() -> Self {
        Self {
            database: DatabaseConfig::from_env("USER_SERVICE_DATABASE_URL"),
        }
    }
}

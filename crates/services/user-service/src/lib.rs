//! User Service Library
//!
//! User registration and role management on top of SeaORM. The gateway
//! embeds this crate directly and reaches it through [`UserFacade`].

pub mod application;
pub mod config;
pub mod infra;
pub mod repository;
pub mod service;
pub mod unit_of_work;

use std::sync::Arc;

use domain::{RandomTokenGenerator, SaveRole};
use tracing::info;

use crate::config::UserServiceConfig;
use crate::service::UserManager;
use crate::unit_of_work::Persistence;

pub use crate::application::UserFacade;
pub use crate::infra::Database;

/// Wire the store, unit of work, service and facade over a connected database.
pub fn build_facade(db: &Database) -> UserFacade {
    let uow = Arc::new(Persistence::new(db.get_connection()));
    let user_service = Arc::new(UserManager::new(uow, Arc::new(RandomTokenGenerator)));
    UserFacade::new(user_service)
}

/// Run migrations (for CLI commands).
pub async fn run_migrations(action: MigrateAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = UserServiceConfig::from_env();
    let db = Database::connect_without_migrations(&config.database).await?;

    match action {
        MigrateAction::Up => {
            db.run_migrations().await?;
            info!("Migrations applied successfully");
        }
        MigrateAction::Down => {
            db.rollback_migration().await?;
            info!("Rolled back last migration");
        }
        MigrateAction::Status => {
            let status = db.migration_status().await?;
            for (name, applied) in status {
                let marker = if applied { "[x]" } else { "[ ]" };
                println!("{} {}", marker, name);
            }
        }
        MigrateAction::Fresh => {
            db.fresh_migrations().await?;
            info!("Database reset and migrations applied");
        }
    }

    Ok(())
}

/// Store a role by name (for CLI commands).
pub async fn create_role(
    config: &UserServiceConfig,
    name: String,
) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::connect(&config.database).await?;

    build_facade(&db).save_role(SaveRole::new(name)).await?;
    Ok(())
}

/// Migration action type.
#[derive(Debug, Clone, Copy)]
pub enum MigrateAction {
    Up,
    Down,
    Status,
    Fresh,
}

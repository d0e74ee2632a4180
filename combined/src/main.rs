//! Boothoney API binary - HTTP server plus database and role maintenance.

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gateway_lib::config::GatewayConfig;
use user_service_lib::config::UserServiceConfig;

#[derive(Parser)]
#[command(name = "boothoney")]
#[command(about = "User registration API")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Overrides GATEWAY_HOST
        #[arg(long)]
        host: Option<String>,
        /// Overrides GATEWAY_PORT
        #[arg(long)]
        port: Option<u16>,
    },
    /// Database migration commands
    Migrate {
        #[command(subcommand)]
        action: MigrateAction,
    },
    /// Role maintenance commands
    Roles {
        #[command(subcommand)]
        action: RoleAction,
    },
}

#[derive(Subcommand, Clone, Copy)]
enum MigrateAction {
    /// Run pending migrations
    Up,
    /// Rollback last migration
    Down,
    /// Show migration status
    Status,
    /// Reset database and run all migrations
    Fresh,
}

#[derive(Subcommand)]
enum RoleAction {
    /// Store a new role
    Create {
        /// Role name, e.g. "admin"
        name: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { host, port } => {
            let config = with_overrides(GatewayConfig::from_env(), host, port);
            info!("Allowing browser origin {}", config.cors.allowed_origin);

            gateway_lib::run(config).await?;
        }
        Commands::Migrate { action } => {
            let migrate_action = match action {
                MigrateAction::Up => user_service_lib::MigrateAction::Up,
                MigrateAction::Down => user_service_lib::MigrateAction::Down,
                MigrateAction::Status => user_service_lib::MigrateAction::Status,
                MigrateAction::Fresh => user_service_lib::MigrateAction::Fresh,
            };

            user_service_lib::run_migrations(migrate_action).await?;
        }
        Commands::Roles { action } => match action {
            RoleAction::Create { name } => {
                let config = UserServiceConfig::from_env();
                user_service_lib::create_role(&config, name.clone()).await?;
                info!("Role '{}' created", name);
            }
        },
    }

    Ok(())
}

/// Apply command-line flags on top of the environment configuration.
fn with_overrides(
    mut config: GatewayConfig,
    host: Option<String>,
    port: Option<u16>,
) -> GatewayConfig {
    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }
    config
}

#[cfg(test)]
mod tests {
    use common::CorsConfig;

    use super::*;

    fn base() -> GatewayConfig {
        GatewayConfig {
            host: "0.0.0.0".to_string(),
            port: 5000,
            cors: CorsConfig::default(),
        }
    }

    #[test]
    fn test_flags_override_environment() {
        let cli = Cli::try_parse_from([
            "boothoney", "serve", "--host", "127.0.0.1", "--port", "8080",
        ])
        .unwrap();
        let Commands::Serve { host, port } = cli.command else {
            panic!("expected serve command");
        };

        let config = with_overrides(base(), host, port);

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn test_missing_flags_keep_environment_values() {
        let cli = Cli::try_parse_from(["boothoney", "serve"]).unwrap();
        let Commands::Serve { host, port } = cli.command else {
            panic!("expected serve command");
        };

        let config = with_overrides(base(), host, port);

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 5000);
        assert_eq!(config.cors.allowed_origin, "http://localhost:3000");
    }
}

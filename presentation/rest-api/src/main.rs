use dotenvy::dotenv;

mod api {
    pub mod error;
    pub mod money;
    pub mod security;
    pub mod tags;
    pub mod health {
        pub mod routes;
    }
    pub mod auth {
        pub mod dto;
        pub mod routes;
    }
    pub mod user {
        pub mod dto;
        pub mod error_mapper;
        pub mod routes;
    }
    pub mod product {
        pub mod dto;
        pub mod error_mapper;
        pub mod routes;
    }
    pub mod cart {
        pub mod dto;
        pub mod error_mapper;
        pub mod routes;
    }
    pub mod address {
        pub mod dto;
        pub mod error_mapper;
        pub mod routes;
    }
    pub mod order {
        pub mod dto;
        pub mod error_mapper;
        pub mod routes;
    }
}
mod config {
    pub mod admin_config;
    pub mod app_config;
    pub mod cors_config;
    pub mod database_config;
    pub mod error;
    pub mod jwt_config;
    pub mod server_config;
}
mod setup {
    pub mod dependency_injection;
    pub mod server;
}

use config::{app_config::AppConfig, database_config};
use setup::{dependency_injection::DependencyContainer, server::Server};

/// Storefront REST API entry point.
///
/// - config/: environment-driven settings (server, CORS, database, JWT, admin bootstrap)
/// - setup/: dependency wiring and the poem server
/// - api/: OpenAPI routes, DTOs and error mappers per resource
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 2. Load environment variables
    dotenv().ok();

    // 3. Load configuration
    let config = AppConfig::from_env()?;

    // 4. Initialize database and apply migrations
    let pool = database_config::init_database(&config.database).await?;

    // 5. Wire dependencies and bootstrap the admin account
    let container = DependencyContainer::new(pool, &config.jwt)?;
    container.bootstrap_admin(config.admin.as_ref()).await?;

    // 6. Run server
    Server::run(config, container).await?;

    Ok(())
}

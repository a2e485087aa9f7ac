use persistence::db::{DatabaseConfig, create_postgres_pool, run_migrations};
use sqlx::PgPool;

use super::error::ConfigError;

const DEFAULT_MIGRATIONS_PATH: &str = "infrastructure/persistence/migrations";

#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub pool: DatabaseConfig,
    pub migrations_path: String,
}

impl DatabaseSettings {
    /// Environment variables:
    /// - DATABASE_URL: PostgreSQL connection string (required)
    /// - DATABASE_MAX_CONNECTIONS: pool size (default: 5)
    /// - MIGRATIONS_PATH: directory with SQL migrations
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let url = lookup("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;
        let mut pool = DatabaseConfig::new(url);

        if let Some(raw) = lookup("DATABASE_MAX_CONNECTIONS") {
            let max = raw.parse::<u32>().map_err(|_| ConfigError::Invalid {
                name: "DATABASE_MAX_CONNECTIONS",
                value: raw,
            })?;
            pool = pool.with_max_connections(max);
        }

        Ok(Self {
            pool,
            migrations_path: lookup("MIGRATIONS_PATH")
                .unwrap_or_else(|| DEFAULT_MIGRATIONS_PATH.to_string()),
        })
    }
}

/// Connects the pool and applies pending migrations.
pub async fn init_database(settings: &DatabaseSettings) -> anyhow::Result<PgPool> {
    let pool = create_postgres_pool(&settings.pool).await?;
    run_migrations(&pool, &settings.migrations_path).await?;
    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_require_database_url() {
        let result = DatabaseSettings::from_lookup(|_| None);
        assert_eq!(result.unwrap_err(), ConfigError::Missing("DATABASE_URL"));
    }

    #[test]
    fn should_read_pool_size_and_migrations_path() {
        let settings = DatabaseSettings::from_lookup(|key| match key {
            "DATABASE_URL" => Some("postgres://shop@localhost/shop".to_string()),
            "DATABASE_MAX_CONNECTIONS" => Some("12".to_string()),
            _ => None,
        })
        .unwrap();

        assert_eq!(settings.pool.max_connections, 12);
        assert_eq!(settings.migrations_path, DEFAULT_MIGRATIONS_PATH);
    }
}

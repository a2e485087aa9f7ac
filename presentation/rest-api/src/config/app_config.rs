use auth::JwtConfig;
use poem::middleware::Cors;

use super::admin_config::AdminConfig;
use super::cors_config;
use super::database_config::DatabaseSettings;
use super::error::ConfigError;
use super::jwt_config;
use super::server_config::ServerConfig;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub database: DatabaseSettings,
    pub jwt: JwtConfig,
    pub admin: Option<AdminConfig>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            server: ServerConfig::from_lookup(&lookup)?,
            cors: cors_config::init_cors(&cors_config::allowed_origins(&lookup)),
            database: DatabaseSettings::from_lookup(&lookup)?,
            jwt: jwt_config::from_lookup(&lookup)?,
            admin: AdminConfig::from_lookup(&lookup),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_report_first_missing_required_variable() {
        let result = AppConfig::from_lookup(|key| {
            (key == "DATABASE_URL").then(|| "postgres://localhost/shop".to_string())
        });

        assert_eq!(result.err(), Some(ConfigError::Missing("JWT_SECRET")));
    }
}

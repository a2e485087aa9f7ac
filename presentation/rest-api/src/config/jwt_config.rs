use auth::{JwtConfig, MIN_SECRET_LENGTH};
use chrono::Duration;

use super::error::ConfigError;

const DEFAULT_EXPIRATION_SECONDS: i64 = 86_400;

/// Environment variables:
/// - JWT_SECRET: HS256 signing secret (required, at least 32 bytes)
/// - JWT_EXPIRATION_SECONDS: token lifetime (default: 86400)
pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<JwtConfig, ConfigError> {
    let secret = lookup("JWT_SECRET").ok_or(ConfigError::Missing("JWT_SECRET"))?;
    if secret.len() < MIN_SECRET_LENGTH {
        return Err(ConfigError::SecretTooShort(MIN_SECRET_LENGTH));
    }

    let seconds = match lookup("JWT_EXPIRATION_SECONDS") {
        Some(raw) => match raw.parse::<i64>() {
            Ok(value) if value > 0 => value,
            _ => {
                return Err(ConfigError::Invalid {
                    name: "JWT_EXPIRATION_SECONDS",
                    value: raw,
                });
            }
        },
        None => DEFAULT_EXPIRATION_SECONDS,
    };

    Ok(JwtConfig {
        secret,
        expiration: Duration::seconds(seconds),
    })
}

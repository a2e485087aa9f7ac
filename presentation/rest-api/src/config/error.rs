use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("config.missing_variable: {0}")]
    Missing(&'static str),
    #[error("config.invalid_variable: {name}={value}")]
    Invalid { name: &'static str, value: String },
    #[error("config.jwt_secret_too_short: at least {0} bytes required")]
    SecretTooShort(usize),
}

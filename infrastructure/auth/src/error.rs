use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("auth.secret_too_short")]
    SecretTooShort,
    #[error("auth.invalid_token: {0}")]
    InvalidToken(String),
    #[error("auth.invalid_subject")]
    InvalidSubject,
    #[error("auth.unknown_role: {0}")]
    UnknownRole(String),
    #[error("auth.token_encoding: {0}")]
    Encoding(String),
}

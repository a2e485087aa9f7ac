#[derive(Debug, thiserror::Error)]
pub enum UserError {
    #[error("user.invalid_email")]
    InvalidEmail,
    #[error("user.first_name_empty")]
    FirstNameEmpty,
    #[error("user.last_name_empty")]
    LastNameEmpty,
    #[error("user.password_too_short")]
    PasswordTooShort,
    #[error("user.email_already_registered")]
    EmailAlreadyRegistered,
    #[error("user.invalid_credentials")]
    InvalidCredentials,
    #[error("user.account_disabled")]
    AccountDisabled,
    #[error("user.not_found")]
    NotFound,
    #[error("user.password_hashing: {0}")]
    PasswordHashing(String),
    #[error("user.token_issuing: {0}")]
    TokenIssuing(String),
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}

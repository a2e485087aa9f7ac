use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::user::errors::UserError;
use crate::domain::user::repository::UserRepository;
use crate::domain::user::services::{AuthSession, PasswordHasher, TokenIssuer};
use crate::domain::user::use_cases::login::{LoginParams, LoginUseCase};
use crate::domain::user::value_objects::Email;

pub struct LoginUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub password_hasher: Arc<dyn PasswordHasher>,
    pub token_issuer: Arc<dyn TokenIssuer>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl LoginUseCase for LoginUseCaseImpl {
    async fn execute(&self, params: LoginParams) -> Result<AuthSession, UserError> {
        // A malformed email cannot belong to anyone.
        let email = Email::parse(&params.email).map_err(|_| UserError::InvalidCredentials)?;

        let user = self
            .repository
            .find_by_email(&email)
            .await?
            .ok_or(UserError::InvalidCredentials)?;

        if !self
            .password_hasher
            .verify(&params.password, &user.password_hash)?
        {
            self.logger
                .warn(&format!("Failed login attempt for {}", email));
            return Err(UserError::InvalidCredentials);
        }

        if !user.enabled {
            return Err(UserError::AccountDisabled);
        }

        let token = self.token_issuer.issue(&user)?;
        self.logger.info(&format!("User logged in: {}", user.id));
        Ok(AuthSession::new(token, user))
    }
}

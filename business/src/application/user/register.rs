use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::shared::identity::Role;
use crate::domain::user::errors::UserError;
use crate::domain::user::model::{NewUserProps, User};
use crate::domain::user::repository::UserRepository;
use crate::domain::user::services::{AuthSession, PasswordHasher, TokenIssuer};
use crate::domain::user::use_cases::register::{RegisterUserParams, RegisterUserUseCase};
use crate::domain::user::value_objects::{validate_password, Email};

pub struct RegisterUserUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub password_hasher: Arc<dyn PasswordHasher>,
    pub token_issuer: Arc<dyn TokenIssuer>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RegisterUserUseCase for RegisterUserUseCaseImpl {
    async fn execute(&self, params: RegisterUserParams) -> Result<AuthSession, UserError> {
        let email = Email::parse(&params.email)?;
        validate_password(&params.password)?;

        if self.repository.exists_by_email(&email).await? {
            return Err(UserError::EmailAlreadyRegistered);
        }

        let password_hash = self.password_hasher.hash(&params.password)?;
        let user = User::new(NewUserProps {
            email,
            password_hash,
            first_name: params.first_name,
            last_name: params.last_name,
            roles: vec![Role::User],
        })?;

        // A concurrent registration can still win the unique index.
        self.repository.save(&user).await.map_err(|e| match e {
            RepositoryError::Duplicated => UserError::EmailAlreadyRegistered,
            other => UserError::Repository(other),
        })?;

        self.logger
            .info(&format!("User registered: {} ({})", user.id, user.email));

        let token = self.token_issuer.issue(&user)?;
        Ok(AuthSession::new(token, user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::services::AccessToken;
    use crate::test_support::{mock_logger, MockHasher, MockTokens, MockUserRepo};
    use chrono::Utc;

    fn params(email: &str, password: &str) -> RegisterUserParams {
        RegisterUserParams {
            email: email.to_string(),
            password: password.to_string(),
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
        }
    }

    fn hasher() -> MockHasher {
        let mut hasher = MockHasher::new();
        hasher
            .expect_hash()
            .returning(|password| Ok(format!("hashed:{password}")));
        hasher
    }

    fn tokens() -> MockTokens {
        let mut tokens = MockTokens::new();
        tokens.expect_issue().returning(|user| {
            Ok(AccessToken {
                token: format!("token-for-{}", user.id),
                expires_at: Utc::now(),
            })
        });
        tokens
    }

    #[tokio::test]
    async fn should_register_user_with_normalized_email() {
        let mut mock_repo = MockUserRepo::new();
        mock_repo.expect_exists_by_email().returning(|_| Ok(false));
        mock_repo
            .expect_save()
            .withf(|user| user.email.as_str() == "jane@example.com")
            .times(1)
            .returning(|_| Ok(()));

        let use_case = RegisterUserUseCaseImpl {
            repository: Arc::new(mock_repo),
            password_hasher: Arc::new(hasher()),
            token_issuer: Arc::new(tokens()),
            logger: mock_logger(),
        };

        let session = use_case
            .execute(params(" Jane@Example.com ", "password123"))
            .await
            .unwrap();

        assert_eq!(session.user.password_hash, "hashed:password123");
        assert_eq!(session.user.roles, vec![Role::User]);
        assert_eq!(session.token, format!("token-for-{}", session.user.id));
    }

    #[tokio::test]
    async fn should_reject_already_registered_email() {
        let mut mock_repo = MockUserRepo::new();
        mock_repo.expect_exists_by_email().returning(|_| Ok(true));
        mock_repo.expect_save().never();

        let use_case = RegisterUserUseCaseImpl {
            repository: Arc::new(mock_repo),
            password_hasher: Arc::new(MockHasher::new()),
            token_issuer: Arc::new(MockTokens::new()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(params("jane@example.com", "password123"))
            .await;

        assert!(matches!(result.unwrap_err(), UserError::EmailAlreadyRegistered));
    }

    #[tokio::test]
    async fn should_map_unique_violation_to_already_registered() {
        let mut mock_repo = MockUserRepo::new();
        mock_repo.expect_exists_by_email().returning(|_| Ok(false));
        mock_repo
            .expect_save()
            .returning(|_| Err(RepositoryError::Duplicated));

        let use_case = RegisterUserUseCaseImpl {
            repository: Arc::new(mock_repo),
            password_hasher: Arc::new(hasher()),
            token_issuer: Arc::new(MockTokens::new()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(params("jane@example.com", "password123"))
            .await;

        assert!(matches!(result.unwrap_err(), UserError::EmailAlreadyRegistered));
    }

    #[tokio::test]
    async fn should_reject_short_password_before_any_lookup() {
        let mut mock_repo = MockUserRepo::new();
        mock_repo.expect_exists_by_email().never();

        let use_case = RegisterUserUseCaseImpl {
            repository: Arc::new(mock_repo),
            password_hasher: Arc::new(MockHasher::new()),
            token_issuer: Arc::new(MockTokens::new()),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("jane@example.com", "short")).await;

        assert!(matches!(result.unwrap_err(), UserError::PasswordTooShort));
    }
}

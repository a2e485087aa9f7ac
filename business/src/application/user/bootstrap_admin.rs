use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::shared::identity::Role;
use crate::domain::user::errors::UserError;
use crate::domain::user::model::{NewUserProps, User};
use crate::domain::user::repository::UserRepository;
use crate::domain::user::services::PasswordHasher;
use crate::domain::user::use_cases::bootstrap_admin::{BootstrapAdminParams, BootstrapAdminUseCase};
use crate::domain::user::value_objects::{validate_password, Email};

pub struct BootstrapAdminUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub password_hasher: Arc<dyn PasswordHasher>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl BootstrapAdminUseCase for BootstrapAdminUseCaseImpl {
    async fn execute(&self, params: BootstrapAdminParams) -> Result<bool, UserError> {
        let email = Email::parse(&params.email)?;

        if self.repository.exists_by_email(&email).await? {
            self.logger
                .debug(&format!("Admin account {} already present", email));
            return Ok(false);
        }

        validate_password(&params.password)?;
        let password_hash = self.password_hasher.hash(&params.password)?;
        let admin = User::new(NewUserProps {
            email,
            password_hash,
            first_name: "Admin".to_string(),
            last_name: "User".to_string(),
            roles: vec![Role::Admin, Role::User],
        })?;

        self.repository.save(&admin).await?;

        self.logger
            .info(&format!("Admin account created: {}", admin.email));
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{mock_logger, MockHasher, MockUserRepo};

    fn params() -> BootstrapAdminParams {
        BootstrapAdminParams {
            email: "admin@ecommerce.com".to_string(),
            password: "admin-password".to_string(),
        }
    }

    #[tokio::test]
    async fn should_create_admin_when_absent() {
        let mut mock_repo = MockUserRepo::new();
        mock_repo.expect_exists_by_email().returning(|_| Ok(false));
        mock_repo
            .expect_save()
            .withf(|user| user.identity().is_admin() && user.roles.contains(&Role::User))
            .times(1)
            .returning(|_| Ok(()));
        let mut hasher = MockHasher::new();
        hasher.expect_hash().returning(|_| Ok("hash".to_string()));

        let use_case = BootstrapAdminUseCaseImpl {
            repository: Arc::new(mock_repo),
            password_hasher: Arc::new(hasher),
            logger: mock_logger(),
        };

        assert!(use_case.execute(params()).await.unwrap());
    }

    #[tokio::test]
    async fn should_leave_existing_account_untouched() {
        let mut mock_repo = MockUserRepo::new();
        mock_repo.expect_exists_by_email().returning(|_| Ok(true));
        mock_repo.expect_save().never();

        let use_case = BootstrapAdminUseCaseImpl {
            repository: Arc::new(mock_repo),
            password_hasher: Arc::new(MockHasher::new()),
            logger: mock_logger(),
        };

        assert!(!use_case.execute(params()).await.unwrap());
    }
}

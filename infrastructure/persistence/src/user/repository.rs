use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::UserId;
use business::domain::user::model::User;
use business::domain::user::repository::UserRepository;
use business::domain::user::value_objects::Email;

use super::entity::{USER_COLUMNS, UserEntity};
use crate::error::map_db_error;

pub struct UserRepositoryPostgres {
    pool: PgPool,
}

impl UserRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn get_by_id(&self, id: &UserId) -> Result<User, RepositoryError> {
        sqlx::query_as::<_, UserEntity>(&format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1"))
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_db_error("users.get_by_id", e))?
            .ok_or(RepositoryError::NotFound)?
            .into_domain()
    }

    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, RepositoryError> {
        sqlx::query_as::<_, UserEntity>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = $1"
        ))
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_db_error("users.find_by_email", e))?
        .map(UserEntity::into_domain)
        .transpose()
    }

    async fn exists_by_email(&self, email: &Email) -> Result<bool, RepositoryError> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)")
            .bind(email.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_db_error("users.exists_by_email", e))
    }

    async fn save(&self, user: &User) -> Result<(), RepositoryError> {
        let roles: Vec<String> = user.roles.iter().map(|r| r.to_string()).collect();

        sqlx::query(
            r#"INSERT INTO users (id, email, password_hash, first_name, last_name, roles, enabled, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ON CONFLICT (id) DO UPDATE SET
                email = EXCLUDED.email,
                password_hash = EXCLUDED.password_hash,
                first_name = EXCLUDED.first_name,
                last_name = EXCLUDED.last_name,
                roles = EXCLUDED.roles,
                enabled = EXCLUDED.enabled,
                updated_at = EXCLUDED.updated_at"#,
        )
        .bind(user.id.as_uuid())
        .bind(user.email.as_str())
        .bind(&user.password_hash)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(roles)
        .bind(user.enabled)
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_db_error("users.save", e))?;

        Ok(())
    }
}

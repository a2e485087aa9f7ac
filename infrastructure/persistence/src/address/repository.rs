use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::address::model::Address;
use business::domain::address::repository::AddressRepository;
use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::UserId;

use super::entity::{ADDRESS_COLUMNS, AddressEntity};
use crate::error::map_db_error;

pub struct AddressRepositoryPostgres {
    pool: PgPool,
}

impl AddressRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AddressRepository for AddressRepositoryPostgres {
    async fn get_all(&self, user_id: &UserId) -> Result<Vec<Address>, RepositoryError> {
        let entities = sqlx::query_as::<_, AddressEntity>(&format!(
            "SELECT {ADDRESS_COLUMNS} FROM addresses WHERE user_id = $1 ORDER BY is_default DESC, created_at"
        ))
        .bind(user_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_db_error("addresses.get_all", e))?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_by_id(&self, id: Uuid, user_id: &UserId) -> Result<Address, RepositoryError> {
        let entity = sqlx::query_as::<_, AddressEntity>(&format!(
            "SELECT {ADDRESS_COLUMNS} FROM addresses WHERE id = $1 AND user_id = $2"
        ))
        .bind(id)
        .bind(user_id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_db_error("addresses.get_by_id", e))?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn find_default(&self, user_id: &UserId) -> Result<Option<Address>, RepositoryError> {
        let entity = sqlx::query_as::<_, AddressEntity>(&format!(
            "SELECT {ADDRESS_COLUMNS} FROM addresses WHERE user_id = $1 AND is_default = TRUE"
        ))
        .bind(user_id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_db_error("addresses.find_default", e))?;

        Ok(entity.map(AddressEntity::into_domain))
    }

    async fn count_by_user(&self, user_id: &UserId) -> Result<u64, RepositoryError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM addresses WHERE user_id = $1")
            .bind(user_id.as_uuid())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_db_error("addresses.count_by_user", e))?;

        Ok(u64::try_from(count).unwrap_or_default())
    }

    async fn clear_default(&self, user_id: &UserId) -> Result<u64, RepositoryError> {
        let result = sqlx::query(
            "UPDATE addresses SET is_default = FALSE, updated_at = NOW() WHERE user_id = $1 AND is_default = TRUE",
        )
        .bind(user_id.as_uuid())
        .execute(&self.pool)
        .await
        .map_err(|e| map_db_error("addresses.clear_default", e))?;

        Ok(result.rows_affected())
    }

    async fn save(&self, address: &Address) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO addresses (id, user_id, street, city, state, zip_code, country, is_default, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            ON CONFLICT (id) DO UPDATE SET
                street = EXCLUDED.street,
                city = EXCLUDED.city,
                state = EXCLUDED.state,
                zip_code = EXCLUDED.zip_code,
                country = EXCLUDED.country,
                is_default = EXCLUDED.is_default,
                updated_at = EXCLUDED.updated_at"#,
        )
        .bind(address.id)
        .bind(address.user_id.as_uuid())
        .bind(&address.street)
        .bind(&address.city)
        .bind(&address.state)
        .bind(&address.zip_code)
        .bind(&address.country)
        .bind(address.is_default)
        .bind(address.created_at)
        .bind(address.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_db_error("addresses.save", e))?;

        Ok(())
    }

    async fn delete(&self, id: Uuid, user_id: &UserId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM addresses WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| map_db_error("addresses.delete", e))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}

use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::cart::model::Cart;
use business::domain::cart::repository::CartRepository;
use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::UserId;

use super::entity::CartEntity;
use crate::error::map_db_error;

pub struct CartRepositoryPostgres {
    pool: PgPool,
}

impl CartRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CartRepository for CartRepositoryPostgres {
    async fn find_by_user_id(&self, user_id: &UserId) -> Result<Option<Cart>, RepositoryError> {
        let entity = sqlx::query_as::<_, CartEntity>(
            "SELECT user_id, items, total_price, updated_at FROM carts WHERE user_id = $1",
        )
        .bind(user_id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_db_error("carts.find_by_user_id", e))?;

        Ok(entity.map(CartEntity::into_domain))
    }

    async fn save(&self, cart: &Cart) -> Result<(), RepositoryError> {
        let entity = CartEntity::from_domain(cart);

        sqlx::query(
            r#"INSERT INTO carts (user_id, items, total_price, updated_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (user_id) DO UPDATE SET
                items = EXCLUDED.items,
                total_price = EXCLUDED.total_price,
                updated_at = EXCLUDED.updated_at"#,
        )
        .bind(entity.user_id)
        .bind(entity.items)
        .bind(entity.total_price)
        .bind(entity.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_db_error("carts.save", e))?;

        Ok(())
    }

    async fn delete_by_user_id(&self, user_id: &UserId) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM carts WHERE user_id = $1")
            .bind(user_id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| map_db_error("carts.delete_by_user_id", e))?;

        Ok(())
    }
}

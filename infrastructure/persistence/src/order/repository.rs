use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::order::model::Order;
use business::domain::order::repository::OrderRepository;
use business::domain::order::value_objects::OrderStatus;
use business::domain::shared::pagination::{Page, PageRequest};
use business::domain::shared::value_objects::UserId;

use super::entity::{ORDER_COLUMNS, OrderEntity};
use crate::error::map_db_error;

pub struct OrderRepositoryPostgres {
    pool: PgPool,
}

impl OrderRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn into_orders(entities: Vec<OrderEntity>) -> Result<Vec<Order>, RepositoryError> {
    entities.into_iter().map(OrderEntity::into_domain).collect()
}

#[async_trait]
impl OrderRepository for OrderRepositoryPostgres {
    async fn save(&self, order: &Order) -> Result<(), RepositoryError> {
        let entity = OrderEntity::from_domain(order);

        sqlx::query(
            r#"INSERT INTO orders (id, user_id, items, subtotal, tax, shipping, total, shipping_address, status, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            ON CONFLICT (id) DO UPDATE SET
                status = EXCLUDED.status,
                updated_at = EXCLUDED.updated_at"#,
        )
        .bind(entity.id)
        .bind(entity.user_id)
        .bind(entity.items)
        .bind(entity.subtotal)
        .bind(entity.tax)
        .bind(entity.shipping)
        .bind(entity.total)
        .bind(entity.shipping_address)
        .bind(entity.status)
        .bind(entity.created_at)
        .bind(entity.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_db_error("orders.save", e))?;

        Ok(())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Order, RepositoryError> {
        sqlx::query_as::<_, OrderEntity>(&format!(
            "SELECT {ORDER_COLUMNS} FROM orders WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_db_error("orders.get_by_id", e))?
        .ok_or(RepositoryError::NotFound)?
        .into_domain()
    }

    async fn find_by_user_id(
        &self,
        user_id: &UserId,
        page: &PageRequest,
    ) -> Result<Page<Order>, RepositoryError> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM orders WHERE user_id = $1")
            .bind(user_id.as_uuid())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_db_error("orders.count_by_user", e))?;

        let entities = sqlx::query_as::<_, OrderEntity>(&format!(
            "SELECT {ORDER_COLUMNS} FROM orders WHERE user_id = $1 ORDER BY created_at DESC LIMIT $2 OFFSET $3"
        ))
        .bind(user_id.as_uuid())
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_db_error("orders.find_by_user_id", e))?;

        Ok(Page::new(
            into_orders(entities)?,
            page,
            u64::try_from(total).unwrap_or_default(),
        ))
    }

    async fn find_by_status(&self, status: OrderStatus) -> Result<Vec<Order>, RepositoryError> {
        let entities = sqlx::query_as::<_, OrderEntity>(&format!(
            "SELECT {ORDER_COLUMNS} FROM orders WHERE status = $1 ORDER BY created_at DESC"
        ))
        .bind(status.to_string())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_db_error("orders.find_by_status", e))?;

        into_orders(entities)
    }
}

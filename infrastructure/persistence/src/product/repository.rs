use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;
use business::domain::product::repository::ProductRepository;
use business::domain::product::value_objects::ProductFilter;
use business::domain::shared::pagination::{Page, PageRequest};

use super::entity::{PRODUCT_COLUMNS, ProductEntity};
use crate::error::map_db_error;

pub struct ProductRepositoryPostgres {
    pool: PgPool,
}

impl ProductRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Escapes LIKE wildcards so user input only matches literally.
fn escape_like(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// `select` followed by the WHERE clause for `filter`. Criteria combine with AND.
fn filtered_query(select: &str, filter: &ProductFilter) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new(select);
    builder.push(" WHERE active = TRUE");

    if let Some(search) = &filter.search {
        let pattern = format!("%{}%", escape_like(search));
        builder
            .push(" AND (name ILIKE ")
            .push_bind(pattern.clone())
            .push(" OR description ILIKE ")
            .push_bind(pattern)
            .push(")");
    }
    if let Some(category) = &filter.category {
        builder
            .push(" AND LOWER(category) = LOWER(")
            .push_bind(category.clone())
            .push(")");
    }
    if let Some(min_price) = &filter.min_price {
        builder.push(" AND price >= ").push_bind(min_price.clone());
    }
    if let Some(max_price) = &filter.max_price {
        builder.push(" AND price <= ").push_bind(max_price.clone());
    }
    if let Some(min_rating) = &filter.min_rating {
        builder.push(" AND rating >= ").push_bind(min_rating.clone());
    }

    builder
}

#[async_trait]
impl ProductRepository for ProductRepositoryPostgres {
    async fn search(
        &self,
        filter: &ProductFilter,
        page: &PageRequest,
    ) -> Result<Page<Product>, RepositoryError> {
        let total: i64 = filtered_query("SELECT COUNT(*) FROM products", filter)
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_db_error("products.search.count", e))?;

        let mut query = filtered_query(&format!("SELECT {PRODUCT_COLUMNS} FROM products"), filter);
        query
            .push(" ORDER BY created_at DESC LIMIT ")
            .push_bind(page.limit())
            .push(" OFFSET ")
            .push_bind(page.offset());

        let entities = query
            .build_query_as::<ProductEntity>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_db_error("products.search", e))?;

        Ok(Page::new(
            entities.into_iter().map(|e| e.into_domain()).collect(),
            page,
            u64::try_from(total).unwrap_or_default(),
        ))
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_db_error("products.get_by_id", e))?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn save(&self, product: &Product) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO products (id, name, description, price, stock_quantity, category, images, rating, review_count, active, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name,
                description = EXCLUDED.description,
                price = EXCLUDED.price,
                stock_quantity = EXCLUDED.stock_quantity,
                category = EXCLUDED.category,
                images = EXCLUDED.images,
                active = EXCLUDED.active,
                updated_at = EXCLUDED.updated_at"#,
        )
        .bind(product.id)
        .bind(&product.name)
        .bind(&product.description)
        .bind(&product.price)
        .bind(product.stock_quantity)
        .bind(&product.category)
        .bind(&product.images)
        .bind(&product.rating)
        .bind(product.review_count)
        .bind(product.active)
        .bind(product.created_at)
        .bind(product.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_db_error("products.save", e))?;

        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_db_error("products.delete", e))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn decrement_stock(&self, id: Uuid, quantity: i32) -> Result<bool, RepositoryError> {
        let result = sqlx::query(
            "UPDATE products SET stock_quantity = stock_quantity - $2, updated_at = NOW() WHERE id = $1 AND stock_quantity >= $2",
        )
        .bind(id)
        .bind(quantity)
        .execute(&self.pool)
        .await
        .map_err(|e| map_db_error("products.decrement_stock", e))?;

        Ok(result.rows_affected() == 1)
    }

    async fn increment_stock(&self, id: Uuid, quantity: i32) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            "UPDATE products SET stock_quantity = stock_quantity + $2, updated_at = NOW() WHERE id = $1",
        )
        .bind(id)
        .bind(quantity)
        .execute(&self.pool)
        .await
        .map_err(|e| map_db_error("products.increment_stock", e))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}

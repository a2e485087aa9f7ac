use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::product::model::Product;

pub(crate) const PRODUCT_COLUMNS: &str = "id, name, description, price, stock_quantity, category, images, rating, review_count, active, created_at, updated_at";

#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub price: BigDecimal,
    pub stock_quantity: i32,
    pub category: Option<String>,
    pub images: Vec<String>,
    pub rating: Option<BigDecimal>,
    pub review_count: i32,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProductEntity {
    pub fn into_domain(self) -> Product {
        Product::from_repository(
            self.id,
            self.name,
            self.description,
            self.price,
            self.stock_quantity,
            self.category,
            self.images,
            self.rating,
            self.review_count,
            self.active,
            self.created_at,
            self.updated_at,
        )
    }
}

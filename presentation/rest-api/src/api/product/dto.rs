use chrono::{DateTime, Utc};
use poem_openapi::Object;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use business::domain::product::model::Product;
use business::domain::shared::pagination::Page;

use crate::api::money::format_amount;

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct ProductResponse {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    /// Decimal string, e.g. "999.99"
    pub price: String,
    pub stock_quantity: i32,
    pub category: Option<String>,
    pub images: Vec<String>,
    pub rating: Option<String>,
    pub review_count: i32,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            price: format_amount(&product.price),
            rating: product.rating.as_ref().map(ToString::to_string),
            name: product.name,
            description: product.description,
            stock_quantity: product.stock_quantity,
            category: product.category,
            images: product.images,
            review_count: product.review_count,
            active: product.active,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct ProductPageResponse {
    pub items: Vec<ProductResponse>,
    pub page: u32,
    pub size: u32,
    pub total_elements: u64,
    pub total_pages: u32,
}

impl From<Page<Product>> for ProductPageResponse {
    fn from(page: Page<Product>) -> Self {
        let page = page.map(ProductResponse::from);
        Self {
            items: page.items,
            page: page.page,
            size: page.size,
            total_elements: page.total_elements,
            total_pages: page.total_pages,
        }
    }
}

/// Body for both create and full update.
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct ProductRequest {
    pub name: String,
    pub description: Option<String>,
    /// Decimal string with at most two decimals
    pub price: String,
    pub stock_quantity: i32,
    pub category: Option<String>,
    #[oai(default)]
    pub images: Vec<String>,
    #[oai(default = "active_by_default")]
    pub active: bool,
}

fn active_by_default() -> bool {
    true
}

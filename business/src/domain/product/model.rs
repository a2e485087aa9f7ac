use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use num_traits::Zero;
use uuid::Uuid;

use super::errors::ProductError;

#[derive(Debug, Clone)]
pub struct Product {
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

pub struct NewProductProps {
    pub name: String,
    pub description: Option<String>,
    pub price: BigDecimal,
    pub stock_quantity: i32,
    pub category: Option<String>,
    pub images: Vec<String>,
    pub active: bool,
}

impl Product {
    pub fn new(props: NewProductProps) -> Result<Self, ProductError> {
        Self::validate(&props.name, &props.price, props.stock_quantity)?;

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            name: props.name,
            description: props.description,
            price: props.price,
            stock_quantity: props.stock_quantity,
            category: props.category,
            images: props.images,
            rating: None,
            review_count: 0,
            active: props.active,
            created_at: now,
            updated_at: now,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: Uuid,
        name: String,
        description: Option<String>,
        price: BigDecimal,
        stock_quantity: i32,
        category: Option<String>,
        images: Vec<String>,
        rating: Option<BigDecimal>,
        review_count: i32,
        active: bool,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            description,
            price,
            stock_quantity,
            category,
            images,
            rating,
            review_count,
            active,
            created_at,
            updated_at,
        }
    }

    /// Shared rules for creation and admin edits.
    pub fn validate(name: &str, price: &BigDecimal, stock_quantity: i32) -> Result<(), ProductError> {
        if name.trim().is_empty() {
            return Err(ProductError::NameEmpty);
        }
        if *price < BigDecimal::zero() {
            return Err(ProductError::NegativePrice);
        }
        if stock_quantity < 0 {
            return Err(ProductError::NegativeStock);
        }
        Ok(())
    }

    pub fn has_stock_for(&self, quantity: i32) -> bool {
        self.stock_quantity >= quantity
    }

    /// Image shown next to cart and order lines.
    pub fn primary_image(&self) -> Option<String> {
        self.images.first().cloned()
    }
}

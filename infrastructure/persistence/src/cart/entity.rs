use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::types::Json;
use uuid::Uuid;

use business::domain::cart::model::{Cart, CartItem};
use business::domain::shared::value_objects::UserId;

/// Shape of one element of the `carts.items` JSONB array.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartItemDocument {
    pub product_id: Uuid,
    pub product_name: String,
    pub price: BigDecimal,
    pub quantity: i32,
    pub image: Option<String>,
}

impl From<&CartItem> for CartItemDocument {
    fn from(item: &CartItem) -> Self {
        Self {
            product_id: item.product_id,
            product_name: item.product_name.clone(),
            price: item.price.clone(),
            quantity: item.quantity,
            image: item.image.clone(),
        }
    }
}

impl From<CartItemDocument> for CartItem {
    fn from(doc: CartItemDocument) -> Self {
        Self {
            product_id: doc.product_id,
            product_name: doc.product_name,
            price: doc.price,
            quantity: doc.quantity,
            image: doc.image,
        }
    }
}

#[derive(Debug, FromRow)]
pub struct CartEntity {
    pub user_id: Uuid,
    pub items: Json<Vec<CartItemDocument>>,
    pub total_price: BigDecimal,
    pub updated_at: DateTime<Utc>,
}

impl CartEntity {
    pub fn from_domain(cart: &Cart) -> Self {
        Self {
            user_id: cart.user_id.as_uuid(),
            items: Json(cart.items.iter().map(CartItemDocument::from).collect()),
            total_price: cart.total_price.clone(),
            updated_at: cart.updated_at,
        }
    }

    pub fn into_domain(self) -> Cart {
        Cart::from_repository(
            UserId::new(self.user_id),
            self.items.0.into_iter().map(CartItem::from).collect(),
            self.total_price,
            self.updated_at,
        )
    }
}

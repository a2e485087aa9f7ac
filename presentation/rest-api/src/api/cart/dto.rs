use chrono::{DateTime, Utc};
use poem_openapi::Object;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use business::domain::cart::model::{Cart, CartItem};

use crate::api::money::format_amount;

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct CartItemResponse {
    pub product_id: Uuid,
    pub product_name: String,
    /// Unit price captured when the product was added
    pub price: String,
    pub quantity: i32,
    pub image: Option<String>,
    pub line_total: String,
}

impl From<CartItem> for CartItemResponse {
    fn from(item: CartItem) -> Self {
        Self {
            line_total: format_amount(&item.line_total()),
            price: format_amount(&item.price),
            product_id: item.product_id,
            product_name: item.product_name,
            quantity: item.quantity,
            image: item.image,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct CartResponse {
    pub items: Vec<CartItemResponse>,
    pub total_price: String,
    pub item_count: i64,
    pub updated_at: DateTime<Utc>,
}

impl From<Cart> for CartResponse {
    fn from(cart: Cart) -> Self {
        Self {
            total_price: format_amount(&cart.total_price),
            item_count: cart.items.iter().map(|item| i64::from(item.quantity)).sum(),
            items: cart.items.into_iter().map(CartItemResponse::from).collect(),
            updated_at: cart.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct AddCartItemRequest {
    pub product_id: Uuid,
    /// Must be positive
    pub quantity: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct UpdateCartItemRequest {
    /// Zero or less removes the line
    pub quantity: i32,
}

use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::types::Json;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::order::model::{Order, OrderItem, ShippingAddress};
use business::domain::order::value_objects::OrderStatus;
use business::domain::shared::value_objects::UserId;

use crate::error::corrupt_row;

pub(crate) const ORDER_COLUMNS: &str = "id, user_id, items, subtotal, tax, shipping, total, shipping_address, status, created_at, updated_at";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItemDocument {
    pub product_id: Uuid,
    pub product_name: String,
    pub price: BigDecimal,
    pub quantity: i32,
    pub image: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShippingAddressDocument {
    pub address_id: Uuid,
    pub street: String,
    pub city: String,
    pub state: Option<String>,
    pub zip_code: String,
    pub country: String,
}

#[derive(Debug, FromRow)]
pub struct OrderEntity {
    pub id: Uuid,
    pub user_id: Uuid,
    pub items: Json<Vec<OrderItemDocument>>,
    pub subtotal: BigDecimal,
    pub tax: BigDecimal,
    pub shipping: BigDecimal,
    pub total: BigDecimal,
    pub shipping_address: Json<ShippingAddressDocument>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl OrderEntity {
    pub fn from_domain(order: &Order) -> Self {
        let items = order
            .items
            .iter()
            .map(|item| OrderItemDocument {
                product_id: item.product_id,
                product_name: item.product_name.clone(),
                price: item.price.clone(),
                quantity: item.quantity,
                image: item.image.clone(),
            })
            .collect();
        let address = &order.shipping_address;

        Self {
            id: order.id,
            user_id: order.user_id.as_uuid(),
            items: Json(items),
            subtotal: order.subtotal.clone(),
            tax: order.tax.clone(),
            shipping: order.shipping.clone(),
            total: order.total.clone(),
            shipping_address: Json(ShippingAddressDocument {
                address_id: address.address_id,
                street: address.street.clone(),
                city: address.city.clone(),
                state: address.state.clone(),
                zip_code: address.zip_code.clone(),
                country: address.country.clone(),
            }),
            status: order.status.to_string(),
            created_at: order.created_at,
            updated_at: order.updated_at,
        }
    }

    pub fn into_domain(self) -> Result<Order, RepositoryError> {
        let status = self
            .status
            .parse::<OrderStatus>()
            .map_err(|e| corrupt_row("orders", &e))?;
        let address = self.shipping_address.0;

        Ok(Order::from_repository(
            self.id,
            UserId::new(self.user_id),
            self.items
                .0
                .into_iter()
                .map(|doc| OrderItem {
                    product_id: doc.product_id,
                    product_name: doc.product_name,
                    price: doc.price,
                    quantity: doc.quantity,
                    image: doc.image,
                })
                .collect(),
            self.subtotal,
            self.tax,
            self.shipping,
            self.total,
            ShippingAddress {
                address_id: address.address_id,
                street: address.street,
                city: address.city,
                state: address.state,
                zip_code: address.zip_code,
                country: address.country,
            },
            status,
            self.created_at,
            self.updated_at,
        ))
    }
}

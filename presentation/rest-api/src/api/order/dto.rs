use chrono::{DateTime, Utc};
use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use business::domain::order::model::{Order, OrderItem, ShippingAddress};
use business::domain::order::value_objects::OrderStatus;
use business::domain::shared::pagination::Page;

use crate::api::money::format_amount;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Enum)]
#[oai(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatusDto {
    Pending,
    Paid,
    Shipped,
    Delivered,
    Cancelled,
}

impl From<OrderStatus> for OrderStatusDto {
    fn from(status: OrderStatus) -> Self {
        match status {
            OrderStatus::Pending => OrderStatusDto::Pending,
            OrderStatus::Paid => OrderStatusDto::Paid,
            OrderStatus::Shipped => OrderStatusDto::Shipped,
            OrderStatus::Delivered => OrderStatusDto::Delivered,
            OrderStatus::Cancelled => OrderStatusDto::Cancelled,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct OrderItemResponse {
    pub product_id: Uuid,
    pub product_name: String,
    pub price: String,
    pub quantity: i32,
    pub image: Option<String>,
}

impl From<OrderItem> for OrderItemResponse {
    fn from(item: OrderItem) -> Self {
        Self {
            price: format_amount(&item.price),
            product_id: item.product_id,
            product_name: item.product_name,
            quantity: item.quantity,
            image: item.image,
        }
    }
}

/// Copy of the address taken when the order was placed
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct ShippingAddressResponse {
    pub address_id: Uuid,
    pub street: String,
    pub city: String,
    pub state: Option<String>,
    pub zip_code: String,
    pub country: String,
}

impl From<ShippingAddress> for ShippingAddressResponse {
    fn from(address: ShippingAddress) -> Self {
        Self {
            address_id: address.address_id,
            street: address.street,
            city: address.city,
            state: address.state,
            zip_code: address.zip_code,
            country: address.country,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct OrderResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub items: Vec<OrderItemResponse>,
    pub subtotal: String,
    pub tax: String,
    pub shipping: String,
    pub total: String,
    pub shipping_address: ShippingAddressResponse,
    pub status: OrderStatusDto,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            id: order.id,
            user_id: order.user_id.as_uuid(),
            subtotal: format_amount(&order.subtotal),
            tax: format_amount(&order.tax),
            shipping: format_amount(&order.shipping),
            total: format_amount(&order.total),
            items: order.items.into_iter().map(OrderItemResponse::from).collect(),
            shipping_address: order.shipping_address.into(),
            status: order.status.into(),
            created_at: order.created_at,
            updated_at: order.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct OrderPageResponse {
    pub items: Vec<OrderResponse>,
    pub page: u32,
    pub size: u32,
    pub total_elements: u64,
    pub total_pages: u32,
}

impl From<Page<Order>> for OrderPageResponse {
    fn from(page: Page<Order>) -> Self {
        let page = page.map(OrderResponse::from);
        Self {
            items: page.items,
            page: page.page,
            size: page.size,
            total_elements: page.total_elements,
            total_pages: page.total_pages,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct PlaceOrderRequest {
    pub shipping_address_id: Uuid,
    /// Decimal string; defaults to "0.00"
    pub shipping_cost: Option<String>,
}

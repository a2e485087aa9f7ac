use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::pricing::OrderTotals;
use super::value_objects::OrderStatus;
use crate::domain::address::model::Address;
use crate::domain::cart::model::CartItem;
use crate::domain::shared::value_objects::UserId;

#[derive(Debug, Clone, PartialEq)]
pub struct OrderItem {
    pub product_id: Uuid,
    pub product_name: String,
    pub price: BigDecimal,
    pub quantity: i32,
    pub image: Option<String>,
}

impl From<&CartItem> for OrderItem {
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

/// Copy of the address taken at checkout; later edits to the address book
/// do not reach placed orders.
#[derive(Debug, Clone, PartialEq)]
pub struct ShippingAddress {
    pub address_id: Uuid,
    pub street: String,
    pub city: String,
    pub state: Option<String>,
    pub zip_code: String,
    pub country: String,
}

impl From<&Address> for ShippingAddress {
    fn from(address: &Address) -> Self {
        Self {
            address_id: address.id,
            street: address.street.clone(),
            city: address.city.clone(),
            state: address.state.clone(),
            zip_code: address.zip_code.clone(),
            country: address.country.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Order {
    pub id: Uuid,
    pub user_id: UserId,
    pub items: Vec<OrderItem>,
    pub subtotal: BigDecimal,
    pub tax: BigDecimal,
    pub shipping: BigDecimal,
    pub total: BigDecimal,
    pub shipping_address: ShippingAddress,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// A freshly placed order always starts as `PENDING`.
    pub fn place(
        user_id: UserId,
        items: Vec<OrderItem>,
        totals: OrderTotals,
        shipping_address: ShippingAddress,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            items,
            subtotal: totals.subtotal,
            tax: totals.tax,
            shipping: totals.shipping,
            total: totals.total,
            shipping_address,
            status: OrderStatus::Pending,
            created_at: now,
            updated_at: now,
        }
    }

    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: Uuid,
        user_id: UserId,
        items: Vec<OrderItem>,
        subtotal: BigDecimal,
        tax: BigDecimal,
        shipping: BigDecimal,
        total: BigDecimal,
        shipping_address: ShippingAddress,
        status: OrderStatus,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            items,
            subtotal,
            tax,
            shipping,
            total,
            shipping_address,
            status,
            created_at,
            updated_at,
        }
    }

    pub fn update_status(&mut self, status: OrderStatus) {
        self.status = status;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::Zero;
    use std::str::FromStr;

    fn shipping_address() -> ShippingAddress {
        ShippingAddress {
            address_id: Uuid::new_v4(),
            street: "123 Main St".to_string(),
            city: "Springfield".to_string(),
            state: None,
            zip_code: "12345".to_string(),
            country: "US".to_string(),
        }
    }

    #[test]
    fn should_place_order_as_pending_with_matching_timestamps() {
        let totals = OrderTotals::compute(BigDecimal::from_str("30.00").unwrap(), BigDecimal::zero());
        let order = Order::place(UserId::generate(), vec![], totals, shipping_address());

        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.created_at, order.updated_at);
        assert_eq!(order.total, BigDecimal::from_str("33.00").unwrap());
    }

    #[test]
    fn should_update_status_and_touch_timestamp() {
        let totals = OrderTotals::compute(BigDecimal::zero(), BigDecimal::zero());
        let mut order = Order::place(UserId::generate(), vec![], totals, shipping_address());
        let placed_at = order.updated_at;

        order.update_status(OrderStatus::Shipped);

        assert_eq!(order.status, OrderStatus::Shipped);
        assert!(order.updated_at >= placed_at);
    }
}

use std::sync::Arc;

use async_trait::async_trait;
use bigdecimal::BigDecimal;
use num_traits::Zero;
use uuid::Uuid;

use crate::domain::address::model::Address;
use crate::domain::address::repository::AddressRepository;
use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::order::errors::OrderError;
use crate::domain::order::model::{Order, OrderItem, ShippingAddress};
use crate::domain::order::pricing::OrderTotals;
use crate::domain::order::repository::OrderRepository;
use crate::domain::order::use_cases::place::{PlaceOrderParams, PlaceOrderUseCase};
use crate::domain::product::repository::ProductRepository;

pub struct PlaceOrderUseCaseImpl {
    pub order_repository: Arc<dyn OrderRepository>,
    pub cart_repository: Arc<dyn CartRepository>,
    pub address_repository: Arc<dyn AddressRepository>,
    pub product_repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

/// Stock taken from a product during one checkout.
struct Reservation {
    product_id: Uuid,
    quantity: i32,
}

impl PlaceOrderUseCaseImpl {
    /// Decrements stock line by line, recording each successful decrement.
    /// Returns the subtotal computed from the cart's captured prices.
    async fn reserve_stock(
        &self,
        cart: &Cart,
        reservations: &mut Vec<Reservation>,
    ) -> Result<BigDecimal, OrderError> {
        let mut subtotal = BigDecimal::zero();

        for item in &cart.items {
            let product = self
                .product_repository
                .get_by_id(item.product_id)
                .await
                .map_err(|e| match e {
                    RepositoryError::NotFound => OrderError::ProductNotFound(item.product_id),
                    other => OrderError::Repository(other),
                })?;

            if !product.has_stock_for(item.quantity) {
                return Err(OrderError::InsufficientStock(product.name));
            }

            subtotal += item.line_total();

            let decremented = self
                .product_repository
                .decrement_stock(item.product_id, item.quantity)
                .await?;
            if !decremented {
                // Another checkout took the stock between the read and the update.
                return Err(OrderError::InsufficientStock(product.name));
            }

            reservations.push(Reservation {
                product_id: item.product_id,
                quantity: item.quantity,
            });
        }

        Ok(subtotal)
    }

    async fn release_stock(&self, reservations: &[Reservation]) {
        for reservation in reservations {
            if let Err(e) = self
                .product_repository
                .increment_stock(reservation.product_id, reservation.quantity)
                .await
            {
                self.logger.error(&format!(
                    "Failed to restore {} units of product {}: {}",
                    reservation.quantity, reservation.product_id, e
                ));
            }
        }
    }

    async fn create_order(
        &self,
        cart: &Cart,
        address: &Address,
        shipping: BigDecimal,
        reservations: &mut Vec<Reservation>,
    ) -> Result<Order, OrderError> {
        let subtotal = self.reserve_stock(cart, reservations).await?;
        let totals = OrderTotals::compute(subtotal, shipping);

        let order = Order::place(
            cart.user_id,
            cart.items.iter().map(OrderItem::from).collect(),
            totals,
            ShippingAddress::from(address),
        );

        self.order_repository.save(&order).await?;
        Ok(order)
    }
}

#[async_trait]
impl PlaceOrderUseCase for PlaceOrderUseCaseImpl {
    async fn execute(&self, params: PlaceOrderParams) -> Result<Order, OrderError> {
        let shipping = params.shipping_cost.unwrap_or_else(BigDecimal::zero);
        if shipping < BigDecimal::zero() {
            return Err(OrderError::InvalidShippingCost);
        }

        self.logger.info(&format!(
            "Placing order for user {} shipping to {}",
            params.user_id, params.shipping_address_id
        ));

        let cart = self
            .cart_repository
            .find_by_user_id(&params.user_id)
            .await?
            .filter(|cart| !cart.is_empty())
            .ok_or(OrderError::CartEmpty)?;

        let address = self
            .address_repository
            .get_by_id(params.shipping_address_id, &params.user_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => OrderError::ShippingAddressNotFound,
                other => OrderError::Repository(other),
            })?;

        let mut reservations = Vec::with_capacity(cart.items.len());
        let order = match self
            .create_order(&cart, &address, shipping, &mut reservations)
            .await
        {
            Ok(order) => order,
            Err(e) => {
                self.logger.warn(&format!(
                    "Checkout failed for user {}: {}. Restoring {} reservation(s)",
                    params.user_id,
                    e,
                    reservations.len()
                ));
                self.release_stock(&reservations).await;
                return Err(e);
            }
        };

        // The order is already committed; a stale cart must not turn it into a failure.
        if let Err(e) = self.cart_repository.delete_by_user_id(&params.user_id).await {
            self.logger.error(&format!(
                "Order {} placed but cart of user {} was not cleared: {}",
                order.id, params.user_id, e
            ));
        }

        self.logger.info(&format!(
            "Order {} placed for user {} with total {}",
            order.id, params.user_id, order.total
        ));
        Ok(order)
    }
}

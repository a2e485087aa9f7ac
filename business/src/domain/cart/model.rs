use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use num_traits::Zero;
use uuid::Uuid;

use super::errors::CartError;
use crate::domain::product::model::Product;
use crate::domain::shared::value_objects::UserId;

/// A cart line. Name, price and image are captured when the product is
/// first added and do not follow later catalog edits.
#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    pub product_id: Uuid,
    pub product_name: String,
    pub price: BigDecimal,
    pub quantity: i32,
    pub image: Option<String>,
}

impl CartItem {
    pub fn snapshot(product: &Product, quantity: i32) -> Self {
        Self {
            product_id: product.id,
            product_name: product.name.clone(),
            price: product.price.clone(),
            quantity,
            image: product.primary_image(),
        }
    }

    pub fn line_total(&self) -> BigDecimal {
        &self.price * BigDecimal::from(self.quantity)
    }
}

/// The per-user cart aggregate. `total_price` is kept in sync with the
/// lines by every mutating method.
#[derive(Debug, Clone)]
pub struct Cart {
    pub user_id: UserId,
    pub items: Vec<CartItem>,
    pub total_price: BigDecimal,
    pub updated_at: DateTime<Utc>,
}

impl Cart {
    pub fn empty(user_id: UserId) -> Self {
        Self {
            user_id,
            items: Vec::new(),
            total_price: BigDecimal::zero(),
            updated_at: Utc::now(),
        }
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        user_id: UserId,
        items: Vec<CartItem>,
        total_price: BigDecimal,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            user_id,
            items,
            total_price,
            updated_at,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Adds `quantity` units of `product`, merging into an existing line.
    pub fn add_item(&mut self, product: &Product, quantity: i32) -> Result<(), CartError> {
        if quantity <= 0 {
            return Err(CartError::InvalidQuantity);
        }

        match self.items.iter_mut().find(|i| i.product_id == product.id) {
            Some(item) => {
                item.quantity = item
                    .quantity
                    .checked_add(quantity)
                    .ok_or(CartError::InvalidQuantity)?;
            }
            None => self.items.push(CartItem::snapshot(product, quantity)),
        }

        self.touch();
        Ok(())
    }

    /// Overwrites a line's quantity; zero or less removes the line.
    pub fn set_quantity(&mut self, product_id: Uuid, quantity: i32) -> Result<(), CartError> {
        let position = self
            .items
            .iter()
            .position(|i| i.product_id == product_id)
            .ok_or(CartError::ItemNotFound)?;

        if quantity <= 0 {
            self.items.remove(position);
        } else if let Some(item) = self.items.get_mut(position) {
            item.quantity = quantity;
        }

        self.touch();
        Ok(())
    }

    /// Returns whether a line was removed.
    pub fn remove_item(&mut self, product_id: Uuid) -> bool {
        let before = self.items.len();
        self.items.retain(|i| i.product_id != product_id);
        let removed = self.items.len() != before;
        if removed {
            self.touch();
        }
        removed
    }

    pub fn computed_total(&self) -> BigDecimal {
        self.items
            .iter()
            .fold(BigDecimal::zero(), |acc, item| acc + item.line_total())
    }

    fn touch(&mut self) {
        self.total_price = self.computed_total();
        self.updated_at = Utc::now();
    }
}

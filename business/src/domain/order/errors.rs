use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    #[error("order.cart_empty")]
    CartEmpty,
    #[error("order.shipping_address_not_found")]
    ShippingAddressNotFound,
    #[error("order.product_not_found: {0}")]
    ProductNotFound(Uuid),
    #[error("order.insufficient_stock: {0}")]
    InsufficientStock(String),
    #[error("order.invalid_shipping_cost")]
    InvalidShippingCost,
    #[error("order.invalid_status: {0}")]
    InvalidStatus(String),
    #[error("order.not_found")]
    NotFound,
    #[error("order.access_denied")]
    AccessDenied,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}

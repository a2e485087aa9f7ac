#[derive(Debug, thiserror::Error)]
pub enum CartError {
    #[error("cart.invalid_quantity")]
    InvalidQuantity,
    #[error("cart.product_not_found")]
    ProductNotFound,
    #[error("cart.product_unavailable")]
    ProductUnavailable,
    #[error("cart.insufficient_stock: {0}")]
    InsufficientStock(String),
    #[error("cart.not_found")]
    NotFound,
    #[error("cart.item_not_found")]
    ItemNotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}

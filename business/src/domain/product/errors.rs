#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.name_empty")]
    NameEmpty,
    #[error("product.negative_price")]
    NegativePrice,
    #[error("product.negative_stock")]
    NegativeStock,
    #[error("product.invalid_price_range")]
    InvalidPriceRange,
    #[error("product.not_found")]
    NotFound,
    #[error("product.access_denied")]
    AccessDenied,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}

#[derive(Debug, thiserror::Error)]
pub enum AddressError {
    #[error("address.street_empty")]
    StreetEmpty,
    #[error("address.city_empty")]
    CityEmpty,
    #[error("address.invalid_zip_code")]
    InvalidZipCode,
    #[error("address.invalid_country")]
    InvalidCountry,
    #[error("address.not_found")]
    NotFound,
    #[error("address.default_not_found")]
    DefaultNotFound,
    #[error("address.default_conflict")]
    DefaultConflict,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}

use chrono::{DateTime, Utc};
use poem_openapi::Object;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use business::domain::address::model::Address;

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct AddressResponse {
    pub id: Uuid,
    pub street: String,
    pub city: String,
    pub state: Option<String>,
    pub zip_code: String,
    pub country: String,
    pub is_default: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Address> for AddressResponse {
    fn from(address: Address) -> Self {
        Self {
            id: address.id,
            street: address.street,
            city: address.city,
            state: address.state,
            zip_code: address.zip_code,
            country: address.country,
            is_default: address.is_default,
            created_at: address.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct CreateAddressRequest {
    pub street: String,
    pub city: String,
    pub state: Option<String>,
    pub zip_code: String,
    /// ISO 3166-1 alpha-2 code, e.g. "US"
    pub country: String,
    /// The first address always becomes the default
    #[oai(default)]
    pub is_default: bool,
}

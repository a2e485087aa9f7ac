use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::address::model::Address;
use business::domain::shared::value_objects::UserId;

pub(crate) const ADDRESS_COLUMNS: &str =
    "id, user_id, street, city, state, zip_code, country, is_default, created_at, updated_at";

#[derive(Debug, FromRow)]
pub struct AddressEntity {
    pub id: Uuid,
    pub user_id: Uuid,
    pub street: String,
    pub city: String,
    pub state: Option<String>,
    pub zip_code: String,
    pub country: String,
    pub is_default: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl AddressEntity {
    pub fn into_domain(self) -> Address {
        Address::from_repository(
            self.id,
            UserId::new(self.user_id),
            self.street,
            self.city,
            self.state,
            self.zip_code,
            self.country,
            self.is_default,
            self.created_at,
            self.updated_at,
        )
    }
}

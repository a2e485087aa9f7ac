use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use uuid::Uuid;

use super::errors::AddressError;
use crate::domain::shared::value_objects::UserId;

static ZIP_CODE: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9\- ]{3,12}$").ok());
static COUNTRY_CODE: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"^[A-Z]{2}$").ok());

#[derive(Debug, Clone)]
pub struct Address {
    pub id: Uuid,
    pub user_id: UserId,
    pub street: String,
    pub city: String,
    pub state: Option<String>,
    pub zip_code: String,
    pub country: String,
    pub is_default: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct NewAddressProps {
    pub user_id: UserId,
    pub street: String,
    pub city: String,
    pub state: Option<String>,
    pub zip_code: String,
    pub country: String,
    pub is_default: bool,
}

impl Address {
    pub fn new(props: NewAddressProps) -> Result<Self, AddressError> {
        let street = props.street.trim().to_string();
        let city = props.city.trim().to_string();
        let zip_code = props.zip_code.trim().to_string();
        let country = props.country.trim().to_uppercase();

        if street.is_empty() {
            return Err(AddressError::StreetEmpty);
        }
        if city.is_empty() {
            return Err(AddressError::CityEmpty);
        }
        if !matches_pattern(&ZIP_CODE, &zip_code) {
            return Err(AddressError::InvalidZipCode);
        }
        if !matches_pattern(&COUNTRY_CODE, &country) {
            return Err(AddressError::InvalidCountry);
        }

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            user_id: props.user_id,
            street,
            city,
            state: props
                .state
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            zip_code,
            country,
            is_default: props.is_default,
            created_at: now,
            updated_at: now,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: Uuid,
        user_id: UserId,
        street: String,
        city: String,
        state: Option<String>,
        zip_code: String,
        country: String,
        is_default: bool,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            street,
            city,
            state,
            zip_code,
            country,
            is_default,
            created_at,
            updated_at,
        }
    }

    pub fn belongs_to(&self, user_id: &UserId) -> bool {
        self.user_id == *user_id
    }
}

fn matches_pattern(pattern: &Lazy<Option<Regex>>, value: &str) -> bool {
    pattern.as_ref().is_some_and(|re| re.is_match(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props(zip: &str, country: &str) -> NewAddressProps {
        NewAddressProps {
            user_id: UserId::generate(),
            street: " 123 Main St ".to_string(),
            city: "Springfield".to_string(),
            state: Some("  ".to_string()),
            zip_code: zip.to_string(),
            country: country.to_string(),
            is_default: false,
        }
    }

    #[test]
    fn should_trim_fields_and_uppercase_country() {
        let address = Address::new(props("12345", "us")).unwrap();

        assert_eq!(address.street, "123 Main St");
        assert_eq!(address.country, "US");
        assert!(address.state.is_none());
    }

    #[test]
    fn should_accept_alphanumeric_postcodes() {
        assert!(Address::new(props("SW1A 1AA", "GB")).is_ok());
        assert!(Address::new(props("28-001", "ES")).is_ok());
    }

    #[test]
    fn should_reject_invalid_zip_code() {
        let result = Address::new(props("1", "US"));
        assert!(matches!(result.unwrap_err(), AddressError::InvalidZipCode));

        let result = Address::new(props("12345#", "US"));
        assert!(matches!(result.unwrap_err(), AddressError::InvalidZipCode));
    }

    #[test]
    fn should_reject_country_that_is_not_two_letters() {
        let result = Address::new(props("12345", "USA"));
        assert!(matches!(result.unwrap_err(), AddressError::InvalidCountry));
    }

    #[test]
    fn should_reject_blank_street_and_city() {
        let mut p = props("12345", "US");
        p.street = "   ".to_string();
        assert!(matches!(Address::new(p).unwrap_err(), AddressError::StreetEmpty));

        let mut p = props("12345", "US");
        p.city = String::new();
        assert!(matches!(Address::new(p).unwrap_err(), AddressError::CityEmpty));
    }
}

use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::address::errors::AddressError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_body};

impl IntoErrorResponse for AddressError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = match &self {
            AddressError::StreetEmpty
            | AddressError::CityEmpty
            | AddressError::InvalidZipCode
            | AddressError::InvalidCountry => (StatusCode::BAD_REQUEST, "ValidationError"),
            AddressError::NotFound | AddressError::DefaultNotFound => {
                (StatusCode::NOT_FOUND, "NotFound")
            }
            AddressError::DefaultConflict => (StatusCode::CONFLICT, "Conflict"),
            AddressError::Repository(_) => (StatusCode::INTERNAL_SERVER_ERROR, "InternalError"),
        };

        (status, error_body(name, self.to_string()))
    }
}

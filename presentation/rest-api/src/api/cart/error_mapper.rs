use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::cart::errors::CartError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_body};

impl IntoErrorResponse for CartError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = match &self {
            CartError::InvalidQuantity => (StatusCode::BAD_REQUEST, "ValidationError"),
            CartError::ProductNotFound | CartError::NotFound | CartError::ItemNotFound => {
                (StatusCode::NOT_FOUND, "NotFound")
            }
            CartError::ProductUnavailable | CartError::InsufficientStock(_) => {
                (StatusCode::CONFLICT, "Conflict")
            }
            CartError::Repository(_) => (StatusCode::INTERNAL_SERVER_ERROR, "InternalError"),
        };

        (status, error_body(name, self.to_string()))
    }
}

use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::order::errors::OrderError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_body};

impl IntoErrorResponse for OrderError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = match &self {
            OrderError::InvalidShippingCost | OrderError::InvalidStatus(_) => {
                (StatusCode::BAD_REQUEST, "ValidationError")
            }
            OrderError::ShippingAddressNotFound
            | OrderError::ProductNotFound(_)
            | OrderError::NotFound => (StatusCode::NOT_FOUND, "NotFound"),
            OrderError::CartEmpty | OrderError::InsufficientStock(_) => {
                (StatusCode::CONFLICT, "Conflict")
            }
            OrderError::AccessDenied => (StatusCode::FORBIDDEN, "AccessDenied"),
            OrderError::Repository(_) => (StatusCode::INTERNAL_SERVER_ERROR, "InternalError"),
        };

        (status, error_body(name, self.to_string()))
    }
}

use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::product::errors::ProductError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_body};

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = match &self {
            ProductError::NameEmpty
            | ProductError::NegativePrice
            | ProductError::NegativeStock
            | ProductError::InvalidPriceRange => (StatusCode::BAD_REQUEST, "ValidationError"),
            ProductError::NotFound => (StatusCode::NOT_FOUND, "NotFound"),
            ProductError::AccessDenied => (StatusCode::FORBIDDEN, "AccessDenied"),
            ProductError::Repository(_) => (StatusCode::INTERNAL_SERVER_ERROR, "InternalError"),
        };

        (status, error_body(name, self.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_validation_errors_to_bad_request() {
        for err in [
            ProductError::NameEmpty,
            ProductError::NegativePrice,
            ProductError::NegativeStock,
            ProductError::InvalidPriceRange,
        ] {
            let (status, json) = err.into_error_response();
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(json.0.name, "ValidationError");
        }
    }

    #[test]
    fn should_map_non_admin_to_forbidden() {
        let (status, json) = ProductError::AccessDenied.into_error_response();

        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(json.0.message, "product.access_denied");
    }

    #[test]
    fn should_map_missing_product_to_not_found() {
        let (status, _) = ProductError::NotFound.into_error_response();
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}

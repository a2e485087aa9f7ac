use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

#[derive(Object, Debug)]
pub struct ErrorResponse {
    pub name: String,
    pub message: String,
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}

pub fn error_body(name: &str, message: impl Into<String>) -> Json<ErrorResponse> {
    Json(ErrorResponse {
        name: name.to_string(),
        message: message.into(),
    })
}

/// 400 body for input rejected before reaching a use case.
pub fn validation_error(message: impl Into<String>) -> Json<ErrorResponse> {
    error_body("ValidationError", message)
}

pub fn invalid_id(resource: &str) -> Json<ErrorResponse> {
    validation_error(format!("{resource}.invalid_id"))
}

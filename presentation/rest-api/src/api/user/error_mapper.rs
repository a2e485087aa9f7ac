use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::user::errors::UserError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_body};

impl IntoErrorResponse for UserError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = match &self {
            UserError::InvalidEmail
            | UserError::FirstNameEmpty
            | UserError::LastNameEmpty
            | UserError::PasswordTooShort => (StatusCode::BAD_REQUEST, "ValidationError"),
            UserError::EmailAlreadyRegistered => (StatusCode::CONFLICT, "Conflict"),
            UserError::InvalidCredentials => (StatusCode::UNAUTHORIZED, "Unauthorized"),
            UserError::AccountDisabled => (StatusCode::FORBIDDEN, "AccessDenied"),
            UserError::NotFound => (StatusCode::NOT_FOUND, "NotFound"),
            UserError::PasswordHashing(_) | UserError::TokenIssuing(_) => {
                tracing::error!(error = %self, "credential processing failed");
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    error_body("InternalError", "user.credentials_unavailable"),
                );
            }
            UserError::Repository(_) => (StatusCode::INTERNAL_SERVER_ERROR, "InternalError"),
        };

        (status, error_body(name, self.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::errors::RepositoryError;

    #[test]
    fn should_map_duplicate_email_to_conflict() {
        let (status, json) = UserError::EmailAlreadyRegistered.into_error_response();

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(json.0.message, "user.email_already_registered");
    }

    #[test]
    fn should_map_bad_credentials_to_unauthorized() {
        let (status, _) = UserError::InvalidCredentials.into_error_response();
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn should_map_disabled_account_to_forbidden() {
        let (status, json) = UserError::AccountDisabled.into_error_response();

        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(json.0.name, "AccessDenied");
    }

    #[test]
    fn should_hide_hashing_details() {
        let (status, json) =
            UserError::PasswordHashing("salt string too short".to_string()).into_error_response();

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!json.0.message.contains("salt"));
    }

    #[test]
    fn should_map_repository_failure_to_internal_error() {
        let (status, json) =
            UserError::Repository(RepositoryError::DatabaseError).into_error_response();

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json.0.message, "repository.persistence");
    }
}

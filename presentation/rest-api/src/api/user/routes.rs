use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::user::use_cases::get_profile::{GetProfileParams, GetProfileUseCase};
use business::domain::user::use_cases::update_profile::{
    UpdateProfileParams, UpdateProfileUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::security::BearerAuth;
use crate::api::tags::ApiTags;
use crate::api::user::dto::{UpdateProfileRequest, UserResponse};

pub struct UserApi {
    get_profile_use_case: Arc<dyn GetProfileUseCase>,
    update_profile_use_case: Arc<dyn UpdateProfileUseCase>,
}

impl UserApi {
    pub fn new(
        get_profile_use_case: Arc<dyn GetProfileUseCase>,
        update_profile_use_case: Arc<dyn UpdateProfileUseCase>,
    ) -> Self {
        Self {
            get_profile_use_case,
            update_profile_use_case,
        }
    }
}

/// Profile of the authenticated user
#[OpenApi]
impl UserApi {
    /// Get my profile
    #[oai(path = "/users/me", method = "get", tag = "ApiTags::Users")]
    async fn get_me(&self, auth: BearerAuth) -> ProfileResponse {
        let params = GetProfileParams {
            user_id: auth.0.user_id,
        };

        match self.get_profile_use_case.execute(params).await {
            Ok(user) => ProfileResponse::Ok(Json(user.into())),
            Err(err) => ProfileResponse::from_error(err.into_error_response()),
        }
    }

    /// Update my profile
    ///
    /// Only the provided, non-blank names are changed.
    #[oai(path = "/users/me", method = "put", tag = "ApiTags::Users")]
    async fn update_me(
        &self,
        auth: BearerAuth,
        body: Json<UpdateProfileRequest>,
    ) -> ProfileResponse {
        let params = UpdateProfileParams {
            user_id: auth.0.user_id,
            first_name: body.0.first_name,
            last_name: body.0.last_name,
        };

        match self.update_profile_use_case.execute(params).await {
            Ok(user) => ProfileResponse::Ok(Json(user.into())),
            Err(err) => ProfileResponse::from_error(err.into_error_response()),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum ProfileResponse {
    #[oai(status = 200)]
    Ok(Json<UserResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl ProfileResponse {
    fn from_error((status, json): (poem::http::StatusCode, Json<ErrorResponse>)) -> Self {
        match status.as_u16() {
            400 => Self::BadRequest(json),
            404 => Self::NotFound(json),
            _ => Self::InternalError(json),
        }
    }
}

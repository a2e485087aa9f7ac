use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::user::use_cases::login::{LoginParams, LoginUseCase};
use business::domain::user::use_cases::register::{RegisterUserParams, RegisterUserUseCase};

use crate::api::auth::dto::{AuthResponse, LoginRequest, RegisterRequest};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct AuthApi {
    register_use_case: Arc<dyn RegisterUserUseCase>,
    login_use_case: Arc<dyn LoginUseCase>,
}

impl AuthApi {
    pub fn new(
        register_use_case: Arc<dyn RegisterUserUseCase>,
        login_use_case: Arc<dyn LoginUseCase>,
    ) -> Self {
        Self {
            register_use_case,
            login_use_case,
        }
    }
}

/// Public registration and login, both answering with a bearer token
#[OpenApi]
impl AuthApi {
    /// Register a customer account
    #[oai(path = "/auth/register", method = "post", tag = "ApiTags::Auth")]
    async fn register(&self, body: Json<RegisterRequest>) -> RegisterResponse {
        let params = RegisterUserParams {
            email: body.0.email,
            password: body.0.password,
            first_name: body.0.first_name,
            last_name: body.0.last_name,
        };

        match self.register_use_case.execute(params).await {
            Ok(session) => RegisterResponse::Created(Json(session.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => RegisterResponse::BadRequest(json),
                    409 => RegisterResponse::Conflict(json),
                    _ => RegisterResponse::InternalError(json),
                }
            }
        }
    }

    /// Log in with email and password
    #[oai(path = "/auth/login", method = "post", tag = "ApiTags::Auth")]
    async fn login(&self, body: Json<LoginRequest>) -> LoginResponse {
        let params = LoginParams {
            email: body.0.email,
            password: body.0.password,
        };

        match self.login_use_case.execute(params).await {
            Ok(session) => LoginResponse::Ok(Json(session.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    401 => LoginResponse::Unauthorized(json),
                    403 => LoginResponse::Forbidden(json),
                    _ => LoginResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum RegisterResponse {
    #[oai(status = 201)]
    Created(Json<AuthResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum LoginResponse {
    #[oai(status = 200)]
    Ok(Json<AuthResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

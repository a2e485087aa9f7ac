use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::address::use_cases::create::{CreateAddressParams, CreateAddressUseCase};
use business::domain::address::use_cases::delete::{DeleteAddressParams, DeleteAddressUseCase};
use business::domain::address::use_cases::get_all::{
    GetAllAddressesParams, GetAllAddressesUseCase,
};
use business::domain::address::use_cases::get_default::{
    GetDefaultAddressParams, GetDefaultAddressUseCase,
};

use crate::api::address::dto::{AddressResponse, CreateAddressRequest};
use crate::api::error::{ErrorResponse, IntoErrorResponse, invalid_id};
use crate::api::security::BearerAuth;
use crate::api::tags::ApiTags;

pub struct AddressApi {
    create_use_case: Arc<dyn CreateAddressUseCase>,
    get_all_use_case: Arc<dyn GetAllAddressesUseCase>,
    get_default_use_case: Arc<dyn GetDefaultAddressUseCase>,
    delete_use_case: Arc<dyn DeleteAddressUseCase>,
}

impl AddressApi {
    pub fn new(
        create_use_case: Arc<dyn CreateAddressUseCase>,
        get_all_use_case: Arc<dyn GetAllAddressesUseCase>,
        get_default_use_case: Arc<dyn GetDefaultAddressUseCase>,
        delete_use_case: Arc<dyn DeleteAddressUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            get_default_use_case,
            delete_use_case,
        }
    }
}

/// Shipping addresses of the authenticated user
#[OpenApi]
impl AddressApi {
    /// List my addresses
    ///
    /// The default address comes first.
    #[oai(path = "/addresses", method = "get", tag = "ApiTags::Addresses")]
    async fn get_addresses(&self, auth: BearerAuth) -> GetAddressesResponse {
        let params = GetAllAddressesParams {
            user_id: auth.0.user_id,
        };

        match self.get_all_use_case.execute(params).await {
            Ok(addresses) => GetAddressesResponse::Ok(Json(
                addresses.into_iter().map(AddressResponse::from).collect(),
            )),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAddressesResponse::InternalError(json)
            }
        }
    }

    /// Add an address
    #[oai(path = "/addresses", method = "post", tag = "ApiTags::Addresses")]
    async fn create_address(
        &self,
        auth: BearerAuth,
        body: Json<CreateAddressRequest>,
    ) -> CreateAddressResponse {
        let params = CreateAddressParams {
            user_id: auth.0.user_id,
            street: body.0.street,
            city: body.0.city,
            state: body.0.state,
            zip_code: body.0.zip_code,
            country: body.0.country,
            is_default: body.0.is_default,
        };

        match self.create_use_case.execute(params).await {
            Ok(address) => CreateAddressResponse::Created(Json(address.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateAddressResponse::BadRequest(json),
                    409 => CreateAddressResponse::Conflict(json),
                    _ => CreateAddressResponse::InternalError(json),
                }
            }
        }
    }

    /// Get my default address
    #[oai(path = "/addresses/default", method = "get", tag = "ApiTags::Addresses")]
    async fn get_default_address(&self, auth: BearerAuth) -> GetDefaultAddressResponse {
        let params = GetDefaultAddressParams {
            user_id: auth.0.user_id,
        };

        match self.get_default_use_case.execute(params).await {
            Ok(address) => GetDefaultAddressResponse::Ok(Json(address.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetDefaultAddressResponse::NotFound(json),
                    _ => GetDefaultAddressResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete one of my addresses
    ///
    /// No other address is promoted when the default is deleted.
    #[oai(path = "/addresses/:id", method = "delete", tag = "ApiTags::Addresses")]
    async fn delete_address(&self, auth: BearerAuth, id: Path<String>) -> DeleteAddressResponse {
        let Ok(uuid) = Uuid::parse_str(&id.0) else {
            return DeleteAddressResponse::BadRequest(invalid_id("address"));
        };

        let params = DeleteAddressParams {
            user_id: auth.0.user_id,
            id: uuid,
        };

        match self.delete_use_case.execute(params).await {
            Ok(()) => DeleteAddressResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => DeleteAddressResponse::NotFound(json),
                    _ => DeleteAddressResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAddressesResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<AddressResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateAddressResponse {
    #[oai(status = 201)]
    Created(Json<AddressResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetDefaultAddressResponse {
    #[oai(status = 200)]
    Ok(Json<AddressResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteAddressResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

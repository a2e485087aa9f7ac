use std::sync::Arc;

use poem::http::StatusCode;
use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::cart::use_cases::add_item::{AddCartItemParams, AddCartItemUseCase};
use business::domain::cart::use_cases::clear::{ClearCartParams, ClearCartUseCase};
use business::domain::cart::use_cases::get::{GetCartParams, GetCartUseCase};
use business::domain::cart::use_cases::remove_item::{
    RemoveCartItemParams, RemoveCartItemUseCase,
};
use business::domain::cart::use_cases::update_item::{
    UpdateCartItemParams, UpdateCartItemUseCase,
};

use crate::api::cart::dto::{AddCartItemRequest, CartResponse, UpdateCartItemRequest};
use crate::api::error::{ErrorResponse, IntoErrorResponse, invalid_id};
use crate::api::security::BearerAuth;
use crate::api::tags::ApiTags;

pub struct CartApi {
    get_use_case: Arc<dyn GetCartUseCase>,
    add_item_use_case: Arc<dyn AddCartItemUseCase>,
    update_item_use_case: Arc<dyn UpdateCartItemUseCase>,
    remove_item_use_case: Arc<dyn RemoveCartItemUseCase>,
    clear_use_case: Arc<dyn ClearCartUseCase>,
}

impl CartApi {
    pub fn new(
        get_use_case: Arc<dyn GetCartUseCase>,
        add_item_use_case: Arc<dyn AddCartItemUseCase>,
        update_item_use_case: Arc<dyn UpdateCartItemUseCase>,
        remove_item_use_case: Arc<dyn RemoveCartItemUseCase>,
        clear_use_case: Arc<dyn ClearCartUseCase>,
    ) -> Self {
        Self {
            get_use_case,
            add_item_use_case,
            update_item_use_case,
            remove_item_use_case,
            clear_use_case,
        }
    }
}

/// Shopping cart of the authenticated user
#[OpenApi]
impl CartApi {
    /// Get my cart
    ///
    /// Answers an empty cart when nothing was added yet.
    #[oai(path = "/cart", method = "get", tag = "ApiTags::Cart")]
    async fn get_cart(&self, auth: BearerAuth) -> CartMutationResponse {
        let params = GetCartParams {
            user_id: auth.0.user_id,
        };

        match self.get_use_case.execute(params).await {
            Ok(cart) => CartMutationResponse::Ok(Json(cart.into())),
            Err(err) => CartMutationResponse::from_error(err.into_error_response()),
        }
    }

    /// Add a product to my cart
    ///
    /// Adding a product already in the cart increases its quantity.
    #[oai(path = "/cart/items", method = "post", tag = "ApiTags::Cart")]
    async fn add_item(
        &self,
        auth: BearerAuth,
        body: Json<AddCartItemRequest>,
    ) -> CartMutationResponse {
        let params = AddCartItemParams {
            user_id: auth.0.user_id,
            product_id: body.0.product_id,
            quantity: body.0.quantity,
        };

        match self.add_item_use_case.execute(params).await {
            Ok(cart) => CartMutationResponse::Ok(Json(cart.into())),
            Err(err) => CartMutationResponse::from_error(err.into_error_response()),
        }
    }

    /// Set the quantity of a cart line
    #[oai(path = "/cart/items/:product_id", method = "put", tag = "ApiTags::Cart")]
    async fn update_item(
        &self,
        auth: BearerAuth,
        product_id: Path<String>,
        body: Json<UpdateCartItemRequest>,
    ) -> CartMutationResponse {
        let Ok(product_id) = Uuid::parse_str(&product_id.0) else {
            return CartMutationResponse::BadRequest(invalid_id("product"));
        };

        let params = UpdateCartItemParams {
            user_id: auth.0.user_id,
            product_id,
            quantity: body.0.quantity,
        };

        match self.update_item_use_case.execute(params).await {
            Ok(cart) => CartMutationResponse::Ok(Json(cart.into())),
            Err(err) => CartMutationResponse::from_error(err.into_error_response()),
        }
    }

    /// Remove a product from my cart
    #[oai(path = "/cart/items/:product_id", method = "delete", tag = "ApiTags::Cart")]
    async fn remove_item(&self, auth: BearerAuth, product_id: Path<String>) -> CartDeleteResponse {
        let Ok(product_id) = Uuid::parse_str(&product_id.0) else {
            return CartDeleteResponse::BadRequest(invalid_id("product"));
        };

        let params = RemoveCartItemParams {
            user_id: auth.0.user_id,
            product_id,
        };

        match self.remove_item_use_case.execute(params).await {
            Ok(()) => CartDeleteResponse::NoContent,
            Err(err) => CartDeleteResponse::from_error(err.into_error_response()),
        }
    }

    /// Empty my cart
    #[oai(path = "/cart", method = "delete", tag = "ApiTags::Cart")]
    async fn clear_cart(&self, auth: BearerAuth) -> CartDeleteResponse {
        let params = ClearCartParams {
            user_id: auth.0.user_id,
        };

        match self.clear_use_case.execute(params).await {
            Ok(()) => CartDeleteResponse::NoContent,
            Err(err) => CartDeleteResponse::from_error(err.into_error_response()),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CartMutationResponse {
    #[oai(status = 200)]
    Ok(Json<CartResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl CartMutationResponse {
    fn from_error((status, json): (StatusCode, Json<ErrorResponse>)) -> Self {
        match status.as_u16() {
            400 => Self::BadRequest(json),
            404 => Self::NotFound(json),
            409 => Self::Conflict(json),
            _ => Self::InternalError(json),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CartDeleteResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl CartDeleteResponse {
    fn from_error((status, json): (StatusCode, Json<ErrorResponse>)) -> Self {
        match status.as_u16() {
            400 => Self::BadRequest(json),
            404 => Self::NotFound(json),
            _ => Self::InternalError(json),
        }
    }
}

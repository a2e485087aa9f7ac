use std::sync::Arc;

use poem::http::StatusCode;
use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};
use uuid::Uuid;

use business::domain::order::errors::OrderError;
use business::domain::order::use_cases::get_by_id::{GetOrderByIdParams, GetOrderByIdUseCase};
use business::domain::order::use_cases::get_by_status::{
    GetOrdersByStatusParams, GetOrdersByStatusUseCase,
};
use business::domain::order::use_cases::get_user_orders::{
    DEFAULT_ORDERS_PAGE_SIZE, GetUserOrdersParams, GetUserOrdersUseCase,
};
use business::domain::order::use_cases::place::{PlaceOrderParams, PlaceOrderUseCase};
use business::domain::order::use_cases::update_status::{
    UpdateOrderStatusParams, UpdateOrderStatusUseCase,
};
use business::domain::order::value_objects::OrderStatus;
use business::domain::shared::pagination::PageRequest;

use crate::api::error::{ErrorResponse, IntoErrorResponse, invalid_id};
use crate::api::money::parse_optional_amount;
use crate::api::order::dto::{OrderPageResponse, OrderResponse, PlaceOrderRequest};
use crate::api::security::BearerAuth;
use crate::api::tags::ApiTags;

pub struct OrderApi {
    place_use_case: Arc<dyn PlaceOrderUseCase>,
    get_by_id_use_case: Arc<dyn GetOrderByIdUseCase>,
    get_user_orders_use_case: Arc<dyn GetUserOrdersUseCase>,
    update_status_use_case: Arc<dyn UpdateOrderStatusUseCase>,
    get_by_status_use_case: Arc<dyn GetOrdersByStatusUseCase>,
}

impl OrderApi {
    pub fn new(
        place_use_case: Arc<dyn PlaceOrderUseCase>,
        get_by_id_use_case: Arc<dyn GetOrderByIdUseCase>,
        get_user_orders_use_case: Arc<dyn GetUserOrdersUseCase>,
        update_status_use_case: Arc<dyn UpdateOrderStatusUseCase>,
        get_by_status_use_case: Arc<dyn GetOrdersByStatusUseCase>,
    ) -> Self {
        Self {
            place_use_case,
            get_by_id_use_case,
            get_user_orders_use_case,
            update_status_use_case,
            get_by_status_use_case,
        }
    }
}

fn parse_status(raw: &str) -> Result<OrderStatus, OrderError> {
    raw.parse()
        .map_err(|_| OrderError::InvalidStatus(raw.trim().to_string()))
}

/// Checkout and order history
#[OpenApi]
impl OrderApi {
    /// Place an order from my cart
    ///
    /// Reserves stock for every line, snapshots the shipping address and
    /// empties the cart. Tax is 10% of the subtotal. A cart that could not
    /// be emptied afterwards is logged and does not fail the request.
    #[oai(path = "/orders", method = "post", tag = "ApiTags::Orders")]
    async fn place_order(&self, auth: BearerAuth, body: Json<PlaceOrderRequest>) -> PlaceOrderResponse {
        let shipping_cost =
            match parse_optional_amount("shipping_cost", body.0.shipping_cost.as_deref()) {
                Ok(cost) => cost,
                Err(json) => return PlaceOrderResponse::BadRequest(json),
            };

        let params = PlaceOrderParams {
            user_id: auth.0.user_id,
            shipping_address_id: body.0.shipping_address_id,
            shipping_cost,
        };

        match self.place_use_case.execute(params).await {
            Ok(order) => PlaceOrderResponse::Created(Json(order.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => PlaceOrderResponse::BadRequest(json),
                    404 => PlaceOrderResponse::NotFound(json),
                    409 => PlaceOrderResponse::Conflict(json),
                    _ => PlaceOrderResponse::InternalError(json),
                }
            }
        }
    }

    /// List my orders, newest first
    #[oai(path = "/orders", method = "get", tag = "ApiTags::Orders")]
    async fn get_my_orders(
        &self,
        auth: BearerAuth,
        page: Query<Option<u32>>,
        size: Query<Option<u32>>,
    ) -> GetMyOrdersResponse {
        let params = GetUserOrdersParams {
            user_id: auth.0.user_id,
            page: PageRequest::new(
                page.0.unwrap_or(0),
                size.0.unwrap_or(DEFAULT_ORDERS_PAGE_SIZE),
            ),
        };

        match self.get_user_orders_use_case.execute(params).await {
            Ok(page) => GetMyOrdersResponse::Ok(Json(page.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetMyOrdersResponse::InternalError(json)
            }
        }
    }

    /// Get an order by ID
    ///
    /// Customers may only read their own orders; admins may read any.
    #[oai(path = "/orders/:id", method = "get", tag = "ApiTags::Orders")]
    async fn get_order_by_id(&self, auth: BearerAuth, id: Path<String>) -> SingleOrderResponse {
        let Ok(uuid) = Uuid::parse_str(&id.0) else {
            return SingleOrderResponse::BadRequest(invalid_id("order"));
        };

        let params = GetOrderByIdParams {
            identity: auth.0,
            id: uuid,
        };

        match self.get_by_id_use_case.execute(params).await {
            Ok(order) => SingleOrderResponse::Ok(Json(order.into())),
            Err(err) => SingleOrderResponse::from_error(err.into_error_response()),
        }
    }

    /// Change an order's status (admin)
    #[oai(path = "/orders/:id/status", method = "put", tag = "ApiTags::Orders")]
    async fn update_order_status(
        &self,
        auth: BearerAuth,
        id: Path<String>,
        status: Query<String>,
    ) -> SingleOrderResponse {
        let Ok(uuid) = Uuid::parse_str(&id.0) else {
            return SingleOrderResponse::BadRequest(invalid_id("order"));
        };
        let status = match parse_status(&status.0) {
            Ok(status) => status,
            Err(err) => return SingleOrderResponse::from_error(err.into_error_response()),
        };

        let params = UpdateOrderStatusParams {
            identity: auth.0,
            id: uuid,
            status,
        };

        match self.update_status_use_case.execute(params).await {
            Ok(order) => SingleOrderResponse::Ok(Json(order.into())),
            Err(err) => SingleOrderResponse::from_error(err.into_error_response()),
        }
    }

    /// List orders in a status, newest first (admin)
    #[oai(
        path = "/orders/admin/status/:status",
        method = "get",
        tag = "ApiTags::Orders"
    )]
    async fn get_orders_by_status(
        &self,
        auth: BearerAuth,
        status: Path<String>,
    ) -> GetOrdersByStatusResponse {
        let status = match parse_status(&status.0) {
            Ok(status) => status,
            Err(err) => {
                let (_status, json) = err.into_error_response();
                return GetOrdersByStatusResponse::BadRequest(json);
            }
        };

        let params = GetOrdersByStatusParams {
            identity: auth.0,
            status,
        };

        match self.get_by_status_use_case.execute(params).await {
            Ok(orders) => GetOrdersByStatusResponse::Ok(Json(
                orders.into_iter().map(OrderResponse::from).collect(),
            )),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    403 => GetOrdersByStatusResponse::Forbidden(json),
                    _ => GetOrdersByStatusResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum PlaceOrderResponse {
    #[oai(status = 201)]
    Created(Json<OrderResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetMyOrdersResponse {
    #[oai(status = 200)]
    Ok(Json<OrderPageResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum SingleOrderResponse {
    #[oai(status = 200)]
    Ok(Json<OrderResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl SingleOrderResponse {
    fn from_error((status, json): (StatusCode, Json<ErrorResponse>)) -> Self {
        match status.as_u16() {
            400 => Self::BadRequest(json),
            403 => Self::Forbidden(json),
            404 => Self::NotFound(json),
            _ => Self::InternalError(json),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetOrdersByStatusResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<OrderResponse>>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

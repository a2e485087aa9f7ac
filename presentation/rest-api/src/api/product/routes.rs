use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};
use uuid::Uuid;

use business::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use business::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use business::domain::product::use_cases::get_by_id::{
    GetProductByIdParams, GetProductByIdUseCase,
};
use business::domain::product::use_cases::search::{SearchProductsParams, SearchProductsUseCase};
use business::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};
use business::domain::product::value_objects::ProductFilter;
use business::domain::shared::pagination::{DEFAULT_PAGE_SIZE, PageRequest};

use crate::api::error::{ErrorResponse, IntoErrorResponse, invalid_id};
use crate::api::money::{parse_amount, parse_optional_amount};
use crate::api::product::dto::{ProductPageResponse, ProductRequest, ProductResponse};
use crate::api::security::BearerAuth;
use crate::api::tags::ApiTags;

pub struct ProductApi {
    search_use_case: Arc<dyn SearchProductsUseCase>,
    get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
    create_use_case: Arc<dyn CreateProductUseCase>,
    update_use_case: Arc<dyn UpdateProductUseCase>,
    delete_use_case: Arc<dyn DeleteProductUseCase>,
}

impl ProductApi {
    pub fn new(
        search_use_case: Arc<dyn SearchProductsUseCase>,
        get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
        create_use_case: Arc<dyn CreateProductUseCase>,
        update_use_case: Arc<dyn UpdateProductUseCase>,
        delete_use_case: Arc<dyn DeleteProductUseCase>,
    ) -> Self {
        Self {
            search_use_case,
            get_by_id_use_case,
            create_use_case,
            update_use_case,
            delete_use_case,
        }
    }
}

/// Product catalog API
///
/// Browsing is public. Creating, updating and deleting require the admin role.
#[OpenApi]
impl ProductApi {
    /// Search active products
    ///
    /// All given filters must match. `search` is a case-insensitive match on
    /// name or description. Newest products first.
    #[allow(clippy::too_many_arguments)]
    #[oai(path = "/products", method = "get", tag = "ApiTags::Products")]
    async fn search_products(
        &self,
        search: Query<Option<String>>,
        category: Query<Option<String>>,
        min_price: Query<Option<String>>,
        max_price: Query<Option<String>>,
        min_rating: Query<Option<String>>,
        page: Query<Option<u32>>,
        size: Query<Option<u32>>,
    ) -> SearchProductsResponse {
        let bounds = (
            parse_optional_amount("min_price", min_price.0.as_deref()),
            parse_optional_amount("max_price", max_price.0.as_deref()),
            parse_optional_amount("min_rating", min_rating.0.as_deref()),
        );
        let (min_price, max_price, min_rating) = match bounds {
            (Ok(min), Ok(max), Ok(rating)) => (min, max, rating),
            (Err(json), _, _) | (_, Err(json), _) | (_, _, Err(json)) => {
                return SearchProductsResponse::BadRequest(json);
            }
        };

        let params = SearchProductsParams {
            filter: ProductFilter {
                search: search.0,
                category: category.0,
                min_price,
                max_price,
                min_rating,
            },
            page: PageRequest::new(page.0.unwrap_or(0), size.0.unwrap_or(DEFAULT_PAGE_SIZE)),
        };

        match self.search_use_case.execute(params).await {
            Ok(page) => SearchProductsResponse::Ok(Json(page.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => SearchProductsResponse::BadRequest(json),
                    _ => SearchProductsResponse::InternalError(json),
                }
            }
        }
    }

    /// Get a product by ID
    #[oai(path = "/products/:id", method = "get", tag = "ApiTags::Products")]
    async fn get_product_by_id(&self, id: Path<String>) -> GetProductByIdResponse {
        let Ok(uuid) = Uuid::parse_str(&id.0) else {
            return GetProductByIdResponse::BadRequest(invalid_id("product"));
        };

        match self
            .get_by_id_use_case
            .execute(GetProductByIdParams { id: uuid })
            .await
        {
            Ok(product) => GetProductByIdResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetProductByIdResponse::NotFound(json),
                    _ => GetProductByIdResponse::InternalError(json),
                }
            }
        }
    }

    /// Create a product (admin)
    #[oai(path = "/products", method = "post", tag = "ApiTags::Products")]
    async fn create_product(
        &self,
        auth: BearerAuth,
        body: Json<ProductRequest>,
    ) -> WriteProductResponse {
        let price = match parse_amount("price", &body.0.price) {
            Ok(price) => price,
            Err(json) => return WriteProductResponse::BadRequest(json),
        };
        let params = CreateProductParams {
            identity: auth.0,
            name: body.0.name,
            description: body.0.description,
            price,
            stock_quantity: body.0.stock_quantity,
            category: body.0.category,
            images: body.0.images,
            active: body.0.active,
        };

        match self.create_use_case.execute(params).await {
            Ok(product) => WriteProductResponse::Created(Json(product.into())),
            Err(err) => WriteProductResponse::from_error(err.into_error_response()),
        }
    }

    /// Replace a product's editable fields (admin)
    #[oai(path = "/products/:id", method = "put", tag = "ApiTags::Products")]
    async fn update_product(
        &self,
        auth: BearerAuth,
        id: Path<String>,
        body: Json<ProductRequest>,
    ) -> WriteProductResponse {
        let Ok(uuid) = Uuid::parse_str(&id.0) else {
            return WriteProductResponse::BadRequest(invalid_id("product"));
        };
        let price = match parse_amount("price", &body.0.price) {
            Ok(price) => price,
            Err(json) => return WriteProductResponse::BadRequest(json),
        };
        let params = UpdateProductParams {
            identity: auth.0,
            id: uuid,
            name: body.0.name,
            description: body.0.description,
            price,
            stock_quantity: body.0.stock_quantity,
            category: body.0.category,
            images: body.0.images,
            active: body.0.active,
        };

        match self.update_use_case.execute(params).await {
            Ok(product) => WriteProductResponse::Ok(Json(product.into())),
            Err(err) => WriteProductResponse::from_error(err.into_error_response()),
        }
    }

    /// Delete a product (admin)
    #[oai(path = "/products/:id", method = "delete", tag = "ApiTags::Products")]
    async fn delete_product(&self, auth: BearerAuth, id: Path<String>) -> DeleteProductResponse {
        let Ok(uuid) = Uuid::parse_str(&id.0) else {
            return DeleteProductResponse::BadRequest(invalid_id("product"));
        };

        let params = DeleteProductParams {
            identity: auth.0,
            id: uuid,
        };

        match self.delete_use_case.execute(params).await {
            Ok(()) => DeleteProductResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    403 => DeleteProductResponse::Forbidden(json),
                    404 => DeleteProductResponse::NotFound(json),
                    _ => DeleteProductResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum SearchProductsResponse {
    #[oai(status = 200)]
    Ok(Json<ProductPageResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductByIdResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum WriteProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 201)]
    Created(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl WriteProductResponse {
    fn from_error((status, json): (poem::http::StatusCode, Json<ErrorResponse>)) -> Self {
        match status.as_u16() {
            400 => Self::BadRequest(json),
            403 => Self::Forbidden(json),
            404 => Self::NotFound(json),
            _ => Self::InternalError(json),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteProductResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

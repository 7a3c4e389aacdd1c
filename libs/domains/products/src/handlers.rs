//! Callable endpoints for the products domain

use axum::{extract::State, routing::post, Router};
use axum_helpers::{CallableErrorBody, CallableRequest, CallableResponse};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::{OpenApi, ToSchema};

use crate::error::ProductResult;
use crate::models::{
    CreatePayload, EnvelopeStatus, Product, ProductInput, ResponseEnvelope,
};
use crate::repository::ProductStore;
use crate::service::ProductService;

/// Request body of `createProduct`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateProductRequest {
    pub data: ProductInput,
}

/// Response body of `createProduct`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateProductResponse {
    pub result: ResponseEnvelope,
}

/// Response body of `listProducts`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ListProductsResponse {
    pub result: Vec<Product>,
}

/// OpenAPI documentation for Products API
#[derive(OpenApi)]
#[openapi(
    paths(create_product, list_products),
    components(schemas(
        Product,
        ProductInput,
        ResponseEnvelope,
        EnvelopeStatus,
        CreatePayload,
        CreateProductRequest,
        CreateProductResponse,
        ListProductsResponse,
        CallableErrorBody,
    )),
    tags(
        (name = "Products", description = "Remote-callable product operations")
    )
)]
pub struct ApiDoc;

/// Router exposing `POST /createProduct` and `POST /listProducts`
pub fn router<S: ProductStore + 'static>(service: ProductService<S>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/createProduct", post(create_product))
        .route("/listProducts", post(list_products))
        .with_state(shared_service)
}

/// Validate and store a product.
///
/// Validation failures still answer `200`; they are reported through the
/// envelope's `status` and `message`.
#[utoipa::path(
    post,
    path = "/createProduct",
    tag = "Products",
    request_body = CreateProductRequest,
    responses(
        (status = 200, description = "Envelope describing the outcome", body = CreateProductResponse),
        (status = 400, description = "Body is not a callable request", body = CallableErrorBody),
        (status = 500, description = "Store failure", body = CallableErrorBody)
    )
)]
async fn create_product<S: ProductStore>(
    State(service): State<Arc<ProductService<S>>>,
    CallableRequest(input): CallableRequest<ProductInput>,
) -> ProductResult<CallableResponse<ResponseEnvelope>> {
    let envelope = service.create_product(input).await?;
    Ok(CallableResponse(envelope))
}

/// Every stored product as `{name, price}`; the argument is ignored
#[utoipa::path(
    post,
    path = "/listProducts",
    tag = "Products",
    responses(
        (status = 200, description = "Stored products", body = ListProductsResponse),
        (status = 500, description = "Store failure", body = CallableErrorBody)
    )
)]
async fn list_products<S: ProductStore>(
    State(service): State<Arc<ProductService<S>>>,
    CallableRequest(_input): CallableRequest<serde_json::Value>,
) -> ProductResult<CallableResponse<Vec<Product>>> {
    let products = service.list_products().await?;
    Ok(CallableResponse(products))
}

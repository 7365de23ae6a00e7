use crate::domain::product::{FieldViolation, Product, ProductDraft, UpdateProduct};
use crate::transport::http::handlers::{health, products};
use crate::transport::http::types::{AppState, ErrorResponse};
use axum::routing::get;
use axum::Router;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthcheck_handler,
        products::list_products_handler,
        products::list_by_category_handler,
        products::get_product_handler,
        products::create_product_handler,
        products::update_product_handler,
        products::delete_product_handler
    ),
    components(schemas(Product, ProductDraft, UpdateProduct, FieldViolation, ErrorResponse))
)]
pub struct ApiDoc;

async fn root_handler() -> &'static str {
    "Product catalog API is running. See /swagger-ui for documentation."
}

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health::healthcheck_handler))
        .route(
            "/products",
            get(products::list_products_handler).post(products::create_product_handler),
        )
        .route(
            "/products/:id",
            get(products::get_product_handler)
                .put(products::update_product_handler)
                .delete(products::delete_product_handler),
        )
        .route(
            "/products/category/:category",
            get(products::list_by_category_handler),
        )
        .with_state(app_state)
}

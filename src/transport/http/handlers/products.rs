use crate::domain::product::{Product, ProductDraft, UpdateProduct};
use crate::transport::http::types::{bad_request_body, ApiError, AppState, ErrorResponse};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::info;

#[utoipa::path(
    get,
    path = "/products",
    responses(
        (status = 200, description = "All active products, name ascending", body = [Product]),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn list_products_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Product>>, ApiError> {
    let products = state.catalog.list_active().await?;
    Ok(Json(products))
}

#[utoipa::path(
    get,
    path = "/products/category/{category}",
    params(
        ("category" = String, Path, description = "Category name, matched case-insensitively")
    ),
    responses(
        (status = 200, description = "Active products in the category (possibly empty)", body = [Product]),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn list_by_category_handler(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<Json<Vec<Product>>, ApiError> {
    let products = state.catalog.list_by_category(&category).await?;
    Ok(Json(products))
}

#[utoipa::path(
    get,
    path = "/products/{id}",
    params(
        ("id" = i64, Path, description = "Product id")
    ),
    responses(
        (status = 200, description = "The active product with this id", body = Product),
        (status = 404, description = "No active product with this id", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn get_product_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Product>, ApiError> {
    let product = state.catalog.get_by_id(id).await?;
    Ok(Json(product))
}

#[utoipa::path(
    post,
    path = "/products",
    request_body = ProductDraft,
    responses(
        (status = 201, description = "Product created; Location points at it", body = Product,
            headers(("Location" = String, description = "URL of the created product"))),
        (status = 400, description = "Validation failure", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn create_product_handler(
    State(state): State<AppState>,
    body: Result<Json<ProductDraft>, JsonRejection>,
) -> Response {
    let Json(draft) = match body {
        Ok(body) => body,
        Err(err) => return bad_request_body(err),
    };

    match state.catalog.create(draft).await {
        Ok(product) => {
            info!(id = product.id, "product created");
            let location = format!("/products/{}", product.id);
            (
                StatusCode::CREATED,
                [(header::LOCATION, location)],
                Json(product),
            )
                .into_response()
        }
        Err(err) => ApiError::from(err).into_response(),
    }
}

#[utoipa::path(
    put,
    path = "/products/{id}",
    params(
        ("id" = i64, Path, description = "Product id")
    ),
    request_body = UpdateProduct,
    responses(
        (status = 204, description = "Product updated"),
        (status = 400, description = "Id mismatch or validation failure", body = ErrorResponse),
        (status = 404, description = "No product with this id", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn update_product_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    body: Result<Json<UpdateProduct>, JsonRejection>,
) -> Response {
    let Json(payload) = match body {
        Ok(body) => body,
        Err(err) => return bad_request_body(err),
    };

    match state.catalog.update(id, payload).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => ApiError::from(err).into_response(),
    }
}

#[utoipa::path(
    delete,
    path = "/products/{id}",
    params(
        ("id" = i64, Path, description = "Product id")
    ),
    responses(
        (status = 204, description = "Product soft-deleted"),
        (status = 404, description = "No product with this id", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn delete_product_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.catalog.delete(id).await?;
    info!(id, "product soft-deleted");
    Ok(StatusCode::NO_CONTENT)
}

//! 产品处理器

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::Json,
};
use tracing::info;

use super::model::{validate, Product, ProductDraft, ProductPayload};
use crate::app::AppState;
use crate::core::error::{CoreError, ErrorResponse};

fn product_id(path: Result<Path<i64>, PathRejection>) -> Result<i64, CoreError> {
    path.map(|Path(id)| id)
        .map_err(|rejection| CoreError::bad_request(rejection.body_text()))
}

fn product_draft(
    payload: Result<Json<ProductPayload>, JsonRejection>,
) -> Result<ProductDraft, CoreError> {
    let Json(payload) =
        payload.map_err(|rejection| CoreError::bad_request(rejection.body_text()))?;
    Ok(validate(&payload)?)
}

/// 获取全部产品
#[utoipa::path(
    get,
    path = "/products",
    tag = "products",
    responses(
        (status = 200, description = "List of products retrieved successfully", body = [Product])
    )
)]
pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<Product>>, CoreError> {
    let products = state.products.list_all().await?;
    Ok(Json(products))
}

/// 根据 ID 获取产品
#[utoipa::path(
    get,
    path = "/products/{id}",
    tag = "products",
    params(("id" = i64, Path, description = "Unique identifier of the product")),
    responses(
        (status = 200, description = "Product retrieved successfully", body = Product),
        (status = 404, description = "Product not found", body = ErrorResponse)
    )
)]
pub async fn get_product(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<Product>, CoreError> {
    let id = product_id(path)?;
    let product = state.products.get_by_id(id).await?;
    Ok(Json(product))
}

/// 创建产品
#[utoipa::path(
    post,
    path = "/products",
    tag = "products",
    request_body = ProductPayload,
    responses(
        (status = 201, description = "Product created successfully", body = Product),
        (status = 400, description = "Invalid product data", body = ErrorResponse)
    )
)]
pub async fn create_product(
    State(state): State<AppState>,
    payload: Result<Json<ProductPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<Product>), CoreError> {
    let draft = product_draft(payload)?;
    let product = state.products.create(draft).await?;

    info!("Created product: {} ({})", product.name, product.id);

    Ok((StatusCode::CREATED, Json(product)))
}

/// 更新产品，请求体整体替换原有字段
#[utoipa::path(
    put,
    path = "/products/{id}",
    tag = "products",
    params(("id" = i64, Path, description = "Unique identifier of the product to update")),
    request_body = ProductPayload,
    responses(
        (status = 200, description = "Product updated successfully", body = Product),
        (status = 400, description = "Invalid product data", body = ErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse)
    )
)]
pub async fn update_product(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<ProductPayload>, JsonRejection>,
) -> Result<Json<Product>, CoreError> {
    let id = product_id(path)?;
    let draft = product_draft(payload)?;
    let product = state.products.update(id, draft).await?;

    info!("Updated product: {} ({})", product.name, product.id);

    Ok(Json(product))
}

/// 删除产品
#[utoipa::path(
    delete,
    path = "/products/{id}",
    tag = "products",
    params(("id" = i64, Path, description = "Unique identifier of the product to delete")),
    responses(
        (status = 204, description = "Product deleted successfully"),
        (status = 404, description = "Product not found", body = ErrorResponse)
    )
)]
pub async fn delete_product(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, CoreError> {
    let id = product_id(path)?;
    state.products.delete(id).await?;

    info!("Deleted product: {}", id);

    Ok(StatusCode::NO_CONTENT)
}

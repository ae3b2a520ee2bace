//! 商品处理器

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use super::dto::{DeleteResponse, ProductRequest};
use super::error::{ApiError, ApiResult};
use super::AppState;
use crate::domain::entities::Product;
use crate::domain::value_objects::ProductId;

fn parse_id(raw: &str) -> ApiResult<ProductId> {
    raw.parse()
        .map_err(|_| ApiError::bad_request("Invalid product ID"))
}

fn parse_body(body: Result<Json<ProductRequest>, JsonRejection>) -> ApiResult<ProductRequest> {
    body.map(|Json(req)| req)
        .map_err(|_| ApiError::bad_request("Invalid request body"))
}

pub(super) async fn list(State(state): State<AppState>) -> ApiResult<Json<Vec<Product>>> {
    Ok(Json(state.product_service.get_all().await?))
}

pub(super) async fn create(
    State(state): State<AppState>,
    body: Result<Json<ProductRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Product>)> {
    let req = parse_body(body)?;
    let product = state.product_service.create(req.into_create()).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

pub(super) async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Product>> {
    let id = parse_id(&id)?;
    Ok(Json(state.product_service.get_by_id(id).await?))
}

pub(super) async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<ProductRequest>, JsonRejection>,
) -> ApiResult<Json<Product>> {
    let id = parse_id(&id)?;
    let req = parse_body(body)?;
    Ok(Json(state.product_service.update(req.into_update(id)).await?))
}

pub(super) async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let id = parse_id(&id)?;
    state.product_service.delete(id).await?;
    Ok(Json(DeleteResponse::new("Product deleted successfully")))
}

//! 分类处理器

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use super::dto::{CategoryRequest, DeleteResponse};
use super::error::{ApiError, ApiResult};
use super::AppState;
use crate::domain::entities::Category;
use crate::domain::value_objects::CategoryId;

fn parse_id(raw: &str) -> ApiResult<CategoryId> {
    raw.parse()
        .map_err(|_| ApiError::bad_request("Invalid category ID"))
}

fn parse_body(body: Result<Json<CategoryRequest>, JsonRejection>) -> ApiResult<CategoryRequest> {
    body.map(|Json(req)| req)
        .map_err(|_| ApiError::bad_request("Invalid request body"))
}

pub(super) async fn list(State(state): State<AppState>) -> ApiResult<Json<Vec<Category>>> {
    Ok(Json(state.category_service.get_all().await?))
}

pub(super) async fn create(
    State(state): State<AppState>,
    body: Result<Json<CategoryRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Category>)> {
    let req = parse_body(body)?;
    let category = state.category_service.create(req.into_create()).await?;
    Ok((StatusCode::CREATED, Json(category)))
}

pub(super) async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Category>> {
    let id = parse_id(&id)?;
    Ok(Json(state.category_service.get_by_id(id).await?))
}

pub(super) async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<CategoryRequest>, JsonRejection>,
) -> ApiResult<Json<Category>> {
    let id = parse_id(&id)?;
    let req = parse_body(body)?;
    Ok(Json(state.category_service.update(req.into_update(id)).await?))
}

pub(super) async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let id = parse_id(&id)?;
    state.category_service.delete(id).await?;
    Ok(Json(DeleteResponse::new("Category deleted successfully")))
}

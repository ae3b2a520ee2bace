//! HTTP/JSON 传输层

mod category_handler;
mod dto;
mod error;
mod product_handler;

use std::sync::Arc;

use axum::Router;
use axum::routing::get;

use crate::application::{CategoryService, ProductService};

pub use dto::{CategoryRequest, DeleteResponse, ProductRequest};
pub use error::{ApiError, ApiResult};

/// 处理器共享状态
#[derive(Clone)]
pub struct AppState {
    pub category_service: Arc<CategoryService>,
    pub product_service: Arc<ProductService>,
}

impl AppState {
    pub fn new(category_service: CategoryService, product_service: ProductService) -> Self {
        Self {
            category_service: Arc::new(category_service),
            product_service: Arc::new(product_service),
        }
    }
}

/// 目录 API 路由
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/categories",
            get(category_handler::list).post(category_handler::create),
        )
        .route(
            "/api/categories/{id}",
            get(category_handler::get)
                .put(category_handler::update)
                .delete(category_handler::delete),
        )
        .route(
            "/api/products",
            get(product_handler::list).post(product_handler::create),
        )
        .route(
            "/api/products/{id}",
            get(product_handler::get)
                .put(product_handler::update)
                .delete(product_handler::delete),
        )
        .with_state(state)
}

//! POS Catalog Service - 服务入口

use std::sync::Arc;

use kasir_bootstrap::{Infrastructure, run};
use tracing::info;

use pos_catalog::api::{AppState, routes};
use pos_catalog::application::{CategoryService, ProductService};
use pos_catalog::infrastructure::persistence::{
    PostgresCategoryRepository, PostgresProductRepository,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    run("config", |infra: Infrastructure| async move {
        info!("Initializing POS Catalog Service...");

        let pool = infra.postgres_pool();

        // 初始化仓储
        let category_repo = Arc::new(PostgresCategoryRepository::new(pool.clone()));
        let product_repo = Arc::new(PostgresProductRepository::new(pool));

        let state = AppState::new(
            CategoryService::new(category_repo),
            ProductService::new(product_repo),
        );

        info!("Catalog routes registered");
        Ok(routes(state))
    })
    .await
}

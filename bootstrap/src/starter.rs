//! 服务启动器
//!
//! 提供统一的 HTTP 服务启动模式

use std::future::Future;
use std::net::SocketAddr;

use axum::Router;
use kasir_config::{AppConfig, ServerConfig};
use kasir_errors::AppResult;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::health::health_routes;
use crate::infrastructure::Infrastructure;
use crate::runtime::{init_runtime, shutdown_signal};

/// 运行 HTTP 服务
///
/// 这是服务的唯一入口点。它负责：
/// 1. 加载 `.env` 与配置
/// 2. 初始化运行时（日志）
/// 3. 创建基础设施资源（连接池 + 启动连通性检查）
/// 4. 调用用户提供的闭包构建 API 路由
/// 5. 合并健康检查路由并挂载公共中间件
/// 6. 启动服务器并处理 graceful shutdown
///
/// # 示例
///
/// ```ignore
/// use kasir_bootstrap::run;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     run("config", |infra| async move {
///         Ok(my_routes(infra.postgres_pool()))
///     }).await
/// }
/// ```
pub async fn run<F, Fut>(
    config_dir: &str,
    router_builder: F,
) -> Result<(), Box<dyn std::error::Error>>
where
    F: FnOnce(Infrastructure) -> Fut,
    Fut: Future<Output = AppResult<Router>>,
{
    // 1. 加载配置
    dotenvy::dotenv().ok();
    let config = AppConfig::load(config_dir)?;

    // 2. 初始化运行时
    init_runtime(&config);

    info!("Starting {} service", config.app_name);

    // 3. 创建基础设施
    let infra = Infrastructure::from_config(config.clone()).await?;

    // 4. 构建 API 路由
    let api = router_builder(infra.clone()).await?;

    // 5. 合并健康检查路由
    let app = build_app(api, &infra);

    // 6. 启动服务器
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!(%addr, "HTTP server starting");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Service stopped");

    Ok(())
}

/// 组装最终路由：API + 健康检查 + 公共中间件
pub fn build_app(api: Router, infra: &Infrastructure) -> Router {
    with_layers(api.merge(health_routes(infra.health_checker())), infra.server_config())
}

/// 挂载公共中间件
///
/// 请求超时后处理器的 future 被丢弃，正在执行的查询随之取消并归还连接
pub fn with_layers(router: Router, server: &ServerConfig) -> Router {
    router
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}


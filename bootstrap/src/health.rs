//! 健康检查模块
//!
//! 提供 /health 和 /ready 端点

use axum::{Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::get};
use kasir_adapter_postgres::{HealthChecker, PoolHealthStatus};
use serde::Serialize;

/// 存活检查响应
#[derive(Debug, Clone, Serialize)]
pub struct LivenessStatus {
    pub status: &'static str,
    pub message: &'static str,
}

/// 就绪检查状态
#[derive(Debug, Clone, Serialize)]
pub struct HealthStatus {
    pub status: String,
    pub checks: Vec<ComponentHealth>,
}

/// 组件健康状态
#[derive(Debug, Clone, Serialize)]
pub struct ComponentHealth {
    pub name: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latency_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// 连接池规模与空闲/活跃连接数
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pool: Option<PoolHealthStatus>,
}

impl HealthStatus {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            checks: vec![],
        }
    }

    pub fn add_check(&mut self, check: ComponentHealth) {
        if check.status != "healthy" {
            self.status = "unhealthy".to_string();
        }
        self.checks.push(check);
    }

    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

impl ComponentHealth {
    pub fn healthy(name: impl Into<String>, latency_ms: Option<u64>) -> Self {
        Self {
            name: name.into(),
            status: "healthy".to_string(),
            latency_ms,
            message: None,
            pool: None,
        }
    }

    pub fn unhealthy(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: "unhealthy".to_string(),
            latency_ms: None,
            message: Some(message.into()),
            pool: None,
        }
    }

    pub fn with_pool(mut self, pool: PoolHealthStatus) -> Self {
        self.pool = Some(pool);
        self
    }
}

/// 健康检查路由
pub fn health_routes(checker: HealthChecker) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/ready", get(ready_handler))
        .with_state(checker)
}

/// Liveness 端点处理器，不访问任何依赖
async fn health_handler() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(LivenessStatus {
            status: "OK",
            message: "API Running",
        }),
    )
}

/// Readiness 端点处理器
async fn ready_handler(State(checker): State<HealthChecker>) -> impl IntoResponse {
    let result = checker.check().await;

    let postgres = if result.healthy {
        ComponentHealth::healthy("postgres", result.latency_ms)
    } else {
        ComponentHealth::unhealthy(
            "postgres",
            result.error.unwrap_or_else(|| "unknown error".to_string()),
        )
    };

    let mut status = HealthStatus::healthy();
    status.add_check(postgres.with_pool(result.pool_status));

    let code = if status.is_healthy() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (code, Json(status))
}

//! PostgreSQL 连接管理

use std::time::Duration;

use kasir_errors::{AppError, AppResult};
use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::{error, info};

use crate::mask_database_url;

/// PostgreSQL 连接池配置
#[derive(Debug, Clone)]
pub struct PostgresConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    /// 获取连接以及启动检查的超时
    pub connect_timeout: Duration,
    /// 超过 `min_connections` 的空闲连接在此时间后被回收
    pub idle_timeout: Duration,
}

impl Default for PostgresConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            max_connections: 25,
            min_connections: 0,
            connect_timeout: Duration::from_secs(5),
            idle_timeout: Duration::from_secs(600),
        }
    }
}

impl PostgresConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    pub fn with_max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }

    pub fn with_min_connections(mut self, min: u32) -> Self {
        self.min_connections = min;
        self
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    pub fn with_idle_timeout(mut self, timeout: Duration) -> Self {
        self.idle_timeout = timeout;
        self
    }

    /// 日志中使用的脱敏连接串
    pub fn masked_url(&self) -> String {
        mask_database_url(&self.url)
    }
}

/// 创建 PostgreSQL 连接池
///
/// 连接池本身惰性建立，随后在 `connect_timeout` 内执行一次连通性检查，
/// 检查失败或超时都返回 `AppError::Database`
pub async fn create_pool(config: &PostgresConfig) -> AppResult<PgPool> {
    info!(
        url = %config.masked_url(),
        max_connections = config.max_connections,
        "Connecting to database"
    );

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(config.connect_timeout)
        .idle_timeout(config.idle_timeout)
        .connect_lazy(&config.url)
        .map_err(|e| AppError::database(format!("Failed to create pool: {}", e)))?;

    match tokio::time::timeout(config.connect_timeout, check_connection(&pool)).await {
        Ok(Ok(())) => {
            info!("Database connected successfully");
            Ok(pool)
        }
        Ok(Err(e)) => {
            error!(error = %e, "Database connectivity check failed");
            Err(e)
        }
        Err(_) => {
            error!(timeout = ?config.connect_timeout, "Database connectivity check timed out");
            Err(AppError::database(format!(
                "Database connectivity check timed out after {:?}",
                config.connect_timeout
            )))
        }
    }
}

/// 检查数据库连接
pub async fn check_connection(pool: &PgPool) -> AppResult<()> {
    sqlx::query("SELECT 1")
        .execute(pool)
        .await
        .map_err(|e| AppError::database(format!("Database health check failed: {}", e)))?;
    Ok(())
}

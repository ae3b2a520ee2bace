//! 基础设施资源管理

use kasir_adapter_postgres::{HealthChecker, PostgresConfig, create_pool};
use kasir_config::{AppConfig, ServerConfig};
use kasir_errors::AppResult;
use secrecy::ExposeSecret;
use sqlx::PgPool;
use tracing::info;

/// 基础设施资源容器
///
/// 由 bootstrap 统一初始化，连接池内部是引用计数的，克隆开销很小
#[derive(Clone)]
pub struct Infrastructure {
    /// 应用配置
    config: AppConfig,
    /// PostgreSQL 连接池
    postgres_pool: PgPool,
}

impl Infrastructure {
    /// 从配置创建基础设施资源
    ///
    /// 连接池创建时会在 `connect_timeout` 内完成一次连通性检查
    pub async fn from_config(config: AppConfig) -> AppResult<Self> {
        let pg_config = Self::postgres_config(&config);
        let postgres_pool = create_pool(&pg_config).await?;
        info!(
            "PostgreSQL connection pool created (max_connections: {})",
            config.database.max_connections
        );

        Ok(Self {
            config,
            postgres_pool,
        })
    }

    fn postgres_config(config: &AppConfig) -> PostgresConfig {
        PostgresConfig::new(config.database.url.expose_secret())
            .with_max_connections(config.database.max_connections)
            .with_min_connections(config.database.min_connections)
            .with_connect_timeout(config.database.connect_timeout())
            .with_idle_timeout(config.database.idle_timeout())
    }

    /// 获取服务器配置
    pub fn server_config(&self) -> &ServerConfig {
        &self.config.server
    }

    /// 获取 PostgreSQL 连接池
    pub fn postgres_pool(&self) -> PgPool {
        self.postgres_pool.clone()
    }

    /// 数据库健康检查器
    pub fn health_checker(&self) -> HealthChecker {
        HealthChecker::new(self.postgres_pool.clone())
            .with_timeout(self.config.database.connect_timeout())
    }
}

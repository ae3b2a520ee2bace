//! kasir-bootstrap - 统一服务启动骨架
//!
//! 配置加载、日志初始化、连接池创建、健康检查路由和 HTTP 服务启动

mod health;
mod infrastructure;
mod runtime;
mod starter;

pub use health::*;
pub use infrastructure::*;
pub use runtime::*;
pub use starter::*;

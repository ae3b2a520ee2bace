//! kasir-adapter-postgres - PostgreSQL 适配器
//!
//! 连接池、启动连通性检查与健康检查

mod connection;
mod health;
mod mask;

pub use connection::*;
pub use health::*;
pub use mask::*;

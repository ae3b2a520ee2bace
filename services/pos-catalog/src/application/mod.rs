//! Application layer
//!
//! 校验 + 透传：校验失败在访问仓储之前返回，仓储错误原样向上传递

pub mod category_service;
pub mod commands;
pub mod product_service;

pub use category_service::CategoryService;
pub use commands::*;
pub use product_service::ProductService;

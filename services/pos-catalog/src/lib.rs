//! POS Catalog Service
//!
//! 商品与分类的 CRUD，HTTP/JSON 对外，PostgreSQL 持久化

pub mod api;
pub mod application;
pub mod domain;
pub mod infrastructure;

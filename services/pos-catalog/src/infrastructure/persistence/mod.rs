//! 持久化实现

mod postgres_category_repository;
mod postgres_product_repository;
mod rows;

#[cfg(test)]
pub mod memory;

pub use postgres_category_repository::PostgresCategoryRepository;
pub use postgres_product_repository::PostgresProductRepository;

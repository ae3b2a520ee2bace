//! 实体模块

mod category;
mod product;

pub use category::{Category, CategoryDraft};
pub use product::{Product, ProductDraft};

/// 名称列的最大长度（字符数）
pub const NAME_MAX_LEN: usize = 100;

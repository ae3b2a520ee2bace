//! 数据库行映射

use crate::domain::entities::{Category, Product};
use crate::domain::value_objects::{CategoryId, ProductId};

/// 分类列，查询时按此顺序选取
pub(crate) const CATEGORY_COLUMNS: &str = "id, name, description";

#[derive(Debug, sqlx::FromRow)]
pub(crate) struct CategoryRow {
    pub id: i32,
    pub name: String,
    pub description: String,
}

impl From<CategoryRow> for Category {
    fn from(row: CategoryRow) -> Self {
        Self {
            id: CategoryId(row.id),
            name: row.name,
            description: row.description,
        }
    }
}

/// 商品行与左连接得到的分类列
///
/// `joined_category_id` 来自 categories 表，只有它非空才说明分类存在；
/// `category_id` 来自 products 表，可能悬空
#[derive(Debug, sqlx::FromRow)]
pub(crate) struct ProductRow {
    pub id: i32,
    pub name: String,
    pub price: i64,
    pub stock: i32,
    pub category_id: Option<i32>,
    pub joined_category_id: Option<i32>,
    pub category_name: Option<String>,
    pub category_description: Option<String>,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        let category = row.joined_category_id.map(|id| Category {
            id: CategoryId(id),
            name: row.category_name.unwrap_or_default(),
            description: row.category_description.unwrap_or_default(),
        });

        Self {
            id: ProductId(row.id),
            name: row.name,
            price: row.price,
            stock: row.stock,
            category_id: row.category_id.map(CategoryId),
            category,
        }
    }
}

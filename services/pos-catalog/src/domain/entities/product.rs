//! 商品实体

use serde::{Deserialize, Serialize};

use super::Category;
use crate::domain::value_objects::{CategoryId, ProductId};

/// 商品
///
/// `category` 是读取时通过左外连接得到的分类快照：
/// 只有 `category_id` 非空且对应分类在读取时仍存在才会是 `Some`，
/// 悬空的 `category_id` 读出来是 `None`，不会出现零值分类
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// 最小货币单位
    pub price: i64,
    pub stock: i32,
    pub category_id: Option<CategoryId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
}

/// 尚未分配 ID 的商品数据
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    pub price: i64,
    pub stock: i32,
    pub category_id: Option<CategoryId>,
}

impl ProductDraft {
    pub fn new(name: impl Into<String>, price: i64, stock: i32) -> Self {
        Self {
            name: name.into(),
            price,
            stock,
            category_id: None,
        }
    }

    pub fn with_category(mut self, category_id: CategoryId) -> Self {
        self.category_id = Some(category_id);
        self
    }
}

impl Product {
    /// 由草稿和已解析的分类快照组装
    pub fn from_draft(id: ProductId, draft: ProductDraft, category: Option<Category>) -> Self {
        Self {
            id,
            name: draft.name,
            price: draft.price,
            stock: draft.stock,
            category_id: draft.category_id,
            category,
        }
    }
}

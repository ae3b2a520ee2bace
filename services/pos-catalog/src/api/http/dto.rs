//! 请求与响应体

use serde::{Deserialize, Serialize};

use crate::application::{
    CreateCategoryCommand, CreateProductCommand, UpdateCategoryCommand, UpdateProductCommand,
};
use crate::domain::value_objects::{CategoryId, ProductId};

/// 分类请求体，缺失字段取零值，多余字段（如 `id`）忽略
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CategoryRequest {
    pub name: String,
    pub description: String,
}

impl CategoryRequest {
    pub fn into_create(self) -> CreateCategoryCommand {
        CreateCategoryCommand {
            name: self.name,
            description: self.description,
        }
    }

    pub fn into_update(self, id: CategoryId) -> UpdateCategoryCommand {
        UpdateCategoryCommand {
            id,
            name: self.name,
            description: self.description,
        }
    }
}

/// 商品请求体
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProductRequest {
    pub name: String,
    pub price: i64,
    pub stock: i32,
    pub category_id: Option<CategoryId>,
}

impl ProductRequest {
    pub fn into_create(self) -> CreateProductCommand {
        CreateProductCommand {
            name: self.name,
            price: self.price,
            stock: self.stock,
            category_id: self.category_id,
        }
    }

    pub fn into_update(self, id: ProductId) -> UpdateProductCommand {
        UpdateProductCommand {
            id,
            name: self.name,
            price: self.price,
            stock: self.stock,
            category_id: self.category_id,
        }
    }
}

/// 删除成功的响应体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub message: String,
}

impl DeleteResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

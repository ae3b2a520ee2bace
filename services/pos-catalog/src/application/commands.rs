//! 命令定义与校验

use kasir_errors::{AppError, AppResult};

use crate::domain::entities::{CategoryDraft, NAME_MAX_LEN, ProductDraft};
use crate::domain::value_objects::{CategoryId, ProductId};

fn validate_name(name: &str, entity: &str) -> AppResult<()> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::validation(format!("{} name is required", entity)));
    }
    if name.chars().count() > NAME_MAX_LEN {
        return Err(AppError::validation(format!(
            "{} name must not exceed {} characters",
            entity, NAME_MAX_LEN
        )));
    }
    Ok(())
}

fn validate_product_fields(
    name: &str,
    price: i64,
    stock: i32,
    category_id: Option<CategoryId>,
) -> AppResult<()> {
    validate_name(name, "Product")?;
    if price < 0 {
        return Err(AppError::validation("Product price must not be negative"));
    }
    if stock < 0 {
        return Err(AppError::validation("Product stock must not be negative"));
    }
    if let Some(category_id) = category_id {
        if category_id.value() <= 0 {
            return Err(AppError::validation("Category ID must be a positive integer"));
        }
    }
    Ok(())
}

// ========== 分类命令 ==========

/// 创建分类命令
#[derive(Debug, Clone, Default)]
pub struct CreateCategoryCommand {
    pub name: String,
    pub description: String,
}

impl CreateCategoryCommand {
    pub fn validate(&self) -> AppResult<()> {
        validate_name(&self.name, "Category")
    }

    pub fn into_draft(self) -> CategoryDraft {
        CategoryDraft::new(self.name.trim(), self.description)
    }
}

/// 更新分类命令（整行覆盖）
#[derive(Debug, Clone)]
pub struct UpdateCategoryCommand {
    pub id: CategoryId,
    pub name: String,
    pub description: String,
}

impl UpdateCategoryCommand {
    pub fn validate(&self) -> AppResult<()> {
        validate_name(&self.name, "Category")
    }

    pub fn into_draft(self) -> CategoryDraft {
        CategoryDraft::new(self.name.trim(), self.description)
    }
}

// ========== 商品命令 ==========

/// 创建商品命令
#[derive(Debug, Clone, Default)]
pub struct CreateProductCommand {
    pub name: String,
    pub price: i64,
    pub stock: i32,
    pub category_id: Option<CategoryId>,
}

impl CreateProductCommand {
    pub fn validate(&self) -> AppResult<()> {
        validate_product_fields(&self.name, self.price, self.stock, self.category_id)
    }

    pub fn into_draft(self) -> ProductDraft {
        ProductDraft {
            name: self.name.trim().to_string(),
            price: self.price,
            stock: self.stock,
            category_id: self.category_id,
        }
    }
}

/// 更新商品命令（整行覆盖）
#[derive(Debug, Clone)]
pub struct UpdateProductCommand {
    pub id: ProductId,
    pub name: String,
    pub price: i64,
    pub stock: i32,
    pub category_id: Option<CategoryId>,
}

impl UpdateProductCommand {
    pub fn validate(&self) -> AppResult<()> {
        validate_product_fields(&self.name, self.price, self.stock, self.category_id)
    }

    pub fn into_draft(self) -> ProductDraft {
        ProductDraft {
            name: self.name.trim().to_string(),
            price: self.price,
            stock: self.stock,
            category_id: self.category_id,
        }
    }
}

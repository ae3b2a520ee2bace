//! 分类服务

use std::sync::Arc;

use kasir_errors::AppResult;
use tracing::info;

use crate::domain::entities::Category;
use crate::domain::repositories::CategoryRepository;
use crate::domain::value_objects::CategoryId;

use super::commands::{CreateCategoryCommand, UpdateCategoryCommand};

pub struct CategoryService {
    repo: Arc<dyn CategoryRepository>,
}

impl CategoryService {
    pub fn new(repo: Arc<dyn CategoryRepository>) -> Self {
        Self { repo }
    }

    /// 获取全部分类
    pub async fn get_all(&self) -> AppResult<Vec<Category>> {
        self.repo.get_all().await
    }

    /// 创建分类
    pub async fn create(&self, cmd: CreateCategoryCommand) -> AppResult<Category> {
        cmd.validate()?;

        let category = self.repo.create(&cmd.into_draft()).await?;
        info!(category_id = %category.id, name = %category.name, "Category created");
        Ok(category)
    }

    /// 获取分类
    pub async fn get_by_id(&self, id: CategoryId) -> AppResult<Category> {
        self.repo.get_by_id(id).await
    }

    /// 更新分类
    pub async fn update(&self, cmd: UpdateCategoryCommand) -> AppResult<Category> {
        cmd.validate()?;

        let id = cmd.id;
        let category = self.repo.update(id, &cmd.into_draft()).await?;
        info!(category_id = %id, "Category updated");
        Ok(category)
    }

    /// 删除分类
    pub async fn delete(&self, id: CategoryId) -> AppResult<()> {
        self.repo.delete(id).await?;
        info!(category_id = %id, "Category deleted");
        Ok(())
    }
}

//! 分类仓储接口

use async_trait::async_trait;
use kasir_errors::AppResult;

use crate::domain::entities::{Category, CategoryDraft};
use crate::domain::value_objects::CategoryId;

/// 分类仓储接口
///
/// 每个方法都是一次单语句往返；目标行不存在时返回 `AppError::NotFound`，
/// 其余存储失败返回 `AppError::Database`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// 按插入顺序返回全部分类
    async fn get_all(&self) -> AppResult<Vec<Category>>;

    /// 新建分类，ID 由数据库分配
    async fn create(&self, draft: &CategoryDraft) -> AppResult<Category>;

    /// 根据 ID 查找分类
    async fn get_by_id(&self, id: CategoryId) -> AppResult<Category>;

    /// 覆盖名称和描述
    async fn update(&self, id: CategoryId, draft: &CategoryDraft) -> AppResult<Category>;

    /// 删除分类
    async fn delete(&self, id: CategoryId) -> AppResult<()>;
}

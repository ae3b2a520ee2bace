//! 商品仓储接口

use async_trait::async_trait;
use kasir_errors::AppResult;

use crate::domain::entities::{Product, ProductDraft};
use crate::domain::value_objects::ProductId;

/// 商品仓储接口
///
/// 返回的 `Product` 都带有读取时的分类快照（左外连接），
/// 写操作只作用于商品表，不在应用层校验 `category_id` 的引用完整性
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// 按插入顺序返回全部商品
    async fn get_all(&self) -> AppResult<Vec<Product>>;

    /// 新建商品
    async fn create(&self, draft: &ProductDraft) -> AppResult<Product>;

    /// 根据 ID 查找商品
    async fn get_by_id(&self, id: ProductId) -> AppResult<Product>;

    /// 整行更新
    async fn update(&self, id: ProductId, draft: &ProductDraft) -> AppResult<Product>;

    /// 删除商品
    async fn delete(&self, id: ProductId) -> AppResult<()>;
}

//! 内存仓储（测试替身）
//!
//! 两个仓储共享同一份存储，商品读取时按当前分类表解析快照。
//! 不约束 `category_id` 的引用完整性，用来覆盖悬空引用的读取路径

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use kasir_errors::{AppError, AppResult};

use crate::domain::entities::{Category, CategoryDraft, Product, ProductDraft};
use crate::domain::repositories::{CategoryRepository, ProductRepository};
use crate::domain::value_objects::{CategoryId, ProductId};

#[derive(Default)]
struct Store {
    categories: BTreeMap<i32, Category>,
    products: BTreeMap<i32, ProductDraft>,
    next_category_id: i32,
    next_product_id: i32,
    unavailable: bool,
}

impl Store {
    fn check(&self) -> AppResult<()> {
        if self.unavailable {
            return Err(AppError::database("storage unavailable"));
        }
        Ok(())
    }

    fn resolve(&self, id: i32, draft: &ProductDraft) -> Product {
        let category = draft
            .category_id
            .and_then(|cid| self.categories.get(&cid.value()).cloned());
        Product::from_draft(ProductId(id), draft.clone(), category)
    }
}

#[derive(Clone, Default)]
pub struct InMemoryCatalog {
    store: Arc<Mutex<Store>>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// 预置 Makanan / Minuman / Bumbu 三个分类，ID 依次为 1..=3
    pub fn seeded() -> Self {
        let catalog = Self::new();
        {
            let mut store = catalog.lock();
            for (name, description) in [
                ("Makanan", "Berbagai jenis makanan"),
                ("Minuman", "Berbagai jenis minuman"),
                ("Bumbu", "Berbagai jenis bumbu dapur"),
            ] {
                store.next_category_id += 1;
                let id = CategoryId(store.next_category_id);
                let category = Category::from_draft(id, CategoryDraft::new(name, description));
                store.categories.insert(id.value(), category);
            }
        }
        catalog
    }

    /// 模拟存储不可用
    pub fn set_unavailable(&self, unavailable: bool) {
        self.lock().unavailable = unavailable;
    }

    pub fn category_repository(&self) -> InMemoryCategoryRepository {
        InMemoryCategoryRepository { catalog: self.clone() }
    }

    pub fn product_repository(&self) -> InMemoryProductRepository {
        InMemoryProductRepository { catalog: self.clone() }
    }

    fn lock(&self) -> MutexGuard<'_, Store> {
        self.store.lock().unwrap()
    }
}

pub struct InMemoryCategoryRepository {
    catalog: InMemoryCatalog,
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn get_all(&self) -> AppResult<Vec<Category>> {
        let store = self.catalog.lock();
        store.check()?;
        Ok(store.categories.values().cloned().collect())
    }

    async fn create(&self, draft: &CategoryDraft) -> AppResult<Category> {
        let mut store = self.catalog.lock();
        store.check()?;
        store.next_category_id += 1;
        let category = Category::from_draft(CategoryId(store.next_category_id), draft.clone());
        store.categories.insert(category.id.value(), category.clone());
        Ok(category)
    }

    async fn get_by_id(&self, id: CategoryId) -> AppResult<Category> {
        let store = self.catalog.lock();
        store.check()?;
        store
            .categories
            .get(&id.value())
            .cloned()
            .ok_or_else(|| AppError::not_found(format!("Category {} not found", id)))
    }

    async fn update(&self, id: CategoryId, draft: &CategoryDraft) -> AppResult<Category> {
        let mut store = self.catalog.lock();
        store.check()?;
        let slot = store
            .categories
            .get_mut(&id.value())
            .ok_or_else(|| AppError::not_found(format!("Category {} not found", id)))?;
        *slot = Category::from_draft(id, draft.clone());
        Ok(slot.clone())
    }

    async fn delete(&self, id: CategoryId) -> AppResult<()> {
        let mut store = self.catalog.lock();
        store.check()?;
        store
            .categories
            .remove(&id.value())
            .map(|_| ())
            .ok_or_else(|| AppError::not_found(format!("Category {} not found", id)))
    }
}

pub struct InMemoryProductRepository {
    catalog: InMemoryCatalog,
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn get_all(&self) -> AppResult<Vec<Product>> {
        let store = self.catalog.lock();
        store.check()?;
        Ok(store
            .products
            .iter()
            .map(|(id, draft)| store.resolve(*id, draft))
            .collect())
    }

    async fn create(&self, draft: &ProductDraft) -> AppResult<Product> {
        let mut store = self.catalog.lock();
        store.check()?;
        store.next_product_id += 1;
        let id = store.next_product_id;
        store.products.insert(id, draft.clone());
        Ok(store.resolve(id, draft))
    }

    async fn get_by_id(&self, id: ProductId) -> AppResult<Product> {
        let store = self.catalog.lock();
        store.check()?;
        store
            .products
            .get(&id.value())
            .map(|draft| store.resolve(id.value(), draft))
            .ok_or_else(|| AppError::not_found(format!("Product {} not found", id)))
    }

    async fn update(&self, id: ProductId, draft: &ProductDraft) -> AppResult<Product> {
        let mut store = self.catalog.lock();
        store.check()?;
        match store.products.get_mut(&id.value()) {
            Some(slot) => *slot = draft.clone(),
            None => return Err(AppError::not_found(format!("Product {} not found", id))),
        }
        Ok(store.resolve(id.value(), draft))
    }

    async fn delete(&self, id: ProductId) -> AppResult<()> {
        let mut store = self.catalog.lock();
        store.check()?;
        store
            .products
            .remove(&id.value())
            .map(|_| ())
            .ok_or_else(|| AppError::not_found(format!("Product {} not found", id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_all_on_empty_store_is_empty_list() {
        let catalog = InMemoryCatalog::new();

        assert_eq!(catalog.category_repository().get_all().await, Ok(vec![]));
        assert_eq!(catalog.product_repository().get_all().await, Ok(vec![]));
    }

    #[tokio::test]
    async fn test_dangling_category_reads_back_absent() {
        let catalog = InMemoryCatalog::seeded();
        let products = catalog.product_repository();

        let created = products
            .create(&ProductDraft::new("Kopi", 2000, 5).with_category(CategoryId(99)))
            .await
            .unwrap();
        assert_eq!(created.category_id, Some(CategoryId(99)));
        assert!(created.category.is_none());
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let catalog = InMemoryCatalog::new();
        let categories = catalog.category_repository();

        let first = categories.create(&CategoryDraft::new("A", "")).await.unwrap();
        categories.delete(first.id).await.unwrap();
        let second = categories.create(&CategoryDraft::new("B", "")).await.unwrap();
        assert_eq!(first.id, CategoryId(1));
        assert_eq!(second.id, CategoryId(2));
    }
}

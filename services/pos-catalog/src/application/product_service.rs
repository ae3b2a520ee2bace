//! 商品服务

use std::sync::Arc;

use kasir_errors::AppResult;
use tracing::info;

use crate::domain::entities::Product;
use crate::domain::repositories::ProductRepository;
use crate::domain::value_objects::ProductId;

use super::commands::{CreateProductCommand, UpdateProductCommand};

pub struct ProductService {
    repo: Arc<dyn ProductRepository>,
}

impl ProductService {
    pub fn new(repo: Arc<dyn ProductRepository>) -> Self {
        Self { repo }
    }

    /// 获取全部商品（带分类快照）
    pub async fn get_all(&self) -> AppResult<Vec<Product>> {
        self.repo.get_all().await
    }

    /// 创建商品
    pub async fn create(&self, cmd: CreateProductCommand) -> AppResult<Product> {
        cmd.validate()?;

        let product = self.repo.create(&cmd.into_draft()).await?;
        info!(
            product_id = %product.id,
            name = %product.name,
            category_id = ?product.category_id,
            "Product created"
        );
        Ok(product)
    }

    /// 获取商品
    pub async fn get_by_id(&self, id: ProductId) -> AppResult<Product> {
        self.repo.get_by_id(id).await
    }

    /// 更新商品
    pub async fn update(&self, cmd: UpdateProductCommand) -> AppResult<Product> {
        cmd.validate()?;

        let id = cmd.id;
        let product = self.repo.update(id, &cmd.into_draft()).await?;
        info!(product_id = %id, "Product updated");
        Ok(product)
    }

    /// 删除商品
    pub async fn delete(&self, id: ProductId) -> AppResult<()> {
        self.repo.delete(id).await?;
        info!(product_id = %id, "Product deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{CategoryService, CreateCategoryCommand};
    use crate::domain::repositories::MockProductRepository;
    use crate::domain::value_objects::CategoryId;
    use crate::infrastructure::persistence::memory::InMemoryCatalog;
    use kasir_errors::AppError;

    fn create_cmd(
        name: &str,
        price: i64,
        stock: i32,
        category_id: Option<i32>,
    ) -> CreateProductCommand {
        CreateProductCommand {
            name: name.to_string(),
            price,
            stock,
            category_id: category_id.map(CategoryId),
        }
    }

    fn services() -> (CategoryService, ProductService, InMemoryCatalog) {
        let catalog = InMemoryCatalog::seeded();
        let categories = CategoryService::new(Arc::new(catalog.category_repository()));
        let products = ProductService::new(Arc::new(catalog.product_repository()));
        (categories, products, catalog)
    }

    #[tokio::test]
    async fn test_negative_price_rejected_without_storage_call() {
        let mut repo = MockProductRepository::new();
        repo.expect_create().never();
        let service = ProductService::new(Arc::new(repo));

        let err = service
            .create(create_cmd("Kecap", -100, 1, None))
            .await
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[tokio::test]
    async fn test_negative_stock_rejected_on_update_without_storage_call() {
        let mut repo = MockProductRepository::new();
        repo.expect_update().never();
        let service = ProductService::new(Arc::new(repo));

        let err = service
            .update(UpdateProductCommand {
                id: ProductId(1),
                name: "Kecap".to_string(),
                price: 12000,
                stock: -1,
                category_id: None,
            })
            .await
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[tokio::test]
    async fn test_repository_errors_are_not_reclassified() {
        let mut repo = MockProductRepository::new();
        repo.expect_get_by_id()
            .returning(|id| Err(AppError::not_found(format!("Product {} not found", id))));
        repo.expect_delete()
            .returning(|_| Err(AppError::database("foreign key violation")));
        let service = ProductService::new(Arc::new(repo));

        assert!(service.get_by_id(ProductId(8)).await.unwrap_err().is_not_found());
        assert!(service.delete(ProductId(8)).await.unwrap_err().is_database());
    }

    #[tokio::test]
    async fn test_create_then_get_returns_same_values() {
        let (_, products, _catalog) = services();

        let created = products
            .create(create_cmd("Indomie Goreng", 3500, 10, Some(1)))
            .await
            .unwrap();
        let fetched = products.get_by_id(created.id).await.unwrap();

        assert_eq!(fetched, created);
        assert_eq!(fetched.name, "Indomie Goreng");
        assert_eq!(fetched.price, 3500);
        assert_eq!(fetched.stock, 10);
        assert_eq!(fetched.category_id, Some(CategoryId(1)));
    }

    #[tokio::test]
    async fn test_product_without_category_reads_absent() {
        let (_, products, _catalog) = services();

        let created = products
            .create(create_cmd("Kecap", 12000, 20, None))
            .await
            .unwrap();
        let fetched = products.get_by_id(created.id).await.unwrap();
        assert_eq!(fetched.category_id, None);
        assert_eq!(fetched.category, None);
    }

    #[tokio::test]
    async fn test_category_snapshot_reflects_current_row() {
        let (categories, products, _catalog) = services();

        let product = products
            .create(create_cmd("Vit 1000ml", 3000, 40, Some(2)))
            .await
            .unwrap();
        assert_eq!(product.category.as_ref().unwrap().name, "Minuman");

        categories
            .update(crate::application::UpdateCategoryCommand {
                id: CategoryId(2),
                name: "Minuman Segar".to_string(),
                description: "Dingin".to_string(),
            })
            .await
            .unwrap();

        // 已读取的快照不变，重新读取才看到新值
        assert_eq!(product.category.as_ref().unwrap().name, "Minuman");
        let reread = products.get_by_id(product.id).await.unwrap();
        assert_eq!(reread.category.unwrap().description, "Dingin");
    }

    #[tokio::test]
    async fn test_teh_botol_scenario() {
        let (categories, products, _catalog) = services();

        let minuman = categories
            .create(CreateCategoryCommand {
                name: "Minuman".to_string(),
                description: "Berbagai jenis minuman segar".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(minuman.id, CategoryId(4));

        let teh = products
            .create(create_cmd("Teh Botol", 5000, 12, Some(4)))
            .await
            .unwrap();
        let fetched = products.get_by_id(teh.id).await.unwrap();
        assert_eq!(fetched.category.as_ref().unwrap().name, "Minuman");

        // 分类删除后商品仍可读取，分类缺省，自身字段不变
        categories.delete(CategoryId(4)).await.unwrap();
        let after = products.get_by_id(teh.id).await.unwrap();
        assert_eq!(after.category, None);
        assert_eq!(after.name, "Teh Botol");
        assert_eq!(after.price, 5000);
        assert_eq!(after.stock, 12);
    }

    #[tokio::test]
    async fn test_unknown_id_is_not_found_everywhere() {
        let (_, products, _catalog) = services();
        let missing = ProductId(777);

        assert!(products.get_by_id(missing).await.unwrap_err().is_not_found());
        assert!(products.delete(missing).await.unwrap_err().is_not_found());
        let err = products
            .update(UpdateProductCommand {
                id: missing,
                name: "Kopi".to_string(),
                price: 2000,
                stock: 1,
                category_id: None,
            })
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_update_is_idempotent_and_delete_is_final() {
        let (_, products, _catalog) = services();
        let created = products
            .create(create_cmd("Kecap", 12000, 20, Some(3)))
            .await
            .unwrap();

        let cmd = UpdateProductCommand {
            id: created.id,
            name: "Kecap Manis".to_string(),
            price: 13000,
            stock: 18,
            category_id: Some(CategoryId(3)),
        };
        let first = products.update(cmd.clone()).await.unwrap();
        let second = products.update(cmd).await.unwrap();
        assert_eq!(first, second);
        assert_eq!(second.category.unwrap().name, "Bumbu");

        products.delete(created.id).await.unwrap();
        assert!(products.get_by_id(created.id).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_storage_outage_surfaces_as_database_error() {
        let (_, products, catalog) = services();
        catalog.set_unavailable(true);

        assert!(products.get_all().await.unwrap_err().is_database());
        let err = products
            .create(create_cmd("Kecap", 12000, 20, None))
            .await
            .unwrap_err();
        assert!(err.is_database());
    }
}

//! PostgreSQL 商品仓储实现
//!
//! 所有读取都对 categories 做左外连接；新建和更新用数据修改型 CTE，
//! 写入与连接读取在同一条语句内完成

use async_trait::async_trait;
use kasir_errors::{AppError, AppResult};
use sqlx::PgPool;
use tracing::warn;

use super::rows::ProductRow;
use crate::domain::entities::{Product, ProductDraft};
use crate::domain::repositories::ProductRepository;
use crate::domain::value_objects::ProductId;

const SELECT_JOINED: &str = "SELECT p.id, p.name, p.price, p.stock, p.category_id,
        c.id AS joined_category_id, c.name AS category_name, c.description AS category_description
     FROM products p
     LEFT JOIN categories c ON c.id = p.category_id";

const INSERT_JOINED: &str = "WITH written AS (
        INSERT INTO products (name, price, stock, category_id)
        VALUES ($1, $2, $3, $4)
        RETURNING id, name, price, stock, category_id
     )
     SELECT p.id, p.name, p.price, p.stock, p.category_id,
        c.id AS joined_category_id, c.name AS category_name, c.description AS category_description
     FROM written p
     LEFT JOIN categories c ON c.id = p.category_id";

const UPDATE_JOINED: &str = "WITH written AS (
        UPDATE products
        SET name = $1, price = $2, stock = $3, category_id = $4
        WHERE id = $5
        RETURNING id, name, price, stock, category_id
     )
     SELECT p.id, p.name, p.price, p.stock, p.category_id,
        c.id AS joined_category_id, c.name AS category_name, c.description AS category_description
     FROM written p
     LEFT JOIN categories c ON c.id = p.category_id";

pub struct PostgresProductRepository {
    pool: PgPool,
}

impl PostgresProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn storage_error(action: &str, e: sqlx::Error) -> AppError {
    warn!(error = %e, "Failed to {} product", action);
    AppError::database(format!("Failed to {} product: {}", action, e))
}

fn not_found(id: ProductId) -> AppError {
    AppError::not_found(format!("Product {} not found", id))
}

#[async_trait]
impl ProductRepository for PostgresProductRepository {
    async fn get_all(&self) -> AppResult<Vec<Product>> {
        let rows = sqlx::query_as::<_, ProductRow>(&format!("{} ORDER BY p.id", SELECT_JOINED))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| storage_error("list", e))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn create(&self, draft: &ProductDraft) -> AppResult<Product> {
        sqlx::query_as::<_, ProductRow>(INSERT_JOINED)
            .bind(&draft.name)
            .bind(draft.price)
            .bind(draft.stock)
            .bind(draft.category_id.map(|id| id.value()))
            .fetch_one(&self.pool)
            .await
            .map(Into::into)
            .map_err(|e| storage_error("create", e))
    }

    async fn get_by_id(&self, id: ProductId) -> AppResult<Product> {
        sqlx::query_as::<_, ProductRow>(&format!("{} WHERE p.id = $1", SELECT_JOINED))
            .bind(id.value())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| storage_error("find", e))?
            .map(Into::into)
            .ok_or_else(|| not_found(id))
    }

    async fn update(&self, id: ProductId, draft: &ProductDraft) -> AppResult<Product> {
        sqlx::query_as::<_, ProductRow>(UPDATE_JOINED)
            .bind(&draft.name)
            .bind(draft.price)
            .bind(draft.stock)
            .bind(draft.category_id.map(|id| id.value()))
            .bind(id.value())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| storage_error("update", e))?
            .map(Into::into)
            .ok_or_else(|| not_found(id))
    }

    async fn delete(&self, id: ProductId) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id.value())
            .execute(&self.pool)
            .await
            .map_err(|e| storage_error("delete", e))?;

        if result.rows_affected() == 0 {
            return Err(not_found(id));
        }
        Ok(())
    }
}

//! PostgreSQL 分类仓储实现

use async_trait::async_trait;
use kasir_errors::{AppError, AppResult};
use sqlx::PgPool;
use tracing::warn;

use super::rows::{CATEGORY_COLUMNS, CategoryRow};
use crate::domain::entities::{Category, CategoryDraft};
use crate::domain::repositories::CategoryRepository;
use crate::domain::value_objects::CategoryId;

pub struct PostgresCategoryRepository {
    pool: PgPool,
}

impl PostgresCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn storage_error(action: &str, e: sqlx::Error) -> AppError {
    warn!(error = %e, "Failed to {} category", action);
    AppError::database(format!("Failed to {} category: {}", action, e))
}

fn not_found(id: CategoryId) -> AppError {
    AppError::not_found(format!("Category {} not found", id))
}

#[async_trait]
impl CategoryRepository for PostgresCategoryRepository {
    async fn get_all(&self) -> AppResult<Vec<Category>> {
        let rows = sqlx::query_as::<_, CategoryRow>(&format!(
            "SELECT {} FROM categories ORDER BY id",
            CATEGORY_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| storage_error("list", e))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn create(&self, draft: &CategoryDraft) -> AppResult<Category> {
        sqlx::query_as::<_, CategoryRow>(&format!(
            "INSERT INTO categories (name, description) VALUES ($1, $2) RETURNING {}",
            CATEGORY_COLUMNS
        ))
        .bind(&draft.name)
        .bind(&draft.description)
        .fetch_one(&self.pool)
        .await
        .map(Into::into)
        .map_err(|e| storage_error("create", e))
    }

    async fn get_by_id(&self, id: CategoryId) -> AppResult<Category> {
        sqlx::query_as::<_, CategoryRow>(&format!(
            "SELECT {} FROM categories WHERE id = $1",
            CATEGORY_COLUMNS
        ))
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| storage_error("find", e))?
        .map(Into::into)
        .ok_or_else(|| not_found(id))
    }

    async fn update(&self, id: CategoryId, draft: &CategoryDraft) -> AppResult<Category> {
        sqlx::query_as::<_, CategoryRow>(&format!(
            "UPDATE categories SET name = $1, description = $2 WHERE id = $3 RETURNING {}",
            CATEGORY_COLUMNS
        ))
        .bind(&draft.name)
        .bind(&draft.description)
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| storage_error("update", e))?
        .map(Into::into)
        .ok_or_else(|| not_found(id))
    }

    async fn delete(&self, id: CategoryId) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
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

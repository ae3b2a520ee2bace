//! kasir-errors - 统一错误处理
//!
//! 仓储与服务层共用的三类错误，基于 RFC 7807 Problem Details 输出给传输层

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 应用错误类型
///
/// 每个仓储和服务方法都返回这三类之一，传输层按变体而不是按消息内容选择状态码
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    /// 目标 ID 没有匹配的行
    #[error("Not found: {0}")]
    NotFound(String),

    /// 输入违反领域规则，在访问存储之前返回
    #[error("Validation error: {0}")]
    Validation(String),

    /// 存储层的任何失败（连接、约束冲突、SQL 错误）
    #[error("Database error: {0}")]
    Database(String),
}

impl AppError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    pub fn is_database(&self) -> bool {
        matches!(self, Self::Database(_))
    }

    /// 转换为 HTTP 状态码
    pub fn status_code(&self) -> u16 {
        match self {
            Self::NotFound(_) => 404,
            Self::Validation(_) => 400,
            Self::Database(_) => 500,
        }
    }

    /// 转换为 Problem Details
    ///
    /// 存储错误的细节只写日志，不返回给调用方
    pub fn to_problem_details(&self) -> ProblemDetails {
        let detail = match self {
            Self::NotFound(msg) | Self::Validation(msg) => msg.clone(),
            Self::Database(_) => "The operation did not complete".to_string(),
        };

        ProblemDetails {
            r#type: self.problem_type().to_string(),
            title: self.problem_title().to_string(),
            status: self.status_code(),
            detail,
        }
    }

    fn problem_type(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "/problems/not-found",
            Self::Validation(_) => "/problems/validation",
            Self::Database(_) => "/problems/storage",
        }
    }

    fn problem_title(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "Resource Not Found",
            Self::Validation(_) => "Validation Error",
            Self::Database(_) => "Storage Error",
        }
    }
}

/// RFC 7807 Problem Details
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemDetails {
    pub r#type: String,
    pub title: String,
    pub status: u16,
    pub detail: String,
}

/// Result 类型别名
pub type AppResult<T> = Result<T, AppError>;

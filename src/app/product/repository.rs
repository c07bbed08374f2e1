//! 产品仓储接口

use async_trait::async_trait;
use tracing::error;

use super::model::{Product, ProductDraft};
use crate::core::error::CoreError;

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("Product {0} not found")]
    NotFound(i64),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl From<RepositoryError> for CoreError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(_) => CoreError::NotFound(err.to_string()),
            other => {
                error!("Store error: {}", other);
                CoreError::InternalServerError("Internal server error".to_string())
            }
        }
    }
}

/// 产品存储能力
///
/// 每个操作只针对单行，原子性由存储保证。
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// 按存储顺序返回全部产品
    async fn list_all(&self) -> Result<Vec<Product>, RepositoryError>;

    async fn get_by_id(&self, id: i64) -> Result<Product, RepositoryError>;

    /// 分配新 id 并写入
    async fn create(&self, draft: ProductDraft) -> Result<Product, RepositoryError>;

    /// 整体替换除 id 外的全部字段
    async fn update(&self, id: i64, draft: ProductDraft) -> Result<Product, RepositoryError>;

    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;

    /// 健康检查
    async fn ping(&self) -> Result<(), RepositoryError>;

    fn kind(&self) -> &'static str;
}

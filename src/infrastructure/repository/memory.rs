//! 内存产品仓储，用于测试和无数据库运行

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use crate::app::product::{Product, ProductDraft, ProductRepository, RepositoryError};

struct MemoryState {
    rows: BTreeMap<i64, Product>,
    next_id: i64,
}

/// id 从 1 开始单调递增，删除后不复用
pub struct InMemoryProductRepository {
    state: Mutex<MemoryState>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(MemoryState {
                rows: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, MemoryState>, RepositoryError> {
        self.state
            .lock()
            .map_err(|_| RepositoryError::Unavailable("in-memory store lock poisoned".to_string()))
    }
}

impl Default for InMemoryProductRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn list_all(&self) -> Result<Vec<Product>, RepositoryError> {
        Ok(self.lock()?.rows.values().cloned().collect())
    }

    async fn get_by_id(&self, id: i64) -> Result<Product, RepositoryError> {
        self.lock()?
            .rows
            .get(&id)
            .cloned()
            .ok_or(RepositoryError::NotFound(id))
    }

    async fn create(&self, draft: ProductDraft) -> Result<Product, RepositoryError> {
        let mut state = self.lock()?;
        let id = state.next_id;
        state.next_id += 1;

        let product = draft.into_product(id);
        state.rows.insert(id, product.clone());
        Ok(product)
    }

    async fn update(&self, id: i64, draft: ProductDraft) -> Result<Product, RepositoryError> {
        let mut state = self.lock()?;
        let row = state.rows.get_mut(&id).ok_or(RepositoryError::NotFound(id))?;
        *row = draft.into_product(id);
        Ok(row.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        self.lock()?
            .rows
            .remove(&id)
            .map(|_| ())
            .ok_or(RepositoryError::NotFound(id))
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        self.lock().map(|_| ())
    }

    fn kind(&self) -> &'static str {
        "memory"
    }
}

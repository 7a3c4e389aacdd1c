//! Process-local product store, used when no database is configured and in
//! tests.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::instrument;
use uuid::Uuid;

use crate::error::ProductResult;
use crate::models::{Product, StoredProduct};
use crate::repository::ProductStore;

#[derive(Debug, Clone, Default)]
pub struct InMemoryProductStore {
    records: Arc<RwLock<Vec<StoredProduct>>>,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything written so far, with identifiers
    pub async fn records(&self) -> Vec<StoredProduct> {
        self.records.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl ProductStore for InMemoryProductStore {
    #[instrument(skip(self, product), fields(product_name = %product.name))]
    async fn insert(&self, product: &Product) -> ProductResult<String> {
        let id = Uuid::now_v7().to_string();
        self.records.write().await.push(StoredProduct {
            id: id.clone(),
            product: product.clone(),
        });
        Ok(id)
    }

    #[instrument(skip(self))]
    async fn list_all(&self) -> ProductResult<Vec<Product>> {
        let records = self.records.read().await;
        Ok(records.iter().map(|r| r.product.clone()).collect())
    }
}

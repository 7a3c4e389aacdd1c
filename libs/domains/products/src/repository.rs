use async_trait::async_trait;

use crate::error::ProductResult;
use crate::models::Product;

/// Persistent collection of products.
///
/// Implementations must be safe to share between concurrent requests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Write one product and return the identifier assigned to it
    async fn insert(&self, product: &Product) -> ProductResult<String>;

    /// Every stored product, in store order
    async fn list_all(&self) -> ProductResult<Vec<Product>>;
}

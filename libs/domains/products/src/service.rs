//! Product Service - Business logic layer

use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use crate::error::ProductResult;
use crate::messages::{inserted_message, message_for_locale};
use crate::models::{Locale, Product, ProductInput, ResponseEnvelope};
use crate::repository::ProductStore;

/// Create and list operations over a [`ProductStore`].
///
/// Validation failures are part of the normal reply and come back as an
/// `ERROR` envelope; only store failures are returned as `Err`.
pub struct ProductService<S: ProductStore> {
    store: Arc<S>,
    locale: Locale,
}

impl<S: ProductStore> ProductService<S> {
    pub fn new(store: S) -> Self {
        Self {
            store: Arc::new(store),
            locale: Locale::default(),
        }
    }

    /// Use `locale` for caller-facing messages
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Validate `input` and store it when valid.
    ///
    /// Nothing is written when validation fails.
    #[instrument(skip(self, input))]
    pub async fn create_product(&self, input: ProductInput) -> ProductResult<ResponseEnvelope> {
        info!("Creating product");

        let product = match input.into_product() {
            Ok(product) => product,
            Err(code) => {
                let message = message_for_locale(code, self.locale);
                warn!(error_code = code.code(), reason = %code, "Product rejected");
                return Ok(ResponseEnvelope::error(message));
            }
        };

        let doc_id = self.store.insert(&product).await?;
        info!(doc_id = %doc_id, product_name = %product.name, "Product inserted");

        Ok(ResponseEnvelope::success(
            doc_id,
            inserted_message(self.locale),
        ))
    }

    /// Every stored product as `{name, price}`
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> ProductResult<Vec<Product>> {
        let products = self.store.list_all().await?;
        debug!(count = products.len(), "Listed products");
        Ok(products)
    }
}

impl<S: ProductStore> Clone for ProductService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            locale: self.locale,
        }
    }
}

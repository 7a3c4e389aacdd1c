//! MongoDB implementation of ProductStore

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, Bson},
    Collection, Database,
};
use tracing::instrument;

use crate::error::{ProductError, ProductResult};
use crate::models::Product;
use crate::repository::ProductStore;

pub const DEFAULT_COLLECTION: &str = "products";

/// Products kept as `{name, price}` documents; the identifier is the
/// server-assigned `_id`.
#[derive(Clone)]
pub struct MongoProductStore {
    collection: Collection<Product>,
}

impl MongoProductStore {
    pub fn new(db: &Database) -> Self {
        Self::with_collection(db, DEFAULT_COLLECTION)
    }

    pub fn with_collection(db: &Database, collection_name: &str) -> Self {
        let collection = db.collection::<Product>(collection_name);
        Self { collection }
    }

    pub fn collection_name(&self) -> &str {
        self.collection.name()
    }
}

/// Text form of an `_id`: hex for ObjectIds, the raw value for strings
fn doc_id(inserted_id: Bson) -> ProductResult<String> {
    match inserted_id {
        Bson::ObjectId(oid) => Ok(oid.to_hex()),
        Bson::String(s) => Ok(s),
        other => Err(ProductError::Internal(format!(
            "unexpected inserted id type: {:?}",
            other.element_type()
        ))),
    }
}

#[async_trait]
impl ProductStore for MongoProductStore {
    #[instrument(skip(self, product), fields(product_name = %product.name))]
    async fn insert(&self, product: &Product) -> ProductResult<String> {
        let result = self.collection.insert_one(product).await?;
        doc_id(result.inserted_id)
    }

    #[instrument(skip(self))]
    async fn list_all(&self) -> ProductResult<Vec<Product>> {
        let cursor = self.collection.find(doc! {}).await?;
        let products: Vec<Product> = cursor.try_collect().await?;
        Ok(products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    #[test]
    fn test_doc_id_from_object_id() {
        let oid = ObjectId::new();
        assert_eq!(doc_id(Bson::ObjectId(oid)).unwrap(), oid.to_hex());
    }

    #[test]
    fn test_doc_id_from_string() {
        assert_eq!(doc_id(Bson::String("abc".into())).unwrap(), "abc");
    }

    #[test]
    fn test_doc_id_rejects_other_types() {
        let err = doc_id(Bson::Int32(7)).unwrap_err();
        assert!(matches!(err, ProductError::Internal(_)));
    }

    #[test]
    fn test_product_document_shape() {
        let product = Product {
            name: "Chair".to_string(),
            price: 49.9,
        };
        let document = mongodb::bson::to_document(&product).unwrap();
        assert_eq!(document, doc! { "name": "Chair", "price": 49.9 });
    }
}

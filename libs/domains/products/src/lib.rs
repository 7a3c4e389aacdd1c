//! Products Domain
//!
//! Two remote-callable operations over a product collection:
//!
//! - `createProduct` validates a `{name, price}` candidate, stores it when
//!   valid and answers with a [`ResponseEnvelope`]
//! - `listProducts` answers with every stored product as `{name, price}`
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← callable endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← validation, messages, logging
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │    Store    │  ← trait + MongoDB and in-memory implementations
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_products::{handlers, MongoProductStore, ProductService};
//! use mongodb::Client;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::with_uri_str("mongodb://localhost:27017").await?;
//! let db = client.database("mydb");
//!
//! let service = ProductService::new(MongoProductStore::new(&db));
//! let router = handlers::router(service);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod handlers;
pub mod memory;
pub mod messages;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;
pub mod validation;

pub use error::{ProductError, ProductResult};
pub use handlers::ApiDoc;
pub use memory::InMemoryProductStore;
pub use messages::{inserted_message, message_for, message_for_locale};
pub use models::{
    CreatePayload, EnvelopeStatus, ErrorCode, Locale, Product, ProductInput, ResponseEnvelope,
    StoredProduct,
};
pub use self::mongodb::MongoProductStore;
pub use repository::ProductStore;
pub use service::ProductService;
pub use validation::validate;

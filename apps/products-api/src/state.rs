//! Application state management

use domain_products::InMemoryProductStore;
use mongodb::{Client, Database};
use tracing::info;

use crate::config::{Config, StoreBackend};

/// Backing store chosen at startup
#[derive(Clone)]
pub enum StoreHandle {
    Mongo { client: Client, db: Database },
    Memory(InMemoryProductStore),
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub store: StoreHandle,
}

impl AppState {
    /// Open the configured store, retrying the MongoDB connection with backoff
    pub async fn connect(config: Config) -> eyre::Result<Self> {
        let store = match (config.store, &config.mongodb) {
            (StoreBackend::Mongodb, Some(mongo_config)) => {
                info!("Connecting to MongoDB at {}", mongo_config.redacted_url());

                let client =
                    database::mongodb::connect_from_config_with_retry(mongo_config, None).await?;
                let db = client.database(mongo_config.database());

                info!(
                    "Successfully connected to MongoDB database: {}",
                    mongo_config.database()
                );
                StoreHandle::Mongo { client, db }
            }
            (StoreBackend::Mongodb, None) => {
                eyre::bail!("PRODUCT_STORE=mongodb but no MongoDB configuration was loaded")
            }
            (StoreBackend::Memory, _) => {
                tracing::warn!("Using in-memory product store; data is lost on restart");
                StoreHandle::Memory(InMemoryProductStore::new())
            }
        };

        Ok(Self { config, store })
    }

    /// State over a fresh in-memory store
    pub fn in_memory(config: Config) -> Self {
        Self {
            config,
            store: StoreHandle::Memory(InMemoryProductStore::new()),
        }
    }
}

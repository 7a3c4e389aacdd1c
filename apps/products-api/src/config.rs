//! Configuration for Products API

use core_config::{
    app_info, env_or_default, env_parse, region::RegionConfig, server::ServerConfig, AppInfo,
    FromEnv,
};
use database::mongodb::MongoConfig;
use domain_products::{mongodb::DEFAULT_COLLECTION, Locale};
use strum::{Display, EnumString};

pub use core_config::Environment;

/// Where products are kept
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum StoreBackend {
    Mongodb,
    /// Process-local; contents are lost on restart
    Memory,
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub region: RegionConfig,
    pub environment: Environment,
    pub store: StoreBackend,
    /// Present exactly when `store` is [`StoreBackend::Mongodb`]
    pub mongodb: Option<MongoConfig>,
    pub collection: String,
    pub locale: Locale,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?;
        let region = RegionConfig::from_env()?;
        let store: StoreBackend = env_parse("PRODUCT_STORE", "mongodb")?;
        let locale: Locale = env_parse("MESSAGES_LOCALE", "en")?;

        let mongodb = match store {
            StoreBackend::Mongodb => Some(MongoConfig::from_env()?),
            StoreBackend::Memory => None,
        };

        Ok(Self {
            app: app_info!(),
            server,
            region,
            environment,
            store,
            mongodb,
            collection: env_or_default("PRODUCTS_COLLECTION", DEFAULT_COLLECTION),
            locale,
        })
    }
}

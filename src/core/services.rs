//! Unified service container
//!
//! Built once at startup and handed to every adapter; there is no
//! global client lookup.

use crate::core::company::CompanyService;
use crate::core::config::Config;
use crate::core::error::Result;
use crate::core::store::{DocumentStore, ElasticStore};
use std::sync::Arc;

/// Unified services container
///
/// All adapters use this same struct for service access.
#[derive(Clone)]
pub struct Services {
    /// Shared search engine handle
    pub store: Arc<dyn DocumentStore>,

    /// Company record operations
    pub company: Arc<CompanyService>,

    /// Application configuration
    pub config: Arc<Config>,
}

impl Services {
    /// Connect to the configured engine and build the services
    pub fn new(config: Config) -> Result<Self> {
        let store = Arc::new(ElasticStore::connect(&config.elasticsearch)?);
        Ok(Self::with_store(config, store))
    }

    /// Build services over an existing store
    pub fn with_store(config: Config, store: Arc<dyn DocumentStore>) -> Self {
        let company = Arc::new(CompanyService::new(
            Arc::clone(&store),
            config.elasticsearch.index.clone(),
            config.search.clone(),
        ));

        Self {
            store,
            company,
            config: Arc::new(config),
        }
    }
}

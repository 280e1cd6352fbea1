//! Business Registry Library
//!
//! Businesses (monitored use-cases) and the typed field schemas that
//! anomaly-detection rules reference, exposed over an HTTP API.

pub mod api;
pub mod config;
pub mod error;
pub mod registry;
pub mod store;

use crate::config::{Config, StorageBackend};
use crate::registry::Registry;
use crate::store::{FileStore, MemoryStore, RegistryStore};
use std::sync::Arc;

/// Build the registry over the store selected in `config`
pub fn build_registry(config: &Config) -> Registry {
    let store: Arc<dyn RegistryStore> = match config.storage_backend {
        StorageBackend::File => Arc::new(FileStore::new(&config.data_dir)),
        StorageBackend::Memory => Arc::new(MemoryStore::new()),
    };

    Registry::new(store, config.unique_business_names)
}

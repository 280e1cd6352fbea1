//! Business & Schema Registry
//!
//! System of record for businesses and the typed fields of their event
//! schemas. The [`BusinessDirectory`] owns businesses; the [`SchemaManager`]
//! owns field definitions and consults the directory only to check that a
//! business exists.

mod directory;
mod locks;
mod model;
mod schema;
mod validation;

pub use directory::BusinessDirectory;
pub use model::{
    deserialize_patch, Business, BusinessChanges, FieldDataType, FieldDefinition, NewField, Patch,
};
pub use schema::SchemaManager;

use crate::store::RegistryStore;
use std::sync::Arc;

/// Directory and schema manager sharing one store
pub struct Registry {
    pub directory: Arc<BusinessDirectory>,
    pub schema: SchemaManager,
    store: Arc<dyn RegistryStore>,
}

impl Registry {
    pub fn new(store: Arc<dyn RegistryStore>, unique_business_names: bool) -> Self {
        let directory =
            Arc::new(BusinessDirectory::new(store.clone()).with_unique_names(unique_business_names));
        let schema = SchemaManager::new(directory.clone(), store.clone());

        Self {
            directory,
            schema,
            store,
        }
    }

    pub fn storage_backend(&self) -> &'static str {
        self.store.backend()
    }
}

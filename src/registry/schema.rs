//! Schema Manager
//!
//! Field definitions per business. Names are unique within a business
//! (case-sensitive, compared after trimming) and fields are never modified
//! once registered.

use super::directory::BusinessDirectory;
use super::locks::KeyedLocks;
use super::model::{FieldDataType, FieldDefinition, NewField};
use super::validation::{normalize_description, validate_name};
use crate::error::{RegistryError, Result};
use crate::store::RegistryStore;
use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, info, warn};
use uuid::Uuid;

pub struct SchemaManager {
    directory: Arc<BusinessDirectory>,
    store: Arc<dyn RegistryStore>,
    locks: KeyedLocks,
}

impl SchemaManager {
    pub fn new(directory: Arc<BusinessDirectory>, store: Arc<dyn RegistryStore>) -> Self {
        Self {
            directory,
            store,
            locks: KeyedLocks::new(),
        }
    }

    /// Fields of a business in creation order
    pub fn list_fields(&self, business_id: Uuid) -> Result<Vec<FieldDefinition>> {
        self.ensure_business(business_id)?;

        let fields = self.store.list_fields(business_id)?;
        debug!("Listed {} fields for business {}", fields.len(), business_id);
        Ok(fields)
    }

    pub fn add_field(&self, business_id: Uuid, new_field: NewField) -> Result<FieldDefinition> {
        // Unknown business wins over any problem with the field itself
        self.ensure_business(business_id)?;

        let name = validate_name("field name", &new_field.name)?;
        let data_type: FieldDataType = new_field.data_type.parse()?;
        let description = normalize_description(new_field.description.as_deref())?;

        let field = self.locks.with_lock(business_id, || {
            let existing = self.store.list_fields(business_id)?;
            if existing.iter().any(|f| f.name == name) {
                warn!(
                    "Rejected duplicate field '{}' for business {}",
                    name, business_id
                );
                return Err(RegistryError::Conflict {
                    message: format!("Field '{}' already exists for this business", name),
                });
            }

            let field = FieldDefinition {
                id: Uuid::new_v4(),
                business_id,
                name: name.clone(),
                data_type,
                required: new_field.required,
                description,
                created_at: Utc::now(),
            };

            self.store.append_field(&field)?;
            Ok(field)
        })?;

        info!(
            "Added field '{}' ({}) to business {}",
            field.name, field.data_type, business_id
        );
        Ok(field)
    }

    fn ensure_business(&self, business_id: Uuid) -> Result<()> {
        if !self.directory.exists(business_id)? {
            return Err(RegistryError::business_not_found(business_id));
        }
        Ok(())
    }
}

//! Process-local store. Contents are lost on restart.

use super::RegistryStore;
use crate::error::{RegistryError, Result};
use crate::registry::{Business, FieldDefinition};
use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use uuid::Uuid;

#[derive(Default)]
struct MemoryState {
    businesses: Vec<Business>,
    index: HashMap<Uuid, usize>,
    fields: HashMap<Uuid, Vec<FieldDefinition>>,
}

#[derive(Default)]
pub struct MemoryStore {
    state: RwLock<MemoryState>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, MemoryState>> {
        self.state
            .read()
            .map_err(|_| RegistryError::Internal("Memory store lock poisoned".to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, MemoryState>> {
        self.state
            .write()
            .map_err(|_| RegistryError::Internal("Memory store lock poisoned".to_string()))
    }
}

impl RegistryStore for MemoryStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    fn insert_business(&self, business: &Business) -> Result<()> {
        let mut state = self.write()?;

        if state.index.contains_key(&business.id) {
            return Err(RegistryError::Internal(format!(
                "Business {} already stored",
                business.id
            )));
        }

        let position = state.businesses.len();
        state.businesses.push(business.clone());
        state.index.insert(business.id, position);
        Ok(())
    }

    fn save_business(&self, business: &Business) -> Result<()> {
        let mut state = self.write()?;

        let position = *state.index.get(&business.id).ok_or_else(|| {
            RegistryError::Internal(format!("Business {} missing from store", business.id))
        })?;

        state.businesses[position] = business.clone();
        Ok(())
    }

    fn load_business(&self, id: Uuid) -> Result<Option<Business>> {
        let state = self.read()?;
        Ok(state
            .index
            .get(&id)
            .map(|&position| state.businesses[position].clone()))
    }

    fn list_businesses(&self) -> Result<Vec<Business>> {
        Ok(self.read()?.businesses.clone())
    }

    fn append_field(&self, field: &FieldDefinition) -> Result<()> {
        let mut state = self.write()?;
        state
            .fields
            .entry(field.business_id)
            .or_default()
            .push(field.clone());
        Ok(())
    }

    fn list_fields(&self, business_id: Uuid) -> Result<Vec<FieldDefinition>> {
        Ok(self
            .read()?
            .fields
            .get(&business_id)
            .cloned()
            .unwrap_or_default())
    }
}

use crate::error::{RegistryError, Result};
use dashmap::DashMap;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

/// One mutex per business id. Entries live as long as the registry since
/// businesses are never removed.
#[derive(Default)]
pub struct KeyedLocks {
    locks: DashMap<Uuid, Arc<Mutex<()>>>,
}

impl KeyedLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `f` while holding the lock for `key`
    pub fn with_lock<T>(&self, key: Uuid, f: impl FnOnce() -> Result<T>) -> Result<T> {
        // Clone out of the map so the shard guard is released before blocking
        let lock = self.locks.entry(key).or_default().clone();
        let _guard = lock
            .lock()
            .map_err(|_| RegistryError::Internal(format!("Lock for {} poisoned", key)))?;
        f()
    }
}

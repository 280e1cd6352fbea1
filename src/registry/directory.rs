//! Business Directory
//!
//! Owns business identity, naming and partial updates.

use super::locks::KeyedLocks;
use super::model::{Business, BusinessChanges, Patch};
use super::validation::{normalize_description, validate_name};
use crate::error::{RegistryError, Result};
use crate::store::RegistryStore;
use std::sync::{Arc, Mutex};
use tracing::{debug, info};
use uuid::Uuid;

pub struct BusinessDirectory {
    store: Arc<dyn RegistryStore>,
    locks: KeyedLocks,
    unique_names: bool,
    name_lock: Mutex<()>,
}

impl BusinessDirectory {
    pub fn new(store: Arc<dyn RegistryStore>) -> Self {
        Self {
            store,
            locks: KeyedLocks::new(),
            unique_names: false,
            name_lock: Mutex::new(()),
        }
    }

    /// Reject a business name already used by another business
    pub fn with_unique_names(mut self, unique_names: bool) -> Self {
        self.unique_names = unique_names;
        self
    }

    pub fn create(&self, name: &str, description: Option<&str>) -> Result<Business> {
        let name = validate_name("name", name)?;
        let description = normalize_description(description)?;

        let business = self.with_name_lock(|| {
            self.ensure_name_available(&name, None)?;
            let business = Business::new(name.clone(), description);
            self.store.insert_business(&business)?;
            Ok(business)
        })?;

        info!("Created business '{}' ({})", business.name, business.id);
        Ok(business)
    }

    pub fn get(&self, id: Uuid) -> Result<Business> {
        self.store
            .load_business(id)?
            .ok_or_else(|| RegistryError::business_not_found(id))
    }

    pub fn exists(&self, id: Uuid) -> Result<bool> {
        Ok(self.store.load_business(id)?.is_some())
    }

    /// All businesses, oldest first
    pub fn list(&self) -> Result<Vec<Business>> {
        let businesses = self.store.list_businesses()?;
        debug!("Listed {} businesses", businesses.len());
        Ok(businesses)
    }

    pub fn update(&self, id: Uuid, changes: BusinessChanges) -> Result<Business> {
        let name = changes
            .name
            .as_deref()
            .map(|n| validate_name("name", n))
            .transpose()?;

        let description = match &changes.description {
            Patch::Unchanged => None,
            Patch::Clear => Some(None),
            Patch::Set(d) => Some(normalize_description(Some(d.as_str()))?),
        };

        let updated = self.with_name_lock(|| {
            self.locks.with_lock(id, || {
                let mut business = self.get(id)?;

                if let Some(name) = name {
                    if name != business.name {
                        self.ensure_name_available(&name, Some(id))?;
                    }
                    business.name = name;
                }
                if let Some(description) = description {
                    business.description = description;
                }

                self.store.save_business(&business)?;
                Ok(business)
            })
        })?;

        info!("Updated business '{}' ({})", updated.name, updated.id);
        Ok(updated)
    }

    fn with_name_lock<T>(&self, f: impl FnOnce() -> Result<T>) -> Result<T> {
        if !self.unique_names {
            return f();
        }

        let _guard = self
            .name_lock
            .lock()
            .map_err(|_| RegistryError::Internal("Business name lock poisoned".to_string()))?;
        f()
    }

    fn ensure_name_available(&self, name: &str, except: Option<Uuid>) -> Result<()> {
        if !self.unique_names {
            return Ok(());
        }

        let taken = self
            .store
            .list_businesses()?
            .iter()
            .any(|b| b.name == name && Some(b.id) != except);

        if taken {
            return Err(RegistryError::Conflict {
                message: format!("A business named '{}' already exists", name),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn directory() -> BusinessDirectory {
        BusinessDirectory::new(Arc::new(MemoryStore::new()))
    }

    #[test]
    fn test_create_then_get() {
        let directory = directory();

        let created = directory.create("Fraud Monitoring", None).unwrap();
        assert_eq!(created.name, "Fraud Monitoring");
        assert_eq!(created.description, None);

        assert_eq!(directory.get(created.id).unwrap(), created);
    }

    #[test]
    fn test_create_rejects_whitespace_name() {
        let directory = directory();
        assert!(matches!(
            directory.create("   ", None),
            Err(RegistryError::Validation { .. })
        ));
        assert!(directory.list().unwrap().is_empty());
    }

    #[test]
    fn test_create_rejects_long_description() {
        let directory = directory();
        let description = "x".repeat(501);
        assert!(matches!(
            directory.create("Checkout", Some(&description)),
            Err(RegistryError::Validation { .. })
        ));
    }

    #[test]
    fn test_blank_description_stored_absent() {
        let directory = directory();
        let created = directory.create("Checkout", Some("   ")).unwrap();
        assert_eq!(created.description, None);
    }

    #[test]
    fn test_duplicate_names_allowed_by_default() {
        let directory = directory();
        let a = directory.create("Payments", None).unwrap();
        let b = directory.create("Payments", None).unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(directory.list().unwrap().len(), 2);
    }

    #[test]
    fn test_unique_names_when_enabled() {
        let directory = directory().with_unique_names(true);
        directory.create("Payments", None).unwrap();
        assert!(matches!(
            directory.create(" Payments ", None),
            Err(RegistryError::Conflict { .. })
        ));

        // Renaming a business to its own name is not a conflict
        let other = directory.create("Refunds", None).unwrap();
        let renamed = directory
            .update(
                other.id,
                BusinessChanges {
                    name: Some("Refunds".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(renamed.name, "Refunds");

        assert!(matches!(
            directory.update(
                other.id,
                BusinessChanges {
                    name: Some("Payments".to_string()),
                    ..Default::default()
                },
            ),
            Err(RegistryError::Conflict { .. })
        ));
    }

    #[test]
    fn test_get_unknown_is_not_found() {
        let directory = directory();
        assert!(matches!(
            directory.get(Uuid::new_v4()),
            Err(RegistryError::NotFound { .. })
        ));
    }

    #[test]
    fn test_update_description_only() {
        let directory = directory();
        let created = directory.create("Checkout", Some("old")).unwrap();

        let updated = directory
            .update(
                created.id,
                BusinessChanges {
                    name: None,
                    description: Patch::Set("new".to_string()),
                },
            )
            .unwrap();

        assert_eq!(updated.name, "Checkout");
        assert_eq!(updated.description.as_deref(), Some("new"));
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(directory.get(created.id).unwrap(), updated);
    }

    #[test]
    fn test_update_clear_and_unchanged_description() {
        let directory = directory();
        let created = directory.create("Checkout", Some("keep me")).unwrap();

        let renamed = directory
            .update(
                created.id,
                BusinessChanges {
                    name: Some("Checkout v2".to_string()),
                    description: Patch::Unchanged,
                },
            )
            .unwrap();
        assert_eq!(renamed.description.as_deref(), Some("keep me"));

        let cleared = directory
            .update(
                created.id,
                BusinessChanges {
                    name: None,
                    description: Patch::Clear,
                },
            )
            .unwrap();
        assert_eq!(cleared.name, "Checkout v2");
        assert_eq!(cleared.description, None);
    }

    #[test]
    fn test_update_validation_leaves_record_untouched() {
        let directory = directory();
        let created = directory.create("Checkout", None).unwrap();

        assert!(matches!(
            directory.update(
                created.id,
                BusinessChanges {
                    name: Some(" ".to_string()),
                    description: Patch::Set("fine".to_string()),
                },
            ),
            Err(RegistryError::Validation { .. })
        ));
        assert_eq!(directory.get(created.id).unwrap(), created);
    }

    #[test]
    fn test_update_unknown_is_not_found() {
        let directory = directory();
        assert!(matches!(
            directory.update(Uuid::new_v4(), BusinessChanges::default()),
            Err(RegistryError::NotFound { .. })
        ));
    }

    #[test]
    fn test_list_is_stable() {
        let directory = directory();
        for name in ["a", "b", "c"] {
            directory.create(name, None).unwrap();
        }
        assert_eq!(directory.list().unwrap(), directory.list().unwrap());
    }
}

//! JSON file store
//!
//! Directory structure:
//! ```text
//! {data_dir}/businesses/{business_id}/
//!   ├── business.json   # Business record
//!   └── fields.json     # Field definitions, creation order
//! ```

use super::RegistryStore;
use crate::error::{RegistryError, Result};
use crate::registry::{Business, FieldDefinition};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;
use uuid::Uuid;

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            root: data_dir.join("businesses"),
        }
    }

    fn business_dir(&self, id: Uuid) -> PathBuf {
        self.root.join(id.to_string())
    }

    fn business_json_path(&self, id: Uuid) -> PathBuf {
        self.business_dir(id).join("business.json")
    }

    fn fields_json_path(&self, id: Uuid) -> PathBuf {
        self.business_dir(id).join("fields.json")
    }
}

impl RegistryStore for FileStore {
    fn backend(&self) -> &'static str {
        "file"
    }

    fn insert_business(&self, business: &Business) -> Result<()> {
        let dir = self.business_dir(business.id);
        if dir.join("business.json").exists() {
            return Err(RegistryError::Internal(format!(
                "Business {} already stored",
                business.id
            )));
        }

        fs::create_dir_all(&dir).map_err(|e| {
            RegistryError::Internal(format!("Failed to create business directory: {}", e))
        })?;

        write_json(&self.business_json_path(business.id), business)?;
        write_json(&self.fields_json_path(business.id), &Vec::<FieldDefinition>::new())?;

        debug!("Stored business {} at {}", business.id, dir.display());
        Ok(())
    }

    fn save_business(&self, business: &Business) -> Result<()> {
        let path = self.business_json_path(business.id);
        if !path.exists() {
            return Err(RegistryError::Internal(format!(
                "Business {} missing from store",
                business.id
            )));
        }

        write_json(&path, business)
    }

    fn load_business(&self, id: Uuid) -> Result<Option<Business>> {
        let path = self.business_json_path(id);
        if !path.exists() {
            return Ok(None);
        }

        read_json(&path).map(Some)
    }

    fn list_businesses(&self) -> Result<Vec<Business>> {
        if !self.root.exists() {
            return Ok(Vec::new());
        }

        let mut businesses = Vec::new();

        for entry in fs::read_dir(&self.root).map_err(|e| {
            RegistryError::Internal(format!("Failed to read businesses directory: {}", e))
        })? {
            let entry = entry.map_err(|e| {
                RegistryError::Internal(format!("Failed to read directory entry: {}", e))
            })?;

            let path = entry.path().join("business.json");
            if path.exists() {
                businesses.push(read_json::<Business>(&path)?);
            }
        }

        // Directory iteration order is arbitrary
        businesses.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(businesses)
    }

    fn append_field(&self, field: &FieldDefinition) -> Result<()> {
        let mut fields = self.list_fields(field.business_id)?;
        fields.push(field.clone());
        write_json(&self.fields_json_path(field.business_id), &fields)
    }

    fn list_fields(&self, business_id: Uuid) -> Result<Vec<FieldDefinition>> {
        let path = self.fields_json_path(business_id);
        if !path.exists() {
            return Ok(Vec::new());
        }

        read_json(&path)
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path).map_err(|e| {
        RegistryError::Internal(format!("Failed to read {}: {}", path.display(), e))
    })?;

    serde_json::from_str(&content).map_err(|e| {
        RegistryError::Internal(format!("Failed to parse {}: {}", path.display(), e))
    })
}

/// Write through a sibling temp file and rename so readers never see a partial document
fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let dir = path.parent().ok_or_else(|| {
        RegistryError::Internal(format!("No parent directory for {}", path.display()))
    })?;

    let content = serde_json::to_string_pretty(value)?;

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content.as_bytes())?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| {
        RegistryError::Internal(format!("Failed to write {}: {}", path.display(), e.error))
    })?;

    Ok(())
}

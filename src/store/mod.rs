//! Registry persistence
//!
//! Both registry components write through [`RegistryStore`]. Callers are
//! responsible for serializing writes to the same business; stores only
//! guarantee that each individual call is applied whole.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::error::Result;
use crate::registry::{Business, FieldDefinition};
use uuid::Uuid;

pub trait RegistryStore: Send + Sync {
    /// Short backend name, reported by the health endpoint
    fn backend(&self) -> &'static str;

    fn insert_business(&self, business: &Business) -> Result<()>;

    /// Overwrite an existing business record
    fn save_business(&self, business: &Business) -> Result<()>;

    fn load_business(&self, id: Uuid) -> Result<Option<Business>>;

    /// All businesses, oldest first
    fn list_businesses(&self) -> Result<Vec<Business>>;

    fn append_field(&self, field: &FieldDefinition) -> Result<()>;

    /// Fields of one business in creation order
    fn list_fields(&self, business_id: Uuid) -> Result<Vec<FieldDefinition>>;
}

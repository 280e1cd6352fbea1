//! Registry records and request shapes.

use crate::error::{RegistryError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// A monitored use-case
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Business {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Business {
    pub fn new(name: String, description: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            description,
            created_at: Utc::now(),
        }
    }
}

/// Value type a field carries in business events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldDataType {
    String,
    Integer,
    Float,
    Boolean,
    Datetime,
}

impl FieldDataType {
    pub const ALL: [FieldDataType; 5] = [
        FieldDataType::String,
        FieldDataType::Integer,
        FieldDataType::Float,
        FieldDataType::Boolean,
        FieldDataType::Datetime,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldDataType::String => "string",
            FieldDataType::Integer => "integer",
            FieldDataType::Float => "float",
            FieldDataType::Boolean => "boolean",
            FieldDataType::Datetime => "datetime",
        }
    }
}

impl fmt::Display for FieldDataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldDataType {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self> {
        FieldDataType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| {
                let allowed: Vec<&str> = FieldDataType::ALL.iter().map(|t| t.as_str()).collect();
                RegistryError::validation(format!(
                    "Invalid data_type '{}'. Must be one of: {}",
                    s,
                    allowed.join(", ")
                ))
            })
    }
}

/// A typed attribute in a business's event schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDefinition {
    pub id: Uuid,
    pub business_id: Uuid,
    pub name: String,
    pub data_type: FieldDataType,
    pub required: bool,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Input for registering a field. `data_type` is parsed by the schema manager
/// so unknown types are reported as validation failures.
#[derive(Debug, Clone)]
pub struct NewField {
    pub name: String,
    pub data_type: String,
    pub required: bool,
    pub description: Option<String>,
}

/// Three-state update for optional attributes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Patch<T> {
    #[default]
    Unchanged,
    Clear,
    Set(T),
}

/// Maps a present JSON member to `Clear` (null) or `Set`. Pair with
/// `#[serde(default)]` so a missing member stays `Unchanged`.
pub fn deserialize_patch<'de, D, T>(deserializer: D) -> std::result::Result<Patch<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(match Option::<T>::deserialize(deserializer)? {
        Some(value) => Patch::Set(value),
        None => Patch::Clear,
    })
}

/// Partial update of a business
#[derive(Debug, Clone, Default)]
pub struct BusinessChanges {
    pub name: Option<String>,
    pub description: Patch<String>,
}

//! Input constraints shared by businesses and fields.

use crate::error::{RegistryError, Result};

pub const MAX_NAME_LEN: usize = 120;
pub const MAX_DESCRIPTION_LEN: usize = 500;

/// Trim a name and check it is non-empty and within bounds
pub fn validate_name(label: &str, raw: &str) -> Result<String> {
    let name = raw.trim();

    if name.is_empty() {
        return Err(RegistryError::validation(format!("{} must not be empty", label)));
    }

    let len = name.chars().count();
    if len > MAX_NAME_LEN {
        return Err(RegistryError::validation(format!(
            "{} must be at most {} characters (got {})",
            label, MAX_NAME_LEN, len
        )));
    }

    Ok(name.to_string())
}

/// Trim a description; empty input is stored as absent
pub fn normalize_description(raw: Option<&str>) -> Result<Option<String>> {
    let Some(description) = raw.map(str::trim) else {
        return Ok(None);
    };

    if description.is_empty() {
        return Ok(None);
    }

    let len = description.chars().count();
    if len > MAX_DESCRIPTION_LEN {
        return Err(RegistryError::validation(format!(
            "description must be at most {} characters (got {})",
            MAX_DESCRIPTION_LEN, len
        )));
    }

    Ok(Some(description.to_string()))
}

//! Field API endpoints
//!
//! - GET /businesses/{id}/fields - List a business's fields
//! - POST /businesses/{id}/fields - Register a field

use super::{parse_business_id, ApiJson, RegistryState};
use crate::error::Result;
use crate::registry::{FieldDefinition, NewField};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct AddFieldRequest {
    pub name: String,
    /// Kept as text so unknown types surface as validation errors
    pub data_type: String,
    #[serde(default = "default_required")]
    pub required: bool,
    #[serde(default)]
    pub description: Option<String>,
}

fn default_required() -> bool {
    true
}

pub async fn list_fields(
    State(state): State<Arc<RegistryState>>,
    Path(id): Path<String>,
) -> Result<Json<Vec<FieldDefinition>>> {
    let business_id = parse_business_id(&id)?;
    let fields = state.registry.schema.list_fields(business_id)?;
    Ok(Json(fields))
}

pub async fn add_field(
    State(state): State<Arc<RegistryState>>,
    Path(id): Path<String>,
    ApiJson(request): ApiJson<AddFieldRequest>,
) -> Result<impl IntoResponse> {
    let business_id = parse_business_id(&id)?;

    let field = state.registry.schema.add_field(
        business_id,
        NewField {
            name: request.name,
            data_type: request.data_type,
            required: request.required,
            description: request.description,
        },
    )?;

    Ok((StatusCode::CREATED, Json(field)))
}

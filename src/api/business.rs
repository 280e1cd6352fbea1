//! Business API endpoints
//!
//! - GET /businesses/ - List businesses
//! - POST /businesses/ - Create a business
//! - GET /businesses/{id} - Get one business
//! - PATCH /businesses/{id} - Partially update a business

use super::{parse_business_id, ApiJson, RegistryState};
use crate::error::Result;
use crate::registry::{deserialize_patch, Business, BusinessChanges, Patch};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct CreateBusinessRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// `description: null` clears the description; omitting it leaves it as is
#[derive(Debug, Deserialize)]
pub struct UpdateBusinessRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_patch")]
    pub description: Patch<String>,
}

pub async fn list_businesses(
    State(state): State<Arc<RegistryState>>,
) -> Result<Json<Vec<Business>>> {
    let businesses = state.registry.directory.list()?;
    Ok(Json(businesses))
}

pub async fn create_business(
    State(state): State<Arc<RegistryState>>,
    ApiJson(request): ApiJson<CreateBusinessRequest>,
) -> Result<impl IntoResponse> {
    let business = state
        .registry
        .directory
        .create(&request.name, request.description.as_deref())?;

    Ok((StatusCode::CREATED, Json(business)))
}

pub async fn get_business(
    State(state): State<Arc<RegistryState>>,
    Path(id): Path<String>,
) -> Result<Json<Business>> {
    let id = parse_business_id(&id)?;
    let business = state.registry.directory.get(id)?;
    Ok(Json(business))
}

pub async fn update_business(
    State(state): State<Arc<RegistryState>>,
    Path(id): Path<String>,
    ApiJson(request): ApiJson<UpdateBusinessRequest>,
) -> Result<Json<Business>> {
    let id = parse_business_id(&id)?;

    let business = state.registry.directory.update(
        id,
        BusinessChanges {
            name: request.name,
            description: request.description,
        },
    )?;

    Ok(Json(business))
}

mod business;
mod fields;
mod health;

pub use business::{create_business, get_business, list_businesses, update_business};
pub use fields::{add_field, list_fields};
pub use health::health_check;

use crate::error::RegistryError;
use crate::registry::Registry;
use axum::{
    extract::FromRequest,
    routing::get,
    Router,
};
use std::sync::Arc;
use std::time::Instant;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

/// Shared state for all registry endpoints
pub struct RegistryState {
    pub registry: Registry,
    pub started_at: Instant,
}

impl RegistryState {
    pub fn new(registry: Registry) -> Self {
        Self {
            registry,
            started_at: Instant::now(),
        }
    }
}

/// JSON body extractor whose rejections are reported as validation errors
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(RegistryError))]
pub struct ApiJson<T>(pub T);

/// Build the registry router
pub fn router(state: Arc<RegistryState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/businesses", get(list_businesses).post(create_business))
        .route("/businesses/", get(list_businesses).post(create_business))
        .route("/businesses/:id", get(get_business).patch(update_business))
        .route("/businesses/:id/fields", get(list_fields).post(add_field))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// A path segment that is not a UUID cannot name any business
fn parse_business_id(raw: &str) -> Result<Uuid, RegistryError> {
    Uuid::parse_str(raw).map_err(|_| RegistryError::business_not_found(raw))
}

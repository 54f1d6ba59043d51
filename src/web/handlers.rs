//! HTTP handlers for the dry measure API

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use bytes::Bytes;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::store::{DryMeasure, SharedStore};

/// Text served on the home page
pub const WELCOME_TEXT: &str = "Welcome to the HomePage!";

/// Home page handler
pub async fn home_page() -> &'static str {
    debug!(endpoint = "home_page", "endpoint hit");
    WELCOME_TEXT
}

/// List every record in insertion order
pub async fn list_measures(State(store): State<SharedStore>) -> Json<Vec<DryMeasure>> {
    debug!(endpoint = "list_measures", "endpoint hit");

    let store = store.lock().await;
    Json(store.list().to_vec())
}

/// Return the first record with the given id
pub async fn get_measure(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
) -> Result<Json<DryMeasure>, ApiError> {
    debug!(endpoint = "get_measure", %id, "endpoint hit");

    let store = store.lock().await;
    match store.get(&id) {
        Some(measure) => Ok(Json(measure.clone())),
        None => Err(ApiError::NotFound(id)),
    }
}

/// Create a record from the JSON body and echo it back
///
/// The body is decoded regardless of its Content-Type header.
pub async fn create_measure(
    State(store): State<SharedStore>,
    body: Bytes,
) -> Result<Json<DryMeasure>, ApiError> {
    debug!(endpoint = "create_measure", "endpoint hit");

    let measure = DryMeasure::from_json(&body).map_err(|e| {
        debug!("Rejected dry measure payload: {}", e);
        ApiError::from(e)
    })?;

    let mut store = store.lock().await;
    let created = store.create(measure).clone();
    info!("Created dry measure '{}' ({} records)", created.id, store.len());

    Ok(Json(created))
}

/// Delete every record with the given id
pub async fn delete_measure(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    debug!(endpoint = "delete_measure", %id, "endpoint hit");

    let mut store = store.lock().await;
    match store.delete(&id) {
        0 => Err(ApiError::NotFound(id)),
        removed => {
            info!("Deleted {} dry measure(s) with id '{}'", removed, id);
            Ok(StatusCode::NO_CONTENT)
        }
    }
}

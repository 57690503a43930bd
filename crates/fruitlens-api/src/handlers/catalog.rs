//! Model catalog handler.

use axum::Json;

use fruitlens_models::{CatalogEntry, MODEL_CATALOG};

/// List the hosted models available for classification.
pub async fn list_models() -> Json<&'static [CatalogEntry]> {
    Json(MODEL_CATALOG)
}

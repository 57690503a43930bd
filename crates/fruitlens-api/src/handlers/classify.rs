//! Classification handler: upload → preprocess → classify → match.

use axum::extract::{Multipart, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

use fruitlens_client::{Classifier, ClassifierConfig};
use fruitlens_image::TARGET_SIZE;
use fruitlens_models::{match_predictions, resolve_model, MatchedResult, Prediction};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Matched results shown in the primary display.
const MAX_RESULTS: usize = 5;

/// Raw predictions kept in the diagnostic listing.
const MAX_RAW_PREDICTIONS: usize = 10;

#[derive(Deserialize)]
pub struct ClassifyParams {
    /// Hosted model identifier from the catalog
    #[serde(default = "default_model")]
    pub model: String,
}

fn default_model() -> String {
    "microsoft/resnet-50".to_string()
}

/// Classification response.
#[derive(Serialize)]
pub struct ClassifyResponse {
    pub model: String,
    /// Top matched fruit, when any prediction matched the vocabulary
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best: Option<MatchedResult>,
    /// Matched fruits in prediction order
    pub results: Vec<MatchedResult>,
    /// Raw predictions for diagnostics, fruit or not
    pub predictions: Vec<Prediction>,
}

/// Classify an uploaded fruit photo.
///
/// Accepts a multipart body with a `file` field (JPEG/PNG). An empty
/// `results` list means no known fruit was recognized; the raw
/// predictions are still returned.
pub async fn classify(
    State(state): State<AppState>,
    Query(params): Query<ClassifyParams>,
    mut multipart: Multipart,
) -> ApiResult<Json<ClassifyResponse>> {
    let entry = resolve_model(&params.model)
        .ok_or_else(|| ApiError::bad_request(format!("unknown model id: {}", params.model)))?;

    let mut file_bytes = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(format!("malformed multipart body: {}", e)))?
    {
        if field.name() == Some("file") {
            let bytes = field
                .bytes()
                .await
                .map_err(|e| ApiError::bad_request(format!("failed to read upload: {}", e)))?;
            file_bytes = Some(bytes);
            break;
        }
    }
    let bytes = file_bytes.ok_or_else(|| ApiError::bad_request("no file uploaded"))?;

    let image = fruitlens_image::decode(&bytes)?;
    let processed = fruitlens_image::preprocess(&image, TARGET_SIZE)?;

    let classifier = Classifier::with_client(
        ClassifierConfig::new(entry.model_id, state.config.api_token.clone()),
        state.http.clone(),
    );
    let predictions = classifier.classify(&processed).await?;

    let matched = match_predictions(&predictions);
    info!(
        model = entry.model_id,
        predictions = predictions.len(),
        matched = matched.len(),
        "classification complete"
    );

    let results: Vec<MatchedResult> = matched.into_iter().take(MAX_RESULTS).collect();
    let predictions: Vec<Prediction> =
        predictions.into_iter().take(MAX_RAW_PREDICTIONS).collect();

    Ok(Json(ClassifyResponse {
        model: entry.model_id.to_string(),
        best: results.first().cloned(),
        results,
        predictions,
    }))
}

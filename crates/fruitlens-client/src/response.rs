//! Response normalization.
//!
//! The hosted inference endpoint returns several JSON shapes depending on
//! the model: an array of `{label, score}` objects, a bare object, or an
//! object carrying an `error` field. This module folds them all into a
//! single prediction list or a [`ClientError`].

use reqwest::StatusCode;
use serde_json::Value;
use tracing::debug;

use fruitlens_models::Prediction;

use crate::error::{ClientError, ClientResult};

/// Maximum error detail kept from an unparseable non-2xx body.
const ERROR_DETAIL_LIMIT: usize = 200;

/// Maximum body prefix kept when a 2xx response is not valid JSON.
const PARSE_DETAIL_LIMIT: usize = 100;

/// Normalize a raw endpoint response into a prediction list.
pub fn normalize_response(status: StatusCode, body: &str) -> ClientResult<Vec<Prediction>> {
    if !status.is_success() {
        let detail = match serde_json::from_str::<Value>(body) {
            Ok(value) => value.to_string(),
            Err(_) => truncate(body, ERROR_DETAIL_LIMIT).to_string(),
        };
        return Err(ClientError::api(format!(
            "endpoint returned {}: {}",
            status, detail
        )));
    }

    let value: Value = serde_json::from_str(body).map_err(|_| {
        ClientError::response_format(format!(
            "failed to parse response body: {}",
            truncate(body, PARSE_DETAIL_LIMIT)
        ))
    })?;

    match value {
        Value::Array(items) => normalize_array(items),
        Value::Object(map) => {
            if let Some(error) = map.get("error") {
                return Err(ClientError::api(format!(
                    "endpoint reported an error: {}",
                    error
                )));
            }
            // Some models return a bare object with prediction info; wrap
            // it as a one-element list without label validation.
            let prediction: Prediction = serde_json::from_value(Value::Object(map))
                .map_err(|e| ClientError::response_format(format!("unexpected object response: {}", e)))?;
            Ok(vec![prediction])
        }
        other => Err(ClientError::response_format(format!(
            "unexpected response format: {}",
            other
        ))),
    }
}

/// Keep only object-typed array elements carrying a non-null `label`.
fn normalize_array(items: Vec<Value>) -> ClientResult<Vec<Prediction>> {
    let mut valid = Vec::with_capacity(items.len());

    for item in items {
        let has_label = item
            .as_object()
            .and_then(|obj| obj.get("label"))
            .map(|label| !label.is_null())
            .unwrap_or(false);
        if !has_label {
            debug!(item = %item, "skipping invalid result item");
            continue;
        }
        match serde_json::from_value::<Prediction>(item) {
            Ok(prediction) => valid.push(prediction),
            Err(e) => debug!(error = %e, "skipping undeserializable result item"),
        }
    }

    if valid.is_empty() {
        return Err(ClientError::NoValidResults);
    }
    Ok(valid)
}

/// Char-boundary-safe prefix truncation.
fn truncate(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn array_of_labeled_objects_passes_through() {
        let body = r#"[{"label":"Granny Smith","score":0.91},{"label":"banana","score":0.05}]"#;
        let predictions = normalize_response(StatusCode::OK, body).unwrap();

        assert_eq!(predictions.len(), 2);
        assert_eq!(predictions[0].label.as_deref(), Some("Granny Smith"));
        assert_eq!(predictions[0].score, 0.91);
    }

    #[test]
    fn invalid_array_elements_are_filtered() {
        let body = r#"[{"label":null,"score":0.9},"not an object",{"score":0.5},{"label":"lemon","score":0.1}]"#;
        let predictions = normalize_response(StatusCode::OK, body).unwrap();

        assert_eq!(predictions.len(), 1);
        assert_eq!(predictions[0].label.as_deref(), Some("lemon"));
    }

    #[test]
    fn empty_filtered_array_is_no_valid_results() {
        let body = r#"[{"label":null},{"score":0.5}]"#;
        let err = normalize_response(StatusCode::OK, body).unwrap_err();
        assert!(matches!(err, ClientError::NoValidResults));
    }

    #[test]
    fn object_with_error_field_is_api_error_even_on_200() {
        let body = r#"{"error": "model loading"}"#;
        let err = normalize_response(StatusCode::OK, body).unwrap_err();

        match err {
            ClientError::Api(detail) => assert!(detail.contains("model loading")),
            other => panic!("expected Api error, got {:?}", other),
        }
    }

    #[test]
    fn bare_object_is_wrapped_without_label_validation() {
        let body = r#"{"score": 0.7}"#;
        let predictions = normalize_response(StatusCode::OK, body).unwrap();

        assert_eq!(predictions.len(), 1);
        assert_eq!(predictions[0].label, None);
        assert_eq!(predictions[0].score, 0.7);
    }

    #[test]
    fn scalar_body_is_unexpected_format() {
        let err = normalize_response(StatusCode::OK, "42").unwrap_err();
        assert!(matches!(err, ClientError::ResponseFormat(_)));
    }

    #[test]
    fn malformed_json_keeps_a_short_body_prefix() {
        let body = "x".repeat(500);
        let err = normalize_response(StatusCode::OK, &body).unwrap_err();

        match err {
            ClientError::ResponseFormat(detail) => {
                assert!(detail.contains(&"x".repeat(100)));
                assert!(!detail.contains(&"x".repeat(101)));
            }
            other => panic!("expected ResponseFormat error, got {:?}", other),
        }
    }

    #[test]
    fn non_2xx_with_json_body_keeps_structured_detail() {
        let body = r#"{"error": "rate limited"}"#;
        let err = normalize_response(StatusCode::TOO_MANY_REQUESTS, body).unwrap_err();

        match err {
            ClientError::Api(detail) => {
                assert!(detail.contains("429"));
                assert!(detail.contains("rate limited"));
            }
            other => panic!("expected Api error, got {:?}", other),
        }
    }

    #[test]
    fn non_2xx_with_text_body_is_truncated_to_200_chars() {
        let body = "y".repeat(1000);
        let err = normalize_response(StatusCode::BAD_GATEWAY, &body).unwrap_err();

        match err {
            ClientError::Api(detail) => {
                assert!(detail.contains(&"y".repeat(200)));
                assert!(!detail.contains(&"y".repeat(201)));
            }
            other => panic!("expected Api error, got {:?}", other),
        }
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        // Multi-byte characters right at the cut point must not panic.
        let s = "ü".repeat(150);
        let cut = truncate(&s, 201);
        assert!(cut.len() <= 201);
        assert!(s.starts_with(cut));
    }
}

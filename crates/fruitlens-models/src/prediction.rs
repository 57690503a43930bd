//! Prediction and matched-result types.

use serde::{Deserialize, Serialize};

/// One classification result as returned by the remote inference endpoint.
///
/// The endpoint orders predictions by descending score; that order is
/// preserved and never recomputed locally. `label` stays optional because
/// some response shapes are passed through without label validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prediction {
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub score: f64,
}

impl Prediction {
    pub fn new(label: impl Into<String>, score: f64) -> Self {
        Self {
            label: Some(label.into()),
            score,
        }
    }
}

/// A prediction resolved to a known fruit with localized display text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchedResult {
    /// Localized display name (e.g. "Elma")
    pub fruit: String,
    /// Percentage-formatted confidence, two decimals (e.g. "91.00%")
    pub confidence: String,
    /// The unmodified label from the classifier, kept for diagnostics
    pub original_label: String,
}

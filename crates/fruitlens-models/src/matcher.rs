//! Label matching.
//!
//! Maps the free-text labels returned by the classifier onto the curated
//! fruit vocabulary and attaches Turkish display names. Matching is
//! substring-based and case-insensitive so that labels like
//! "Granny Smith" or "banana bread" still resolve to a fruit.

use crate::prediction::{MatchedResult, Prediction};
use crate::vocabulary::{FRUITS, SUB_VARIETIES, TURKISH_NAMES};

/// Resolve a raw classifier label to a canonical fruit identifier.
///
/// Rules, first match wins:
/// 1. a sub-variety name occurs in the label (cultivars resolve to their
///    parent fruit),
/// 2. a vocabulary entry occurs in the label,
/// 3. the label occurs in a vocabulary entry (truncated-label case).
pub fn match_label(label: &str) -> Option<&'static str> {
    let label = label.to_lowercase();

    for (variety, parent) in SUB_VARIETIES {
        if label.contains(variety) {
            return Some(parent);
        }
    }

    for fruit in FRUITS {
        if label.contains(fruit) {
            return Some(fruit);
        }
    }

    for fruit in FRUITS {
        if fruit.contains(label.as_str()) {
            return Some(fruit);
        }
    }

    None
}

/// Localized display name for a canonical fruit identifier.
///
/// Falls back to the capitalized identifier when no localization entry
/// exists.
pub fn localized_name(canonical: &str) -> String {
    TURKISH_NAMES
        .iter()
        .find(|(id, _)| *id == canonical)
        .map(|(_, name)| (*name).to_string())
        .unwrap_or_else(|| capitalize(canonical))
}

/// Match a normalized prediction list against the fruit vocabulary.
///
/// Predictions without a label are skipped; unmatched predictions are
/// dropped. The relative order of matching predictions is preserved.
pub fn match_predictions(predictions: &[Prediction]) -> Vec<MatchedResult> {
    predictions
        .iter()
        .filter_map(|prediction| {
            let label = prediction.label.as_deref()?;
            let canonical = match_label(label)?;
            Some(MatchedResult {
                fruit: localized_name(canonical),
                confidence: format_confidence(prediction.score),
                original_label: label.to_string(),
            })
        })
        .collect()
}

/// Percentage-formatted confidence, two decimal places.
pub fn format_confidence(score: f64) -> String {
    format!("{:.2}%", score * 100.0)
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

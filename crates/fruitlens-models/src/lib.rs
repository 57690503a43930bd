//! Shared data models for the FruitLens backend.
//!
//! This crate provides:
//! - Prediction and matched-result types returned to clients
//! - The curated fruit vocabulary, sub-variety map, and Turkish localization
//! - The label matcher that maps raw classifier labels onto the vocabulary
//! - The fixed catalog of supported hosted models

pub mod catalog;
pub mod matcher;
pub mod prediction;
pub mod vocabulary;

// Re-export common types
pub use catalog::{resolve_model, CatalogEntry, MODEL_CATALOG};
pub use matcher::{localized_name, match_label, match_predictions};
pub use prediction::{MatchedResult, Prediction};

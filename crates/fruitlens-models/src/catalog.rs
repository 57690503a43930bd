//! Catalog of hosted models the backend can query.

use serde::Serialize;

/// One entry in the model catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    /// Human-readable name shown in model selection
    pub name: &'static str,
    /// Hosted model identifier, `<org>/<model>`
    pub model_id: &'static str,
}

/// The fixed set of hosted image-classification models.
pub const MODEL_CATALOG: &[CatalogEntry] = &[
    CatalogEntry {
        name: "ResNet-50",
        model_id: "microsoft/resnet-50",
    },
    CatalogEntry {
        name: "ViT Base",
        model_id: "google/vit-base-patch16-224",
    },
    CatalogEntry {
        name: "DeiT Base",
        model_id: "facebook/deit-base-distilled-patch16-224",
    },
    CatalogEntry {
        name: "ConvNeXT",
        model_id: "facebook/convnext-base-224-22k-1k",
    },
    CatalogEntry {
        name: "CLIP",
        model_id: "openai/clip-vit-base-patch32",
    },
];

/// Look up a catalog entry by model identifier.
pub fn resolve_model(model_id: &str) -> Option<&'static CatalogEntry> {
    MODEL_CATALOG.iter().find(|e| e.model_id == model_id)
}

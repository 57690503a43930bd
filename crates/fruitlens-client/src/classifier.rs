//! Classification client with upload-encoding fallback.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use image::DynamicImage;
use reqwest::header::CONTENT_TYPE;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde_json::json;
use tracing::{debug, info, warn};

use fruitlens_image::encode_jpeg;
use fruitlens_models::Prediction;

use crate::config::ClassifierConfig;
use crate::encoding::UploadEncoding;
use crate::error::{ClientError, ClientResult};
use crate::response::normalize_response;

/// Base URL of the hosted inference API.
pub const DEFAULT_BASE_URL: &str = "https://api-inference.huggingface.co";

/// Client for a hosted image-classification model.
///
/// Configuration is fixed at construction; one classifier talks to one
/// model. Calls are sequential: up to four outbound requests per
/// classification, one per upload encoding, stopping at the first the
/// endpoint accepts.
pub struct Classifier {
    config: ClassifierConfig,
    base_url: String,
    http: Client,
}

impl Classifier {
    /// Create a classifier with its own connection pool.
    pub fn new(config: ClassifierConfig) -> Self {
        Self::with_client(config, Client::new())
    }

    /// Create a classifier reusing an existing HTTP client.
    pub fn with_client(config: ClassifierConfig, http: Client) -> Self {
        Self {
            config,
            base_url: DEFAULT_BASE_URL.to_string(),
            http,
        }
    }

    /// Override the API base URL (used against a local mock server).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Whether the access token looks usable.
    pub fn is_configured(&self) -> bool {
        self.config.is_configured()
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}", self.base_url, self.config.model_id)
    }

    /// Submit a preprocessed image for classification.
    ///
    /// The image is serialized as JPEG and sent with each encoding from
    /// [`UploadEncoding::ALL`] in turn until one succeeds. When every
    /// encoding fails, the last attempt's error is returned.
    pub async fn classify(&self, image: &DynamicImage) -> ClientResult<Vec<Prediction>> {
        if !self.is_configured() {
            return Err(ClientError::configuration(
                "API token is missing, too short, or has the wrong prefix",
            ));
        }

        let jpeg = encode_jpeg(image)
            .map_err(|e| ClientError::upload(format!("JPEG serialization failed: {}", e)))?;

        let mut last_error = None;

        for encoding in UploadEncoding::ALL {
            debug!(%encoding, model = %self.config.model_id, "attempting upload");
            match self.attempt(*encoding, &jpeg).await {
                Ok(predictions) => {
                    info!(
                        %encoding,
                        model = %self.config.model_id,
                        count = predictions.len(),
                        "classification succeeded"
                    );
                    return Ok(predictions);
                }
                Err(e) => {
                    warn!(%encoding, error = %e, "upload attempt failed, trying next encoding");
                    last_error = Some(e);
                }
            }
        }

        Err(last_error.unwrap_or_else(|| ClientError::upload("no upload encodings attempted")))
    }

    async fn attempt(
        &self,
        encoding: UploadEncoding,
        jpeg: &[u8],
    ) -> ClientResult<Vec<Prediction>> {
        let request = self
            .http
            .post(self.endpoint())
            .bearer_auth(&self.config.api_token);

        let request = match encoding {
            UploadEncoding::Binary => request
                .header(CONTENT_TYPE, "application/octet-stream")
                .body(jpeg.to_vec()),
            UploadEncoding::Base64Json => {
                request.json(&json!({ "inputs": { "image": BASE64.encode(jpeg) } }))
            }
            UploadEncoding::Base64Flat => request.json(&json!({ "inputs": BASE64.encode(jpeg) })),
            UploadEncoding::Multipart => {
                let part = Part::bytes(jpeg.to_vec())
                    .file_name("image.jpg")
                    .mime_str("image/jpeg")
                    .map_err(|e| ClientError::upload(format!("invalid form part: {}", e)))?;
                request.multipart(Form::new().part("file", part))
            }
        };

        let response = request
            .send()
            .await
            .map_err(|e| ClientError::upload(format!("{} upload failed: {}", encoding, e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ClientError::upload(format!("failed to read response body: {}", e)))?;

        normalize_response(status, &body)
    }
}

//! Classifier configuration.

/// Expected prefix of a valid access token.
const TOKEN_PREFIX: &str = "hf_";

/// Tokens at or below this length are rejected as misconfigured.
const MIN_TOKEN_LEN: usize = 10;

/// Immutable configuration for a [`crate::Classifier`].
///
/// The token and model id are fixed for the lifetime of the client
/// instance; the client never reads ambient environment state.
#[derive(Debug, Clone)]
pub struct ClassifierConfig {
    /// Hosted model identifier, `<org>/<model>`
    pub model_id: String,
    /// Access token for the inference API
    pub api_token: String,
}

impl ClassifierConfig {
    pub fn new(model_id: impl Into<String>, api_token: impl Into<String>) -> Self {
        Self {
            model_id: model_id.into(),
            api_token: api_token.into(),
        }
    }

    /// Whether the access token looks usable.
    ///
    /// True only when the token is longer than 10 characters and carries
    /// the service's credential prefix. All submission attempts are
    /// skipped otherwise.
    pub fn is_configured(&self) -> bool {
        self.api_token.len() > MIN_TOKEN_LEN && self.api_token.starts_with(TOKEN_PREFIX)
    }
}

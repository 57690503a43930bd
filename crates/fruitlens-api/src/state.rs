//! Application state.

use crate::config::ApiConfig;

/// Shared application state.
///
/// One reqwest client is reused across requests; per-request classifiers
/// borrow its connection pool.
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub http: reqwest::Client,
}

impl AppState {
    /// Create new application state.
    pub fn new(config: ApiConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;
        Ok(Self { config, http })
    }
}

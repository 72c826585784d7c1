//! # HTTP Transport
//!
//! The production [`Transport`]: one shared `reqwest::Client` configured with
//! the base address, the request timeout and the default content type.

use super::{QueryParams, RawResponse, Transport, TransportError};
use crate::config::ApiConfig;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, instrument};

/// Shared HTTP client used by every API caller.
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    /// Builds the client from the `[api]` configuration section.
    pub fn new(config: &ApiConfig) -> Result<Self, TransportError> {
        let mut headers = HeaderMap::new();
        let content_type = HeaderValue::from_str(&config.content_type).map_err(|e| {
            TransportError::new(format!(
                "Invalid content type '{}': {e}",
                config.content_type
            ))
        })?;
        headers.insert(CONTENT_TYPE, content_type);

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Joins `path` onto the base address with exactly one slash.
    pub fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[async_trait]
impl Transport for HttpTransport {
    #[instrument(skip(self, params), fields(url = %self.url_for(path)))]
    async fn get(&self, path: &str, params: &QueryParams) -> Result<RawResponse, TransportError> {
        let url = self.url_for(path);
        debug!(?params, "Sending GET");

        let response = self.client.get(&url).query(params).send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?;

        let data = if body.is_empty() {
            Value::Null
        } else {
            // Non-JSON bodies are passed through as text, whatever the status.
            serde_json::from_slice(&body)
                .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&body).into_owned()))
        };

        debug!(status, "Received response");
        Ok(RawResponse { status, data })
    }
}

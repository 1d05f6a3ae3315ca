//! Production [`FactSource`] over HTTP.

use async_trait::async_trait;
use reqwest::Client;
use shared::{error::FactFetchError, protocol::FactResponse};
use tracing::debug;

use crate::FactSource;

/// Fetches facts with one GET against a fixed endpoint URL.
pub struct HttpFactSource {
    http: Client,
    fact_url: String,
}

impl HttpFactSource {
    pub fn new(fact_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            fact_url: fact_url.into(),
        }
    }

    /// Uses a caller-configured `reqwest::Client`, e.g. with a request
    /// timeout or proxy settings.
    pub fn with_client(http: Client, fact_url: impl Into<String>) -> Self {
        Self {
            http,
            fact_url: fact_url.into(),
        }
    }
}

#[async_trait]
impl FactSource for HttpFactSource {
    async fn fetch_random(&self) -> Result<FactResponse, FactFetchError> {
        let response = self
            .http
            .get(&self.fact_url)
            .send()
            .await
            .map_err(|err| FactFetchError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FactFetchError::UnexpectedStatus {
                status: status.as_u16(),
            });
        }

        let fact: FactResponse = response.json().await.map_err(|err| {
            if err.is_decode() {
                FactFetchError::InvalidPayload(err.to_string())
            } else {
                FactFetchError::Transport(err.to_string())
            }
        })?;
        debug!(text = %fact.text, "fetched fact payload");
        Ok(fact)
    }
}

#[cfg(test)]
#[path = "tests/source_tests.rs"]
mod tests;

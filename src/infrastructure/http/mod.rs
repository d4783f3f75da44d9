// ============================================================
// DATASET FETCHER
// ============================================================
// Downloads the raw compressed tables. One-shot tool: failures
// propagate and abort the run, no retry.

use async_trait::async_trait;

use crate::domain::error::{AppError, Result};

#[async_trait]
pub trait DatasetFetcher: Send + Sync {
    /// Fetch the raw (still compressed) body at `url`.
    async fn fetch(&self, url: &str) -> Result<Vec<u8>>;
}

pub struct HttpDatasetFetcher {
    client: reqwest::Client,
}

impl HttpDatasetFetcher {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for HttpDatasetFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DatasetFetcher for HttpDatasetFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        tracing::info!("Downloading {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| AppError::NetworkError(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::NetworkError(format!(
                "Download failed ({}): {}",
                response.status(),
                url
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| AppError::NetworkError(format!("Failed to read response body: {}", e)))?;

        tracing::debug!("Downloaded {} bytes from {}", bytes.len(), url);
        Ok(bytes.to_vec())
    }
}

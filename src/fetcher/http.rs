//! HTTP Product Fetcher
//!
//! Issues `GET <endpoint>` and decodes a JSON array of products. The in-flight request is
//! dropped as soon as the signal is cancelled.

use super::types::{DataFetcher, FetchError, NetworkError, Product};
use crate::cancel::signal::CancellationSignal;

use async_trait::async_trait;
use std::time::Duration;

pub struct HttpProductFetcher {
    client: reqwest::Client,
    endpoint: String,
    timeout: Duration,
}

impl HttpProductFetcher {
    pub fn new(endpoint: &str, timeout: Duration) -> Self {
        Self::with_client(reqwest::Client::new(), endpoint, timeout)
    }

    pub fn with_client(client: reqwest::Client, endpoint: &str, timeout: Duration) -> Self {
        Self {
            client,
            endpoint: endpoint.trim().to_string(),
            timeout,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn request_products(&self) -> Result<Vec<Product>, FetchError> {
        let response = self
            .client
            .get(&self.endpoint)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| NetworkError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(NetworkError::Status(status.as_u16()).into());
        }

        let products = response
            .json::<Vec<Product>>()
            .await
            .map_err(|e| NetworkError::Decode(e.to_string()))?;

        Ok(products)
    }
}

#[async_trait]
impl DataFetcher for HttpProductFetcher {
    async fn fetch(&self, signal: &CancellationSignal) -> Result<Vec<Product>, FetchError> {
        if signal.is_cancelled() {
            return Err(FetchError::Cancelled);
        }

        tracing::debug!("Fetching products from {} (op {})", self.endpoint, signal.id());

        tokio::select! {
            biased;
            _ = signal.cancelled() => {
                tracing::debug!("Fetch request aborted (op {})", signal.id());
                Err(FetchError::Cancelled)
            }
            result = self.request_products() => {
                // The body may have finished decoding in the same poll that cancelled us.
                if signal.is_cancelled() {
                    return Err(FetchError::Cancelled);
                }
                if let Ok(products) = &result {
                    tracing::debug!("Fetched {} products (op {})", products.len(), signal.id());
                }
                result
            }
        }
    }
}

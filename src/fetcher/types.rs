use crate::cancel::signal::CancellationSignal;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single item of the remote product list.
///
/// Only `id` and `name` are interpreted; every other field is carried through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Product {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            extra: serde_json::Map::new(),
        }
    }
}

/// Failure talking to the data source.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum NetworkError {
    #[error("HTTP error; {0}")]
    Status(u16),
    #[error("transport error: {0}")]
    Transport(String),
    #[error("invalid response body: {0}")]
    Decode(String),
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum FetchError {
    /// The operation was superseded. Not a user-facing failure.
    #[error("fetch request aborted")]
    Cancelled,
    #[error(transparent)]
    Network(#[from] NetworkError),
}

impl FetchError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, FetchError::Cancelled)
    }
}

/// Capability to load the full product list.
#[async_trait]
pub trait DataFetcher: Send + Sync {
    async fn fetch(&self, signal: &CancellationSignal) -> Result<Vec<Product>, FetchError>;
}

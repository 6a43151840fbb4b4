use crate::fetcher::types::{NetworkError, Product};
use serde::{Deserialize, Serialize};

/// A query term after normalization (surrounding whitespace removed).
///
/// Two queries are the same query iff their normalized strings are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SearchQuery(String);

impl SearchQuery {
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Per-coordinator memo of the last query whose fetch completed successfully.
#[derive(Debug, Default)]
pub struct SearchState {
    pub last_query_term: Option<SearchQuery>,
}

/// What happened to a single `search` call.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// Fetch completed; filtered and sorted products (possibly empty).
    Results(Vec<Product>),
    /// Same term as the last completed query; no I/O was issued.
    Duplicate,
    /// Superseded by a newer search before its fetch completed.
    Cancelled,
    /// The data source failed. Already logged.
    Failed(NetworkError),
}

impl SearchOutcome {
    /// Collapses the outcome into what a plain `search` caller sees.
    pub fn into_products(self) -> Vec<Product> {
        match self {
            SearchOutcome::Results(products) => products,
            _ => Vec::new(),
        }
    }

    pub fn status(&self) -> SearchStatus {
        match self {
            SearchOutcome::Results(_) => SearchStatus::Ok,
            SearchOutcome::Duplicate => SearchStatus::Duplicate,
            SearchOutcome::Cancelled => SearchStatus::Cancelled,
            SearchOutcome::Failed(_) => SearchStatus::Failed,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchStatus {
    Ok,
    Duplicate,
    Cancelled,
    Failed,
}

// --- HTTP Data Transfer Objects ---

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    pub query: String,
    pub status: SearchStatus,
    pub count: usize,
    pub results: Vec<Product>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateSessionResponse {
    pub session_id: String,
}

//! Search Coordinator
//!
//! Turns a stream of (possibly rapid-fire) query terms into one authoritative,
//! de-duplicated, filtered and sorted result stream.
//!
//! ## Pipeline
//! 1. **Normalize** the raw term (trim).
//! 2. **Suppress duplicates**: a term equal to the last *completed* query returns nothing
//!    without touching the network.
//! 3. **Cancel & fetch**: `RequestCanceller` invalidates the previous fetch before the new
//!    one is issued, so at most one fetch is ever live.
//! 4. **Filter & sort** the fetched dataset (`search::filter`).
//!
//! Every failure is absorbed here; callers of `search` only ever get a product list.

use super::filter::filter_and_sort;
use super::types::{SearchOutcome, SearchQuery, SearchState};
use crate::cancel::canceller::RequestCanceller;
use crate::fetcher::types::{DataFetcher, FetchError, Product};

use parking_lot::Mutex;
use std::sync::Arc;

pub struct SearchCoordinator {
    fetcher: Arc<dyn DataFetcher>,
    canceller: RequestCanceller,
    /// Never held across an `.await`.
    state: Mutex<SearchState>,
}

impl SearchCoordinator {
    pub fn new(fetcher: Arc<dyn DataFetcher>) -> Arc<Self> {
        Arc::new(Self {
            fetcher,
            canceller: RequestCanceller::new(),
            state: Mutex::new(SearchState::default()),
        })
    }

    /// Runs one search and returns the matching products, sorted by name.
    ///
    /// Duplicate, superseded and failed searches all resolve to an empty list.
    pub async fn search(&self, raw_term: &str) -> Vec<Product> {
        self.search_outcome(raw_term).await.into_products()
    }

    /// Same as `search`, but reports why a search produced no results.
    pub async fn search_outcome(&self, raw_term: &str) -> SearchOutcome {
        let term = SearchQuery::new(raw_term);

        if self.state.lock().last_query_term.as_ref() == Some(&term) {
            tracing::debug!("Skipping duplicate query '{}'", term);
            return SearchOutcome::Duplicate;
        }

        let signal = self.canceller.begin_operation();
        tracing::debug!("Searching '{}' (op {})", term, signal.id());

        let result = self.fetcher.fetch(&signal).await;

        // A fetcher that ignores the signal can still resolve after being superseded.
        if signal.is_cancelled() {
            tracing::debug!("Discarding superseded search '{}' (op {})", term, signal.id());
            return SearchOutcome::Cancelled;
        }

        match result {
            Ok(dataset) => {
                self.state.lock().last_query_term = Some(term.clone());
                let total = dataset.len();
                let products = filter_and_sort(dataset, term.as_str());
                tracing::debug!(
                    "Query '{}' matched {} of {} products",
                    term,
                    products.len(),
                    total
                );
                SearchOutcome::Results(products)
            }
            Err(FetchError::Cancelled) => {
                tracing::debug!("Fetch for '{}' was aborted", term);
                SearchOutcome::Cancelled
            }
            Err(FetchError::Network(err)) => {
                tracing::error!("Fetch error for query '{}': {}", term, err);
                SearchOutcome::Failed(err)
            }
        }
    }

    /// The last query whose fetch completed successfully.
    pub fn last_query_term(&self) -> Option<SearchQuery> {
        self.state.lock().last_query_term.clone()
    }

    /// Abandons the in-flight fetch, if any.
    pub fn cancel_pending(&self) {
        self.canceller.cancel_current();
    }
}

//! Search Session Registry
//!
//! Each remote UI gets its own `SearchCoordinator`, so one client's keystrokes never
//! cancel another client's fetch. All sessions share the same `DataFetcher`.

use super::coordinator::SearchCoordinator;
use crate::fetcher::types::DataFetcher;

use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct SessionId(pub String);

impl SessionId {
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

pub struct SessionRegistry {
    fetcher: Arc<dyn DataFetcher>,
    sessions: DashMap<SessionId, Arc<SearchCoordinator>>,
}

impl SessionRegistry {
    pub fn new(fetcher: Arc<dyn DataFetcher>) -> Arc<Self> {
        Arc::new(Self {
            fetcher,
            sessions: DashMap::new(),
        })
    }

    /// Opens a session backed by a fresh coordinator.
    pub fn create(&self) -> SessionId {
        let id = SessionId::new();
        self.sessions
            .insert(id.clone(), SearchCoordinator::new(self.fetcher.clone()));
        tracing::info!("Opened search session {}", id.0);
        id
    }

    pub fn get(&self, id: &SessionId) -> Option<Arc<SearchCoordinator>> {
        self.sessions.get(id).map(|entry| entry.value().clone())
    }

    /// Closes a session, abandoning its in-flight fetch.
    ///
    /// Returns `false` if the session did not exist.
    pub fn remove(&self, id: &SessionId) -> bool {
        match self.sessions.remove(id) {
            Some((_, coordinator)) => {
                coordinator.cancel_pending();
                tracing::info!("Closed search session {}", id.0);
                true
            }
            None => false,
        }
    }

    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }
}

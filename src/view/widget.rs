//! Live Search Widget
//!
//! The binding layer between an input surface and a `SearchView`:
//! input -> debounce -> `SearchCoordinator::search_outcome` -> render.
//!
//! Superseded and duplicate searches leave the view untouched; a failed search renders as
//! "no results".

use super::SearchView;
use crate::debounce::debouncer::Debouncer;
use crate::search::coordinator::SearchCoordinator;
use crate::search::types::SearchOutcome;

use std::sync::Arc;
use std::time::Duration;

pub struct LiveSearchWidget {
    coordinator: Arc<SearchCoordinator>,
    view: Arc<dyn SearchView>,
    debouncer: Debouncer<String>,
}

impl LiveSearchWidget {
    pub fn new(
        coordinator: Arc<SearchCoordinator>,
        view: Arc<dyn SearchView>,
        debounce: Duration,
    ) -> Self {
        let debouncer = {
            let coordinator = coordinator.clone();
            let view = view.clone();
            Debouncer::new(debounce, move |value: String| {
                let coordinator = coordinator.clone();
                let view = view.clone();
                async move {
                    run_search(&coordinator, view.as_ref(), &value).await;
                }
            })
        };

        Self {
            coordinator,
            view,
            debouncer,
        }
    }

    /// Feeds the current input value; the search runs once typing pauses.
    pub fn on_input(&self, value: impl Into<String>) {
        self.debouncer.call(value.into());
    }

    /// Runs `value` immediately, skipping the quiet period (e.g. on Enter or end of input).
    pub async fn submit(&self, value: &str) {
        self.debouncer.cancel();
        run_search(&self.coordinator, self.view.as_ref(), value).await;
    }

    /// Drops the pending input and abandons the in-flight search.
    pub fn close(&self) {
        self.debouncer.cancel();
        self.coordinator.cancel_pending();
        self.view.set_loading(false);
    }
}

/// Runs one search and pushes its outcome to `view`.
pub async fn run_search(coordinator: &SearchCoordinator, view: &dyn SearchView, value: &str) {
    view.set_loading(true);

    match coordinator.search_outcome(value).await {
        SearchOutcome::Results(products) => {
            view.set_loading(false);
            view.show_results(&products);
        }
        SearchOutcome::Failed(_) => {
            view.set_loading(false);
            view.show_results(&[]);
        }
        SearchOutcome::Duplicate => {
            view.set_loading(false);
        }
        // The superseding search owns the loading indicator now.
        SearchOutcome::Cancelled => {}
    }
}

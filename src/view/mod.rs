//! View Binding Module
//!
//! Connects an input surface and a result surface to a `SearchCoordinator`.
//!
//! ## Overview
//! Input events go through a `Debouncer` into the coordinator; the outcome is handed to a
//! `SearchView`. Views are plain trait objects injected at construction, so the same
//! widget drives the terminal front-end and test doubles.
//!
//! ## Submodules
//! - **`terminal`**: Line-oriented renderer writing to any `io::Write`.
//! - **`widget`**: `LiveSearchWidget`, the debounced input -> search -> render loop.

pub mod terminal;
pub mod widget;

use crate::fetcher::types::Product;

/// Result surface driven by `LiveSearchWidget`.
pub trait SearchView: Send + Sync {
    fn set_loading(&self, loading: bool);

    /// Replaces the displayed results. An empty slice means "no results".
    fn show_results(&self, products: &[Product]);
}

//! Search Coordination Module
//!
//! The core of the live-search engine: everything between "the user typed something"
//! and "here is the list to render".
//!
//! ## Overview
//! A `SearchCoordinator` owns the per-widget search state and drives each query through
//! normalize -> de-duplicate -> cancel previous -> fetch -> filter -> sort. It depends only
//! on the `DataFetcher` capability, injected at construction.
//!
//! ## Responsibilities
//! - **Normalization**: Trimming raw input into a `SearchQuery`.
//! - **Duplicate Suppression**: Skipping a query identical to the last completed one.
//! - **Supersession**: Cancelling the in-flight fetch whenever a newer query starts.
//! - **Filtering & Ordering**: Case-insensitive substring match, base-sensitivity name sort.
//! - **API**: Per-client sessions exposed over HTTP for remote UIs.
//!
//! ## Submodules
//! - **`coordinator`**: The orchestration logic and its state.
//! - **`filter`**: Pure filtering and collation helpers.
//! - **`handlers`**: HTTP handlers for the Axum web server.
//! - **`sessions`**: Registry of per-client coordinators.
//! - **`types`**: Queries, outcomes and Data Transfer Objects (DTOs).

pub mod coordinator;
pub mod filter;
pub mod handlers;
pub mod sessions;
pub mod types;

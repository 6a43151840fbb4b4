//! Live Search Library
//!
//! A search-as-you-type engine: as the user types, it fetches a remote product list,
//! filters it client-side and hands a sorted result list to a view.
//!
//! ## Architecture Modules
//! Leaves first:
//!
//! - **`cancel`**: Cooperative cancellation signals and the single-slot `RequestCanceller`
//!   that guarantees at most one in-flight fetch.
//! - **`fetcher`**: The `DataFetcher` capability and its HTTP implementation.
//! - **`search`**: The `SearchCoordinator` (duplicate suppression, supersession, filtering,
//!   ordering) plus per-client sessions served over HTTP.
//! - **`debounce`**: Generic "last call wins after a quiet period" wrapper.
//! - **`view`**: Binds input and result surfaces to a coordinator through a debouncer.
//! - **`config`**: Endpoint, debounce delay and server settings.

pub mod cancel;
pub mod config;
pub mod debounce;
pub mod fetcher;
pub mod search;
pub mod view;

//! Product Data Fetcher Module
//!
//! Retrieves the remote product list the search engine filters client-side.
//!
//! ## Overview
//! The coordinator depends only on the `DataFetcher` capability, so tests substitute
//! deterministic fakes and production wires in `HttpProductFetcher`.
//!
//! ## Contract
//! - A fetch receives a `CancellationSignal` and must honour it: once cancelled, the call
//!   fails with `FetchError::Cancelled` instead of returning partial data.
//! - Transport failures, non-2xx statuses and undecodable bodies fail with
//!   `FetchError::Network`.
//!
//! ## Submodules
//! - **`http`**: `reqwest`-backed implementation racing the request against the signal.
//! - **`types`**: `Product`, the error taxonomy and the `DataFetcher` trait.

pub mod http;
pub mod types;

#[cfg(test)]
pub(crate) mod fake;

//! Debounce Module
//!
//! Collapses bursts of calls into a single invocation that runs once the caller has been
//! quiet for a configured delay. Only the arguments of the last call in a burst survive;
//! earlier ones are discarded, never queued.

pub mod debouncer;

#[cfg(test)]
mod tests;

//! Request Cancellation Module
//!
//! Guarantees that at most one cancellable operation is in flight at a time.
//!
//! ## Core Concepts
//! - **Signal**: A cooperative flag (`CancellationSignal`) passed into async work.
//!   Consumers check it at their suspension points and abandon their work once it flips.
//! - **Canceller**: `RequestCanceller` owns the single outstanding signal. Beginning a new
//!   operation cancels the previous signal before the fresh one is handed out.
//!
//! Cancellation is cooperative: nothing here terminates I/O, it only marks it abandoned.

pub mod canceller;
pub mod signal;

#[cfg(test)]
mod tests;

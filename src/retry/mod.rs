//! Retry an operation under an attempt budget and an optional stop predicate.
//!
//! The loop is deliberately small:
//!
//! - **Budget**: `RetryPolicy::new(n)` permits `n + 1` attempts
//! - **Stop predicate**: consulted after a failure, may end the loop early
//! - **Outcome**: the last attempt's `Result`, returned as-is
//!
//! There is no delay between attempts, no jitter, no concurrency and no
//! cancellation. Earlier errors are dropped; only the last one comes back.
//!
//! # Quick Start
//!
//! ```rust
//! use reattempt::{retry, stop_after, RetryPolicy};
//!
//! let mut calls = 0;
//! let result: Result<&str, &str> = retry(
//!     || {
//!         calls += 1;
//!         Err("unavailable")
//!     },
//!     RetryPolicy::new(4).with_stop(stop_after(2)),
//! );
//!
//! assert_eq!(result, Err("unavailable"));
//! assert_eq!(calls, 2);
//! ```
//!
//! # Entry Points
//!
//! - [`retry`]: the bare loop, returns `Result<T, E>`
//! - [`retry_with_report`]: also returns the attempt count and a [`Termination`]
//! - [`retry_with_hooks`]: calls a hook with a [`RetryEvent`] before each retry
//! - `retry_async` / `retry_async_with_report`: the same loop over futures
//!   (feature `async`)

mod attempt;
mod error;
mod policy;
mod report;
mod stop;

#[cfg(feature = "async")]
pub use attempt::{retry_async, retry_async_with_report};
pub use attempt::{retry, retry_with_hooks, retry_with_report};
pub use error::RetryError;
pub use policy::{RetryConfig, RetryPolicy};
pub use report::{RetryEvent, RetryReport, Termination};
pub use stop::{stop_after, And, NeverStop, Not, Or, StopAfter, StopPredicate, StopPredicateExt};

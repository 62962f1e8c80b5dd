//! # Reattempt
//!
//! > *"Try again, but know when to quit"*
//!
//! A tiny retry helper: run a fallible operation, and if it fails, run it
//! again, up to a fixed number of retries or until a stop predicate gives up.
//!
//! ## Philosophy
//!
//! - The policy is **data**: a retry budget and an optional predicate
//! - The loop is **plain**: synchronous, sequential, no sleeping
//! - The outcome is **untouched**: the last attempt's `Result` comes back as-is
//!
//! ## Quick Example
//!
//! ```rust
//! use reattempt::{retry, RetryPolicy};
//!
//! #[derive(Debug, PartialEq)]
//! enum FetchError {
//!     Busy,
//!     NotFound,
//! }
//!
//! let mut responses = vec![Ok("payload"), Err(FetchError::Busy)];
//!
//! let result = retry(
//!     || responses.pop().unwrap_or(Err(FetchError::NotFound)),
//!     RetryPolicy::new(3).with_stop(|e: &FetchError| *e == FetchError::NotFound),
//! );
//!
//! assert_eq!(result, Ok("payload"));
//! ```
//!
//! ## Features
//!
//! - `tracing` (default): emit `trace`/`debug` events for each attempt
//! - `async`: `retry_async` for operations that return futures
//! - `serde`: (de)serialize [`RetryConfig`]

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod retry;
pub mod testing;

// Re-exports
#[cfg(feature = "async")]
pub use retry::{retry_async, retry_async_with_report};
pub use retry::{
    retry, retry_with_hooks, retry_with_report, stop_after, NeverStop, RetryConfig, RetryError,
    RetryEvent, RetryPolicy, RetryReport, StopAfter, StopPredicate, StopPredicateExt, Termination,
};

/// Prelude module for convenient imports
pub mod prelude {
    #[cfg(feature = "async")]
    pub use crate::retry::retry_async;
    pub use crate::retry::{
        retry, retry_with_hooks, retry_with_report, stop_after, RetryPolicy, RetryReport,
        StopPredicate, StopPredicateExt, Termination,
    };
}

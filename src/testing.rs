//! Testing utilities for code built on the retry loop.
//!
//! # Examples
//!
//! ## ScriptedOperation
//!
//! ```rust
//! use reattempt::testing::ScriptedOperation;
//! use reattempt::{retry, RetryPolicy};
//!
//! let mut op = ScriptedOperation::failing_then(["timeout", "timeout"], "ok");
//! let result = retry(|| op.call(), RetryPolicy::new(5));
//!
//! assert_eq!(result, Ok("ok"));
//! assert_eq!(op.calls(), 3);
//! ```
//!
//! ## Assertion Macros
//!
//! ```rust
//! use reattempt::{assert_attempts, retry_with_report, RetryPolicy, Termination};
//!
//! let report = retry_with_report(|| Err::<(), _>("down"), RetryPolicy::new(2));
//! assert_attempts!(report, 3, Termination::Exhausted);
//! ```

use std::collections::VecDeque;

/// A stand-in operation that replays scripted errors, then settles.
///
/// Each [`call`](Self::call) pops the next scripted error. Once the script
/// runs out, every call returns the final outcome. Calls are counted so tests
/// can assert on how often the retry loop invoked it.
#[derive(Debug, Clone)]
pub struct ScriptedOperation<T, E> {
    script: VecDeque<E>,
    settled: Result<T, E>,
    calls: u64,
}

impl<T: Clone, E: Clone> ScriptedOperation<T, E> {
    /// Fail with each of `errors` in order, then succeed with `value`.
    pub fn failing_then<I>(errors: I, value: T) -> Self
    where
        I: IntoIterator<Item = E>,
    {
        Self {
            script: errors.into_iter().collect(),
            settled: Ok(value),
            calls: 0,
        }
    }

    /// Succeed with `value` on every call.
    pub fn always_succeeding(value: T) -> Self {
        Self::failing_then(std::iter::empty(), value)
    }

    /// Fail with `error` on every call.
    pub fn always_failing(error: E) -> Self {
        Self {
            script: VecDeque::new(),
            settled: Err(error),
            calls: 0,
        }
    }

    /// Invoke the operation once.
    pub fn call(&mut self) -> Result<T, E> {
        self.calls += 1;
        match self.script.pop_front() {
            Some(error) => Err(error),
            None => self.settled.clone(),
        }
    }

    /// How many times [`call`](Self::call) has run.
    pub fn calls(&self) -> u64 {
        self.calls
    }

    /// Scripted errors not yet handed out.
    pub fn pending(&self) -> usize {
        self.script.len()
    }
}

/// Assert the attempt count and termination of a [`RetryReport`](crate::RetryReport).
///
/// # Example
///
/// ```rust
/// use reattempt::{assert_attempts, retry_with_report, RetryPolicy, Termination};
///
/// let report = retry_with_report(|| Ok::<_, ()>(1), RetryPolicy::new(3));
/// assert_attempts!(report, 1, Termination::Succeeded);
/// ```
#[macro_export]
macro_rules! assert_attempts {
    ($report:expr, $attempts:expr, $termination:expr) => {
        match &$report {
            report => {
                assert_eq!(
                    report.attempts, $attempts,
                    "expected {} attempts, got {}",
                    $attempts, report.attempts
                );
                assert_eq!(
                    report.termination, $termination,
                    "expected termination {:?}, got {:?}",
                    $termination, report.termination
                );
            }
        }
    };
}

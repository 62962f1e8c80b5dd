//! Outcome reporting for the attempt loop.

use std::fmt;

use super::error::RetryError;

/// Why the attempt loop finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Termination {
    /// The last attempt succeeded.
    Succeeded,
    /// The stop predicate abandoned the loop, possibly on the last attempt.
    Stopped,
    /// Every permitted attempt failed and the predicate never stopped.
    Exhausted,
}

impl Termination {
    /// Returns true if the loop ended on a successful attempt.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded)
    }
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Succeeded => write!(f, "succeeded"),
            Self::Stopped => write!(f, "stopped by predicate"),
            Self::Exhausted => write!(f, "retries exhausted"),
        }
    }
}

/// The last outcome of a retry loop together with how it got there.
///
/// Only the final attempt's outcome is kept; earlier errors are dropped as
/// soon as the next attempt starts.
///
/// # Examples
///
/// ```rust
/// use reattempt::{retry_with_report, RetryPolicy, Termination};
///
/// let mut calls = 0;
/// let report = retry_with_report(
///     || {
///         calls += 1;
///         if calls < 3 { Err("busy") } else { Ok(calls) }
///     },
///     RetryPolicy::new(5),
/// );
///
/// assert_eq!(report.attempts, 3);
/// assert_eq!(report.termination, Termination::Succeeded);
/// assert_eq!(report.into_result(), Ok(3));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct RetryReport<T, E> {
    /// Outcome of the final attempt.
    pub outcome: Result<T, E>,
    /// Number of times the operation was invoked.
    pub attempts: u64,
    /// Why the loop finished.
    pub termination: Termination,
}

impl<T, E> RetryReport<T, E> {
    pub(crate) fn new(outcome: Result<T, E>, attempts: u64, termination: Termination) -> Self {
        Self {
            outcome,
            attempts,
            termination,
        }
    }

    /// Returns true if the final attempt succeeded.
    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }

    /// Number of retries performed (attempts after the first).
    pub fn retries(&self) -> u64 {
        self.attempts.saturating_sub(1)
    }

    /// Discard the metadata and return the final outcome verbatim.
    pub fn into_result(self) -> Result<T, E> {
        self.outcome
    }

    /// Return the final outcome, annotating a failure with attempt metadata.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use reattempt::{retry_with_report, stop_after, RetryPolicy, Termination};
    ///
    /// let report = retry_with_report(
    ///     || Err::<(), _>("refused"),
    ///     RetryPolicy::new(4).with_stop(stop_after(2)),
    /// );
    ///
    /// let err = report.into_detailed().unwrap_err();
    /// assert_eq!(err.attempts, 2);
    /// assert_eq!(err.termination, Termination::Stopped);
    /// assert_eq!(err.into_error(), "refused");
    /// ```
    pub fn into_detailed(self) -> Result<T, RetryError<E>> {
        let Self {
            outcome,
            attempts,
            termination,
        } = self;
        outcome.map_err(|error| RetryError::new(error, attempts, termination))
    }
}

impl<T, E> From<RetryReport<T, E>> for Result<T, E> {
    fn from(report: RetryReport<T, E>) -> Self {
        report.into_result()
    }
}

/// Information about a failed attempt that is about to be retried.
///
/// Passed to the hook of [`retry_with_hooks`](super::retry_with_hooks).
#[derive(Debug, Clone)]
pub struct RetryEvent<'a, E> {
    /// Which attempt just failed (1-indexed).
    pub attempt: u64,
    /// The error from the failed attempt.
    pub error: &'a E,
    /// Attempts still permitted after this one.
    pub remaining: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_termination_display() {
        assert_eq!(Termination::Succeeded.to_string(), "succeeded");
        assert_eq!(Termination::Stopped.to_string(), "stopped by predicate");
        assert_eq!(Termination::Exhausted.to_string(), "retries exhausted");
    }

    #[test]
    fn test_termination_is_success() {
        assert!(Termination::Succeeded.is_success());
        assert!(!Termination::Stopped.is_success());
        assert!(!Termination::Exhausted.is_success());
    }

    #[test]
    fn test_report_retries() {
        let report = RetryReport::<i32, &str>::new(Ok(1), 3, Termination::Succeeded);
        assert_eq!(report.retries(), 2);
        assert!(report.is_success());
    }

    #[test]
    fn test_into_detailed_success_passes_through() {
        let report = RetryReport::<_, &str>::new(Ok("value"), 2, Termination::Succeeded);
        assert_eq!(report.into_detailed(), Ok("value"));
    }

    #[test]
    fn test_into_detailed_failure_carries_metadata() {
        let report = RetryReport::<(), _>::new(Err("boom"), 4, Termination::Exhausted);
        let err = report.into_detailed().unwrap_err();
        assert_eq!(err.error, "boom");
        assert_eq!(err.attempts, 4);
        assert_eq!(err.termination, Termination::Exhausted);
    }

    #[test]
    fn test_report_into_result() {
        let report = RetryReport::<(), _>::new(Err("boom"), 1, Termination::Exhausted);
        let result: Result<(), &str> = report.into();
        assert_eq!(result, Err("boom"));
    }
}

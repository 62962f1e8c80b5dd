//! Error types for retry operations.

use super::report::Termination;

/// A final error annotated with how the retry loop ended.
///
/// The plain [`retry`](super::retry) entry point never produces this; it is
/// only built on request through
/// [`RetryReport::into_detailed`](super::RetryReport::into_detailed).
///
/// # Examples
///
/// ```rust
/// use reattempt::{retry_with_report, RetryPolicy, Termination};
///
/// let err = retry_with_report(|| Err::<(), _>("always fails"), RetryPolicy::new(2))
///     .into_detailed()
///     .unwrap_err();
///
/// assert_eq!(err.attempts, 3); // 1 initial + 2 retries
/// assert_eq!(err.termination, Termination::Exhausted);
/// assert_eq!(err.to_string(), "retries exhausted after 3 attempts: always fails");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryError<E> {
    /// The error from the final attempt.
    pub error: E,
    /// Total number of attempts made (initial + retries).
    pub attempts: u64,
    /// Whether the loop was stopped by the predicate or ran out of attempts.
    pub termination: Termination,
}

impl<E> RetryError<E> {
    /// Create a new RetryError.
    pub fn new(error: E, attempts: u64, termination: Termination) -> Self {
        Self {
            error,
            attempts,
            termination,
        }
    }

    /// Extract the final error, discarding metadata.
    pub fn into_error(self) -> E {
        self.error
    }

    /// Get a reference to the final error.
    pub fn error(&self) -> &E {
        &self.error
    }

    /// Returns true if the stop predicate ended the loop.
    pub fn is_stopped(&self) -> bool {
        self.termination == Termination::Stopped
    }

    /// Returns true if every permitted attempt was used.
    pub fn is_exhausted(&self) -> bool {
        self.termination == Termination::Exhausted
    }
}

impl<E: std::fmt::Display> std::fmt::Display for RetryError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let noun = if self.attempts == 1 {
            "attempt"
        } else {
            "attempts"
        };
        write!(
            f,
            "{} after {} {}: {}",
            self.termination, self.attempts, noun, self.error
        )
    }
}

impl<E: std::error::Error + 'static> std::error::Error for RetryError<E> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

#[cfg(test)]
mod error_tests {
    use super::*;
    use std::error::Error;

    #[derive(Debug)]
    struct Refused;

    impl std::fmt::Display for Refused {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "connection refused")
        }
    }

    impl std::error::Error for Refused {}

    #[test]
    fn test_retry_error_display_exhausted() {
        let err = RetryError::new("connection failed", 3, Termination::Exhausted);
        assert_eq!(
            err.to_string(),
            "retries exhausted after 3 attempts: connection failed"
        );
    }

    #[test]
    fn test_retry_error_display_single_attempt() {
        let err = RetryError::new("nope", 1, Termination::Stopped);
        assert_eq!(err.to_string(), "stopped by predicate after 1 attempt: nope");
    }

    #[test]
    fn test_retry_error_into_error() {
        let err = RetryError::new("test error", 5, Termination::Exhausted);
        assert_eq!(err.error(), &"test error");
        assert_eq!(err.into_error(), "test error");
    }

    #[test]
    fn test_retry_error_flags() {
        let stopped = RetryError::new((), 2, Termination::Stopped);
        assert!(stopped.is_stopped());
        assert!(!stopped.is_exhausted());

        let exhausted = RetryError::new((), 4, Termination::Exhausted);
        assert!(exhausted.is_exhausted());
        assert!(!exhausted.is_stopped());
    }

    #[test]
    fn test_retry_error_source_is_inner_error() {
        let err = RetryError::new(Refused, 2, Termination::Exhausted);
        let source = err.source().map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("connection refused"));
    }
}

//! Retry policy types and configuration.

use std::fmt;

use super::stop::NeverStop;

/// A retry policy: an attempt budget plus an optional stop predicate.
///
/// The policy is handed to the attempt loop by value. It is not mutated by
/// the loop, but the stop predicate it carries may mutate its own captured
/// state across consultations (see [`stop_after`](super::stop_after)). A policy
/// built fresh for each call therefore starts with fresh predicate state.
///
/// # Bounds Behavior
///
/// `max_retries` counts retries, not attempts. `RetryPolicy::new(3)` allows
/// up to 4 invocations of the operation: 1 initial attempt and 3 retries.
///
/// # Examples
///
/// ```rust
/// use reattempt::RetryPolicy;
///
/// let policy = RetryPolicy::new(3);
/// assert_eq!(policy.max_retries(), 3);
/// assert_eq!(policy.total_attempts(), 4);
/// assert!(!policy.has_stop_predicate());
///
/// // Abandon early on errors that will never go away
/// let policy = RetryPolicy::new(3).with_stop(|err: &&str| *err == "permission denied");
/// assert!(policy.has_stop_predicate());
/// ```
#[derive(Clone)]
pub struct RetryPolicy<S = NeverStop> {
    max_retries: u32,
    should_stop: Option<S>,
}

impl RetryPolicy<NeverStop> {
    /// Create a policy allowing `max_retries` retries after the first attempt,
    /// with no stop predicate.
    ///
    /// `RetryPolicy::new(0)` means exactly one attempt.
    pub fn new(max_retries: u32) -> Self {
        Self {
            max_retries,
            should_stop: None,
        }
    }

    /// A policy that runs the operation exactly once.
    pub fn once() -> Self {
        Self::new(0)
    }
}

impl Default for RetryPolicy<NeverStop> {
    fn default() -> Self {
        Self::once()
    }
}

impl<S> RetryPolicy<S> {
    /// Attach a stop predicate, replacing any previous one.
    ///
    /// The predicate is consulted after every failed attempt, the last one
    /// included, unless the policy allows no retries at all. Returning `true`
    /// abandons the loop and hands the current error back to the caller.
    ///
    /// Closures need their argument type spelled out (`|err: &MyError| ...`)
    /// because the error type is only fixed once the policy meets an operation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use reattempt::{retry, RetryPolicy};
    ///
    /// let mut calls = 0;
    /// let result: Result<(), &str> = retry(
    ///     || {
    ///         calls += 1;
    ///         Err("fatal")
    ///     },
    ///     RetryPolicy::new(5).with_stop(|err: &&str| *err == "fatal"),
    /// );
    ///
    /// assert_eq!(result, Err("fatal"));
    /// assert_eq!(calls, 1);
    /// ```
    pub fn with_stop<P>(self, predicate: P) -> RetryPolicy<P> {
        RetryPolicy {
            max_retries: self.max_retries,
            should_stop: Some(predicate),
        }
    }

    /// Remove the stop predicate; retries are then bounded by the budget only.
    pub fn without_stop(self) -> RetryPolicy<NeverStop> {
        RetryPolicy::new(self.max_retries)
    }

    /// Set the maximum number of retries, keeping the stop predicate.
    pub fn with_max_retries(mut self, n: u32) -> Self {
        self.max_retries = n;
        self
    }

    /// Get the maximum number of retries.
    pub fn max_retries(&self) -> u32 {
        self.max_retries
    }

    /// Total attempts the policy permits: `max_retries + 1`.
    ///
    /// Returned as `u64` so that `u32::MAX` retries does not overflow.
    pub fn total_attempts(&self) -> u64 {
        u64::from(self.max_retries) + 1
    }

    /// Returns true if a stop predicate is attached.
    pub fn has_stop_predicate(&self) -> bool {
        self.should_stop.is_some()
    }

    /// Get a reference to the stop predicate, if any.
    pub fn stop_predicate(&self) -> Option<&S> {
        self.should_stop.as_ref()
    }

    pub(crate) fn into_stop_predicate(self) -> Option<S> {
        self.should_stop
    }
}

impl<S> fmt::Debug for RetryPolicy<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RetryPolicy")
            .field("max_retries", &self.max_retries)
            .field(
                "should_stop",
                &self.should_stop.as_ref().map(|_| "<predicate>"),
            )
            .finish()
    }
}

/// Plain-data retry configuration.
///
/// The stop predicate is code and cannot live in configuration, so this only
/// carries the attempt budget. With the `serde` feature it can be loaded from
/// any serde format; a missing field falls back to zero retries.
///
/// # Examples
///
/// ```rust
/// use reattempt::{RetryConfig, RetryPolicy};
///
/// let config = RetryConfig::new(2);
/// let policy: RetryPolicy = config.into_policy();
/// assert_eq!(policy.total_attempts(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RetryConfig {
    /// Retries permitted after the first attempt.
    pub max_retries: u32,
}

impl RetryConfig {
    /// Create a configuration with the given retry budget.
    pub fn new(max_retries: u32) -> Self {
        Self { max_retries }
    }

    /// Build a policy without a stop predicate.
    pub fn into_policy(self) -> RetryPolicy {
        RetryPolicy::new(self.max_retries)
    }
}

impl From<RetryConfig> for RetryPolicy {
    fn from(config: RetryConfig) -> Self {
        config.into_policy()
    }
}

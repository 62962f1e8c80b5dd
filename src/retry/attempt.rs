//! The attempt loop.
//!
//! Every entry point here drives the same counter: invoke the operation, stop
//! on success, stop when the predicate abandons, stop when the budget is spent.
//! Attempts never overlap and nothing sleeps between them.

use super::policy::RetryPolicy;
use super::report::{RetryEvent, RetryReport, Termination};
use super::stop::StopPredicate;

/// Attempt counter plus the predicate taken out of the policy.
struct Attempts<S> {
    attempt: u64,
    total: u64,
    should_stop: Option<S>,
}

impl<S> Attempts<S> {
    fn new(policy: RetryPolicy<S>) -> Self {
        Self {
            attempt: 0,
            total: policy.total_attempts(),
            should_stop: policy.into_stop_predicate(),
        }
    }

    fn begin(&mut self) -> u64 {
        self.attempt += 1;
        #[cfg(feature = "tracing")]
        tracing::trace!(
            attempt = self.attempt,
            total_attempts = self.total,
            "starting attempt"
        );
        self.attempt
    }

    fn remaining(&self) -> u64 {
        self.total - self.attempt
    }

    fn succeeded(&self) -> Termination {
        #[cfg(feature = "tracing")]
        tracing::trace!(attempt = self.attempt, "attempt succeeded");
        Termination::Succeeded
    }

    /// Decide what follows a failed attempt. `None` means retry.
    ///
    /// A single-attempt policy never consults the predicate. Otherwise every
    /// failure is shown to the predicate, the last one included, and a stop
    /// on the last attempt reports `Stopped`.
    fn failed<E>(&mut self, error: &E) -> Option<Termination>
    where
        S: StopPredicate<E>,
    {
        if self.total > 1 {
            if let Some(stop) = self.should_stop.as_mut() {
                if stop.should_stop(error) {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(
                        attempts = self.attempt,
                        remaining = self.remaining(),
                        "stop predicate abandoned retries"
                    );
                    return Some(Termination::Stopped);
                }
            }
        }

        if self.attempt >= self.total {
            #[cfg(feature = "tracing")]
            tracing::debug!(attempts = self.attempt, "retries exhausted");
            return Some(Termination::Exhausted);
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            attempt = self.attempt,
            remaining = self.remaining(),
            "attempt failed, retrying"
        );
        None
    }
}

/// Run `operation` until it succeeds, the stop predicate abandons, or the
/// policy's attempts are used up. Returns the last attempt's outcome.
///
/// The operation is invoked at most `policy.total_attempts()` times, strictly
/// one after another on the calling thread. Whether repeating it is safe is
/// up to the caller. The returned error is whatever the final attempt produced,
/// without wrapping; use [`retry_with_report`] to learn why the loop ended.
///
/// # Examples
///
/// ```rust
/// use reattempt::{retry, RetryPolicy};
///
/// let mut calls = 0;
/// let result = retry(
///     || {
///         calls += 1;
///         if calls < 2 { Err("not yet") } else { Ok("result") }
///     },
///     RetryPolicy::new(2),
/// );
///
/// assert_eq!(result, Ok("result"));
/// assert_eq!(calls, 2);
/// ```
pub fn retry<T, E, F, S>(operation: F, policy: RetryPolicy<S>) -> Result<T, E>
where
    F: FnMut() -> Result<T, E>,
    S: StopPredicate<E>,
{
    retry_with_report(operation, policy).into_result()
}

/// Like [`retry`], but also reports the attempt count and why the loop ended.
pub fn retry_with_report<T, E, F, S>(operation: F, policy: RetryPolicy<S>) -> RetryReport<T, E>
where
    F: FnMut() -> Result<T, E>,
    S: StopPredicate<E>,
{
    run(operation, policy, |_: &RetryEvent<'_, E>| {})
}

/// Retry with a hook for observability.
///
/// `on_retry` runs once before each retry, receiving the failed attempt. It is
/// not called on success, after the final attempt, or when the stop predicate
/// ends the loop.
///
/// # Examples
///
/// ```rust
/// use reattempt::{retry_with_hooks, RetryEvent, RetryPolicy};
///
/// let mut seen = Vec::new();
/// let result: Result<(), &str> = retry_with_hooks(
///     || Err("flaky"),
///     RetryPolicy::new(2),
///     |event: &RetryEvent<'_, &str>| seen.push((event.attempt, event.remaining)),
/// );
///
/// assert_eq!(result, Err("flaky"));
/// assert_eq!(seen, vec![(1, 2), (2, 1)]);
/// ```
pub fn retry_with_hooks<T, E, F, S, H>(
    operation: F,
    policy: RetryPolicy<S>,
    on_retry: H,
) -> Result<T, E>
where
    F: FnMut() -> Result<T, E>,
    S: StopPredicate<E>,
    H: FnMut(&RetryEvent<'_, E>),
{
    run(operation, policy, on_retry).into_result()
}

fn run<T, E, F, S, H>(mut operation: F, policy: RetryPolicy<S>, mut on_retry: H) -> RetryReport<T, E>
where
    F: FnMut() -> Result<T, E>,
    S: StopPredicate<E>,
    H: FnMut(&RetryEvent<'_, E>),
{
    let mut attempts = Attempts::new(policy);

    loop {
        let attempt = attempts.begin();
        let error = match operation() {
            Ok(value) => return RetryReport::new(Ok(value), attempt, attempts.succeeded()),
            Err(error) => error,
        };

        if let Some(termination) = attempts.failed(&error) {
            return RetryReport::new(Err(error), attempt, termination);
        }

        on_retry(&RetryEvent {
            attempt,
            error: &error,
            remaining: attempts.remaining(),
        });
    }
}

/// Async counterpart of [`retry`].
///
/// Each attempt's future is awaited to completion before the next one is
/// created. No timers are involved, so this works on any executor.
///
/// # Examples
///
/// ```rust
/// use reattempt::{retry_async, RetryPolicy};
///
/// # tokio_test::block_on(async {
/// let mut calls = 0;
/// let result = retry_async(
///     || {
///         calls += 1;
///         let n = calls;
///         async move { if n < 3 { Err("busy") } else { Ok(n) } }
///     },
///     RetryPolicy::new(5),
/// )
/// .await;
///
/// assert_eq!(result, Ok(3));
/// # });
/// ```
#[cfg(feature = "async")]
pub async fn retry_async<T, E, F, Fut, S>(operation: F, policy: RetryPolicy<S>) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: std::future::Future<Output = Result<T, E>>,
    S: StopPredicate<E>,
{
    retry_async_with_report(operation, policy).await.into_result()
}

/// Async counterpart of [`retry_with_report`].
#[cfg(feature = "async")]
pub async fn retry_async_with_report<T, E, F, Fut, S>(
    mut operation: F,
    policy: RetryPolicy<S>,
) -> RetryReport<T, E>
where
    F: FnMut() -> Fut,
    Fut: std::future::Future<Output = Result<T, E>>,
    S: StopPredicate<E>,
{
    let mut attempts = Attempts::new(policy);

    loop {
        let attempt = attempts.begin();
        let error = match operation().await {
            Ok(value) => return RetryReport::new(Ok(value), attempt, attempts.succeeded()),
            Err(error) => error,
        };

        if let Some(termination) = attempts.failed(&error) {
            return RetryReport::new(Err(error), attempt, termination);
        }
    }
}

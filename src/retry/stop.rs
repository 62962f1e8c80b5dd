//! Stop predicates and their combinators.
//!
//! A stop predicate is consulted after a failed attempt. Returning `true`
//! ends the retry loop right away, whether or not attempts remain.

/// Decides whether a failed attempt should end the retry loop.
///
/// Takes `&mut self` so predicates can count or otherwise remember the
/// failures they have seen. Any `FnMut(&E) -> bool` closure is a predicate.
///
/// # Example
///
/// ```rust
/// use reattempt::StopPredicate;
///
/// let mut seen = 0;
/// let mut pred = |_: &&str| {
///     seen += 1;
///     seen == 2
/// };
///
/// assert!(!pred.should_stop(&"first"));
/// assert!(pred.should_stop(&"second"));
/// ```
pub trait StopPredicate<E: ?Sized> {
    /// Returns true if retrying should cease after this error.
    fn should_stop(&mut self, error: &E) -> bool;
}

impl<E: ?Sized, F> StopPredicate<E> for F
where
    F: FnMut(&E) -> bool,
{
    #[inline]
    fn should_stop(&mut self, error: &E) -> bool {
        self(error)
    }
}

/// The predicate of a policy without one. Never stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NeverStop;

impl<E: ?Sized> StopPredicate<E> for NeverStop {
    #[inline]
    fn should_stop(&mut self, _error: &E) -> bool {
        false
    }
}

/// Countdown predicate that stops on its `n`-th consultation.
///
/// Created by [`stop_after`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StopAfter {
    remaining: u32,
}

impl StopAfter {
    /// Consultations left before this predicate stops the loop.
    pub fn remaining(&self) -> u32 {
        self.remaining
    }
}

impl<E: ?Sized> StopPredicate<E> for StopAfter {
    #[inline]
    fn should_stop(&mut self, _error: &E) -> bool {
        self.remaining = self.remaining.saturating_sub(1);
        self.remaining == 0
    }
}

/// Stop once `failures` failed attempts have been observed.
///
/// The countdown lives inside the returned value and is consumed along with
/// the policy, so build a fresh one per call.
///
/// # Panics
///
/// Panics if `failures` is zero: the predicate is only ever consulted after
/// a failure, so a zero countdown can never be honoured.
///
/// # Example
///
/// ```rust
/// use reattempt::{retry, stop_after, RetryPolicy};
///
/// let mut calls = 0;
/// let result: Result<(), &str> = retry(
///     || {
///         calls += 1;
///         Err("down")
///     },
///     RetryPolicy::new(10).with_stop(stop_after(3)),
/// );
///
/// assert_eq!(result, Err("down"));
/// assert_eq!(calls, 3);
/// ```
pub fn stop_after(failures: u32) -> StopAfter {
    assert!(failures > 0, "stop_after requires at least one failure");
    StopAfter {
        remaining: failures,
    }
}

/// Extension trait for stop predicate combinators.
///
/// `or` and `and` short-circuit like `||` and `&&`: the right-hand predicate
/// is only consulted when the left one does not already decide. Stateful
/// predicates on the right therefore only see the errors that reach them.
///
/// # Example
///
/// ```rust
/// use reattempt::{stop_after, StopPredicate, StopPredicateExt};
///
/// #[derive(Debug, PartialEq)]
/// enum FetchError { Timeout, NotFound }
///
/// let mut pred = stop_after(3).or(|e: &FetchError| *e == FetchError::NotFound);
///
/// assert!(!pred.should_stop(&FetchError::Timeout));
/// assert!(pred.should_stop(&FetchError::NotFound));
/// ```
pub trait StopPredicateExt<E: ?Sized>: StopPredicate<E> + Sized {
    /// Stop when either predicate says so.
    fn or<P: StopPredicate<E>>(self, other: P) -> Or<Self, P> {
        Or(self, other)
    }

    /// Stop only when both predicates say so.
    fn and<P: StopPredicate<E>>(self, other: P) -> And<Self, P> {
        And(self, other)
    }

    /// Invert the predicate.
    fn not(self) -> Not<Self> {
        Not(self)
    }
}

impl<E: ?Sized, P: StopPredicate<E>> StopPredicateExt<E> for P {}

/// OR combinator - stops when either predicate stops.
#[derive(Clone, Copy, Debug)]
pub struct Or<P1, P2>(pub P1, pub P2);

impl<E: ?Sized, P1: StopPredicate<E>, P2: StopPredicate<E>> StopPredicate<E> for Or<P1, P2> {
    #[inline]
    fn should_stop(&mut self, error: &E) -> bool {
        self.0.should_stop(error) || self.1.should_stop(error)
    }
}

/// AND combinator - stops only when both predicates stop.
#[derive(Clone, Copy, Debug)]
pub struct And<P1, P2>(pub P1, pub P2);

impl<E: ?Sized, P1: StopPredicate<E>, P2: StopPredicate<E>> StopPredicate<E> for And<P1, P2> {
    #[inline]
    fn should_stop(&mut self, error: &E) -> bool {
        self.0.should_stop(error) && self.1.should_stop(error)
    }
}

/// NOT combinator - inverts a predicate.
#[derive(Clone, Copy, Debug)]
pub struct Not<P>(pub P);

impl<E: ?Sized, P: StopPredicate<E>> StopPredicate<E> for Not<P> {
    #[inline]
    fn should_stop(&mut self, error: &E) -> bool {
        !self.0.should_stop(error)
    }
}

//! Property-based tests for the attempt loop

use proptest::prelude::*;
use reattempt::testing::ScriptedOperation;
use reattempt::{retry, retry_with_report, stop_after, RetryPolicy, Termination};

proptest! {
    #[test]
    fn prop_zero_retries_calls_exactly_once(succeeds in any::<bool>(), value in any::<i32>()) {
        let mut op = if succeeds {
            ScriptedOperation::always_succeeding(value)
        } else {
            ScriptedOperation::always_failing(value)
        };

        let result = retry(|| op.call(), RetryPolicy::new(0));

        prop_assert_eq!(op.calls(), 1);
        if succeeds {
            prop_assert_eq!(result, Ok(value));
        } else {
            prop_assert_eq!(result, Err(value));
        }
    }

    #[test]
    fn prop_always_failing_uses_every_attempt(max_retries in 0u32..50) {
        let mut calls = 0u64;
        let result: Result<(), u64> = retry(
            || {
                calls += 1;
                Err(calls)
            },
            RetryPolicy::new(max_retries),
        );

        let expected = u64::from(max_retries) + 1;
        prop_assert_eq!(calls, expected);
        // The error is the one produced by the final invocation
        prop_assert_eq!(result, Err(expected));
    }

    #[test]
    fn prop_fails_k_times_then_succeeds(
        (max_retries, k) in (0u32..50).prop_flat_map(|m| (Just(m), 0..=m))
    ) {
        let mut op = ScriptedOperation::failing_then(vec!["transient"; k as usize], "result");

        let result = retry(|| op.call(), RetryPolicy::new(max_retries));

        prop_assert_eq!(result, Ok("result"));
        prop_assert_eq!(op.calls(), u64::from(k) + 1);
    }

    #[test]
    fn prop_predicate_stops_at_nth_failure(
        (max_retries, n) in (0u32..50).prop_flat_map(|m| (Just(m), 1..=m + 1))
    ) {
        let mut calls = 0u64;
        let report = retry_with_report(
            || {
                calls += 1;
                Err::<(), _>(calls)
            },
            RetryPolicy::new(max_retries).with_stop(stop_after(n)),
        );

        prop_assert_eq!(report.attempts, u64::from(n));
        prop_assert_eq!(report.outcome, Err(u64::from(n)));
        // A zero-retry policy never consults the predicate
        if max_retries == 0 {
            prop_assert_eq!(report.termination, Termination::Exhausted);
        } else {
            prop_assert_eq!(report.termination, Termination::Stopped);
        }
    }

    #[test]
    fn prop_predicate_sees_every_failure(max_retries in 1u32..50) {
        let mut consulted = 0u64;
        let mut calls = 0u64;
        let _ = retry(
            || {
                calls += 1;
                Err::<(), _>(())
            },
            RetryPolicy::new(max_retries).with_stop(|_: &()| {
                consulted += 1;
                false
            }),
        );

        prop_assert_eq!(calls, u64::from(max_retries) + 1);
        prop_assert_eq!(consulted, calls);
    }

    #[test]
    fn prop_attempts_never_exceed_budget(
        max_retries in 0u32..50,
        script in prop::collection::vec(any::<bool>(), 0..100)
    ) {
        let mut outcomes = script.into_iter();
        let report = retry_with_report(
            || match outcomes.next() {
                Some(true) | None => Ok(()),
                Some(false) => Err(()),
            },
            RetryPolicy::new(max_retries),
        );

        prop_assert!(report.attempts >= 1);
        prop_assert!(report.attempts <= u64::from(max_retries) + 1);
        prop_assert_eq!(report.is_success(), report.termination == Termination::Succeeded);
    }
}

//! Tests for the testing utilities shipped with the crate.

use reattempt::testing::ScriptedOperation;
use reattempt::{assert_attempts, retry, retry_with_report, stop_after, RetryPolicy, Termination};

#[test]
fn scripted_operation_drives_retry() {
    let mut op = ScriptedOperation::failing_then(["e1", "e2", "e3"], 99);

    let report = retry_with_report(|| op.call(), RetryPolicy::new(5));

    assert_attempts!(report, 4, Termination::Succeeded);
    assert_eq!(report.outcome, Ok(99));
    assert_eq!(op.pending(), 0);
}

#[test]
fn scripted_operation_leaves_unused_errors() {
    let mut op = ScriptedOperation::failing_then(["e1", "e2", "e3"], 99);

    let result = retry(|| op.call(), RetryPolicy::new(1));

    assert_eq!(result, Err("e2"));
    assert_eq!(op.calls(), 2);
    assert_eq!(op.pending(), 1);
}

#[test]
fn assert_attempts_accepts_stopped_reports() {
    let mut op = ScriptedOperation::<(), _>::always_failing("down");
    let report = retry_with_report(|| op.call(), RetryPolicy::new(9).with_stop(stop_after(3)));
    assert_attempts!(report, 3, Termination::Stopped);
    // The report is borrowed, not consumed
    assert_eq!(report.into_result(), Err("down"));
}

#[test]
#[should_panic(expected = "expected 2 attempts")]
fn assert_attempts_panics_on_wrong_count() {
    let report = retry_with_report(|| Err::<(), _>("down"), RetryPolicy::new(0));
    assert_attempts!(report, 2, Termination::Exhausted);
}

#[test]
#[should_panic(expected = "expected termination Succeeded")]
fn assert_attempts_panics_on_wrong_termination() {
    let report = retry_with_report(|| Err::<(), _>("down"), RetryPolicy::new(0));
    assert_attempts!(report, 1, Termination::Succeeded);
}

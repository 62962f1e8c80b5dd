//! Async Retry Example
//!
//! The same attempt loop driven over futures. Each attempt is awaited before
//! the next one starts; nothing sleeps in between.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use reattempt::{retry_async, retry_async_with_report, stop_after, RetryPolicy};

async fn example_async_retry() {
    println!("\n=== Example 1: Async Retry ===");

    let calls = Arc::new(AtomicU32::new(0));
    let result = retry_async(
        || {
            let calls = calls.clone();
            async move {
                let n = calls.fetch_add(1, Ordering::SeqCst) + 1;
                tokio::task::yield_now().await;
                if n < 3 {
                    Err(format!("attempt {} failed", n))
                } else {
                    Ok(n)
                }
            }
        },
        RetryPolicy::new(4),
    )
    .await;

    println!("Result: {:?}", result);
}

async fn example_async_report() {
    println!("\n=== Example 2: Async Report ===");

    let report = retry_async_with_report(
        || async { Err::<(), _>("still down") },
        RetryPolicy::new(4).with_stop(stop_after(2)),
    )
    .await;

    println!(
        "Attempts: {}, termination: {}, outcome: {:?}",
        report.attempts, report.termination, report.outcome
    );
}

#[tokio::main]
async fn main() {
    example_async_retry().await;
    example_async_report().await;
}

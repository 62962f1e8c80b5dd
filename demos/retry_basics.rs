//! Retry Basics Example
//!
//! Demonstrates the retry loop on a flaky in-process "service":
//! - Plain retry with an attempt budget
//! - Abandoning early with a stop predicate
//! - Combining a failure cap with a permanent-error check
//! - Observing retries through a hook
//! - Reporting why the loop ended
//!
//! Run with `cargo run --example retry_basics` to see the `debug` events.

use reattempt::prelude::*;
use reattempt::RetryEvent;
use tracing_subscriber::filter::LevelFilter;

#[derive(Debug, Clone, PartialEq)]
enum ServiceError {
    Unavailable,
    BadRequest,
}

/// A service that fails `failures` times before answering.
struct FlakyService {
    failures: u32,
    error: ServiceError,
    calls: u32,
}

impl FlakyService {
    fn new(failures: u32, error: ServiceError) -> Self {
        Self {
            failures,
            error,
            calls: 0,
        }
    }

    fn call(&mut self) -> Result<String, ServiceError> {
        self.calls += 1;
        if self.calls <= self.failures {
            Err(self.error.clone())
        } else {
            Ok(format!("answer after {} calls", self.calls))
        }
    }
}

fn is_client_error(err: &ServiceError) -> bool {
    matches!(err, ServiceError::BadRequest)
}

// ==================== Basic Retry ====================

fn example_basic_retry() {
    println!("\n=== Example 1: Basic Retry ===");

    let mut service = FlakyService::new(2, ServiceError::Unavailable);
    let result = retry(|| service.call(), RetryPolicy::new(3));

    println!("Result: {:?} ({} calls)", result, service.calls);
}

// ==================== Stop Predicate ====================

fn example_stop_predicate() {
    println!("\n=== Example 2: Stop On Client Errors ===");

    let mut service = FlakyService::new(5, ServiceError::BadRequest);
    let result = retry(
        || service.call(),
        RetryPolicy::new(3).with_stop(is_client_error),
    );

    println!("Result: {:?} ({} calls)", result, service.calls);
}

// ==================== Combined Predicates ====================

fn example_combined_predicates() {
    println!("\n=== Example 3: Failure Cap OR Client Error ===");

    let mut service = FlakyService::new(10, ServiceError::Unavailable);
    let result = retry(
        || service.call(),
        RetryPolicy::new(8).with_stop(stop_after(2).or(is_client_error)),
    );

    println!("Result: {:?} ({} calls)", result, service.calls);
}

// ==================== Hooks ====================

fn example_hooks() {
    println!("\n=== Example 4: Retry Hooks ===");

    let mut service = FlakyService::new(2, ServiceError::Unavailable);
    let result = retry_with_hooks(
        || service.call(),
        RetryPolicy::new(5),
        |event: &RetryEvent<'_, ServiceError>| {
            println!(
                "  attempt {} failed with {:?}, {} attempts left",
                event.attempt, event.error, event.remaining
            );
        },
    );

    println!("Result: {:?}", result);
}

// ==================== Reports ====================

fn example_report() {
    println!("\n=== Example 5: Retry Report ===");

    let mut service = FlakyService::new(10, ServiceError::Unavailable);
    let report = retry_with_report(|| service.call(), RetryPolicy::new(2));

    println!(
        "Attempts: {}, termination: {}",
        report.attempts, report.termination
    );
    match report.into_detailed() {
        Ok(value) => println!("Value: {}", value),
        Err(err) => println!("Error: {:?} after {} attempts", err.error, err.attempts),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(LevelFilter::DEBUG)
        .init();

    example_basic_retry();
    example_stop_predicate();
    example_combined_predicates();
    example_hooks();
    example_report();
}

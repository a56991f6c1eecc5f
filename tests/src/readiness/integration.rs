#![cfg(test)]
use deckhand_common::error::StackError;
use deckhand_common::model::ServiceStatus;
use deckhand_core::readiness;

use crate::support::FakeOrchestrator;

fn status(running: usize, total: usize) -> ServiceStatus {
    ServiceStatus { running, total }
}

/// A stack that is already up succeeds on the very first tick, without
/// sleeping at all.
#[tokio::test(start_paused = true)]
async fn succeeds_immediately_when_everything_runs() {
    let orchestrator = FakeOrchestrator::with_script(vec![status(3, 3)]);

    let result = readiness::wait_for_services(&orchestrator, |_, _| {}).await;

    assert_eq!(result.unwrap(), status(3, 3));
    assert_eq!(orchestrator.polls(), 1, "no extra polls after success");
}

#[tokio::test(start_paused = true)]
async fn succeeds_at_the_first_tick_where_counts_match() {
    let orchestrator =
        FakeOrchestrator::with_script(vec![status(1, 3), status(2, 3), status(3, 3)]);

    let result = readiness::wait_for_services(&orchestrator, |_, _| {}).await;

    assert_eq!(result.unwrap(), status(3, 3));
    assert_eq!(orchestrator.polls(), 3);
}

/// A stack that never comes up fails exactly at the budget boundary and
/// reports the last-known counts.
#[tokio::test(start_paused = true)]
async fn times_out_reporting_last_known_counts() {
    let orchestrator = FakeOrchestrator::with_script(vec![status(2, 3)]);

    let result = readiness::wait_for_services(&orchestrator, |_, _| {}).await;

    match result {
        Err(StackError::ReadyTimeout {
            running,
            total,
            budget,
        }) => {
            assert_eq!((running, total), (2, 3), "last-known counts travel in the error");
            assert_eq!(budget, 60);
        }
        other => panic!("expected a ready-timeout, got {other:?}"),
    }

    // Ticks 0 through 60 inclusive: one query per tick.
    assert_eq!(orchestrator.polls(), 61);
}

/// The accepted edge case: a stack with zero declared services polls to
/// timeout instead of treating 0/0 as ready.
#[tokio::test(start_paused = true)]
async fn zero_services_polls_to_timeout() {
    let orchestrator = FakeOrchestrator::with_script(vec![status(0, 0)]);

    let result = readiness::wait_for_services(&orchestrator, |_, _| {}).await;

    assert!(matches!(result, Err(StackError::ReadyTimeout { .. })));
}

#[tokio::test(start_paused = true)]
async fn progress_callback_fires_every_tick() {
    let orchestrator = FakeOrchestrator::with_script(vec![status(2, 3)]);
    let mut seen: Vec<(u64, ServiceStatus)> = Vec::new();

    let _ = readiness::wait_for_services(&orchestrator, |tick, status| {
        seen.push((tick, status));
    })
    .await;

    assert_eq!(seen.len(), 61);
    assert_eq!(seen.first(), Some(&(0, status(2, 3))));
    assert_eq!(seen.last(), Some(&(60, status(2, 3))));
}

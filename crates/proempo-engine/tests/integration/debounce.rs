//! Debounce tests: bursts of edits collapse to one computation.

use std::time::Duration;

use proempo_core::EngineState;

use crate::common::{SETTLE, TestHarness, profile, wait_for_settled};

#[tokio::test(start_paused = true)]
async fn test_burst_collapses_to_single_computation() {
    let harness = TestHarness::spawn();
    let mut rx = harness.engine.subscribe();

    for rooms in [10, 20, 30, 40, 100] {
        harness
            .engine
            .submit(profile(rooms, 75.0, 150.0, 50_000.0))
            .unwrap();
    }

    let settled = wait_for_settled(&mut rx).await;
    assert_eq!(settled.edits_seen, 5);
    assert_eq!(settled.computations, 1, "burst must compute exactly once");

    // Last write wins: the figures belong to the fifth profile.
    let figures = settled.projection().unwrap().figures().unwrap();
    assert_eq!(figures.current_annual_revenue, 4_106_250);
    assert_eq!(figures.implementation_cost, 50_000);
}

#[tokio::test(start_paused = true)]
async fn test_spaced_edits_within_window_reset_the_timer() {
    let harness = TestHarness::spawn();
    let mut rx = harness.engine.subscribe();

    // Edits every 10ms, well inside the 50ms settle window: each one must
    // cancel the pending timer and re-arm it.
    for rooms in [10, 20, 30, 40, 100] {
        harness
            .engine
            .submit(profile(rooms, 75.0, 150.0, 50_000.0))
            .unwrap();
        tokio::time::advance(Duration::from_millis(10)).await;
    }

    // No cancelled timer fired mid-burst.
    {
        let snapshot = rx.borrow_and_update();
        assert_eq!(snapshot.state, EngineState::Calculating);
        assert_eq!(snapshot.computations, 0);
    }

    let settled = wait_for_settled(&mut rx).await;
    assert_eq!(settled.edits_seen, 5);
    assert_eq!(settled.computations, 1);
    assert_eq!(
        settled
            .projection()
            .unwrap()
            .figures()
            .unwrap()
            .current_annual_revenue,
        4_106_250
    );
}

#[tokio::test(start_paused = true)]
async fn test_timer_does_not_fire_before_settle_delay() {
    let harness = TestHarness::spawn();
    let mut rx = harness.engine.subscribe();

    harness
        .engine
        .submit(profile(100, 75.0, 150.0, 50_000.0))
        .unwrap();
    tokio::time::advance(SETTLE - Duration::from_millis(1)).await;

    {
        let snapshot = rx.borrow_and_update();
        assert_eq!(snapshot.state, EngineState::Calculating);
        assert_eq!(snapshot.computations, 0);
    }

    tokio::time::advance(Duration::from_millis(2)).await;
    let settled = wait_for_settled(&mut rx).await;
    assert_eq!(settled.computations, 1);
}

#[tokio::test(start_paused = true)]
async fn test_edits_in_separate_windows_compute_separately() {
    let harness = TestHarness::spawn();
    let mut rx = harness.engine.subscribe();

    harness
        .engine
        .submit(profile(100, 75.0, 150.0, 50_000.0))
        .unwrap();
    let first = wait_for_settled(&mut rx).await;
    assert_eq!(first.computations, 1);

    harness
        .engine
        .submit(profile(150, 80.0, 180.0, 60_000.0))
        .unwrap();
    let second = wait_for_settled(&mut rx).await;
    assert_eq!(second.computations, 2);
    assert_eq!(second.edits_seen, 2);
    assert_ne!(
        first.projection().unwrap().figures(),
        second.projection().unwrap().figures()
    );
}

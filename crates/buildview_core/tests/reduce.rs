use std::sync::Once;

use buildview_core::{reduce, ProgressSnapshot, ReduceError};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(viewer_logging::initialize_for_tests);
}

fn snapshot_with_range(begin: i64, end: i64, cur: i64) -> ProgressSnapshot {
    ProgressSnapshot::new(
        begin,
        end,
        cur,
        1_234_567,
        89_000,
        vec!["/traces/kernel".to_string(), "/traces/ust".to_string()],
        vec!["sched".to_string()],
        1_500.0,
    )
}

#[test]
fn quarter_done_snapshot() {
    init_logging();
    let view = reduce(&snapshot_with_range(0, 100, 25)).expect("valid snapshot");

    assert_eq!(view.completion_fraction, 0.25);
    assert_eq!(view.percent_text, "25.00 %");
    assert_eq!(view.processed_events_text, "1,234,567");
    assert_eq!(view.state_changes_text, "89,000");
    assert_eq!(view.elapsed_text, "1.50 s");
    assert_eq!(view.traces_text, "/traces/kernel\n/traces/ust");
    assert_eq!(view.state_providers_text, "sched");
}

#[test]
fn invalid_snapshot_is_rejected() {
    init_logging();
    assert_eq!(
        reduce(&ProgressSnapshot::not_ready()),
        Err(ReduceError::InvalidSnapshot)
    );
}

#[test]
fn degenerate_range_is_a_defined_failure() {
    init_logging();
    assert_eq!(
        reduce(&snapshot_with_range(500, 500, 500)),
        Err(ReduceError::DegenerateRange)
    );
}

#[test]
fn small_counters_get_no_separator() {
    init_logging();
    let mut snapshot = snapshot_with_range(0, 10, 5);
    snapshot.processed_events = 999;
    snapshot.state_changes = 0;
    let view = reduce(&snapshot).expect("valid snapshot");

    assert_eq!(view.processed_events_text, "999");
    assert_eq!(view.state_changes_text, "0");
}

#[test]
fn empty_listings_yield_empty_text() {
    init_logging();
    let mut snapshot = snapshot_with_range(0, 10, 5);
    snapshot.traces.clear();
    snapshot.state_providers.clear();
    let view = reduce(&snapshot).expect("valid snapshot");

    assert_eq!(view.traces_text, "");
    assert_eq!(view.state_providers_text, "");
}

#[test]
fn duration_covers_the_whole_range() {
    init_logging();
    let ns_per_sec = 1_000_000_000;
    let view = reduce(&snapshot_with_range(0, 90 * ns_per_sec, 0)).expect("valid snapshot");

    assert_eq!(view.duration_text, "1:30 + 0 ns");
    assert_eq!(view.percent_text, "0.00 %");
}

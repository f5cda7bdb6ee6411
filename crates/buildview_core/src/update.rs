use viewer_logging::viewer_warn;

use crate::reduce::{reduce, ReduceError};
use crate::snapshot::ProgressSnapshot;
use crate::state::ViewerState;

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// The update source delivered a new snapshot.
    SnapshotReceived(ProgressSnapshot),
    /// Show the waiting placeholder in every field (idempotent).
    WaitingRequested,
}

/// Pure update function: applies a message to state and returns the new state.
///
/// Messages are applied synchronously in delivery order; a rejected snapshot
/// leaves the state untouched and not dirty.
pub fn update(mut state: ViewerState, msg: Msg) -> ViewerState {
    match msg {
        Msg::SnapshotReceived(snapshot) => match reduce(&snapshot) {
            Ok(view) => state.set_view(view),
            Err(ReduceError::InvalidSnapshot) => {}
            Err(ReduceError::DegenerateRange) => {
                viewer_warn!(
                    "dropping snapshot with degenerate range begin_ts={} end_ts={}",
                    snapshot.begin_ts,
                    snapshot.end_ts
                );
            }
        },
        Msg::WaitingRequested => state.set_waiting(),
    }

    state
}

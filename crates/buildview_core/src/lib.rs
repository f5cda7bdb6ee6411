//! Buildview core: pure snapshot formatting and view-model state machine.
mod reduce;
mod snapshot;
mod state;
mod timefmt;
mod update;
mod view_model;

pub use reduce::{reduce, ReduceError};
pub use snapshot::ProgressSnapshot;
pub use state::{DisplayContent, ViewerState};
pub use timefmt::{format_duration, format_instant, format_instant_in};
pub use update::{update, Msg};
pub use view_model::FormattedView;

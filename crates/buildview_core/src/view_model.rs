/// Fully formatted display strings derived from one accepted snapshot.
///
/// Recomputed whole on every update; the display surface copies fields
/// verbatim into its named controls and never edits them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormattedView {
    pub begin_text: String,
    pub end_text: String,
    pub cur_text: String,
    pub duration_text: String,
    pub elapsed_text: String,
    pub processed_events_text: String,
    pub state_changes_text: String,
    pub percent_text: String,
    /// `(cur - begin) / (end - begin)`; in `[0, 1]` under well-formed input.
    pub completion_fraction: f64,
    pub traces_text: String,
    pub state_providers_text: String,
}

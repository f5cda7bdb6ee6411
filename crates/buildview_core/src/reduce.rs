use crate::snapshot::ProgressSnapshot;
use crate::timefmt::{format_duration, format_instant};
use crate::view_model::FormattedView;

/// Recoverable conditions absorbed at the reducer boundary.
///
/// Neither variant may surface to the display as a fault: the caller keeps
/// the previously displayed content instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ReduceError {
    /// The source has not populated the snapshot yet; skip silently.
    #[error("snapshot not yet populated by its source")]
    InvalidSnapshot,
    /// `begin_ts == end_ts`: the completion fraction is undefined.
    #[error("degenerate timestamp range (begin == end)")]
    DegenerateRange,
}

/// Pure reduction of one snapshot into a ready-to-display view.
pub fn reduce(snapshot: &ProgressSnapshot) -> Result<FormattedView, ReduceError> {
    if !snapshot.is_valid() {
        return Err(ReduceError::InvalidSnapshot);
    }

    let range = snapshot.end_ts - snapshot.begin_ts;
    if range == 0 {
        return Err(ReduceError::DegenerateRange);
    }

    let done = (snapshot.cur_ts - snapshot.begin_ts) as f64 / range as f64;

    Ok(FormattedView {
        begin_text: format_instant(snapshot.begin_ts),
        end_text: format_instant(snapshot.end_ts),
        cur_text: format_instant(snapshot.cur_ts),
        duration_text: format_duration(snapshot.begin_ts, snapshot.end_ts),
        elapsed_text: format!("{:.2} s", snapshot.elapsed_ms / 1000.0),
        processed_events_text: format_with_commas(snapshot.processed_events),
        state_changes_text: format_with_commas(snapshot.state_changes),
        percent_text: format!("{:.2} %", done * 100.0),
        completion_fraction: done,
        traces_text: snapshot.traces.join("\n"),
        state_providers_text: snapshot.state_providers.join("\n"),
    })
}

/// Locale-independent thousands grouping: `1234567` -> `"1,234,567"`.
fn format_with_commas(value: u64) -> String {
    let mut out = String::new();
    for (i, ch) in value.to_string().chars().rev().enumerate() {
        if i != 0 && i % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out.chars().rev().collect()
}

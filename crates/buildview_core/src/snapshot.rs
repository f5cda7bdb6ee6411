/// One point-in-time report of build progress delivered by the update source.
///
/// Timestamps are nanoseconds since the Unix epoch. `begin_ts <= cur_ts <= end_ts`
/// is expected from a well-behaved source but not enforced here.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressSnapshot {
    pub begin_ts: i64,
    pub end_ts: i64,
    pub cur_ts: i64,
    pub processed_events: u64,
    pub state_changes: u64,
    pub traces: Vec<String>,
    pub state_providers: Vec<String>,
    /// Wall-clock processing time so far, in milliseconds.
    pub elapsed_ms: f64,
    populated: bool,
}

impl ProgressSnapshot {
    /// A snapshot whose source has not received any data yet.
    ///
    /// Such a snapshot fails [`is_valid`](Self::is_valid) and must be rejected
    /// without touching the displayed state.
    pub fn not_ready() -> Self {
        Self {
            begin_ts: 0,
            end_ts: 0,
            cur_ts: 0,
            processed_events: 0,
            state_changes: 0,
            traces: Vec::new(),
            state_providers: Vec::new(),
            elapsed_ms: 0.0,
            populated: false,
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn new(
        begin_ts: i64,
        end_ts: i64,
        cur_ts: i64,
        processed_events: u64,
        state_changes: u64,
        traces: Vec<String>,
        state_providers: Vec<String>,
        elapsed_ms: f64,
    ) -> Self {
        Self {
            begin_ts,
            end_ts,
            cur_ts,
            processed_events,
            state_changes,
            traces,
            state_providers,
            elapsed_ms,
            populated: true,
        }
    }

    /// Whether the source has populated this snapshot with real data.
    pub fn is_valid(&self) -> bool {
        self.populated
    }
}

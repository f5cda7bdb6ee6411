//! Update source: delivers progress snapshots to the UI thread.
//!
//! Network transport to a real builder is out of scope; the shipped source
//! simulates a build so the viewer can be exercised end to end. Snapshots are
//! sent over a channel and consumed one at a time on the UI thread, in order.

use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use buildview_core::{Msg, ProgressSnapshot};
use viewer_logging::viewer_info;

/// Something that periodically yields progress snapshots.
pub trait UpdateSource: Send {
    /// The next snapshot, or `None` once the source is exhausted.
    fn next_snapshot(&mut self) -> Option<ProgressSnapshot>;
}

/// Spawns a thread that polls `source` at `interval` and forwards each
/// snapshot into the message channel. Stops when the receiver goes away.
pub fn spawn_source(
    mut source: impl UpdateSource + 'static,
    tx: mpsc::Sender<Msg>,
    interval: Duration,
) {
    thread::spawn(move || {
        while let Some(snapshot) = source.next_snapshot() {
            if tx.send(Msg::SnapshotReceived(snapshot)).is_err() {
                break;
            }
            thread::sleep(interval);
        }
        viewer_info!("update source exhausted");
    });
}

/// A deterministic fake build walking a ten-minute trace range.
///
/// The first polls deliver unpopulated snapshots, matching a builder that has
/// accepted a connection but not produced data yet.
pub struct SimulatedBuildSource {
    step: u64,
    total_steps: u64,
    begin_ts: i64,
    end_ts: i64,
    started: Instant,
}

impl SimulatedBuildSource {
    const WARMUP_POLLS: u64 = 3;

    pub fn new(total_steps: u64) -> Self {
        let begin_ts = 1_700_000_000 * 1_000_000_000;
        Self {
            step: 0,
            total_steps: total_steps.max(1),
            begin_ts,
            end_ts: begin_ts + 600 * 1_000_000_000,
            started: Instant::now(),
        }
    }
}

impl UpdateSource for SimulatedBuildSource {
    fn next_snapshot(&mut self) -> Option<ProgressSnapshot> {
        if self.step > Self::WARMUP_POLLS + self.total_steps {
            return None;
        }

        let poll = self.step;
        self.step += 1;

        if poll < Self::WARMUP_POLLS {
            return Some(ProgressSnapshot::not_ready());
        }

        let done_steps = poll - Self::WARMUP_POLLS;
        let range = self.end_ts - self.begin_ts;
        let cur_ts =
            self.begin_ts + (range as u64 * done_steps / self.total_steps) as i64;

        Some(ProgressSnapshot::new(
            self.begin_ts,
            self.end_ts,
            cur_ts,
            done_steps * 12_583,
            done_steps * 3_917,
            vec![
                "/traces/kernel-20231114".to_string(),
                "/traces/ust-20231114".to_string(),
            ],
            vec!["linux-sched".to_string(), "linux-irq".to_string()],
            self.started.elapsed().as_secs_f64() * 1000.0,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simulated_source_warms_up_then_progresses() {
        let mut source = SimulatedBuildSource::new(10);

        for _ in 0..SimulatedBuildSource::WARMUP_POLLS {
            let snapshot = source.next_snapshot().expect("warmup snapshot");
            assert!(!snapshot.is_valid());
        }

        let first = source.next_snapshot().expect("first real snapshot");
        assert!(first.is_valid());
        assert_eq!(first.cur_ts, first.begin_ts);

        let mut last = first;
        while let Some(snapshot) = source.next_snapshot() {
            assert!(snapshot.cur_ts >= last.cur_ts, "current time never regresses");
            last = snapshot;
        }
        assert_eq!(last.cur_ts, last.end_ts);
    }
}

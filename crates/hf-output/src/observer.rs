//! `SimOutputObserver<W>` bridges `SimObserver` to an `OutputWriter`.

use hf_core::Millis;
use hf_sim::{SimObserver, SimView};

use crate::row::{AgentSnapshotRow, EdgeSnapshotRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes agent and edge snapshots to any
/// [`OutputWriter`] backend.
///
/// A snapshot is taken at the first frame, then at the first frame at least
/// `interval_ms` after the previous snapshot, and once more at the end of the
/// run.  An `interval_ms` of zero snapshots only at the end.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `run_until` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:        W,
    interval_ms:   u64,
    next_snapshot: Millis,
    last_written:  Option<Millis>,
    last_error:    Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W, interval_ms: u64) -> Self {
        Self {
            writer,
            interval_ms,
            next_snapshot: Millis::ZERO,
            last_written:  None,
            last_error:    None,
        }
    }

    /// Take the stored write error (if any).
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Timestamp of the most recent snapshot.
    pub fn last_snapshot(&self) -> Option<Millis> {
        self.last_written
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn snapshot(&mut self, now: Millis, view: &SimView<'_>) {
        let agents: Vec<AgentSnapshotRow> = view
            .agents()
            .map(|(id, agent, animator)| {
                let px = animator.position();
                AgentSnapshotRow { agent_id: id.0, now_ms: now.0, x: px.x, y: px.y, mode: agent.mode_kind() }
            })
            .collect();
        let edges: Vec<EdgeSnapshotRow> = view
            .edge_strokes()
            .into_iter()
            .map(|s| EdgeSnapshotRow {
                now_ms:  now.0,
                a_x:     s.from.x,
                a_y:     s.from.y,
                b_x:     s.to.x,
                b_y:     s.to.y,
                traffic: s.traffic,
            })
            .collect();

        let result = self.writer.write_agents(&agents);
        self.store_err(result);
        if !edges.is_empty() {
            let result = self.writer.write_edges(&edges);
            self.store_err(result);
        }
        self.last_written = Some(now);
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_frame_end(&mut self, now: Millis, view: &SimView<'_>) {
        if self.interval_ms == 0 || now < self.next_snapshot {
            return;
        }
        self.snapshot(now, view);
        self.next_snapshot = now + self.interval_ms;
    }

    fn on_sim_end(&mut self, now: Millis, view: &SimView<'_>) {
        if self.last_written != Some(now) {
            self.snapshot(now, view);
        }
        let result = self.writer.finish();
        self.store_err(result);
    }
}

//! The `OutputWriter` trait implemented by all backend writers.

use crate::{AgentSnapshotRow, EdgeSnapshotRow, OutputResult};

/// Trait implemented by snapshot backends.
///
/// Errors surface to the observer, which stores them for
/// [`SimOutputObserver::take_error`][crate::SimOutputObserver::take_error].
pub trait OutputWriter {
    /// Write a batch of agent snapshots.
    fn write_agents(&mut self, rows: &[AgentSnapshotRow]) -> OutputResult<()>;

    /// Write a batch of edge snapshots.
    fn write_edges(&mut self, rows: &[EdgeSnapshotRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent: calling it again is a no-op.
    fn finish(&mut self) -> OutputResult<()>;
}

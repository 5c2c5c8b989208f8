//! The `OutputWriter` trait implemented by all backend writers.

use crate::{ActivationRow, ActorSnapshotRow, OutputResult};

/// Trait implemented by trace backends.
///
/// Observer callbacks cannot fail, so [`ArenaOutputObserver`][crate::ArenaOutputObserver]
/// keeps the first error for
/// [`take_error`][crate::ArenaOutputObserver::take_error].
pub trait OutputWriter {
    /// Write a batch of actor snapshots.
    fn write_snapshots(&mut self, rows: &[ActorSnapshotRow]) -> OutputResult<()>;

    /// Write one activation row.
    fn write_activation(&mut self, row: &ActivationRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}

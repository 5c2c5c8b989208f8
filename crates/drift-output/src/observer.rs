//! `ArenaOutputObserver<W>`: bridges `ArenaObserver` to an `OutputWriter`.

use drift_core::{ActorId, Frame, Vec2};
use drift_sim::{Activation, ActorStore, ArenaObserver};

use crate::row::{ActivationRow, ActorSnapshotRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// An [`ArenaObserver`] that writes actor snapshots and activation events to
/// any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because observer methods
/// have no return value.  After `arena.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct ArenaOutputObserver<W: OutputWriter> {
    writer:          W,
    snapshot_rows:   u64,
    activation_rows: u64,
    last_error:      Option<OutputError>,
}

impl<W: OutputWriter> ArenaOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            snapshot_rows:   0,
            activation_rows: 0,
            last_error:      None,
        }
    }

    /// Take the stored write error (if any) after `arena.run()` returns.
    ///
    /// Only the first error is kept.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Snapshot rows handed to the writer so far.
    pub fn snapshot_rows(&self) -> u64 {
        self.snapshot_rows
    }

    /// Activation rows handed to the writer so far.
    pub fn activation_rows(&self) -> u64 {
        self.activation_rows
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> ArenaObserver for ArenaOutputObserver<W> {
    fn on_activation(&mut self, a: &Activation) {
        let row = ActivationRow {
            frame:     a.frame.0,
            time_secs: a.time_secs,
            actor_id:  a.actor.0,
            role:      a.role.as_str(),
            event:     a.event.as_str(),
        };
        let result = self.writer.write_activation(&row);
        self.activation_rows += 1;
        self.store_err(result);
    }

    fn on_snapshot(&mut self, frame: Frame, time_secs: f64, actors: &ActorStore) {
        let rows: Vec<ActorSnapshotRow> = actors
            .iter_alive()
            .filter_map(|id| snapshot_row(actors, id, frame, time_secs))
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.snapshot_rows += rows.len() as u64;
            self.store_err(result);
        }
    }

    fn on_run_end(&mut self, _final_frame: Frame) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}

fn snapshot_row(actors: &ActorStore, id: ActorId, frame: Frame, time_secs: f64) -> Option<ActorSnapshotRow> {
    let position = actors.position(id)?;
    let velocity = actors.velocity(id);
    let heading = actors.wanderer(id).map_or(Vec2::ZERO, |w| w.heading());
    Some(ActorSnapshotRow {
        actor_id: id.0,
        frame: frame.0,
        time_secs,
        x: position.x,
        y: position.y,
        vx: velocity.x,
        vy: velocity.y,
        heading_x: heading.x,
        heading_y: heading.y,
    })
}

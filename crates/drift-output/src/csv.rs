//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `actor_snapshots.csv`
//! - `activations.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{ActivationRow, ActorSnapshotRow, OutputResult};

pub const SNAPSHOT_FILE: &str = "actor_snapshots.csv";
pub const ACTIVATION_FILE: &str = "activations.csv";

/// Writes arena traces to two CSV files.
pub struct CsvWriter {
    snapshots:   Writer<File>,
    activations: Writer<File>,
    finished:    bool,
}

impl CsvWriter {
    /// Create `dir` if needed, open (or truncate) the two CSV files and write
    /// the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut snapshots = Writer::from_path(dir.join(SNAPSHOT_FILE))?;
        snapshots.write_record([
            "actor_id", "frame", "time_secs", "x", "y", "vx", "vy", "heading_x", "heading_y",
        ])?;

        let mut activations = Writer::from_path(dir.join(ACTIVATION_FILE))?;
        activations.write_record(["frame", "time_secs", "actor_id", "role", "event"])?;

        Ok(Self {
            snapshots,
            activations,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_snapshots(&mut self, rows: &[ActorSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.actor_id.to_string(),
                row.frame.to_string(),
                format!("{:.4}", row.time_secs),
                format!("{:.4}", row.x),
                format!("{:.4}", row.y),
                format!("{:.4}", row.vx),
                format!("{:.4}", row.vy),
                format!("{:.4}", row.heading_x),
                format!("{:.4}", row.heading_y),
            ])?;
        }
        Ok(())
    }

    fn write_activation(&mut self, row: &ActivationRow) -> OutputResult<()> {
        self.activations.write_record(&[
            row.frame.to_string(),
            format!("{:.4}", row.time_secs),
            row.actor_id.to_string(),
            row.role.to_owned(),
            row.event.to_owned(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.snapshots.flush()?;
        self.activations.flush()?;
        Ok(())
    }
}

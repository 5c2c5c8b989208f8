//! `drift-output`: trace writers for arena runs.
//!
//! | Backend | Files created                              |
//! |---------|--------------------------------------------|
//! | CSV     | `actor_snapshots.csv`, `activations.csv`   |
//!
//! Backends implement [`OutputWriter`] and are driven by
//! [`ArenaOutputObserver`], which implements `drift_sim::ArenaObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use drift_output::{ArenaOutputObserver, CsvWriter};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = ArenaOutputObserver::new(writer);
//! arena.run(&mut obs);
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::ArenaOutputObserver;
pub use row::{ActivationRow, ActorSnapshotRow};
pub use writer::OutputWriter;

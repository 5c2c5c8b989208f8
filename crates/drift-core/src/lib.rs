//! `drift-core`: foundational types for the `drift` actor-motion framework.
//!
//! This crate is a dependency of every other `drift-*` crate.  It intentionally
//! has no `drift-*` dependencies and minimal external ones (`rand`, `glam`
//! and `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `ActorId`                                             |
//! | [`geom`]        | `Vec2` (re-exported from `glam`), `Rect`, `Interval`  |
//! | [`time`]        | `Frame`, `FrameClock`, `ArenaConfig`                  |
//! | [`rng`]         | `RandomSource` trait, `ActorRng`, `SimRng`            |
//! | [`error`]       | `DriftError`, `DriftResult`                           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod geom;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{DriftError, DriftResult};
pub use geom::{Interval, Rect, Vec2};
pub use ids::ActorId;
pub use rng::{ActorRng, RandomSource, RngStream, SimRng};
pub use time::{ArenaConfig, Frame, FrameClock};

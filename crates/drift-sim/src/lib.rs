//! `drift-sim`: frame loop driver for the drift framework.
//!
//! # Frame loop
//!
//! ```text
//! for frame in 0..config.total_frames:
//!   ① Logic   : effects dropped by despawn/respawn are reported, then
//!               wanderer heading timers and activation timers advance by
//!               frame_dt; timer events go to ArenaObserver::on_activation.
//!   ② Contacts: queued collision normals reflect their wanderers.
//!   ③ Physics : FrameClock decides how many fixed_dt sub-steps are due;
//!               each one moves every live wanderer (predict, reflect, clamp).
//!   ④ Snapshot: every snapshot_interval_frames frames.
//! ```
//!
//! Wanderers and timers never talk to each other; the arena only sequences
//! them.  Frame processing is infallible, errors come from the builder and
//! from host calls naming an unknown actor.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use drift_core::ArenaConfig;
//! use drift_motion::WanderConfig;
//! use drift_sim::{ArenaBuilder, NoopObserver};
//!
//! let mut b = ArenaBuilder::new(ArenaConfig::default());
//! b.spawn_wanderer(WanderConfig::default(), None);
//! let mut arena = b.build()?;
//! arena.run(&mut NoopObserver);
//! ```

pub mod arena;
pub mod builder;
pub mod error;
pub mod observer;
pub mod store;

#[cfg(test)]
mod tests;

pub use arena::Arena;
pub use builder::ArenaBuilder;
pub use error::{SimError, SimResult};
pub use observer::{Activation, ArenaObserver, NoopObserver};
pub use store::{ActorStore, EffectRole, TimerSlot};

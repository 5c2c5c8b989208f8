//! `drift-timer`: the probabilistic recurring activation timer.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                      |
//! |------------|---------------------------------------------------------------|
//! | [`config`] | `DelayRange`, `TimerConfig`, `RevertPolicy`, `RestartPolicy`  |
//! | [`timer`]  | `ProbabilisticRecurringTimer`, `TimerState`, `ActivationEvent`|
//!
//! # Cycle
//!
//! ```text
//!          delay elapsed            roll succeeds, revert policy set
//!   Idle ───────────────▶ Armed ──────────────────────────────────▶ Active
//!    ▲                      │                                         │
//!    │   roll fails, or     │                          revert delay   │
//!    └──── succeeds with ───┘            elapsed: emit Deactivate,    │
//!          RevertPolicy::Never           then FullCycle → Idle        │
//!                                             or Rearm    → Armed ◀───┘
//! ```
//!
//! The timer only reports [`ActivationEvent`]s; what "activate" means (raise
//! a shield, fire a volley) is up to the host.

pub mod config;
pub mod timer;


pub use config::{DelayRange, RestartPolicy, RevertPolicy, TimerConfig};
pub use timer::{ActivationEvent, ProbabilisticRecurringTimer, TimerState};

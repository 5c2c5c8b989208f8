//! `drift-motion`: the bounded wandering motion controller.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                         |
//! |--------------|------------------------------------------------------------------|
//! | [`config`]   | `WanderConfig`, `estimate_radius`                                |
//! | [`heading`]  | random headings, anti-repeat kick, vector reflection & rotation  |
//! | [`inset`]    | `InsetRect`: bounds shrunk by edge inset + actor radius         |
//! | [`wanderer`] | `BoundedWanderer`, `StepOutcome`, `Axes`                         |
//!
//! # Movement model
//!
//! A wanderer travels at constant speed along a unit heading.  Two clocks
//! drive it:
//!
//! 1. **Logic** ([`BoundedWanderer::tick_logic`]) accumulates time and picks
//!    a fresh random heading every `change_interval` seconds.
//! 2. **Physics** ([`BoundedWanderer::tick_physics`]) predicts the next
//!    position, flips the heading component of any axis that would leave the
//!    inset rectangle, clamps, and commits.
//!
//! Because the check runs on the *predicted* position the actor never
//! visually penetrates the boundary; the direction reverses on the tick the
//! crossing would have happened.
//!
//! [`BoundedWanderer::step`] runs both for hosts with a single clock.

pub mod config;
pub mod heading;
pub mod inset;
pub mod wanderer;


pub use config::{FALLBACK_RADIUS, MIN_CHANGE_INTERVAL, WanderConfig, estimate_radius};
pub use heading::PickMode;
pub use inset::InsetRect;
pub use wanderer::{Axes, BoundedWanderer, StepOutcome};

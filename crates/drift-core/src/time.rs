//! Frame-stepped time model.
//!
//! # Design
//!
//! The host advances the simulation one **logic frame** at a time.  Each
//! frame carries `frame_dt` seconds of simulated time.  Physics runs on its
//! own fixed timestep `fixed_dt`; `FrameClock` keeps an accumulator and tells
//! the caller how many physics sub-steps fall inside the current frame:
//!
//!   accumulator += frame_dt
//!   while accumulator >= fixed_dt: physics_step(fixed_dt); accumulator -= fixed_dt
//!
//! The number of sub-steps per frame is capped by `max_substeps`; time that
//! does not fit is dropped rather than queued, so a long frame cannot snowball
//! into ever-longer physics catch-up.

use std::fmt;

use crate::{DriftError, DriftResult, Rect, Vec2};

// ── Frame ─────────────────────────────────────────────────────────────────────

/// An absolute logic-frame counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame(pub u64);

impl Frame {
    pub const ZERO: Frame = Frame(0);

    /// Return the frame `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Frame {
        Frame(self.0 + n)
    }
}

impl std::ops::Add<u64> for Frame {
    type Output = Frame;
    #[inline]
    fn add(self, rhs: u64) -> Frame {
        Frame(self.0 + rhs)
    }
}

impl std::ops::Sub for Frame {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Frame) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "F{}", self.0)
    }
}

// ── FrameClock ────────────────────────────────────────────────────────────────

/// Tracks the current frame and the fixed-timestep physics accumulator.
#[derive(Clone, Debug)]
pub struct FrameClock {
    /// Seconds of simulated time per logic frame.
    pub frame_dt: f32,
    /// Seconds per physics sub-step.
    pub fixed_dt: f32,
    /// Upper bound on physics sub-steps per frame.
    pub max_substeps: u32,
    /// The current frame, advanced by [`FrameClock::advance`].
    pub current_frame: Frame,
    accumulator: f32,
}

impl FrameClock {
    pub fn new(frame_dt: f32, fixed_dt: f32, max_substeps: u32) -> Self {
        Self {
            frame_dt,
            fixed_dt,
            max_substeps: max_substeps.max(1),
            current_frame: Frame::ZERO,
            accumulator: 0.0,
        }
    }

    /// Add one frame's worth of time to the physics accumulator and return
    /// how many fixed sub-steps are now due.
    pub fn physics_substeps(&mut self) -> u32 {
        self.accumulator += self.frame_dt;
        let mut steps = 0;
        while self.accumulator >= self.fixed_dt && steps < self.max_substeps {
            self.accumulator -= self.fixed_dt;
            steps += 1;
        }
        if steps == self.max_substeps && self.accumulator >= self.fixed_dt {
            self.accumulator %= self.fixed_dt;
        }
        steps
    }

    /// Leftover physics time not yet consumed by a sub-step.
    #[inline]
    pub fn accumulator(&self) -> f32 {
        self.accumulator
    }

    /// Advance the clock by one frame.
    #[inline]
    pub fn advance(&mut self) {
        self.current_frame = Frame(self.current_frame.0 + 1);
    }

    /// Elapsed simulated seconds since frame 0.
    #[inline]
    pub fn elapsed_secs(&self) -> f64 {
        self.current_frame.0 as f64 * self.frame_dt as f64
    }

    /// Simulated time at the start of `frame`.
    #[inline]
    pub fn time_of(&self, frame: Frame) -> f64 {
        frame.0 as f64 * self.frame_dt as f64
    }
}

impl fmt::Display for FrameClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.2}s)", self.current_frame, self.elapsed_secs())
    }
}

// ── ArenaConfig ───────────────────────────────────────────────────────────────

/// Top-level arena configuration.
///
/// Typically loaded from a JSON file by the application crate and passed to
/// the arena builder.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ArenaConfig {
    /// Master RNG seed.  The same seed always produces identical runs.
    pub seed: u64,

    /// Seconds per logic frame (heading timers, activation timers).
    pub frame_dt: f32,

    /// Seconds per physics sub-step (wanderer movement).
    pub fixed_dt: f32,

    /// Physics sub-steps allowed per frame before excess time is dropped.
    pub max_substeps: u32,

    /// Total frames to simulate.
    pub total_frames: u64,

    /// Report a snapshot every N frames.  0 disables snapshots.
    pub snapshot_interval_frames: u64,

    /// The playable rectangle.  `None` leaves every wanderer stationary.
    pub bounds: Option<Rect>,
}

impl Default for ArenaConfig {
    /// 60 Hz logic, 50 Hz physics, 30×18 arena centred on the origin.
    fn default() -> Self {
        Self {
            seed:                     42,
            frame_dt:                 1.0 / 60.0,
            fixed_dt:                 0.02,
            max_substeps:             8,
            total_frames:             60 * 30,
            snapshot_interval_frames: 6,
            bounds:                   Some(Rect::from_center_size(Vec2::ZERO, Vec2::new(30.0, 18.0))),
        }
    }
}

impl ArenaConfig {
    /// The frame at which the run ends (exclusive upper bound).
    #[inline]
    pub fn end_frame(&self) -> Frame {
        Frame(self.total_frames)
    }

    /// Reject timesteps the loop cannot make progress with.
    pub fn validate(&self) -> DriftResult<()> {
        if !(self.frame_dt.is_finite() && self.frame_dt > 0.0) {
            return Err(DriftError::Config(format!(
                "frame_dt must be positive and finite, got {}",
                self.frame_dt
            )));
        }
        if !(self.fixed_dt.is_finite() && self.fixed_dt > 0.0) {
            return Err(DriftError::Config(format!(
                "fixed_dt must be positive and finite, got {}",
                self.fixed_dt
            )));
        }
        Ok(())
    }

    /// Construct a `FrameClock` pre-configured for this run.
    pub fn make_clock(&self) -> FrameClock {
        FrameClock::new(self.frame_dt, self.fixed_dt, self.max_substeps)
    }
}

//! Arena observer trait for progress reporting and trace collection.

use drift_core::{ActorId, Frame};
use drift_timer::ActivationEvent;

use crate::{ActorStore, EffectRole};

/// One timer event, as reported to [`ArenaObserver::on_activation`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Activation {
    pub frame:     Frame,
    /// Simulated time at the start of `frame`.
    pub time_secs: f64,
    pub actor:     ActorId,
    pub role:      EffectRole,
    pub event:     ActivationEvent,
}

/// Callbacks invoked by [`Arena::run`][crate::Arena::run] at key points in
/// the frame loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example: shield counter
///
/// ```rust,ignore
/// struct ShieldCounter(usize);
///
/// impl ArenaObserver for ShieldCounter {
///     fn on_activation(&mut self, a: &Activation) {
///         if a.role == EffectRole::Shield && a.event == ActivationEvent::Activate {
///             self.0 += 1;
///         }
///     }
/// }
/// ```
pub trait ArenaObserver {
    /// Called at the very start of each frame, before any processing.
    fn on_frame_start(&mut self, _frame: Frame) {}

    /// Called for every timer event during the logic tick, in ascending
    /// actor order.
    fn on_activation(&mut self, _activation: &Activation) {}

    /// Called at the end of each frame with the number of physics sub-steps
    /// that ran.
    fn on_frame_end(&mut self, _frame: Frame, _substeps: u32) {}

    /// Called every `snapshot_interval_frames` frames, after physics.
    fn on_snapshot(&mut self, _frame: Frame, _time_secs: f64, _actors: &ActorStore) {}

    /// Called once after the final frame of [`Arena::run`][crate::Arena::run].
    fn on_run_end(&mut self, _final_frame: Frame) {}
}

/// An [`ArenaObserver`] that does nothing.
pub struct NoopObserver;

impl ArenaObserver for NoopObserver {}

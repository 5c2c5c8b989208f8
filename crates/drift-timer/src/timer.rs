//! `ProbabilisticRecurringTimer`: "after a random delay, maybe act".

use drift_core::{ActorRng, RandomSource};
use tracing::debug;

use crate::{RestartPolicy, TimerConfig};

/// Slack on deadline checks, in seconds.  `f32` frame steps such as 0.04
/// widen to `f64` slightly below their decimal value.
const DEADLINE_EPSILON: f64 = 1e-6;

/// Where the timer is in its cycle.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TimerState {
    /// Waiting for the arm delay to elapse.
    Idle,
    /// Due for a gate roll on this or the next advance.
    Armed,
    /// Activated; waiting for the revert delay.
    Active,
}

/// What the host should apply.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActivationEvent {
    Activate,
    Deactivate,
}

impl ActivationEvent {
    pub fn as_str(self) -> &'static str {
        match self {
            ActivationEvent::Activate   => "activate",
            ActivationEvent::Deactivate => "deactivate",
        }
    }
}

impl std::fmt::Display for ActivationEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A frame-driven recurring timer with a probability gate.
///
/// Time is kept as an absolute `elapsed` clock in `f64` and deadlines are
/// scheduled from the instant the previous one fell due, not from the frame
/// that noticed it, so coarse frames do not stretch the period.
///
/// [`advance`](Self::advance) does at most one gate roll or one revert per
/// call.  Work that is already overdue carries over to the next call.
///
/// # Example
///
/// ```
/// use drift_core::ActorRng;
/// use drift_timer::{ActivationEvent, DelayRange, ProbabilisticRecurringTimer, TimerConfig};
///
/// let config = TimerConfig::fire(100, DelayRange::fixed(1.0));
/// let mut t = ProbabilisticRecurringTimer::new(config, ActorRng::from_seed(1));
/// let shots = (0..8).filter_map(|_| t.advance(0.5)).count();
/// assert_eq!(shots, 4);
/// ```
#[derive(Clone, Debug)]
pub struct ProbabilisticRecurringTimer<R: RandomSource = ActorRng> {
    config:        TimerConfig,
    state:         TimerState,
    elapsed:       f64,
    next_deadline: f64,
    rolls:         u64,
    activations:   u64,
    deactivations: u64,
    rng:           R,
}

impl<R: RandomSource> ProbabilisticRecurringTimer<R> {
    /// Start `Idle` with a freshly drawn arm delay.
    pub fn new(config: TimerConfig, mut rng: R) -> Self {
        let config = config.sanitized();
        let first = f64::from(config.delay.draw(&mut rng));
        Self {
            config,
            state: TimerState::Idle,
            elapsed: 0.0,
            next_deadline: first,
            rolls: 0,
            activations: 0,
            deactivations: 0,
            rng,
        }
    }

    /// Advance by `dt` seconds and return the event due, if any.
    ///
    /// Non-finite or negative `dt` counts as zero.
    pub fn advance(&mut self, dt: f32) -> Option<ActivationEvent> {
        if dt.is_finite() && dt > 0.0 {
            self.elapsed += f64::from(dt);
        }

        match self.state {
            TimerState::Idle => {
                if !self.is_due() {
                    return None;
                }
                self.state = TimerState::Armed;
                self.roll()
            }
            TimerState::Armed  => self.roll(),
            TimerState::Active => {
                if !self.is_due() {
                    return None;
                }
                self.revert()
            }
        }
    }

    /// Restart from `Idle` with a fresh arm delay (actor respawn).  Counters
    /// are kept.
    pub fn reset(&mut self) {
        self.elapsed = 0.0;
        self.state = TimerState::Idle;
        self.next_deadline = f64::from(self.config.delay.draw(&mut self.rng));
    }

    /// Change the gate at runtime; values above 100 clamp to 100.
    pub fn set_activation_chance(&mut self, chance: u8) {
        self.config.activation_chance = chance.min(100);
    }

    /// Swap the configuration.  The pending deadline is kept; new ranges and
    /// policies apply from the next scheduling decision.
    pub fn configure(&mut self, config: TimerConfig) {
        self.config = config.sanitized();
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn state(&self) -> TimerState {
        self.state
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.state == TimerState::Active
    }

    #[inline]
    pub fn config(&self) -> &TimerConfig {
        &self.config
    }

    /// Seconds accumulated since construction or the last reset.
    #[inline]
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Absolute time (on the `elapsed` clock) of the next scheduled decision.
    #[inline]
    pub fn next_deadline(&self) -> f64 {
        self.next_deadline
    }

    /// Gate rolls so far, successful or not.
    #[inline]
    pub fn rolls(&self) -> u64 {
        self.rolls
    }

    #[inline]
    pub fn activations(&self) -> u64 {
        self.activations
    }

    #[inline]
    pub fn deactivations(&self) -> u64 {
        self.deactivations
    }

    // ── Transitions ───────────────────────────────────────────────────────

    fn roll(&mut self) -> Option<ActivationEvent> {
        let due = self.next_deadline;
        self.rolls += 1;

        if self.rng.unit_f32() >= self.config.probability() {
            self.schedule_idle(due);
            return None;
        }

        self.activations += 1;
        match self.config.revert.range(self.config.delay) {
            Some(range) => {
                self.state = TimerState::Active;
                self.next_deadline = due + f64::from(range.draw(&mut self.rng));
            }
            None => self.schedule_idle(due),
        }
        debug!(at = due, next = self.next_deadline, "timer activated");
        Some(ActivationEvent::Activate)
    }

    fn revert(&mut self) -> Option<ActivationEvent> {
        let due = self.next_deadline;
        self.deactivations += 1;
        match self.config.restart {
            RestartPolicy::FullCycle => self.schedule_idle(due),
            RestartPolicy::Rearm     => self.state = TimerState::Armed,
        }
        debug!(at = due, "timer deactivated");
        Some(ActivationEvent::Deactivate)
    }

    fn is_due(&self) -> bool {
        self.elapsed + DEADLINE_EPSILON >= self.next_deadline
    }

    fn schedule_idle(&mut self, from: f64) {
        self.state = TimerState::Idle;
        self.next_deadline = from + f64::from(self.config.delay.draw(&mut self.rng));
    }
}

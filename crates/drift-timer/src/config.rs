//! Timer configuration.

use drift_core::RandomSource;

// ── DelayRange ────────────────────────────────────────────────────────────────

/// A uniform random delay in seconds, `[min, max]`.
///
/// Always stored sanitised: both ends non-negative and `min <= max`.  Equal
/// ends give a deterministic delay.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "RawDelayRange"))]
pub struct DelayRange {
    min: f32,
    max: f32,
}

impl DelayRange {
    /// Negative (or NaN) ends clamp to zero; inverted ends are swapped.
    pub fn new(min: f32, max: f32) -> Self {
        let (a, b) = (min.max(0.0), max.max(0.0));
        if a <= b {
            Self { min: a, max: b }
        } else {
            Self { min: b, max: a }
        }
    }

    /// A fixed delay.
    pub fn fixed(secs: f32) -> Self {
        Self::new(secs, secs)
    }

    #[inline]
    pub fn min(&self) -> f32 {
        self.min
    }

    #[inline]
    pub fn max(&self) -> f32 {
        self.max
    }

    /// Draw one delay.  Returns `min` without touching the RNG stream's
    /// distribution when `min == max`.
    #[inline]
    pub fn draw<R: RandomSource>(&self, rng: &mut R) -> f32 {
        rng.range_f32(self.min, self.max)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawDelayRange {
    min: f32,
    max: f32,
}

#[cfg(feature = "serde")]
impl From<RawDelayRange> for DelayRange {
    fn from(raw: RawDelayRange) -> Self {
        DelayRange::new(raw.min, raw.max)
    }
}

// ── Policies ──────────────────────────────────────────────────────────────────

/// Whether, and after how long, an activation is paired with a deactivation.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RevertPolicy {
    /// One-shot action (firing): no paired revert.
    Never,
    /// Revert after a delay drawn from the arm-delay range (shield).
    SameAsDelay,
    /// Revert after a delay drawn from its own range.
    After(DelayRange),
}

impl RevertPolicy {
    /// The range the revert delay is drawn from, if there is a revert.
    pub fn range(&self, arm: DelayRange) -> Option<DelayRange> {
        match *self {
            RevertPolicy::Never       => None,
            RevertPolicy::SameAsDelay => Some(arm),
            RevertPolicy::After(r)    => Some(r),
        }
    }
}

/// What happens once an activation has been reverted.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RestartPolicy {
    /// Back to `Idle` with a freshly drawn arm delay.
    FullCycle,
    /// Straight to `Armed`; the gate is rolled on the next advance.
    Rearm,
}

// ── TimerConfig ───────────────────────────────────────────────────────────────

/// Tunables for one [`ProbabilisticRecurringTimer`][crate::ProbabilisticRecurringTimer].
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TimerConfig {
    /// Arm delay, drawn afresh for every cycle.
    pub delay: DelayRange,

    /// Percent chance (0–100) that an armed timer activates.
    pub activation_chance: u8,

    pub revert: RevertPolicy,

    pub restart: RestartPolicy,
}

impl Default for TimerConfig {
    /// A shield: 50 % every 2–4 s, held for another 2–4 s.
    fn default() -> Self {
        Self::shield(50, DelayRange::new(2.0, 4.0))
    }
}

impl TimerConfig {
    /// Toggle-on/toggle-off pattern: the revert delay reuses the arm range.
    pub fn shield(chance: u8, delay: DelayRange) -> Self {
        Self {
            delay,
            activation_chance: chance.min(100),
            revert: RevertPolicy::SameAsDelay,
            restart: RestartPolicy::FullCycle,
        }
    }

    /// "Maybe fire, then schedule the next check" with no paired revert.
    pub fn fire(chance: u8, delay: DelayRange) -> Self {
        Self {
            delay,
            activation_chance: chance.min(100),
            revert: RevertPolicy::Never,
            restart: RestartPolicy::FullCycle,
        }
    }

    pub fn with_revert(mut self, revert: RevertPolicy) -> Self {
        self.revert = revert;
        self
    }

    pub fn with_restart(mut self, restart: RestartPolicy) -> Self {
        self.restart = restart;
        self
    }

    /// Clamp `activation_chance` to 100 and re-sanitise the delay ranges
    /// (fields are public, so a deserialised or hand-built config may not be).
    pub fn sanitized(self) -> Self {
        let fix = |r: DelayRange| DelayRange::new(r.min, r.max);
        Self {
            delay: fix(self.delay),
            activation_chance: self.activation_chance.min(100),
            revert: match self.revert {
                RevertPolicy::After(r) => RevertPolicy::After(fix(r)),
                other => other,
            },
            restart: self.restart,
        }
    }

    /// Probability of a successful roll, in `[0, 1]`.
    #[inline]
    pub fn probability(&self) -> f32 {
        f32::from(self.activation_chance.min(100)) / 100.0
    }
}

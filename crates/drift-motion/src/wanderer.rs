//! `BoundedWanderer`: erratic constant-speed motion inside a rectangle.

use drift_core::{ActorRng, RandomSource, Rect, Vec2};
use tracing::{debug, trace, warn};

use crate::heading::{self, PickMode};
use crate::{InsetRect, WanderConfig};

// ── Step results ──────────────────────────────────────────────────────────────

/// Which axes were reflected during a physics tick.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Axes {
    pub x: bool,
    pub y: bool,
}

impl Axes {
    pub const NONE: Axes = Axes { x: false, y: false };

    #[inline]
    pub fn any(self) -> bool {
        self.x || self.y
    }

    #[inline]
    pub fn both(self) -> bool {
        self.x && self.y
    }
}

/// What one tick produced.  The host applies `velocity` to its own kinematic
/// representation and may reconcile against `position`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StepOutcome {
    pub velocity:  Vec2,
    pub position:  Vec2,
    /// A periodic heading change happened during the logic tick.
    pub repicked:  bool,
    /// Axes whose heading component was flipped during the physics tick.
    pub reflected: Axes,
}

impl StepOutcome {
    fn at_rest(position: Vec2) -> Self {
        Self {
            velocity:  Vec2::ZERO,
            position,
            repicked:  false,
            reflected: Axes::NONE,
        }
    }
}

// ── BoundedWanderer ───────────────────────────────────────────────────────────

/// Autonomous bounded-motion controller.
///
/// Owns a position, a unit heading and a heading-change timer, plus the
/// random source it draws headings from.  With no bounds the wanderer is
/// inert: ticks are no-ops that report zero velocity.
///
/// # Invariants
///
/// - `heading` is a unit vector (within float error) after construction,
///   every repick, every reflection and every collision override.
/// - After every physics tick `position` lies inside the inset rectangle.
///
/// # Example
///
/// ```
/// use drift_core::{ActorRng, Rect, Vec2};
/// use drift_motion::{BoundedWanderer, WanderConfig};
///
/// let bounds = Rect::new(Vec2::splat(-10.0), Vec2::splat(10.0));
/// let mut w = BoundedWanderer::new(
///     WanderConfig::default(),
///     Some(bounds),
///     Vec2::ZERO,
///     ActorRng::from_seed(7),
/// );
/// for _ in 0..600 {
///     let out = w.step(1.0 / 60.0, 1.0 / 60.0);
///     assert!(w.inset().unwrap().contains(out.position));
/// }
/// ```
#[derive(Clone, Debug)]
pub struct BoundedWanderer<R: RandomSource = ActorRng> {
    config:        WanderConfig,
    position:      Vec2,
    velocity:      Vec2,
    heading:       Vec2,
    heading_timer: f64,
    bounds:        Option<Rect>,
    inset:         Option<InsetRect>,
    repicks:       u64,
    rng:           R,
}

impl<R: RandomSource> BoundedWanderer<R> {
    /// Create a wanderer at `position` with a random initial heading.
    ///
    /// `config` is sanitised (see [`WanderConfig::sanitized`]).  The initial
    /// heading is drawn without the anti-repeat rule.
    pub fn new(config: WanderConfig, bounds: Option<Rect>, position: Vec2, mut rng: R) -> Self {
        let config = config.sanitized();
        let heading = heading::pick_heading(&mut rng, Vec2::ZERO, PickMode::Unrestricted);
        let mut wanderer = Self {
            config,
            position,
            velocity: heading * config.speed,
            heading,
            heading_timer: 0.0,
            bounds: None,
            inset: None,
            repicks: 0,
            rng,
        };
        wanderer.set_bounds(bounds);
        wanderer
    }

    // ── Ticks ─────────────────────────────────────────────────────────────

    /// Run one logic tick (`dt`) followed by one physics tick (`fixed_dt`).
    pub fn step(&mut self, dt: f32, fixed_dt: f32) -> StepOutcome {
        let repicked = self.tick_logic(dt);
        let mut outcome = self.tick_physics(fixed_dt);
        outcome.repicked = repicked;
        outcome
    }

    /// Logic tick: advance the heading timer and repick once it reaches
    /// `change_interval`.  Returns `true` if the heading changed.
    ///
    /// Non-finite or negative `dt` counts as zero.
    pub fn tick_logic(&mut self, dt: f32) -> bool {
        if self.inset.is_none() {
            return false;
        }
        self.heading_timer += f64::from(sanitize_dt(dt));
        let interval = f64::from(self.config.change_interval);
        if self.heading_timer < interval * (1.0 - INTERVAL_EPSILON) {
            return false;
        }
        self.repick(PickMode::Restricted);
        self.heading_timer = 0.0;
        true
    }

    /// Physics tick: predict, reflect, clamp, commit.
    ///
    /// Non-finite or negative `fixed_dt` counts as zero.
    pub fn tick_physics(&mut self, fixed_dt: f32) -> StepOutcome {
        let Some(inset) = self.inset else {
            self.velocity = Vec2::ZERO;
            return StepOutcome::at_rest(self.position);
        };

        let mut velocity = self.heading * self.config.speed;
        let mut next = self.position + velocity * sanitize_dt(fixed_dt);

        let mut reflected = self.heading;
        let mut axes = Axes::NONE;

        // Flip an axis on the tick the crossing would happen, not after.
        if !inset.x.contains(next.x) {
            reflected.x = -reflected.x;
            axes.x = true;
            next.x = inset.x.clamp(next.x);
        }
        if !inset.y.contains(next.y) {
            reflected.y = -reflected.y;
            axes.y = true;
            next.y = inset.y.clamp(next.y);
        }

        if axes.any() {
            self.heading = reflected.try_normalize().unwrap_or(self.heading);
            velocity = self.heading * self.config.speed;
            trace!(x = axes.x, y = axes.y, heading = ?self.heading, "edge reflection");
        }

        self.velocity = velocity;
        // Re-clamp every tick: corrects drift pushed in through set_position/nudge.
        self.position = inset.clamp(next);

        StepOutcome {
            velocity,
            position: self.position,
            repicked: false,
            reflected: axes,
        }
    }

    /// Reflect the heading across a reported contact normal and recompute
    /// velocity immediately.
    ///
    /// Backup path for boundaries built from physical colliders.  A zero or
    /// non-finite normal is ignored.  Returns the new velocity.
    pub fn on_collision(&mut self, normal: Vec2) -> Vec2 {
        let Some(n) = normal.try_normalize() else {
            return self.velocity;
        };
        self.heading = heading::reflect(self.heading, n)
            .try_normalize()
            .unwrap_or(self.heading);
        self.velocity = self.heading * self.config.speed;
        trace!(normal = ?n, heading = ?self.heading, "contact reflection");
        self.velocity
    }

    // ── Host-side updates ─────────────────────────────────────────────────

    /// Replace the world boundary and re-derive the inset rectangle.
    /// `None` makes the wanderer inert until bounds are supplied again.
    pub fn set_bounds(&mut self, bounds: Option<Rect>) {
        self.bounds = bounds;
        self.refresh_inset();
    }

    /// Replace the radius estimate and re-derive the inset rectangle.
    pub fn set_radius(&mut self, radius: f32) {
        self.config.radius = radius.max(0.0);
        self.refresh_inset();
    }

    /// Replace the whole configuration (sanitised) and re-derive the inset
    /// rectangle.  The heading timer keeps running.
    pub fn configure(&mut self, config: WanderConfig) {
        self.config = config.sanitized();
        self.velocity = self.heading * self.config.speed;
        self.refresh_inset();
    }

    /// Teleport; the next physics tick clamps back inside if needed.
    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    /// Apply an external displacement (physics impulse, knock-back).
    pub fn nudge(&mut self, offset: Vec2) {
        self.position += offset;
    }

    /// Force a heading.  Zero or non-finite directions are ignored.
    pub fn set_heading(&mut self, dir: Vec2) {
        if let Some(h) = dir.try_normalize() {
            self.heading = h;
            self.velocity = h * self.config.speed;
        }
    }

    /// Fresh start after a respawn: a new heading drawn without the
    /// anti-repeat rule and a zeroed heading timer.  Not counted in
    /// [`repicks`](Self::repicks).
    pub fn reset(&mut self) {
        self.heading = heading::pick_heading(&mut self.rng, self.heading, PickMode::Unrestricted);
        self.velocity = self.heading * self.config.speed;
        self.heading_timer = 0.0;
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    #[inline]
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    #[inline]
    pub fn heading(&self) -> Vec2 {
        self.heading
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.config.speed
    }

    #[inline]
    pub fn config(&self) -> &WanderConfig {
        &self.config
    }

    #[inline]
    pub fn bounds(&self) -> Option<Rect> {
        self.bounds
    }

    /// The region the centre is confined to, if bounds are set.
    #[inline]
    pub fn inset(&self) -> Option<InsetRect> {
        self.inset
    }

    /// Seconds since the last heading change.
    #[inline]
    pub fn heading_timer(&self) -> f64 {
        self.heading_timer
    }

    /// Periodic heading changes so far (the initial pick is not counted).
    #[inline]
    pub fn repicks(&self) -> u64 {
        self.repicks
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn repick(&mut self, mode: PickMode) {
        self.heading = heading::pick_heading(&mut self.rng, self.heading, mode);
        self.velocity = self.heading * self.config.speed;
        self.repicks += 1;
        debug!(heading = ?self.heading, repicks = self.repicks, "heading repicked");
    }

    fn refresh_inset(&mut self) {
        self.inset = self
            .bounds
            .map(|b| InsetRect::derive(&b, self.config.edge_inset, self.config.radius));
        if let (Some(bounds), Some(inset)) = (self.bounds, self.inset) {
            if inset.is_degenerate() {
                warn!(
                    %bounds,
                    edge_inset = self.config.edge_inset,
                    radius = self.config.radius,
                    "inset and radius exceed the bounds; wanderer pinned to the centre line"
                );
            }
        }
    }
}

/// Relative slack on the repick deadline.  Frame steps such as 1/60 do not
/// sum exactly to the interval in binary floating point.
const INTERVAL_EPSILON: f64 = 1e-5;

#[inline]
fn sanitize_dt(dt: f32) -> f32 {
    if dt.is_finite() { dt.max(0.0) } else { 0.0 }
}

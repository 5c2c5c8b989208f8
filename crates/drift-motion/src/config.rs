//! Wanderer configuration and radius estimation.

use drift_core::Vec2;

/// Floor for `change_interval`.  A zero or negative interval would otherwise
/// repick on every logic tick.
pub const MIN_CHANGE_INTERVAL: f32 = 0.05;

/// Radius used when the host has neither collider nor render extents.
pub const FALLBACK_RADIUS: f32 = 0.25;

/// Tunables for one [`BoundedWanderer`][crate::BoundedWanderer].
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WanderConfig {
    /// Units per second.
    pub speed: f32,

    /// Seconds between unforced heading changes.
    pub change_interval: f32,

    /// Extra inward margin from the bounds edges (border art overlapping the
    /// boundary, for instance).
    pub edge_inset: f32,

    /// Effective collision radius; insets the boundary so the actor's edge,
    /// not its centre, respects it.
    pub radius: f32,
}

impl Default for WanderConfig {
    fn default() -> Self {
        Self {
            speed:           3.0,
            change_interval: 2.0,
            edge_inset:      0.0,
            radius:          FALLBACK_RADIUS,
        }
    }
}

impl WanderConfig {
    /// Clamp every field into its legal range.
    ///
    /// NaN inputs land on the lower bound (`f32::max` ignores NaN).
    pub fn sanitized(self) -> Self {
        Self {
            speed:           self.speed.max(0.0),
            change_interval: self.change_interval.max(MIN_CHANGE_INTERVAL),
            edge_inset:      self.edge_inset.max(0.0),
            radius:          self.radius.max(0.0),
        }
    }

    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    pub fn with_change_interval(mut self, secs: f32) -> Self {
        self.change_interval = secs;
        self
    }

    pub fn with_edge_inset(mut self, inset: f32) -> Self {
        self.edge_inset = inset;
        self
    }

    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }
}

/// Estimate an actor's radius from whatever shape information the host has.
///
/// Collider half-extents win over render half-extents; the larger axis is
/// used.  With neither, [`FALLBACK_RADIUS`].
pub fn estimate_radius(collider_extents: Option<Vec2>, render_extents: Option<Vec2>) -> f32 {
    collider_extents
        .or(render_extents)
        .map(|e| e.abs().max_element())
        .unwrap_or(FALLBACK_RADIUS)
}

//! Heading utilities: random directions, the anti-repeat kick, reflection.

use std::f32::consts::TAU;

use drift_core::{RandomSource, Vec2};

/// Draws whose squared length falls below this are retried.
pub const MIN_HEADING_SQ: f32 = 0.01;

/// Retry budget for near-degenerate draws.
pub const MAX_PICK_ATTEMPTS: u32 = 8;

/// A fresh heading whose dot product with the old one exceeds this is
/// considered a repeat and gets kicked.
pub const REPEAT_DOT_THRESHOLD: f32 = 0.95;

/// Bounds of the kick rotation, in degrees.
pub const KICK_MIN_DEG: f32 = 60.0;
pub const KICK_MAX_DEG: f32 = 180.0;

/// How a new heading relates to the current one.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum PickMode {
    /// Any direction is accepted (initial pick).
    Unrestricted,
    /// Near-repeats of the current heading are rotated away.
    Restricted,
}

/// Uniformly distributed point inside the unit disk.
///
/// Polar sampling with `r = sqrt(u)` keeps the area density uniform without a
/// rejection loop.
pub fn point_in_unit_disk<R: RandomSource>(rng: &mut R) -> Vec2 {
    let r = rng.unit_f32().sqrt();
    let theta = rng.unit_f32() * TAU;
    Vec2::from_angle(theta) * r
}

/// Pick a new unit heading.
///
/// Draws a point in the unit disk and normalises it, retrying up to
/// [`MAX_PICK_ATTEMPTS`] times while the result is near zero; after that the
/// last draw is accepted.  In [`PickMode::Restricted`], a pick within
/// `acos(0.95)` of `current` is rotated by a random angle in
/// `[60°, 180°]`.
///
/// The result is always a unit vector: if the accepted draw cannot be
/// normalised, `current` (or `+x` when `current` is zero too) is kept.
pub fn pick_heading<R: RandomSource>(rng: &mut R, current: Vec2, mode: PickMode) -> Vec2 {
    let mut dir = Vec2::ZERO;
    for _ in 0..MAX_PICK_ATTEMPTS {
        dir = point_in_unit_disk(rng).try_normalize().unwrap_or(Vec2::ZERO);
        if dir.length_squared() >= MIN_HEADING_SQ {
            break;
        }
    }

    if mode == PickMode::Restricted && dir.dot(current) > REPEAT_DOT_THRESHOLD {
        let kick = rng.range_f32(KICK_MIN_DEG, KICK_MAX_DEG).to_radians();
        dir = rotate(dir, kick);
    }

    dir.try_normalize()
        .or_else(|| current.try_normalize())
        .unwrap_or(Vec2::X)
}

/// Rotate `v` counter-clockwise by `radians`.
#[inline]
pub fn rotate(v: Vec2, radians: f32) -> Vec2 {
    Vec2::from_angle(radians).rotate(v)
}

/// Mirror `dir` across the surface with unit normal `normal`:
/// `d' = d − 2(d·n)n`.
#[inline]
pub fn reflect(dir: Vec2, normal: Vec2) -> Vec2 {
    dir - 2.0 * dir.dot(normal) * normal
}

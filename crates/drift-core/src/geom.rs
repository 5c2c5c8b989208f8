//! 2-D geometry: the `Vec2` type, axis-aligned rectangles and intervals.
//!
//! `Vec2` is `glam::Vec2` (single-precision).  Arena coordinates are small
//! (tens of world units), so `f32` is plenty and matches what hosts feed in.

pub use glam::Vec2;

// ── Interval ──────────────────────────────────────────────────────────────────

/// A closed interval `[min, max]` on one axis.
///
/// Unlike `f32::clamp`, [`Interval::clamp`] never panics: an inverted interval
/// (`min > max`) clamps every value to its midpoint.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interval {
    pub min: f32,
    pub max: f32,
}

impl Interval {
    #[inline]
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Midpoint of the interval.
    #[inline]
    pub fn center(self) -> f32 {
        (self.min + self.max) * 0.5
    }

    /// `true` if `min > max` (no value satisfies the interval).
    #[inline]
    pub fn is_inverted(self) -> bool {
        self.min > self.max
    }

    /// `true` if `v` lies inside `[min, max]`.
    #[inline]
    pub fn contains(self, v: f32) -> bool {
        v >= self.min && v <= self.max
    }

    /// Clamp `v` into the interval; inverted intervals yield the midpoint.
    #[inline]
    pub fn clamp(self, v: f32) -> f32 {
        if self.is_inverted() {
            return self.center();
        }
        v.max(self.min).min(self.max)
    }
}

// ── Rect ──────────────────────────────────────────────────────────────────────

/// An axis-aligned rectangle in world space.
///
/// Construct via [`Rect::new`] or [`Rect::from_center_size`]; both order the
/// corners per axis so `min <= max` always holds.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "RawRect"))]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawRect {
    min: Vec2,
    max: Vec2,
}

#[cfg(feature = "serde")]
impl From<RawRect> for Rect {
    fn from(raw: RawRect) -> Self {
        Rect::new(raw.min, raw.max)
    }
}

impl Rect {
    /// Rectangle spanning the two corners `a` and `b` in any order.
    #[inline]
    pub fn new(a: Vec2, b: Vec2) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Rectangle of `size` centred on `center` (a negative size is mirrored).
    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        let half = size.abs() * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    /// The rectangle's extent on the x axis.
    #[inline]
    pub fn x_interval(&self) -> Interval {
        Interval::new(self.min.x, self.max.x)
    }

    /// The rectangle's extent on the y axis.
    #[inline]
    pub fn y_interval(&self) -> Interval {
        Interval::new(self.min.y, self.max.y)
    }

    /// `true` if `p` lies inside the rectangle (edges inclusive).
    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        self.x_interval().contains(p.x) && self.y_interval().contains(p.y)
    }

    /// Shrink every edge inward by `margin`.  May produce inverted intervals;
    /// callers that need a usable region go through [`Interval::clamp`].
    #[inline]
    pub fn shrink(&self, margin: f32) -> (Interval, Interval) {
        (
            Interval::new(self.min.x + margin, self.max.x - margin),
            Interval::new(self.min.y + margin, self.max.y - margin),
        )
    }
}

impl std::fmt::Display for Rect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[({:.3}, {:.3}) .. ({:.3}, {:.3})]",
            self.min.x, self.min.y, self.max.x, self.max.y
        )
    }
}

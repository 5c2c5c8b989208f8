//! The inset rectangle: where a wanderer's centre is allowed to be.

use drift_core::{Interval, Rect, Vec2};

/// World bounds shrunk inward by `edge_inset + radius` on every side.
///
/// When the margin eats an entire axis (twice the margin exceeds the
/// rectangle's extent), that axis collapses to the rectangle's centre line:
/// the wanderer is pinned there rather than rejected.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct InsetRect {
    pub x: Interval,
    pub y: Interval,
    degenerate: bool,
}

impl InsetRect {
    /// Derive the allowed region from `bounds`, `edge_inset` and `radius`.
    /// Negative margins count as zero.
    pub fn derive(bounds: &Rect, edge_inset: f32, radius: f32) -> Self {
        let margin = edge_inset.max(0.0) + radius.max(0.0);
        let (x, y) = bounds.shrink(margin);
        let degenerate = x.is_inverted() || y.is_inverted();
        Self {
            x: collapse(x),
            y: collapse(y),
            degenerate,
        }
    }

    /// `true` if either axis had to be collapsed to its centre.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.degenerate
    }

    #[inline]
    pub fn min(&self) -> Vec2 {
        Vec2::new(self.x.min, self.y.min)
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        Vec2::new(self.x.max, self.y.max)
    }

    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        self.x.contains(p.x) && self.y.contains(p.y)
    }

    /// Clamp `p` into the allowed region on both axes.
    #[inline]
    pub fn clamp(&self, p: Vec2) -> Vec2 {
        Vec2::new(self.x.clamp(p.x), self.y.clamp(p.y))
    }
}

fn collapse(i: Interval) -> Interval {
    if i.is_inverted() {
        let c = i.center();
        Interval::new(c, c)
    } else {
        i
    }
}

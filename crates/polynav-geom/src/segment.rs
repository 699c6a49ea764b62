use crate::Vec2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An ordered pair of points: a wall, an obstacle edge, a gate or a candidate path link.
///
/// Ray tests treat a segment directionally (from `a` to `b`); membership and adjacency treat
/// it as undirected via [`Segment::same_edge`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Segment {
    pub a: Vec2,
    pub b: Vec2,
}

impl Segment {
    pub const fn new(a: Vec2, b: Vec2) -> Self {
        Self { a, b }
    }

    pub fn length(&self) -> f32 {
        self.a.distance(self.b)
    }

    pub fn midpoint(&self) -> Vec2 {
        self.a.midpoint(self.b)
    }

    pub fn reversed(&self) -> Self {
        Self::new(self.b, self.a)
    }

    /// Undirected exact equality.
    pub fn same_edge(&self, other: &Segment) -> bool {
        (self.a == other.a && self.b == other.b) || (self.a == other.b && self.b == other.a)
    }

    /// The same segment with its endpoints in lexicographic order.
    ///
    /// Computations that must be symmetric in their endpoints run on the canonical form so
    /// floating-point rounding cannot depend on direction.
    pub fn canonical(&self) -> Self {
        if self.a.lex_cmp(&self.b).is_le() {
            *self
        } else {
            self.reversed()
        }
    }

    pub fn is_degenerate(&self) -> bool {
        self.a.distance_squared(self.b) <= f32::EPSILON * f32::EPSILON
    }
}

impl From<(Vec2, Vec2)> for Segment {
    fn from((a, b): (Vec2, Vec2)) -> Self {
        Self::new(a, b)
    }
}

/// Total length of a polyline.
pub fn path_length(points: &[Vec2]) -> f32 {
    points.windows(2).map(|w| w[0].distance(w[1])).sum()
}

use core::f32::consts::PI;

use crate::{minimum_distance, Segment, Vec2, EPSILON};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A closed polygon given by its vertices in traversal order (either winding).
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Polygon {
    points: Vec<Vec2>,
}

impl Polygon {
    pub fn new(points: Vec<Vec2>) -> Self {
        Self { points }
    }

    pub fn triangle(a: Vec2, b: Vec2, c: Vec2) -> Self {
        Self::new(vec![a, b, c])
    }

    /// Axis-aligned rectangle with corners `min` and `max`, counter-clockwise.
    pub fn rect(min: Vec2, max: Vec2) -> Self {
        Self::new(vec![
            min,
            Vec2::new(max.x, min.y),
            max,
            Vec2::new(min.x, max.y),
        ])
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    pub fn into_points(self) -> Vec<Vec2> {
        self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn contains_vertex(&self, p: Vec2) -> bool {
        self.points.contains(&p)
    }

    /// Edges in traversal order, closing back to the first vertex.
    pub fn edges(&self) -> impl Iterator<Item = Segment> + '_ {
        let n = self.points.len();
        (0..n).map(move |i| Segment::new(self.points[i], self.points[(i + 1) % n]))
    }

    pub fn edge_midpoints(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.edges().map(|e| e.midpoint())
    }

    /// Vertex average.
    pub fn centroid(&self) -> Vec2 {
        if self.points.is_empty() {
            return Vec2::ZERO;
        }
        let n = self.points.len() as f32;
        let mut sum = Vec2::ZERO;
        for p in &self.points {
            sum += *p;
        }
        sum / n
    }

    /// Twice the signed area (positive for counter-clockwise winding).
    pub fn signed_area2(&self) -> f32 {
        self.edges().map(|e| e.a.cross(e.b)).sum()
    }

    /// True if both polygons have exactly the same vertices, in any order or rotation.
    pub fn same_vertices_any_order(&self, other: &Polygon) -> bool {
        self.points.len() == other.points.len()
            && self.points.iter().all(|p| other.points.contains(p))
            && other.points.iter().all(|p| self.points.contains(p))
    }

    /// Inside or on the boundary.
    pub fn contains_or_touches(&self, point: Vec2) -> bool {
        point_on_polygon(point, self) || point_inside_polygon(point, self)
    }

    pub fn is_convex(&self) -> bool {
        is_convex(self)
    }
}

impl From<Vec<Vec2>> for Polygon {
    fn from(points: Vec<Vec2>) -> Self {
        Self::new(points)
    }
}

/// True if `point` lies on any edge of `polygon` (within [`EPSILON`]).
pub fn point_on_polygon(point: Vec2, polygon: &Polygon) -> bool {
    polygon
        .edges()
        .any(|edge| minimum_distance(&edge, point) <= EPSILON)
}

/// Even-odd point-in-polygon test. Points on the boundary are *not* inside.
pub fn point_inside_polygon(point: Vec2, polygon: &Polygon) -> bool {
    if polygon.len() < 3 || point_on_polygon(point, polygon) {
        return false;
    }

    let mut inside = false;
    for edge in polygon.edges() {
        let (a, b) = (edge.a, edge.b);
        if (a.y > point.y) != (b.y > point.y) {
            let x_cross = a.x + (point.y - a.y) / (b.y - a.y) * (b.x - a.x);
            if point.x < x_cross {
                inside = !inside;
            }
        }
    }
    inside
}

/// True iff every turn around the polygon goes the same way and the boundary winds once.
///
/// Collinear vertices (zero turns) are allowed; a polygon with no turn at all is not convex.
pub fn is_convex(polygon: &Polygon) -> bool {
    let pts = polygon.points();
    let n = pts.len();
    if n < 3 {
        return false;
    }

    let mut sign = 0.0_f32;
    let mut turning = 0.0_f32;
    for i in 0..n {
        let e1 = pts[(i + 1) % n] - pts[i];
        let e2 = pts[(i + 2) % n] - pts[(i + 1) % n];
        let c = e1.cross(e2);
        if c.abs() <= EPSILON * e1.length() * e2.length() {
            continue;
        }
        if sign == 0.0 {
            sign = c.signum();
        } else if c.signum() != sign {
            return false;
        }
        turning += c.atan2(e1.dot(e2));
    }

    // A star polygon turns consistently too but winds more than once.
    sign != 0.0 && turning.abs() < 3.0 * PI
}

/// The edge shared by `a` and `b`, if they share exactly two vertices that are consecutive in
/// both polygons.
pub fn polygons_adjacent(a: &Polygon, b: &Polygon) -> Option<Segment> {
    let shared: Vec<Vec2> = a
        .points()
        .iter()
        .copied()
        .filter(|p| b.contains_vertex(*p))
        .collect();
    if shared.len() != 2 {
        return None;
    }

    let edge = Segment::new(shared[0], shared[1]);
    let in_a = a.edges().any(|e| e.same_edge(&edge));
    let in_b = b.edges().any(|e| e.same_edge(&edge));
    (in_a && in_b).then_some(edge)
}

/// Sort `points` counter-clockwise by angle around `center`.
pub fn sort_by_angle_around(points: &mut [Vec2], center: Vec2) {
    points.sort_by(|p, q| {
        let ap = (p.y - center.y).atan2(p.x - center.x);
        let aq = (q.y - center.y).atan2(q.x - center.x);
        ap.total_cmp(&aq)
    });
}

use crate::{Segment, Vec2, EPSILON};

// Slack on the segment parameters so a ray passing exactly through a shared vertex cannot
// slip between the two edges meeting there.
const PARAM_SLACK: f32 = 1e-6;

// Intersection between segments p + t*r and q + u*s. Returns t if the segments intersect.
fn segment_intersection_t(p: Vec2, r: Vec2, q: Vec2, s: Vec2) -> Option<f32> {
    let denom = r.cross(s);
    // Parallel, collinear and zero-length segments never count as intersecting.
    if denom.abs() <= f32::EPSILON * r.length() * s.length() {
        return None;
    }
    let qp = q - p;
    let t = qp.cross(s) / denom;
    let u = qp.cross(r) / denom;
    let range = -PARAM_SLACK..=1.0 + PARAM_SLACK;
    if range.contains(&t) && range.contains(&u) {
        Some(t.clamp(0.0, 1.0))
    } else {
        None
    }
}

/// Intersection point of the segment `p1 -> p2` with `line`, if any.
pub fn ray_trace(p1: Vec2, p2: Vec2, line: &Segment) -> Option<Vec2> {
    let dir = p2 - p1;
    segment_intersection_t(p1, dir, line.a, line.b - line.a).map(|t| p1 + dir * t)
}

/// First point (closest to `p1`) where `p1 -> p2` hits any of `lines`.
pub fn ray_trace_world(p1: Vec2, p2: Vec2, lines: &[Segment]) -> Option<Vec2> {
    let dir = p2 - p1;
    let mut best: Option<f32> = None;
    for line in lines {
        let Some(t) = segment_intersection_t(p1, dir, line.a, line.b - line.a) else {
            continue;
        };
        match best {
            Some(best_t) if best_t <= t => {}
            _ => best = Some(t),
        }
    }
    best.map(|t| p1 + dir * t)
}

/// Like [`ray_trace_world`], but hits within [`EPSILON`] of either endpoint are ignored.
///
/// Triangles built from world vertices legitimately touch walls at their corners; only
/// crossings strictly between the endpoints count. The result does not depend on the
/// direction of the query.
pub fn ray_trace_world_no_end_points(p1: Vec2, p2: Vec2, lines: &[Segment]) -> Option<Vec2> {
    let seg = Segment::new(p1, p2).canonical();
    let dir = seg.b - seg.a;
    let mut best: Option<(f32, Vec2)> = None;
    for line in lines {
        let Some(t) = segment_intersection_t(seg.a, dir, line.a, line.b - line.a) else {
            continue;
        };
        let hit = seg.a + dir * t;
        if hit.distance(seg.a) <= EPSILON || hit.distance(seg.b) <= EPSILON {
            continue;
        }
        match best {
            Some((best_t, _)) if best_t <= t => {}
            _ => best = Some((t, hit)),
        }
    }
    best.map(|(_, hit)| hit)
}

/// Distance from `point` to the closest point of `segment`.
///
/// The projection is clamped to the segment, so points beyond either end measure to that
/// endpoint.
pub fn minimum_distance(segment: &Segment, point: Vec2) -> f32 {
    let seg = segment.canonical();
    let ab = seg.b - seg.a;
    let denom = ab.length_squared();
    if denom <= f32::EPSILON {
        return point.distance(seg.a);
    }
    let t = ((point - seg.a).dot(ab) / denom).clamp(0.0, 1.0);
    point.distance(seg.a + ab * t)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(ax: f32, ay: f32, bx: f32, by: f32) -> Segment {
        Segment::new(Vec2::new(ax, ay), Vec2::new(bx, by))
    }

    #[test]
    fn crossing_segments_hit_at_intersection() {
        let hit = ray_trace(Vec2::new(0.0, 0.0), Vec2::new(2.0, 2.0), &seg(0.0, 2.0, 2.0, 0.0))
            .expect("segments cross");
        assert!(hit.approx_eq(Vec2::new(1.0, 1.0), 1e-6));
    }

    #[test]
    fn collinear_overlap_is_not_a_hit() {
        assert!(ray_trace(Vec2::new(0.0, 0.0), Vec2::new(4.0, 0.0), &seg(1.0, 0.0, 3.0, 0.0)).is_none());
        assert!(ray_trace(Vec2::new(0.0, 0.0), Vec2::new(0.0, 0.0), &seg(-1.0, 0.0, 1.0, 0.0)).is_none());
    }

    #[test]
    fn world_trace_reports_closest_hit() {
        let lines = [seg(3.0, -1.0, 3.0, 1.0), seg(1.0, -1.0, 1.0, 1.0)];
        let hit = ray_trace_world(Vec2::new(0.0, 0.0), Vec2::new(4.0, 0.0), &lines).expect("hit");
        assert!(hit.approx_eq(Vec2::new(1.0, 0.0), 1e-6));
    }

    #[test]
    fn shared_endpoints_are_ignored() {
        // Two walls meeting the query segment exactly at its endpoints.
        let lines = [seg(0.0, 0.0, 0.0, 5.0), seg(4.0, 0.0, 4.0, 5.0)];
        let p1 = Vec2::new(0.0, 0.0);
        let p2 = Vec2::new(4.0, 0.0);
        assert!(ray_trace_world(p1, p2, &lines).is_some());
        assert!(ray_trace_world_no_end_points(p1, p2, &lines).is_none());
    }

    #[test]
    fn passing_through_a_vertex_is_blocked() {
        // Diamond obstacle; the query grazes straight through its left vertex.
        let lines = [seg(1.0, 0.0, 2.0, 1.0), seg(1.0, 0.0, 2.0, -1.0)];
        let hit = ray_trace_world_no_end_points(Vec2::new(0.0, 0.0), Vec2::new(3.0, 0.0), &lines);
        assert!(hit.is_some());
    }

    #[test]
    fn minimum_distance_clamps_to_endpoints() {
        let s = seg(0.0, 0.0, 4.0, 0.0);
        assert!((minimum_distance(&s, Vec2::new(2.0, 3.0)) - 3.0).abs() < 1e-6);
        assert!((minimum_distance(&s, Vec2::new(7.0, 4.0)) - 5.0).abs() < 1e-6);
        assert!((minimum_distance(&seg(1.0, 1.0, 1.0, 1.0), Vec2::new(4.0, 5.0)) - 5.0).abs() < 1e-6);
    }
}

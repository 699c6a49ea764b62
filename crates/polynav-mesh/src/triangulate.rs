use polynav_geom::{
    point_inside_polygon, ray_trace_world_no_end_points, Polygon, Segment, Vec2, EPSILON,
};

/// Greedy visibility triangulation of the free space between `lines`.
///
/// Every ordered triple of distinct points is tried in order; a triangle is accepted when each
/// of its edges is already a known line or crosses no known line. Accepted edges become known
/// lines, so later triangles can reuse them but never cross them. The result depends on the
/// order of `points` and may contain triangles that overlap obstacles or repeat earlier ones;
/// see [`prune_triangles`].
pub fn triangulate(points: &[Vec2], lines: &[Segment]) -> Vec<Polygon> {
    let mut known: Vec<Segment> = lines.to_vec();
    let mut triangles = Vec::new();

    for &first in points {
        for &second in points {
            if second == first || !edge_usable(first, second, &known) {
                continue;
            }
            for &third in points {
                if third == first || third == second {
                    continue;
                }
                if is_sliver(first, second, third) {
                    continue;
                }
                if !edge_usable(second, third, &known) || !edge_usable(third, first, &known) {
                    continue;
                }

                for edge in [
                    Segment::new(first, second),
                    Segment::new(second, third),
                    Segment::new(third, first),
                ] {
                    if !is_known(&edge, &known) {
                        known.push(edge);
                    }
                }
                triangles.push(Polygon::triangle(first, second, third));
            }
        }
    }

    tracing::trace!(
        candidates = triangles.len(),
        lines = known.len(),
        "Visibility triangulation finished"
    );
    triangles
}

fn is_known(edge: &Segment, known: &[Segment]) -> bool {
    known.iter().any(|l| l.same_edge(edge))
}

fn edge_usable(a: Vec2, b: Vec2, known: &[Segment]) -> bool {
    is_known(&Segment::new(a, b), known) || ray_trace_world_no_end_points(a, b, known).is_none()
}

fn is_sliver(a: Vec2, b: Vec2, c: Vec2) -> bool {
    let area2 = (b - a).cross(c - a).abs();
    area2 <= EPSILON * (b - a).length().max((c - a).length())
}

/// Drop candidate triangles that are not free space.
///
/// Removes, in order: triangles identical to an obstacle (any vertex order), repeats of an
/// earlier triangle, triangles strictly containing an obstacle vertex, and triangles with an
/// edge midpoint strictly inside an obstacle.
pub fn prune_triangles(triangles: Vec<Polygon>, obstacles: &[Polygon]) -> Vec<Polygon> {
    let mut kept: Vec<Polygon> = Vec::with_capacity(triangles.len());
    let mut duplicates = 0usize;
    let mut solid = 0usize;

    for tri in triangles {
        if kept.iter().any(|k| k.same_vertices_any_order(&tri)) {
            duplicates += 1;
            continue;
        }
        if obstacles.iter().any(|o| o.same_vertices_any_order(&tri)) || intrudes(&tri, obstacles)
        {
            solid += 1;
            continue;
        }
        kept.push(tri);
    }

    tracing::trace!(kept = kept.len(), duplicates, solid, "Pruned triangles");
    kept
}

fn intrudes(tri: &Polygon, obstacles: &[Polygon]) -> bool {
    obstacles.iter().any(|obstacle| {
        obstacle
            .points()
            .iter()
            .any(|p| point_inside_polygon(*p, tri))
            || tri
                .edge_midpoints()
                .any(|m| point_inside_polygon(m, obstacle))
    })
}

use polynav_geom::{minimum_distance, ray_trace_world_no_end_points, Segment, Vec2};
use polynav_mesh::NodeId;

/// Whether an agent of the given clearance radius can walk straight from `p1` to `p2`.
///
/// The walk is blocked when any world point comes within `radius` of the segment (inclusive)
/// or the segment crosses a line away from its endpoints. Symmetric in `p1` and `p2`.
pub fn clear_shot(p1: Vec2, p2: Vec2, lines: &[Segment], points: &[Vec2], radius: f32) -> bool {
    let shot = Segment::new(p1, p2).canonical();
    if points
        .iter()
        .any(|p| minimum_distance(&shot, *p) <= radius)
    {
        return false;
    }
    ray_trace_world_no_end_points(shot.a, shot.b, lines).is_none()
}

/// The network node nearest to `point` that can be reached from it with a clear shot.
///
/// Ties go to the lowest id. `None` when no node is reachable, which callers treat as "no
/// route".
pub fn find_closest_unobstructed(
    point: Vec2,
    nodes: &[Vec2],
    lines: &[Segment],
    world_points: &[Vec2],
    radius: f32,
) -> Option<NodeId> {
    let mut by_distance: Vec<(f32, usize)> = nodes
        .iter()
        .enumerate()
        .map(|(i, n)| (n.distance_squared(point), i))
        .collect();
    by_distance.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));

    by_distance
        .into_iter()
        .find(|&(_, i)| clear_shot(point, nodes[i], lines, world_points, radius))
        .map(|(_, i)| NodeId(i as u32))
}

/// Collapse a routed path to the fewest clear-sighted legs.
///
/// `route` is the node path between `source` and `dest`, excluding both. Starting at `source`,
/// each step jumps to the furthest later waypoint reachable with a [`clear_shot`]; when none
/// is, it takes the next waypoint unchanged. The result excludes `source` and ends with
/// `dest`. Every jump replaces a sub-polyline by a straight segment, so the result is never
/// longer than `source -> route -> dest`.
pub fn shortcut_path(
    source: Vec2,
    dest: Vec2,
    route: &[Vec2],
    lines: &[Segment],
    points: &[Vec2],
    radius: f32,
) -> Vec<Vec2> {
    let mut full = Vec::with_capacity(route.len() + 2);
    full.push(source);
    full.extend_from_slice(route);
    full.push(dest);

    let last = full.len() - 1;
    let mut out = Vec::new();
    let mut i = 0;
    while i < last {
        let next = (i + 2..=last)
            .rev()
            .find(|&j| clear_shot(full[i], full[j], lines, points, radius))
            .unwrap_or(i + 1);
        out.push(full[next]);
        i = next;
    }

    tracing::trace!(
        before = route.len() + 1,
        after = out.len(),
        "Shortcut path"
    );
    out
}

use polynav_geom::{ray_trace_world, Segment, Vec2};
use polynav_mesh::NetworkEdge;

/// Edges whose straight segment crosses none of `blocking_lines`.
///
/// Meant to run per query with the currently closed gates, so the same static network serves
/// every gate configuration.
pub fn unobstructed_network(
    edges: &[NetworkEdge],
    nodes: &[Vec2],
    blocking_lines: &[Segment],
) -> Vec<NetworkEdge> {
    if blocking_lines.is_empty() {
        return edges.to_vec();
    }

    let kept: Vec<NetworkEdge> = edges
        .iter()
        .filter(|e| {
            let (Some(a), Some(b)) = (nodes.get(e.a.index()), nodes.get(e.b.index())) else {
                return false;
            };
            ray_trace_world(*a, *b, blocking_lines).is_none()
        })
        .copied()
        .collect();

    tracing::trace!(
        edges = edges.len(),
        kept = kept.len(),
        blocking = blocking_lines.len(),
        "Filtered network edges"
    );
    kept
}

use polynav_core::{check_radius, validate_world, NavConfig, PointOrder, Result, World};
use polynav_geom::{
    minimum_distance, polygons_adjacent, ray_trace_world_no_end_points, Polygon, Segment, Vec2,
};

use crate::{merge_cells, prune_triangles, triangulate, NetworkEdge, NodeId, NodeIndex, PathNetwork};

/// Builds a [`PathNetwork`] from world geometry.
#[derive(Debug, Clone, Default)]
pub struct PathNetworkBuilder {
    config: NavConfig,
}

impl PathNetworkBuilder {
    pub fn new(config: NavConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &NavConfig {
        &self.config
    }

    /// Triangulate, prune, merge, place nodes and connect them.
    ///
    /// Gates are left out while building: the network spans the world as if every gate were
    /// open, and closed gates are filtered per query instead. A world without triangulable
    /// free space yields an empty network.
    pub fn build<W: World + ?Sized>(&self, world: &W, agent_radius: f32) -> Result<PathNetwork> {
        validate_world(world)?;
        let radius = check_radius(self.config.clearance_for(agent_radius))?;

        let gates = world.gates();
        let lines: Vec<Segment> = world
            .lines()
            .iter()
            .filter(|l| !gates.iter().any(|g| g.same_edge(l)))
            .copied()
            .collect();
        let points = ordered_points(world.points(), self.config.point_order);

        let triangles = triangulate(&points, &lines);
        let candidates = triangles.len();
        let triangles = prune_triangles(triangles, world.obstacles());
        let free = triangles.len();
        let cells = merge_cells(triangles);

        let obstacle_points: Vec<Vec2> = world
            .obstacles()
            .iter()
            .flat_map(|o| o.points().iter().copied())
            .collect();

        let mut index = NodeIndex::new(self.config.node_tolerance);
        let mut centroids = Vec::with_capacity(cells.len());
        for (i, cell) in cells.iter().enumerate() {
            centroids.push(index.insert(cell.centroid()));
            for other in &cells[i + 1..] {
                if let Some(shared) = polygons_adjacent(cell, other) {
                    index.insert(shared.midpoint());
                }
            }
        }

        let mut edges: Vec<NetworkEdge> = Vec::new();
        let mut keep = vec![false; index.len()];
        for (cell, centroid) in cells.iter().zip(centroids.iter().copied()) {
            let members: Vec<NodeId> = (0..index.len() as u32)
                .map(NodeId)
                .filter(|id| cell.contains_or_touches(index.position(*id)))
                .collect();

            if members.as_slice() == [centroid] {
                keep[centroid.index()] = true;
                continue;
            }

            for (k, &a) in members.iter().enumerate() {
                for &b in &members[k + 1..] {
                    let edge = NetworkEdge::new(a, b);
                    if edges.contains(&edge) {
                        continue;
                    }
                    let (pa, pb) = (index.position(a), index.position(b));
                    if !link_is_clear(pa, pb, &lines, &obstacle_points, radius) {
                        continue;
                    }
                    edges.push(edge);
                    keep[a.index()] = true;
                    keep[b.index()] = true;
                }
            }
        }

        let network = compact(&index, &keep, edges, cells);
        tracing::debug!(
            candidates,
            free,
            cells = network.cells().len(),
            nodes = network.node_count(),
            edges = network.edge_count(),
            radius,
            "Built path network"
        );
        Ok(network)
    }
}

/// World points with exact duplicates removed, in the configured visiting order.
fn ordered_points(points: &[Vec2], order: PointOrder) -> Vec<Vec2> {
    let mut out: Vec<Vec2> = Vec::with_capacity(points.len());
    for p in points {
        if !out.contains(p) {
            out.push(*p);
        }
    }
    if order == PointOrder::Lexicographic {
        out.sort_by(Vec2::lex_cmp);
    }
    out
}

/// A straight link is usable when it crosses no wall and passes every obstacle vertex at a
/// distance of at least `radius`.
pub(crate) fn link_is_clear(
    a: Vec2,
    b: Vec2,
    lines: &[Segment],
    obstacle_points: &[Vec2],
    radius: f32,
) -> bool {
    let link = Segment::new(a, b);
    obstacle_points
        .iter()
        .all(|p| minimum_distance(&link, *p) >= radius)
        && ray_trace_world_no_end_points(a, b, lines).is_none()
}

/// Drop unkept nodes and renumber the survivors densely, preserving their order.
fn compact(
    index: &NodeIndex,
    keep: &[bool],
    edges: Vec<NetworkEdge>,
    cells: Vec<Polygon>,
) -> PathNetwork {
    let mut remap: Vec<Option<NodeId>> = vec![None; index.len()];
    let mut nodes = Vec::new();
    for (old, kept) in keep.iter().enumerate() {
        if *kept {
            remap[old] = Some(NodeId(nodes.len() as u32));
            nodes.push(index.positions()[old]);
        }
    }

    let edges = edges
        .into_iter()
        .filter_map(|e| Some(NetworkEdge::new(remap[e.a.index()]?, remap[e.b.index()]?)))
        .collect();
    PathNetwork::from_parts(nodes, edges, cells)
}

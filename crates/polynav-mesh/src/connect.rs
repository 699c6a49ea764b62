use polynav_core::World;
use polynav_geom::Vec2;

use crate::builder::link_is_clear;
use crate::{NetworkEdge, NodeId, PathNetwork};

/// Connect hand-placed path nodes into a network.
///
/// Every pair of nodes is linked when the straight segment between them crosses no world
/// line and keeps at least `agent_radius` from every obstacle vertex. The resulting network
/// has no cells; nodes keep their input order and ids.
pub fn build_path_network<W: World + ?Sized>(
    nodes: &[Vec2],
    world: &W,
    agent_radius: f32,
) -> PathNetwork {
    let obstacle_points: Vec<Vec2> = world
        .obstacles()
        .iter()
        .flat_map(|o| o.points().iter().copied())
        .collect();

    let mut edges = Vec::new();
    for i in 0..nodes.len() {
        for j in i + 1..nodes.len() {
            if link_is_clear(nodes[i], nodes[j], world.lines(), &obstacle_points, agent_radius) {
                edges.push(NetworkEdge::new(NodeId(i as u32), NodeId(j as u32)));
            }
        }
    }

    tracing::debug!(
        nodes = nodes.len(),
        edges = edges.len(),
        "Connected path nodes"
    );
    PathNetwork::from_parts(nodes.to_vec(), edges, Vec::new())
}

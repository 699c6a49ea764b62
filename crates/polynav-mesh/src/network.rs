use polynav_geom::{Polygon, Segment, Vec2};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Index of a node inside a [`PathNetwork`].
///
/// Ids are dense (`0..node_count`) and stable for the lifetime of the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NodeId(pub u32);

impl NodeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Undirected edge between two distinct nodes, stored with `a < b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NetworkEdge {
    pub a: NodeId,
    pub b: NodeId,
}

impl NetworkEdge {
    pub fn new(a: NodeId, b: NodeId) -> Self {
        if a <= b {
            Self { a, b }
        } else {
            Self { a: b, b: a }
        }
    }

    /// The endpoint opposite `node`, if `node` is an endpoint.
    pub fn other(&self, node: NodeId) -> Option<NodeId> {
        if node == self.a {
            Some(self.b)
        } else if node == self.b {
            Some(self.a)
        } else {
            None
        }
    }
}

/// Path nodes, the clearance-verified edges between them, and the convex cells they were
/// derived from.
///
/// Built once per world and never mutated afterwards, so it can be shared between agents.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PathNetwork {
    nodes: Vec<Vec2>,
    edges: Vec<NetworkEdge>,
    cells: Vec<Polygon>,
}

impl PathNetwork {
    /// Assemble a network from raw parts.
    ///
    /// Self-loops, duplicate edges and edges referring to missing nodes are dropped, so every
    /// edge endpoint is a member node.
    pub fn from_parts(nodes: Vec<Vec2>, edges: Vec<NetworkEdge>, cells: Vec<Polygon>) -> Self {
        let n = nodes.len();
        let mut kept: Vec<NetworkEdge> = Vec::with_capacity(edges.len());
        for edge in edges {
            let edge = NetworkEdge::new(edge.a, edge.b);
            if edge.a == edge.b || edge.b.index() >= n || kept.contains(&edge) {
                continue;
            }
            kept.push(edge);
        }
        Self {
            nodes,
            edges: kept,
            cells,
        }
    }

    pub fn nodes(&self) -> &[Vec2] {
        &self.nodes
    }

    pub fn edges(&self) -> &[NetworkEdge] {
        &self.edges
    }

    pub fn cells(&self) -> &[Polygon] {
        &self.cells
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn position(&self, id: NodeId) -> Option<Vec2> {
        self.nodes.get(id.index()).copied()
    }

    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len() as u32).map(NodeId)
    }

    /// Nodes sharing an edge with `id`, in edge order.
    pub fn neighbors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.edges.iter().filter_map(move |e| e.other(id))
    }

    pub fn has_edge(&self, a: NodeId, b: NodeId) -> bool {
        self.edges.contains(&NetworkEdge::new(a, b))
    }

    /// The straight segment of an edge.
    pub fn segment(&self, edge: &NetworkEdge) -> Segment {
        Segment::new(self.nodes[edge.a.index()], self.nodes[edge.b.index()])
    }

    /// All edges as segments, for debug drawing.
    pub fn edge_segments(&self) -> impl Iterator<Item = Segment> + '_ {
        self.edges.iter().map(|e| self.segment(e))
    }

    /// The node nearest to `p`, ties broken by lowest id.
    pub fn closest_node(&self, p: Vec2) -> Option<NodeId> {
        let mut best: Option<(f32, NodeId)> = None;
        for id in self.node_ids() {
            let d2 = self.nodes[id.index()].distance_squared(p);
            match best {
                Some((best_d2, _)) if best_d2 <= d2 => {}
                _ => best = Some((d2, id)),
            }
        }
        best.map(|(_, id)| id)
    }
}

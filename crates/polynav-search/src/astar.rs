use std::cmp::Ordering;
use std::collections::BinaryHeap;

use polynav_geom::Vec2;
use polynav_mesh::{NetworkEdge, NodeId};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Search limits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchConfig {
    /// Give up after expanding this many nodes. `None` searches the whole component.
    pub max_expansions: Option<usize>,
}

/// Outcome of one A* query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchResult {
    /// Nodes from start to goal, both included. Empty when the goal was not reached.
    pub path: Vec<NodeId>,
    /// Nodes in the order they were expanded.
    pub closed: Vec<NodeId>,
}

impl SearchResult {
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Sum of the straight edge lengths along the path.
    pub fn cost(&self, nodes: &[Vec2]) -> f32 {
        self.path
            .windows(2)
            .map(|w| nodes[w[0].index()].distance(nodes[w[1].index()]))
            .sum()
    }

    /// Node positions along the path.
    pub fn positions(&self, nodes: &[Vec2]) -> Vec<Vec2> {
        self.path.iter().map(|id| nodes[id.index()]).collect()
    }
}

#[derive(Debug, Clone, Copy)]
struct OpenNode {
    f: f32,
    g: f32,
    node: u32,
    tie: u64,
}

impl PartialEq for OpenNode {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OpenNode {}

impl Ord for OpenNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering to make BinaryHeap behave like a min-heap.
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.tie.cmp(&self.tie))
    }
}

impl PartialOrd for OpenNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Reusable scratch buffers for A* queries.
///
/// A navigator replanning every few frames keeps one of these around instead of allocating
/// the open set and score tables per query.
#[derive(Debug, Default)]
pub struct SearchQuery {
    config: SearchConfig,
    open: BinaryHeap<OpenNode>,
    g_score: Vec<f32>,
    came_from: Vec<Option<u32>>,
    closed_flags: Vec<bool>,
    adjacency: Vec<Vec<u32>>,
}

impl SearchQuery {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// A* from `start` to `goal` over the undirected graph given by `edges`.
    ///
    /// Edge weights and the heuristic are Euclidean distances between node positions. Out of
    /// range ids yield an empty result.
    pub fn find_path(
        &mut self,
        start: NodeId,
        goal: NodeId,
        nodes: &[Vec2],
        edges: &[NetworkEdge],
    ) -> SearchResult {
        let n = nodes.len();
        if start.index() >= n || goal.index() >= n {
            return SearchResult::default();
        }
        if start == goal {
            return SearchResult {
                path: vec![start],
                closed: Vec::new(),
            };
        }

        self.reset(n, edges);
        let goal_pos = nodes[goal.index()];
        let heuristic = |id: u32| nodes[id as usize].distance(goal_pos);

        self.g_score[start.index()] = 0.0;
        self.open.push(OpenNode {
            f: heuristic(start.0),
            g: 0.0,
            node: start.0,
            tie: 0,
        });
        let mut tie: u64 = 1;
        let mut closed = Vec::new();

        while let Some(current) = self.open.pop() {
            if current.node == goal.0 {
                let path = self.reconstruct(goal.0);
                tracing::trace!(
                    start = start.0,
                    goal = goal.0,
                    length = path.len(),
                    expanded = closed.len(),
                    "A* reached goal"
                );
                return SearchResult { path, closed };
            }

            let idx = current.node as usize;
            if self.closed_flags[idx] || current.g > self.g_score[idx] {
                continue;
            }
            if self
                .config
                .max_expansions
                .is_some_and(|max| closed.len() >= max)
            {
                tracing::debug!(
                    start = start.0,
                    goal = goal.0,
                    expanded = closed.len(),
                    "A* expansion limit reached"
                );
                return SearchResult {
                    path: Vec::new(),
                    closed,
                };
            }

            self.closed_flags[idx] = true;
            closed.push(NodeId(current.node));

            for k in 0..self.adjacency[idx].len() {
                let next = self.adjacency[idx][k];
                let next_idx = next as usize;
                if self.closed_flags[next_idx] {
                    continue;
                }
                let tentative_g = current.g + nodes[idx].distance(nodes[next_idx]);
                if tentative_g >= self.g_score[next_idx] {
                    continue;
                }
                self.g_score[next_idx] = tentative_g;
                self.came_from[next_idx] = Some(current.node);
                self.open.push(OpenNode {
                    f: tentative_g + heuristic(next),
                    g: tentative_g,
                    node: next,
                    tie,
                });
                tie = tie.wrapping_add(1);
            }
        }

        tracing::trace!(
            start = start.0,
            goal = goal.0,
            expanded = closed.len(),
            "A* found no route"
        );
        SearchResult {
            path: Vec::new(),
            closed,
        }
    }

    fn reset(&mut self, n: usize, edges: &[NetworkEdge]) {
        self.open.clear();
        self.g_score.clear();
        self.g_score.resize(n, f32::INFINITY);
        self.came_from.clear();
        self.came_from.resize(n, None);
        self.closed_flags.clear();
        self.closed_flags.resize(n, false);

        self.adjacency.iter_mut().for_each(Vec::clear);
        self.adjacency.resize_with(n, Vec::new);
        for edge in edges {
            let (a, b) = (edge.a.index(), edge.b.index());
            if a == b || a >= n || b >= n {
                continue;
            }
            self.adjacency[a].push(edge.b.0);
            self.adjacency[b].push(edge.a.0);
        }
    }

    fn reconstruct(&self, goal: u32) -> Vec<NodeId> {
        let mut path = vec![NodeId(goal)];
        let mut current = goal;
        while let Some(prev) = self.came_from[current as usize] {
            current = prev;
            path.push(NodeId(current));
        }
        path.reverse();
        path
    }
}

/// A* with default limits and fresh scratch buffers.
pub fn astar(start: NodeId, goal: NodeId, nodes: &[Vec2], edges: &[NetworkEdge]) -> SearchResult {
    astar_with(SearchConfig::default(), start, goal, nodes, edges)
}

pub fn astar_with(
    config: SearchConfig,
    start: NodeId,
    goal: NodeId,
    nodes: &[Vec2],
    edges: &[NetworkEdge],
) -> SearchResult {
    SearchQuery::new(config).find_path(start, goal, nodes, edges)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn e(a: u32, b: u32) -> NetworkEdge {
        NetworkEdge::new(NodeId(a), NodeId(b))
    }

    #[test]
    fn open_set_pops_lowest_f_then_oldest() {
        let mut heap = BinaryHeap::new();
        for (f, tie) in [(2.0, 0), (1.0, 2), (1.0, 1), (3.0, 3)] {
            heap.push(OpenNode {
                f,
                g: 0.0,
                node: 0,
                tie,
            });
        }
        let order: Vec<u64> = std::iter::from_fn(|| heap.pop().map(|n| n.tie)).collect();
        assert_eq!(order, vec![1, 2, 0, 3]);
    }

    #[test]
    fn query_buffers_are_reused_between_searches() {
        let nodes = [Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0), Vec2::new(2.0, 0.0)];
        let mut query = SearchQuery::default();

        let first = query.find_path(NodeId(0), NodeId(2), &nodes, &[e(0, 1), e(1, 2)]);
        assert_eq!(first.path, vec![NodeId(0), NodeId(1), NodeId(2)]);

        let second = query.find_path(NodeId(0), NodeId(2), &nodes, &[e(0, 1)]);
        assert!(second.is_empty());
        assert_eq!(second.closed, vec![NodeId(0), NodeId(1)]);
    }

    #[test]
    fn out_of_range_ids_find_nothing() {
        let nodes = [Vec2::new(0.0, 0.0)];
        assert_eq!(astar(NodeId(0), NodeId(5), &nodes, &[]), SearchResult::default());
    }
}

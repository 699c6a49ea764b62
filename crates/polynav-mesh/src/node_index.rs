use std::collections::BTreeMap;

use polynav_geom::Vec2;

use crate::NodeId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Bucket(i64, i64);

/// Tolerance-based node registry.
///
/// Positions are hashed into a grid whose cell size equals the tolerance; a lookup probes the
/// 3x3 block of buckets around the query so points that straddle a bucket boundary still
/// resolve to the same node.
#[derive(Debug, Clone)]
pub struct NodeIndex {
    tolerance: f32,
    buckets: BTreeMap<Bucket, Vec<NodeId>>,
    positions: Vec<Vec2>,
}

impl NodeIndex {
    pub fn new(tolerance: f32) -> Self {
        Self {
            tolerance: tolerance.max(f32::EPSILON),
            buckets: BTreeMap::new(),
            positions: Vec::new(),
        }
    }

    fn bucket(&self, p: Vec2) -> Bucket {
        Bucket(
            (p.x / self.tolerance).floor() as i64,
            (p.y / self.tolerance).floor() as i64,
        )
    }

    pub fn find(&self, p: Vec2) -> Option<NodeId> {
        let Bucket(bx, by) = self.bucket(p);
        for dy in -1..=1 {
            for dx in -1..=1 {
                let Some(ids) = self.buckets.get(&Bucket(bx + dx, by + dy)) else {
                    continue;
                };
                if let Some(id) = ids
                    .iter()
                    .copied()
                    .find(|id| self.positions[id.index()].approx_eq(p, self.tolerance))
                {
                    return Some(id);
                }
            }
        }
        None
    }

    /// Return the existing node within tolerance of `p`, or register a new one.
    pub fn insert(&mut self, p: Vec2) -> NodeId {
        if let Some(id) = self.find(p) {
            return id;
        }
        let id = NodeId(self.positions.len() as u32);
        self.positions.push(p);
        let bucket = self.bucket(p);
        self.buckets.entry(bucket).or_default().push(id);
        id
    }

    pub fn position(&self, id: NodeId) -> Vec2 {
        self.positions[id.index()]
    }

    pub fn positions(&self) -> &[Vec2] {
        &self.positions
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn near_duplicates_resolve_to_one_node() {
        let mut index = NodeIndex::new(1e-3);
        let a = index.insert(Vec2::new(1.0, 1.0));
        // Computed independently, off by rounding and straddling a bucket edge.
        let b = index.insert(Vec2::new(1.0 - 1e-5, 1.0 + 2e-4));
        let c = index.insert(Vec2::new(1.5, 1.0));
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(index.len(), 2);
        assert_eq!(index.find(Vec2::new(1.5, 1.0005)), Some(c));
        assert_eq!(index.find(Vec2::new(3.0, 3.0)), None);
    }
}

use std::collections::VecDeque;

use polynav_geom::{path_length, Vec2};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Waypoints an agent still has to visit, front first.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NavPath {
    points: VecDeque<Vec2>,
}

impl NavPath {
    pub fn new(points: impl IntoIterator<Item = Vec2>) -> Self {
        Self {
            points: points.into_iter().collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn front(&self) -> Option<Vec2> {
        self.points.front().copied()
    }

    pub fn pop_front(&mut self) -> Option<Vec2> {
        self.points.pop_front()
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.points.iter().copied()
    }

    pub fn to_vec(&self) -> Vec<Vec2> {
        self.iter().collect()
    }

    /// Length of the polyline from `from` through every remaining waypoint.
    pub fn length_from(&self, from: Vec2) -> f32 {
        let mut points = Vec::with_capacity(self.points.len() + 1);
        points.push(from);
        points.extend(self.iter());
        path_length(&points)
    }
}

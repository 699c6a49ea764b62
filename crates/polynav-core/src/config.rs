use crate::{NavError, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Order in which world points are visited while triangulating free space.
///
/// The triangulation is greedy, so the visiting order decides which of several valid
/// decompositions is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PointOrder {
    /// Sort by x, then y.
    #[default]
    Lexicographic,
    /// Keep the order reported by the world.
    AsGiven,
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NavConfig {
    /// Clearance radius to use instead of the agent's `max_radius`.
    pub clearance_override: Option<f32>,
    /// Two path nodes closer than this (per axis) are the same node.
    pub node_tolerance: f32,
    pub point_order: PointOrder,
    /// Whether `smooth` may shortcut the remaining path during traversal.
    pub smoothing: bool,
    /// Optional cap on A* node expansions per query.
    pub max_expansions: Option<usize>,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            clearance_override: None,
            node_tolerance: 1e-3,
            point_order: PointOrder::Lexicographic,
            smoothing: true,
            max_expansions: None,
        }
    }
}

impl NavConfig {
    pub fn with_clearance(mut self, radius: f32) -> Self {
        self.clearance_override = Some(radius);
        self
    }

    pub fn with_node_tolerance(mut self, tolerance: f32) -> Self {
        self.node_tolerance = tolerance;
        self
    }

    pub fn with_point_order(mut self, order: PointOrder) -> Self {
        self.point_order = order;
        self
    }

    pub fn with_smoothing(mut self, smoothing: bool) -> Self {
        self.smoothing = smoothing;
        self
    }

    pub fn with_max_expansions(mut self, max_expansions: usize) -> Self {
        self.max_expansions = Some(max_expansions);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(radius) = self.clearance_override {
            check_radius(radius)?;
        }
        if !self.node_tolerance.is_finite() || self.node_tolerance <= 0.0 {
            return Err(NavError::InvalidConfig(format!(
                "node_tolerance must be finite and > 0, got {}",
                self.node_tolerance
            )));
        }
        if self.max_expansions == Some(0) {
            return Err(NavError::InvalidConfig(
                "max_expansions must be > 0 when set".to_string(),
            ));
        }
        Ok(())
    }

    /// Clearance to keep from obstacle vertices for an agent of the given radius.
    pub fn clearance_for(&self, agent_radius: f32) -> f32 {
        self.clearance_override.unwrap_or(agent_radius)
    }
}

/// Reject negative and non-finite radii.
pub fn check_radius(radius: f32) -> Result<f32> {
    if radius.is_finite() && radius >= 0.0 {
        Ok(radius)
    } else {
        Err(NavError::InvalidRadius(radius))
    }
}

use thiserror::Error;

/// Errors raised while validating navigation input.
///
/// Path queries never fail with an error: an unreachable destination is an empty path.
/// These variants only cover malformed worlds and configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NavError {
    #[error("Obstacle {index} has {vertices} vertices, at least 3 are required")]
    DegenerateObstacle { index: usize, vertices: usize },

    #[error("Non-finite coordinate ({x}, {y}) in world geometry")]
    NonFiniteCoordinate { x: f32, y: f32 },

    #[error("Agent radius must be finite and non-negative, got {0}")]
    InvalidRadius(f32),

    #[error("Invalid navigation config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, NavError>;

use crate::Vec2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The closed set of movement commands a navigator can give an agent.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MoveCommand {
    /// Head straight for the point.
    MoveTo(Vec2),
    /// Stop and drop the current move target.
    Stop,
}

/// Capability interface the navigator drives.
///
/// Whatever controls the agent (state machine, behavior tree, script) implements this; the
/// navigator only reads the agent's pose and issues [`MoveCommand`]s. The agent reports
/// waypoint arrival by calling the navigator's `checkpoint`.
pub trait NavAgent {
    fn location(&self) -> Vec2;

    /// Collision radius of the agent's body.
    fn radius(&self) -> f32;

    /// Radius used for clearance checks; defaults to [`NavAgent::radius`].
    fn max_radius(&self) -> f32 {
        self.radius()
    }

    /// Point the agent is currently walking toward, if any.
    fn move_target(&self) -> Option<Vec2>;

    fn issue(&mut self, command: MoveCommand);
}

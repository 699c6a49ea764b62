use polynav_core::{MoveCommand, NavAgent, Vec2};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Minimal kinematic agent: walks straight toward its move target at a fixed speed.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PointAgent {
    location: Vec2,
    radius: f32,
    speed: f32,
    arrival_distance: f32,
    target: Option<Vec2>,
}

impl PointAgent {
    pub fn new(location: Vec2, radius: f32, speed: f32) -> Self {
        Self {
            location,
            radius,
            speed,
            arrival_distance: 1e-3,
            target: None,
        }
    }

    pub fn with_arrival_distance(mut self, arrival_distance: f32) -> Self {
        self.arrival_distance = arrival_distance.max(0.0);
        self
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn set_location(&mut self, location: Vec2) {
        self.location = location;
    }

    /// Advance `dt` seconds toward the move target.
    ///
    /// Returns true on the step that reaches the target; the agent then stands exactly on it
    /// with no target left, and the owner should call the navigator's `checkpoint`.
    pub fn step(&mut self, dt: f32) -> bool {
        let Some(target) = self.target else {
            return false;
        };

        let to_target = target - self.location;
        let dist = to_target.length();
        let remaining = self.speed.max(0.0) * dt.max(0.0);

        if dist <= self.arrival_distance || remaining >= dist {
            self.location = target;
            self.target = None;
            return true;
        }

        self.location += to_target * (remaining / dist);
        false
    }
}

impl NavAgent for PointAgent {
    fn location(&self) -> Vec2 {
        self.location
    }

    fn radius(&self) -> f32 {
        self.radius
    }

    fn move_target(&self) -> Option<Vec2> {
        self.target
    }

    fn issue(&mut self, command: MoveCommand) {
        match command {
            MoveCommand::MoveTo(point) => self.target = Some(point),
            MoveCommand::Stop => self.target = None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_moves_at_speed_and_snaps_on_arrival() {
        let mut agent = PointAgent::new(Vec2::new(0.0, 0.0), 0.5, 2.0);
        assert!(!agent.step(1.0), "no target, no arrival");

        agent.issue(MoveCommand::MoveTo(Vec2::new(3.0, 0.0)));
        assert!(!agent.step(1.0));
        assert!(agent.location().approx_eq(Vec2::new(2.0, 0.0), 1e-6));

        assert!(agent.step(1.0));
        assert_eq!(agent.location(), Vec2::new(3.0, 0.0));
        assert_eq!(agent.move_target(), None);
    }

    #[test]
    fn stop_clears_the_target() {
        let mut agent = PointAgent::new(Vec2::new(0.0, 0.0), 0.5, 1.0);
        agent.issue(MoveCommand::MoveTo(Vec2::new(1.0, 1.0)));
        agent.issue(MoveCommand::Stop);
        assert!(!agent.step(1.0));
        assert_eq!(agent.location(), Vec2::new(0.0, 0.0));
    }
}

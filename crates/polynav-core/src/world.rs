use crate::{NavError, Polygon, Result, Segment, Vec2};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Read-only view of the static world geometry the navigation layer consumes.
///
/// The world exclusively owns obstacles and walls; navigation code only borrows them.
pub trait World {
    /// Solid obstacle polygons.
    fn obstacles(&self) -> &[Polygon];

    /// Every blocking segment: borders, obstacle edges and currently closed gates.
    fn lines(&self) -> &[Segment];

    /// [`World::lines`] without the outer border.
    fn lines_without_borders(&self) -> &[Segment];

    /// Every geometry vertex: border corners and obstacle vertices.
    fn points(&self) -> &[Vec2];

    /// Gate segments that are currently blocking.
    fn gates(&self) -> &[Segment] {
        &[]
    }
}

/// Check that a world is usable for network construction.
///
/// Self-intersecting obstacles are not detected.
pub fn validate_world<W: World + ?Sized>(world: &W) -> Result<()> {
    for (index, obstacle) in world.obstacles().iter().enumerate() {
        if obstacle.len() < 3 {
            return Err(NavError::DegenerateObstacle {
                index,
                vertices: obstacle.len(),
            });
        }
    }
    let segment_points = world.lines().iter().flat_map(|s| [s.a, s.b]);
    for p in world.points().iter().copied().chain(segment_points) {
        if !p.is_finite() {
            return Err(NavError::NonFiniteCoordinate { x: p.x, y: p.y });
        }
    }
    Ok(())
}

/// Identifier of a gate inside a [`StaticWorld`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GateId(pub u32);

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
struct Gate {
    segment: Segment,
    open: bool,
}

/// Reference [`World`]: a rectangular room with polygonal obstacles and toggleable gates.
///
/// Derived line/point sets are cached and rebuilt whenever the geometry or a gate changes.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "StaticWorldData", into = "StaticWorldData"))]
pub struct StaticWorld {
    border: Polygon,
    obstacles: Vec<Polygon>,
    gates: Vec<Gate>,
    lines: Vec<Segment>,
    inner_lines: Vec<Segment>,
    closed_gates: Vec<Segment>,
    points: Vec<Vec2>,
}

impl StaticWorld {
    /// An empty room spanning `min..max`.
    pub fn new(min: Vec2, max: Vec2) -> Self {
        let mut world = Self {
            border: Polygon::rect(min, max),
            obstacles: Vec::new(),
            gates: Vec::new(),
            lines: Vec::new(),
            inner_lines: Vec::new(),
            closed_gates: Vec::new(),
            points: Vec::new(),
        };
        world.rebuild();
        world
    }

    pub fn with_obstacle(mut self, obstacle: Polygon) -> Result<Self> {
        self.add_obstacle(obstacle)?;
        Ok(self)
    }

    pub fn add_obstacle(&mut self, obstacle: Polygon) -> Result<()> {
        if obstacle.len() < 3 {
            return Err(NavError::DegenerateObstacle {
                index: self.obstacles.len(),
                vertices: obstacle.len(),
            });
        }
        if let Some(p) = obstacle.points().iter().find(|p| !p.is_finite()) {
            return Err(NavError::NonFiniteCoordinate { x: p.x, y: p.y });
        }
        self.obstacles.push(obstacle);
        self.rebuild();
        Ok(())
    }

    /// Add a gate, initially closed.
    pub fn add_gate(&mut self, segment: Segment) -> GateId {
        let id = GateId(self.gates.len() as u32);
        self.gates.push(Gate {
            segment,
            open: false,
        });
        self.rebuild();
        id
    }

    /// Open or close a gate. Returns false for unknown ids.
    pub fn set_gate_open(&mut self, id: GateId, open: bool) -> bool {
        let Some(gate) = self.gates.get_mut(id.0 as usize) else {
            return false;
        };
        if gate.open != open {
            gate.open = open;
            tracing::debug!(gate = id.0, open, "Gate toggled");
            self.rebuild();
        }
        true
    }

    pub fn is_gate_open(&self, id: GateId) -> Option<bool> {
        self.gates.get(id.0 as usize).map(|g| g.open)
    }

    pub fn border(&self) -> &Polygon {
        &self.border
    }

    fn rebuild(&mut self) {
        self.closed_gates = self
            .gates
            .iter()
            .filter(|g| !g.open)
            .map(|g| g.segment)
            .collect();

        self.inner_lines.clear();
        for obstacle in &self.obstacles {
            self.inner_lines.extend(obstacle.edges());
        }
        self.inner_lines.extend(self.closed_gates.iter().copied());

        self.lines.clear();
        self.lines.extend(self.border.edges());
        self.lines.extend(self.inner_lines.iter().copied());

        self.points.clear();
        self.points.extend(self.border.points().iter().copied());
        for obstacle in &self.obstacles {
            for p in obstacle.points() {
                if !self.points.contains(p) {
                    self.points.push(*p);
                }
            }
        }
    }
}

impl World for StaticWorld {
    fn obstacles(&self) -> &[Polygon] {
        &self.obstacles
    }

    fn lines(&self) -> &[Segment] {
        &self.lines
    }

    fn lines_without_borders(&self) -> &[Segment] {
        &self.inner_lines
    }

    fn points(&self) -> &[Vec2] {
        &self.points
    }

    fn gates(&self) -> &[Segment] {
        &self.closed_gates
    }
}

#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
struct StaticWorldData {
    border: Polygon,
    obstacles: Vec<Polygon>,
    gates: Vec<Gate>,
}

#[cfg(feature = "serde")]
impl From<StaticWorldData> for StaticWorld {
    fn from(data: StaticWorldData) -> Self {
        let mut world = Self {
            border: data.border,
            obstacles: data.obstacles,
            gates: data.gates,
            lines: Vec::new(),
            inner_lines: Vec::new(),
            closed_gates: Vec::new(),
            points: Vec::new(),
        };
        world.rebuild();
        world
    }
}

#[cfg(feature = "serde")]
impl From<StaticWorld> for StaticWorldData {
    fn from(world: StaticWorld) -> Self {
        Self {
            border: world.border,
            obstacles: world.obstacles,
            gates: world.gates,
        }
    }
}

use std::sync::Arc;

use polynav_core::{MoveCommand, NavAgent, NavConfig, Result, Vec2, World};
use polynav_mesh::{PathNetwork, PathNetworkBuilder};
use polynav_search::{unobstructed_network, SearchConfig, SearchQuery};

use crate::{clear_shot, find_closest_unobstructed, shortcut_path, NavPath};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// What the navigator is currently doing for its agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum NavState {
    /// No destination.
    #[default]
    Idle,
    /// Walking straight to the destination.
    Direct,
    /// Walking a routed path one waypoint at a time.
    Following,
    /// The path was invalidated; the next `update` plans again.
    Replanning,
}

/// Per-agent navigation: owns the agent's path, shares the world's network.
#[derive(Debug)]
pub struct Navigator {
    config: NavConfig,
    network: Option<Arc<PathNetwork>>,
    query: SearchQuery,
    path: NavPath,
    destination: Option<Vec2>,
    state: NavState,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::from_valid_config(NavConfig::default())
    }
}

impl Navigator {
    pub fn new(config: NavConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: NavConfig) -> Self {
        Self {
            query: SearchQuery::new(SearchConfig {
                max_expansions: config.max_expansions,
            }),
            config,
            network: None,
            path: NavPath::default(),
            destination: None,
            state: NavState::Idle,
        }
    }

    /// Use a network already built for this world, typically shared with other navigators.
    pub fn with_network(mut self, network: Arc<PathNetwork>) -> Self {
        self.network = Some(network);
        self
    }

    pub fn config(&self) -> &NavConfig {
        &self.config
    }

    pub fn network(&self) -> Option<&Arc<PathNetwork>> {
        self.network.as_ref()
    }

    pub fn path(&self) -> &NavPath {
        &self.path
    }

    pub fn destination(&self) -> Option<Vec2> {
        self.destination
    }

    pub fn state(&self) -> NavState {
        self.state
    }

    /// Build the path network for `world` sized for `agent` and cache it.
    ///
    /// Called once per world load; the returned handle can be passed to other navigators
    /// through [`Navigator::with_network`].
    pub fn create_path_network<W, A>(&mut self, world: &W, agent: &A) -> Result<Arc<PathNetwork>>
    where
        W: World + ?Sized,
        A: NavAgent + ?Sized,
    {
        let builder = PathNetworkBuilder::new(self.config)?;
        let network = Arc::new(builder.build(world, agent.max_radius())?);
        tracing::info!(
            nodes = network.node_count(),
            edges = network.edge_count(),
            cells = network.cells().len(),
            "Path network ready"
        );
        self.network = Some(Arc::clone(&network));
        Ok(network)
    }

    /// Plan from `source` to `dest` and start the agent moving.
    ///
    /// Walks straight when the shot is clear. Otherwise routes through the network with closed
    /// gates filtered out, shortcuts the route and issues its first waypoint. Returns false
    /// when no route exists; the agent is stopped and the navigator goes idle.
    pub fn compute_path<W, A>(
        &mut self,
        world: &W,
        agent: &mut A,
        source: Vec2,
        dest: Vec2,
    ) -> bool
    where
        W: World + ?Sized,
        A: NavAgent + ?Sized,
    {
        self.destination = Some(dest);
        self.path.clear();
        let radius = self.radius(agent);

        if clear_shot(source, dest, world.lines(), world.points(), radius) {
            tracing::debug!(?source, ?dest, "Clear shot to destination");
            agent.issue(MoveCommand::MoveTo(dest));
            self.state = NavState::Direct;
            return true;
        }

        let Some(route) = self.route(world, source, dest, radius) else {
            tracing::debug!(?source, ?dest, "No route to destination");
            self.give_up(agent);
            return false;
        };

        self.path = NavPath::new(route);
        match self.path.pop_front() {
            Some(first) => {
                agent.issue(MoveCommand::MoveTo(first));
                self.state = NavState::Following;
                tracing::debug!(
                    ?source,
                    ?dest,
                    waypoints = self.path.len() + 1,
                    "Following routed path"
                );
                true
            }
            None => {
                self.give_up(agent);
                false
            }
        }
    }

    /// Network route from `source` to `dest`, shortcut, excluding `source`.
    fn route<W: World + ?Sized>(
        &mut self,
        world: &W,
        source: Vec2,
        dest: Vec2,
        radius: f32,
    ) -> Option<Vec<Vec2>> {
        let network = self.network.as_ref()?;
        let nodes = network.nodes();
        let inner = world.lines_without_borders();

        let start = find_closest_unobstructed(source, nodes, inner, world.points(), radius)?;
        let goal = find_closest_unobstructed(dest, nodes, inner, world.points(), radius)?;

        let edges = unobstructed_network(network.edges(), nodes, world.gates());
        let result = self.query.find_path(start, goal, nodes, &edges);
        if result.is_empty() {
            return None;
        }

        let raw = result.positions(nodes);
        Some(shortcut_path(
            source,
            dest,
            &raw,
            world.lines(),
            world.points(),
            radius,
        ))
    }

    /// The agent reached its move target.
    ///
    /// Re-validates the next leg against the current walls and closed gates. A blocked leg
    /// stops the agent and drops the path so the next [`Navigator::update`] replans; a clear
    /// one is issued. With nothing left the agent has arrived and the navigator goes idle.
    pub fn checkpoint<W, A>(&mut self, world: &W, agent: &mut A)
    where
        W: World + ?Sized,
        A: NavAgent + ?Sized,
    {
        if matches!(self.state, NavState::Idle | NavState::Replanning) {
            return;
        }
        let Some(next) = self.path.front() else {
            tracing::debug!(location = ?agent.location(), "Destination reached");
            self.destination = None;
            self.state = NavState::Idle;
            return;
        };

        let radius = self.radius(agent);
        let location = agent.location();
        if !clear_shot(
            location,
            next,
            world.lines_without_borders(),
            world.points(),
            radius,
        ) {
            tracing::debug!(?location, ?next, "Next leg blocked, replanning");
            agent.issue(MoveCommand::Stop);
            self.path.clear();
            self.state = NavState::Replanning;
            return;
        }

        self.path.pop_front();
        agent.issue(MoveCommand::MoveTo(next));
    }

    /// Per-tick hook: replans when a destination is pending but nothing is being followed.
    ///
    /// Returns true when a replan ran.
    pub fn update<W, A>(&mut self, world: &W, agent: &mut A, _delta: f32) -> bool
    where
        W: World + ?Sized,
        A: NavAgent + ?Sized,
    {
        let Some(dest) = self.destination else {
            return false;
        };
        let lost_target = matches!(self.state, NavState::Direct | NavState::Following)
            && agent.move_target().is_none();
        if self.state != NavState::Replanning && !lost_target {
            return false;
        }

        let source = agent.location();
        tracing::debug!(?source, ?dest, state = ?self.state, "Replanning");
        self.compute_path(world, agent, source, dest);
        true
    }

    /// Skip ahead along the path when a later waypoint has become directly visible.
    ///
    /// Considers the current move target followed by the remaining path and re-targets the
    /// agent at the furthest point it can reach with a clear shot. Returns true when the path
    /// changed.
    pub fn smooth<W, A>(&mut self, world: &W, agent: &mut A) -> bool
    where
        W: World + ?Sized,
        A: NavAgent + ?Sized,
    {
        if !self.config.smoothing || self.path.is_empty() {
            return false;
        }
        let Some(target) = agent.move_target() else {
            return false;
        };

        let radius = self.radius(agent);
        let location = agent.location();
        let mut ahead = Vec::with_capacity(self.path.len() + 1);
        ahead.push(target);
        ahead.extend(self.path.iter());

        let Some(skip) = (1..ahead.len())
            .rev()
            .find(|&j| clear_shot(location, ahead[j], world.lines(), world.points(), radius))
        else {
            return false;
        };

        agent.issue(MoveCommand::MoveTo(ahead[skip]));
        self.path = NavPath::new(ahead.into_iter().skip(skip + 1));
        tracing::trace!(skipped = skip, remaining = self.path.len(), "Smoothed path");
        true
    }

    fn radius<A: NavAgent + ?Sized>(&self, agent: &A) -> f32 {
        self.config.clearance_for(agent.max_radius())
    }

    fn give_up<A: NavAgent + ?Sized>(&mut self, agent: &mut A) {
        agent.issue(MoveCommand::Stop);
        self.path.clear();
        self.destination = None;
        self.state = NavState::Idle;
    }
}

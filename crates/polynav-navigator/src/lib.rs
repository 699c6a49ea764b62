//! Runtime path following for agents in a polygonal world.
//!
//! A [`Navigator`] belongs to one agent. It walks straight to the destination when the way is
//! clear, otherwise it routes through a shared [`polynav_mesh::PathNetwork`], shortcuts the
//! route, and hands the agent one waypoint at a time. Waypoint arrivals are re-validated so a
//! closing gate forces a replan instead of a walk into a wall.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod agent;
pub mod navigator;
pub mod path;
pub mod shot;

pub use agent::PointAgent;
pub use navigator::{NavState, Navigator};
pub use path::NavPath;
pub use shot::{clear_shot, find_closest_unobstructed, shortcut_path};

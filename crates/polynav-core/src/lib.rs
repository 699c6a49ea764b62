//! World/agent collaborator traits, configuration and error types shared by the polynav crates.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod agent;
pub mod config;
pub mod error;
pub mod world;

pub use agent::{MoveCommand, NavAgent};
pub use config::{check_radius, NavConfig, PointOrder};
pub use error::{NavError, Result};
pub use world::{validate_world, GateId, StaticWorld, World};

pub use polynav_geom::{Polygon, Segment, Vec2};

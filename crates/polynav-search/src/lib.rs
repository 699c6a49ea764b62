//! Shortest-path search over a [`polynav_mesh::PathNetwork`].
//!
//! The network is static; blocking segments such as closed gates are applied per query with
//! [`unobstructed_network`] before running [`astar`].

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod astar;
pub mod filter;

pub use astar::{astar, astar_with, SearchConfig, SearchQuery, SearchResult};
pub use filter::unobstructed_network;

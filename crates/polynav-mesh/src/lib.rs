//! Path network construction for polygonal worlds.
//!
//! Free space is triangulated by visibility between world vertices, triangles that overlap
//! obstacles are discarded, and adjacent triangles are greedily merged into maximal convex
//! cells. Cell centroids and shared-edge midpoints become path nodes, connected inside each
//! cell wherever the agent keeps clearance from obstacle vertices.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod builder;
pub mod connect;
pub mod merge;
pub mod network;
pub mod node_index;
pub mod triangulate;

pub use builder::PathNetworkBuilder;
pub use connect::build_path_network;
pub use merge::{merge_cells, try_merge};
pub use network::{NetworkEdge, NodeId, PathNetwork};
pub use node_index::NodeIndex;
pub use triangulate::{prune_triangles, triangulate};

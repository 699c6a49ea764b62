//! Umbrella crate that re-exports the `polynav-*` building blocks.
//!
//! Enable only the layers you need: `geom` for the pure geometry helpers, `mesh` to build
//! path networks, `search` for A*, and `navigator` (the default through `full`) for per-agent
//! path following.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

#[cfg(feature = "geom")]
#[cfg_attr(docsrs, doc(cfg(feature = "geom")))]
pub use polynav_geom as geom;

#[cfg(feature = "core")]
#[cfg_attr(docsrs, doc(cfg(feature = "core")))]
pub use polynav_core as core;

#[cfg(feature = "mesh")]
#[cfg_attr(docsrs, doc(cfg(feature = "mesh")))]
pub use polynav_mesh as mesh;

#[cfg(feature = "search")]
#[cfg_attr(docsrs, doc(cfg(feature = "search")))]
pub use polynav_search as search;

#[cfg(feature = "navigator")]
#[cfg_attr(docsrs, doc(cfg(feature = "navigator")))]
pub use polynav_navigator as navigator;

/// The types most programs touch.
#[cfg(feature = "full")]
#[cfg_attr(docsrs, doc(cfg(feature = "full")))]
pub mod prelude {
    pub use polynav_core::{
        MoveCommand, NavAgent, NavConfig, NavError, Polygon, Segment, StaticWorld, Vec2, World,
    };
    pub use polynav_mesh::{PathNetwork, PathNetworkBuilder};
    pub use polynav_navigator::{NavState, Navigator, PointAgent};
}

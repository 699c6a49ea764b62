//! 2D geometry primitives for polygonal navigation.
//!
//! Everything here is pure: ray/segment intersection against wall sets, point-to-segment
//! distances, point-in-polygon tests, convexity and polygon adjacency.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod math;
pub mod polygon;
pub mod ray;
pub mod segment;

pub use math::{Vec2, EPSILON};
pub use polygon::{
    is_convex, point_inside_polygon, point_on_polygon, polygons_adjacent, sort_by_angle_around,
    Polygon,
};
pub use ray::{minimum_distance, ray_trace, ray_trace_world, ray_trace_world_no_end_points};
pub use segment::{path_length, Segment};

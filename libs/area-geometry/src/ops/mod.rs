//! # Ring Operations
//!
//! The three kernel components, leaves first: plane fitting, triangulation
//! and clipping.

pub mod clip;
pub mod plane;
pub mod triangulate;

pub use clip::{centroid, contains_point, intersect};
pub use plane::{fit_and_project, fit_plane, project, unproject, PlaneBasis};
pub use triangulate::{triangulate, triangulate_polygon, Triangulation};

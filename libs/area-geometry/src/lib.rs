//! # Area Geometry
//!
//! Geometry kernel for rendering geo-referenced areas on a 3D terrain.
//! Turns an ordered ring of boundary points into a best-fit plane, a
//! UV-mapped triangle mesh, and derived polygon operations used for
//! labeling and spatial queries.
//!
//! ## Architecture
//!
//! ```text
//! ring (3D) → ops::plane → ring (2D) → ops::triangulate → mesh::TriangleMesh
//!                                    ↘ ops::clip (centroid, intersect)
//! ```
//!
//! `builder` wires these together for single features and batches.
//!
//! ## Conventions
//!
//! - Rings never repeat their first point; a trailing copy is stripped
//! - Counter-clockwise winding means positive area and "inside"
//! - All math is `f64` (`glam::DVec2` / `glam::DVec3`)
//! - Every failure is a [`GeometryError`] value; an empty intersection is an
//!   empty ring, not an error
//!
//! ## Usage
//!
//! ```rust
//! use area_geometry::{fit_and_project, intersect, triangulate};
//! use glam::{DVec2, DVec3};
//!
//! let ring = [
//!     DVec3::new(0.0, 0.0, 0.0),
//!     DVec3::new(2.0, 0.0, 0.0),
//!     DVec3::new(2.0, 0.0, -2.0),
//!     DVec3::new(0.0, 0.0, -2.0),
//! ];
//! let (_basis, projected) = fit_and_project(&ring)?;
//! let triangulation = triangulate(&projected)?;
//! assert_eq!(triangulation.triangle_count(), 2);
//!
//! let a = [DVec2::ZERO, DVec2::X, DVec2::ONE, DVec2::Y];
//! let b = a.map(|p| p + DVec2::splat(0.5));
//! assert_eq!(intersect(&[a, b]).len(), 4);
//! # Ok::<(), area_geometry::GeometryError>(())
//! ```

pub mod builder;
pub mod error;
pub mod mesh;
pub mod ops;
pub mod predicates;
pub mod ring;

pub use builder::{
    build_area_mesh, build_area_mesh_with, build_area_meshes, AreaFeature, AreaMesh, BatchReport,
    BuildOptions, SkippedFeature,
};
pub use error::{GeometryError, GeometryResult};
pub use mesh::{IndexBuffer, IndexFormat, TriangleMesh};
pub use ops::{
    centroid, contains_point, fit_and_project, fit_plane, intersect, project, triangulate,
    triangulate_polygon, unproject, PlaneBasis, Triangulation,
};
pub use ring::Polygon2D;

//! # Area Mesh Builder
//!
//! Turns 3D boundary rings into renderable meshes.
//!
//! ## Pipeline
//!
//! ```text
//! ring (3D) → fit_plane → project (2D) → triangulate → TriangleMesh (3D)
//! ```
//!
//! Triangles and UVs are attached to the ring's original 3D points, so the
//! mesh follows the terrain the points were snapped to rather than the
//! fitted plane.
//!
//! Every step is pure math and safe to run on worker threads. Attaching the
//! result to a scene is left to the caller's rendering thread.

use glam::DVec3;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{GeometryError, GeometryResult};
use crate::mesh::TriangleMesh;
use crate::ops::clip::centroid;
use crate::ops::plane::{fit_and_project, PlaneBasis};
use crate::ops::triangulate::triangulate;
use crate::ring::strip_closing_duplicate;

// =============================================================================
// OPTIONS AND FEATURES
// =============================================================================

/// Per-call options for mesh building.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildOptions {
    /// Build batches on the rayon thread pool
    pub parallel: bool,
    /// Attach per-vertex normals to each mesh
    pub compute_normals: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            parallel: true,
            compute_normals: true,
        }
    }
}

/// A named area boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaFeature {
    /// Caller-assigned feature identifier
    pub id: String,
    /// Boundary ring in world space
    pub ring: Vec<DVec3>,
}

impl AreaFeature {
    /// Creates a feature from an id and its boundary ring.
    pub fn new(id: impl Into<String>, ring: Vec<DVec3>) -> Self {
        Self {
            id: id.into(),
            ring,
        }
    }
}

/// A built area: its mesh, the plane it was triangulated in, and a label
/// position.
#[derive(Debug, Clone, PartialEq)]
pub struct AreaMesh {
    /// Mesh over the ring's original points
    pub mesh: TriangleMesh,
    /// Plane the ring was projected onto
    pub basis: PlaneBasis,
    /// Area-weighted centroid of the projected ring, lifted back to 3D
    pub label_anchor: DVec3,
}

// =============================================================================
// SINGLE AREA
// =============================================================================

/// Builds the mesh for one boundary ring with default options.
///
/// # Errors
///
/// - [`GeometryError::DegenerateGeometry`] for fewer than 3 points or a
///   collinear ring
/// - [`GeometryError::TriangulationFailed`] for a self-intersecting ring
///
/// # Example
///
/// ```rust
/// use area_geometry::builder::build_area_mesh;
/// use glam::DVec3;
///
/// let ring = [
///     DVec3::new(0.0, 10.0, 0.0),
///     DVec3::new(4.0, 10.2, 0.0),
///     DVec3::new(4.0, 10.1, -3.0),
///     DVec3::new(0.0, 9.9, -3.0),
/// ];
/// let area = build_area_mesh(&ring).unwrap();
/// assert_eq!(area.mesh.vertex_count(), 4);
/// assert_eq!(area.mesh.triangle_count(), 2);
/// ```
pub fn build_area_mesh(ring: &[DVec3]) -> GeometryResult<AreaMesh> {
    build_area_mesh_with(ring, &BuildOptions::default())
}

/// Builds the mesh for one boundary ring.
///
/// A trailing copy of the first point is dropped before fitting, so the
/// mesh has one vertex per distinct boundary point.
///
/// # Errors
///
/// Same as [`build_area_mesh`].
pub fn build_area_mesh_with(ring: &[DVec3], options: &BuildOptions) -> GeometryResult<AreaMesh> {
    let points = strip_closing_duplicate(ring);
    let (basis, projected) = fit_and_project(points)?;
    let triangulation = triangulate(&projected)?;

    let label_anchor = centroid(&projected)
        .map(|c| basis.to_world(c))
        .unwrap_or(basis.origin);

    let mut mesh = TriangleMesh::new(points.to_vec(), triangulation.triangles, triangulation.uvs);
    if options.compute_normals {
        mesh.compute_normals();
    }

    if !mesh.validate() {
        return Err(GeometryError::degenerate("assembled mesh failed validation"));
    }

    debug!(
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        index_format = ?mesh.index_format(),
        "Built area mesh"
    );

    Ok(AreaMesh {
        mesh,
        basis,
        label_anchor,
    })
}

// =============================================================================
// BATCH
// =============================================================================

/// A feature left out of a batch and the reason.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedFeature {
    /// Feature identifier
    pub id: String,
    /// Why the feature could not be built
    pub error: GeometryError,
}

/// Outcome of [`build_area_meshes`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchReport {
    /// Built meshes keyed by feature id, in input order
    pub meshes: Vec<(String, AreaMesh)>,
    /// Features that failed, in input order
    pub skipped: Vec<SkippedFeature>,
}

impl BatchReport {
    /// Returns the number of features processed.
    pub fn total(&self) -> usize {
        self.meshes.len() + self.skipped.len()
    }

    /// Returns true if every feature was built.
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Builds meshes for many features.
///
/// A failing feature is logged and recorded in [`BatchReport::skipped`]; it
/// never stops the batch. Results keep the input order whether or not the
/// batch runs in parallel.
pub fn build_area_meshes(features: &[AreaFeature], options: &BuildOptions) -> BatchReport {
    let build = |feature: &AreaFeature| build_area_mesh_with(&feature.ring, options);

    let results: Vec<GeometryResult<AreaMesh>> = if options.parallel {
        features.par_iter().map(build).collect()
    } else {
        features.iter().map(build).collect()
    };

    let mut report = BatchReport::default();
    for (feature, result) in features.iter().zip(results) {
        match result {
            Ok(area) => report.meshes.push((feature.id.clone(), area)),
            Err(error) => {
                warn!(feature = %feature.id, %error, "Skipping area feature");
                report.skipped.push(SkippedFeature {
                    id: feature.id.clone(),
                    error,
                });
            }
        }
    }

    info!(
        built = report.meshes.len(),
        skipped = report.skipped.len(),
        parallel = options.parallel,
        "Built area mesh batch"
    );

    report
}

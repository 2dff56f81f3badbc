//! # Plane Projection
//!
//! Fits a best-fit plane to a near-planar 3D ring and maps points between
//! the ring's 3D frame and a 2D frame on that plane.
//!
//! ## Algorithm
//!
//! 1. Estimate the normal with Newell's method (robust to mild
//!    non-planarity and to non-convex rings)
//! 2. Take the ring's vertex mean as the plane origin
//! 3. Build `u` from the preferred "right" axis projected onto the plane,
//!    falling back to "up" when "right" is nearly parallel to the normal
//! 4. `v = normal x u`
//!
//! Because `(u, v, normal)` is right-handed, a ring that winds
//! counter-clockwise around its Newell normal projects to a CCW 2D ring.


use config::constants::{BASIS_PARALLEL_THRESHOLD, NORMAL_LENGTH_SQ_EPSILON, WORLD_RIGHT, WORLD_UP};
use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{GeometryError, GeometryResult};
use crate::ring::strip_closing_duplicate;

/// Orthonormal plane frame with an origin.
///
/// Invariants: `|normal| == 1`, `|u| == 1`, `|v| == 1`, and the three axes
/// are mutually perpendicular.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlaneBasis {
    /// Centroid of the ring the plane was fitted to
    pub origin: DVec3,
    /// Unit plane normal
    pub normal: DVec3,
    /// First in-plane axis
    pub u: DVec3,
    /// Second in-plane axis
    pub v: DVec3,
}

impl PlaneBasis {
    /// Maps a 3D point into the plane's 2D frame.
    #[inline]
    pub fn to_plane(&self, point: DVec3) -> DVec2 {
        let local = point - self.origin;
        DVec2::new(local.dot(self.u), local.dot(self.v))
    }

    /// Maps a 2D plane coordinate back to 3D: `origin + x*u + y*v`.
    #[inline]
    pub fn to_world(&self, point: DVec2) -> DVec3 {
        self.origin + self.u * point.x + self.v * point.y
    }

    /// Signed distance of a 3D point from the plane along the normal.
    #[inline]
    pub fn distance_to_plane(&self, point: DVec3) -> f64 {
        (point - self.origin).dot(self.normal)
    }

    /// Largest absolute distance of any ring point from the plane.
    ///
    /// Useful to judge how far a terrain-snapped ring departs from flat.
    pub fn max_deviation(&self, ring: &[DVec3]) -> f64 {
        ring.iter()
            .map(|&p| self.distance_to_plane(p).abs())
            .fold(0.0, f64::max)
    }
}

/// Accumulates the Newell normal of a ring (unnormalized, length = 2 * area).
pub fn newell_normal(ring: &[DVec3]) -> DVec3 {
    let n = ring.len();
    let mut normal = DVec3::ZERO;
    for i in 0..n {
        let cur = ring[i];
        let next = ring[(i + 1) % n];
        normal.x += (cur.y - next.y) * (cur.z + next.z);
        normal.y += (cur.z - next.z) * (cur.x + next.x);
        normal.z += (cur.x - next.x) * (cur.y + next.y);
    }
    normal
}

/// Fits a best-fit plane basis to a 3D ring.
///
/// A trailing copy of the first point is ignored.
///
/// # Errors
///
/// Returns [`GeometryError::DegenerateGeometry`] when the ring has fewer than
/// 3 points or the Newell normal vanishes (collinear or zero-area ring).
///
/// # Example
///
/// ```rust
/// use area_geometry::ops::plane::fit_plane;
/// use glam::DVec3;
///
/// let ring = [
///     DVec3::new(0.0, 0.0, 0.0),
///     DVec3::new(1.0, 0.0, 0.0),
///     DVec3::new(1.0, 1.0, 0.0),
///     DVec3::new(0.0, 1.0, 0.0),
/// ];
/// let basis = fit_plane(&ring).unwrap();
/// assert_eq!(basis.normal, DVec3::Z);
/// ```
pub fn fit_plane(ring: &[DVec3]) -> GeometryResult<PlaneBasis> {
    let ring = strip_closing_duplicate(ring);
    if ring.len() < 3 {
        return Err(GeometryError::degenerate(format!(
            "plane fit needs at least 3 points, got {}",
            ring.len()
        )));
    }

    let normal = newell_normal(ring);
    let length_sq = normal.length_squared();
    if length_sq < NORMAL_LENGTH_SQ_EPSILON {
        debug!(length_sq, points = ring.len(), "Newell normal vanished");
        return Err(GeometryError::degenerate(
            "ring is collinear or has zero area",
        ));
    }
    let normal = normal / length_sq.sqrt();

    let origin = ring.iter().copied().sum::<DVec3>() / ring.len() as f64;

    let right = DVec3::from_array(WORLD_RIGHT);
    let reference = if right.dot(normal).abs() > BASIS_PARALLEL_THRESHOLD {
        DVec3::from_array(WORLD_UP)
    } else {
        right
    };
    let u = (reference - normal * reference.dot(normal)).normalize();
    let v = normal.cross(u).normalize();

    Ok(PlaneBasis {
        origin,
        normal,
        u,
        v,
    })
}

/// Projects every ring point into the basis' 2D frame.
///
/// Output index `i` corresponds to input index `i`.
pub fn project(ring: &[DVec3], basis: &PlaneBasis) -> Vec<DVec2> {
    ring.iter().map(|&p| basis.to_plane(p)).collect()
}

/// Maps 2D plane coordinates back to 3D; the inverse of [`project`] for
/// points lying on the plane.
pub fn unproject(ring: &[DVec2], basis: &PlaneBasis) -> Vec<DVec3> {
    ring.iter().map(|&p| basis.to_world(p)).collect()
}

/// Fits a plane and projects the whole ring in one call.
///
/// # Errors
///
/// Same as [`fit_plane`].
pub fn fit_and_project(ring: &[DVec3]) -> GeometryResult<(PlaneBasis, Vec<DVec2>)> {
    let basis = fit_plane(ring)?;
    let projected = project(ring, &basis);
    Ok((basis, projected))
}

//! # Rings
//!
//! Ordered point sequences describing a closed boundary. The first point is
//! never repeated at the end; producers that do repeat it are normalized by
//! [`strip_closing_duplicate`]. A ring carries no winding guarantee, so
//! consumers that care call [`ccw_order`] or [`to_ccw`].

use config::constants::CLOSING_DUPLICATE_EPSILON;
use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};

use crate::predicates::cross;

// =============================================================================
// RING POINT
// =============================================================================

/// A point type a ring can be made of.
pub trait RingPoint: Copy {
    /// Squared Euclidean distance between two points.
    fn distance_sq(self, other: Self) -> f64;
}

impl RingPoint for DVec2 {
    #[inline]
    fn distance_sq(self, other: Self) -> f64 {
        self.distance_squared(other)
    }
}

impl RingPoint for DVec3 {
    #[inline]
    fn distance_sq(self, other: Self) -> f64 {
        self.distance_squared(other)
    }
}

/// Returns the ring without a trailing copy of its first point.
///
/// # Example
///
/// ```rust
/// use area_geometry::ring::strip_closing_duplicate;
/// use glam::DVec2;
///
/// let closed = [DVec2::ZERO, DVec2::X, DVec2::Y, DVec2::ZERO];
/// assert_eq!(strip_closing_duplicate(&closed).len(), 3);
/// ```
pub fn strip_closing_duplicate<P: RingPoint>(ring: &[P]) -> &[P] {
    match (ring.first(), ring.last()) {
        (Some(&first), Some(&last)) if ring.len() >= 2 => {
            if first.distance_sq(last) <= CLOSING_DUPLICATE_EPSILON * CLOSING_DUPLICATE_EPSILON {
                &ring[..ring.len() - 1]
            } else {
                ring
            }
        }
        _ => ring,
    }
}

// =============================================================================
// AREA AND WINDING
// =============================================================================

/// Signed shoelace area of a ring; positive when counter-clockwise.
pub fn signed_area(ring: &[DVec2]) -> f64 {
    let n = ring.len();
    if n < 3 {
        return 0.0;
    }

    let mut sum = 0.0;
    for i in 0..n {
        sum += cross(ring[i], ring[(i + 1) % n]);
    }
    sum * 0.5
}

/// Unsigned shoelace area of a ring.
#[inline]
pub fn area(ring: &[DVec2]) -> f64 {
    signed_area(ring).abs()
}

/// Returns true if the ring winds counter-clockwise.
#[inline]
pub fn is_ccw(ring: &[DVec2]) -> bool {
    signed_area(ring) >= 0.0
}

/// Index permutation that visits the ring counter-clockwise.
///
/// `order[k]` is the caller's index of the k-th point of the CCW traversal.
/// The input is never reordered.
pub fn ccw_order(ring: &[DVec2]) -> Vec<usize> {
    if signed_area(ring) < 0.0 {
        (0..ring.len()).rev().collect()
    } else {
        (0..ring.len()).collect()
    }
}

/// Returns a counter-clockwise copy of the ring.
pub fn to_ccw(ring: &[DVec2]) -> Vec<DVec2> {
    let mut out = ring.to_vec();
    if signed_area(ring) < 0.0 {
        out.reverse();
    }
    out
}

/// Axis-aligned bounding box as `(min, max)`, or `None` for an empty ring.
pub fn bounding_box(ring: &[DVec2]) -> Option<(DVec2, DVec2)> {
    let (&first, rest) = ring.split_first()?;
    Some(
        rest.iter()
            .fold((first, first), |(min, max), &p| (min.min(p), max.max(p))),
    )
}

// =============================================================================
// POLYGON CONTAINER
// =============================================================================

/// A 2D polygon: an outer ring plus optional hole rings.
///
/// Holes are carried along for callers that need them; the triangulator and
/// clipper operate on the outer ring only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Polygon2D {
    /// Outer boundary
    pub outer: Vec<DVec2>,
    /// Inner holes
    pub holes: Vec<Vec<DVec2>>,
}

impl Polygon2D {
    /// Creates a polygon from its outer boundary.
    pub fn new(outer: Vec<DVec2>) -> Self {
        Self {
            outer,
            holes: Vec::new(),
        }
    }

    /// Creates a polygon with holes.
    pub fn with_holes(outer: Vec<DVec2>, holes: Vec<Vec<DVec2>>) -> Self {
        Self { outer, holes }
    }

    /// Returns the number of vertices in the outer boundary.
    pub fn vertex_count(&self) -> usize {
        self.outer.len()
    }

    /// Returns true if the polygon has holes.
    pub fn has_holes(&self) -> bool {
        !self.holes.is_empty()
    }

    /// Area of the outer boundary minus the area of the holes.
    pub fn area(&self) -> f64 {
        let holes: f64 = self.holes.iter().map(|h| area(h)).sum();
        (area(&self.outer) - holes).max(0.0)
    }

    /// Rewinds the outer ring counter-clockwise and every hole clockwise.
    pub fn normalize_winding(&mut self) {
        if signed_area(&self.outer) < 0.0 {
            self.outer.reverse();
        }
        for hole in &mut self.holes {
            if signed_area(hole) > 0.0 {
                hole.reverse();
            }
        }
    }
}

impl From<Vec<DVec2>> for Polygon2D {
    fn from(outer: Vec<DVec2>) -> Self {
        Self::new(outer)
    }
}

impl AsRef<[DVec2]> for Polygon2D {
    fn as_ref(&self) -> &[DVec2] {
        &self.outer
    }
}

// =============================================================================
// TESTS
// =============================================================================

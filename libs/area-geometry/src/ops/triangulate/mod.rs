//! # Polygon Triangulation
//!
//! Ear clipping for simple, possibly non-convex 2D polygons.
//!
//! ## Algorithm
//!
//! 1. Strip a closing duplicate and reject degenerate input
//! 2. Build the CCW index permutation `order` (the caller's points are never
//!    reordered)
//! 3. Repeatedly clip the ear whose diagonal is shortest among all current
//!    ears; shortest-diagonal ears give better shaped triangles than
//!    first-found ears
//! 4. Force every emitted triangle CCW, then map indices back through
//!    `order`
//! 5. Generate planar UVs from the polygon's bounding box
//!
//! Each clipped ear re-tests only its two neighbours against the reflex
//! vertices, so a ring costs `O(n * r)` for `r` reflex vertices.


use std::cmp::Ordering;
use std::collections::BinaryHeap;

use config::constants::{
    COINCIDENT_VERTEX_EPSILON, DEGENERATE_AREA_EPSILON, MAX_RING_VERTICES, UV_EXTENT_EPSILON,
};
use glam::DVec2;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{GeometryError, GeometryResult};
use crate::predicates::{cross, is_convex, point_in_triangle};
use crate::ring::{bounding_box, ccw_order, signed_area, strip_closing_duplicate, Polygon2D};

/// Triangle list and planar UVs produced by [`triangulate`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Triangulation {
    /// Index triples into the caller's ring, each CCW in the 2D frame
    pub triangles: Vec<[u32; 3]>,
    /// One UV per input point, in input order
    pub uvs: Vec<DVec2>,
}

impl Triangulation {
    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns true if no triangles were produced.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }
}

/// Triangulates a simple 2D ring.
///
/// Triangle indices refer to the caller's original point order. A trailing
/// copy of the first point is accepted; it receives a UV but no triangle.
///
/// # Errors
///
/// - [`GeometryError::TriangulationFailed`] for fewer than 3 points or when
///   a full scan finds no ear (self-intersecting input)
/// - [`GeometryError::DegenerateGeometry`] for a zero-area ring
/// - [`GeometryError::TooManyVertices`] when indices would not fit in `u32`
///
/// # Example
///
/// ```rust
/// use area_geometry::ops::triangulate::triangulate;
/// use glam::DVec2;
///
/// let square = [
///     DVec2::new(0.0, 0.0),
///     DVec2::new(1.0, 0.0),
///     DVec2::new(1.0, 1.0),
///     DVec2::new(0.0, 1.0),
/// ];
/// let result = triangulate(&square).unwrap();
/// assert_eq!(result.triangle_count(), 2);
/// assert_eq!(result.uvs[2], DVec2::new(1.0, 1.0));
/// ```
pub fn triangulate(ring: &[DVec2]) -> GeometryResult<Triangulation> {
    if ring.len() > MAX_RING_VERTICES {
        return Err(GeometryError::TooManyVertices {
            count: ring.len(),
            max: MAX_RING_VERTICES,
        });
    }

    let points = strip_closing_duplicate(ring);
    if points.len() < 3 {
        return Err(GeometryError::triangulation_failed(
            "polygon needs at least 3 points",
            points.len(),
        ));
    }

    let area = signed_area(points);
    if area.abs() < DEGENERATE_AREA_EPSILON {
        return Err(GeometryError::degenerate(format!(
            "polygon area {area:e} is too small to triangulate"
        )));
    }

    let order = ccw_order(points);
    let working: Vec<DVec2> = order.iter().map(|&i| points[i]).collect();
    debug!(
        vertices = points.len(),
        reversed = area < 0.0,
        "Triangulating ring"
    );

    let mut triangles = clip_ears(&working)?;
    enforce_ccw(&working, &mut triangles);

    // Indices fit: the ring length was checked against MAX_RING_VERTICES
    let triangles: Vec<[u32; 3]> = triangles
        .into_iter()
        .map(|[a, b, c]| [order[a] as u32, order[b] as u32, order[c] as u32])
        .collect();

    let uvs = planar_uvs(ring, &working);

    debug!(triangles = triangles.len(), "Triangulation complete");

    Ok(Triangulation { triangles, uvs })
}

/// Triangulates the outer ring of a polygon container.
///
/// Holes are not cut out of the result.
///
/// # Errors
///
/// Same as [`triangulate`].
pub fn triangulate_polygon(polygon: &Polygon2D) -> GeometryResult<Triangulation> {
    if polygon.has_holes() {
        debug!(
            holes = polygon.holes.len(),
            "Hole rings are ignored by the triangulator"
        );
    }
    triangulate(&polygon.outer)
}

// =============================================================================
// EAR CLIPPING
// =============================================================================

/// Ear clipping with the shortest-diagonal tie-break on a CCW ring.
///
/// Among all current ears the one with the shortest diagonal is clipped;
/// equal diagonals go to the lowest vertex index. Ear status is cached per
/// vertex and only the two neighbours of a clipped ear are re-tested, so a
/// step costs one heap pop plus two ear tests against the reflex vertices.
///
/// Returns triangles as index triples into `points`.
fn clip_ears(points: &[DVec2]) -> GeometryResult<Vec<[usize; 3]>> {
    let n = points.len();
    let mut ring = VertexRing::new(n);
    let mut reflex: Vec<usize> = (0..n).filter(|&i| !ring.is_convex_at(points, i)).collect();
    let mut generations = vec![0u32; n];
    let mut ears: BinaryHeap<EarCandidate> = (0..n)
        .filter_map(|i| ear_candidate(points, &ring, &reflex, i, 0))
        .collect();
    let mut triangles = Vec::with_capacity(n.saturating_sub(2));

    while ring.len > 3 {
        let Some(ear) = ears.pop() else {
            return Err(GeometryError::triangulation_failed(
                "no valid ear found; polygon is not simple",
                ring.len,
            ));
        };
        let i1 = ear.vertex;
        // Skip stale entries
        if !ring.active[i1] || ear.generation != generations[i1] {
            continue;
        }

        let (i0, i2) = (ring.prev[i1], ring.next[i1]);
        triangles.push([i0, i1, i2]);
        ring.remove(i1);

        for j in [i0, i2] {
            let convex = ring.is_convex_at(points, j);
            match (convex, reflex.iter().position(|&r| r == j)) {
                (true, Some(k)) => {
                    reflex.swap_remove(k);
                }
                (false, None) => reflex.push(j),
                _ => {}
            }
        }
        for j in [i0, i2] {
            generations[j] += 1;
            if let Some(candidate) = ear_candidate(points, &ring, &reflex, j, generations[j]) {
                ears.push(candidate);
            }
        }
    }

    let Some(first) = ring.active.iter().position(|&active| active) else {
        return Err(GeometryError::triangulation_failed("no vertices left", 0));
    };
    let second = ring.next[first];
    triangles.push([first, second, ring.next[second]]);
    Ok(triangles)
}

/// Active vertices as a doubly linked ring over working indices.
struct VertexRing {
    prev: Vec<usize>,
    next: Vec<usize>,
    active: Vec<bool>,
    len: usize,
}

impl VertexRing {
    fn new(n: usize) -> Self {
        Self {
            prev: (0..n).map(|i| (i + n - 1) % n).collect(),
            next: (0..n).map(|i| (i + 1) % n).collect(),
            active: vec![true; n],
            len: n,
        }
    }

    fn remove(&mut self, i: usize) {
        let (p, q) = (self.prev[i], self.next[i]);
        self.next[p] = q;
        self.prev[q] = p;
        self.active[i] = false;
        self.len -= 1;
    }

    fn is_convex_at(&self, points: &[DVec2], i: usize) -> bool {
        is_convex(points[self.prev[i]], points[i], points[self.next[i]])
    }
}

/// A cached ear, ordered so the max-heap pops the shortest diagonal first
/// and the lowest vertex index among equal diagonals.
#[derive(Debug, Clone, Copy)]
struct EarCandidate {
    diagonal: f64,
    vertex: usize,
    generation: u32,
}

impl Ord for EarCandidate {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .diagonal
            .total_cmp(&self.diagonal)
            .then_with(|| other.vertex.cmp(&self.vertex))
            .then_with(|| self.generation.cmp(&other.generation))
    }
}

impl PartialOrd for EarCandidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for EarCandidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for EarCandidate {}

/// Tests vertex `i1` as an ear of the current ring.
fn ear_candidate(
    points: &[DVec2],
    ring: &VertexRing,
    reflex: &[usize],
    i1: usize,
    generation: u32,
) -> Option<EarCandidate> {
    let (i0, i2) = (ring.prev[i1], ring.next[i1]);
    is_ear(points, reflex, i0, i1, i2).then(|| EarCandidate {
        diagonal: points[i0].distance_squared(points[i2]),
        vertex: i1,
        generation,
    })
}

/// Returns true if `(i0, i1, i2)` is convex at `i1` and no non-convex
/// vertex lies inside the triangle.
///
/// Convex vertices are not tested: one inside the triangle implies a
/// non-convex one inside as well.
fn is_ear(points: &[DVec2], reflex: &[usize], i0: usize, i1: usize, i2: usize) -> bool {
    let (a, b, c) = (points[i0], points[i1], points[i2]);
    if !is_convex(a, b, c) {
        return false;
    }

    let coincident_sq = COINCIDENT_VERTEX_EPSILON * COINCIDENT_VERTEX_EPSILON;
    !reflex.iter().any(|&j| {
        if j == i0 || j == i1 || j == i2 {
            return false;
        }
        let p = points[j];
        let on_corner = [a, b, c].iter().any(|&q| p.distance_squared(q) <= coincident_sq);
        !on_corner && point_in_triangle(p, a, b, c)
    })
}

/// Swaps the last two indices of any clockwise triangle.
fn enforce_ccw(points: &[DVec2], triangles: &mut [[usize; 3]]) {
    for tri in triangles.iter_mut() {
        let (a, b, c) = (points[tri[0]], points[tri[1]], points[tri[2]]);
        if cross(b - a, c - a) < 0.0 {
            tri.swap(1, 2);
        }
    }
}

/// Normalized bounding-box UVs, one per point of `ring`.
fn planar_uvs(ring: &[DVec2], working: &[DVec2]) -> Vec<DVec2> {
    let Some((min, max)) = bounding_box(working) else {
        return Vec::new();
    };
    let extent = (max - min).max(DVec2::splat(UV_EXTENT_EPSILON));
    ring.iter().map(|&p| (p - min) / extent).collect()
}

//! # Polygon Clipping
//!
//! Centroids and N-way intersection of 2D rings.
//!
//! ## Intersection
//!
//! Every input ring is normalized to CCW, then the first ring is clipped
//! against each following ring in turn with Sutherland-Hodgman. The fold
//! stops as soon as the running subject is empty.
//!
//! ## Limitation
//!
//! Sutherland-Hodgman is exact only for convex clip rings. A non-convex clip
//! ring yields the Sutherland-Hodgman approximation (the subject is trimmed
//! against the infinite line of every clip edge), which can keep regions
//! inside the clip ring's concavities. Callers with freehand, non-convex
//! areas get that approximation.

#[cfg(test)]
mod tests;

use config::constants::{CENTROID_AREA_EPSILON, COINCIDENT_VERTEX_EPSILON, DEGENERATE_AREA_EPSILON};
use glam::DVec2;
use tracing::debug;

use crate::predicates::{cross, is_left_of, line_intersection};
use crate::ring::{area, strip_closing_duplicate, to_ccw};

// =============================================================================
// CENTROID
// =============================================================================

/// Area-weighted centroid of a ring.
///
/// Falls back to the vertex mean when the ring's area is below
/// [`CENTROID_AREA_EPSILON`] (collinear or tiny rings). A trailing copy of
/// the first point is ignored. Returns `None` for an empty ring.
///
/// # Example
///
/// ```rust
/// use area_geometry::ops::clip::centroid;
/// use glam::DVec2;
///
/// let triangle = [DVec2::new(0.0, 0.0), DVec2::new(2.0, 0.0), DVec2::new(1.0, 2.0)];
/// let c = centroid(&triangle).unwrap();
/// assert!((c.x - 1.0).abs() < 1e-12);
/// assert!((c.y - 2.0 / 3.0).abs() < 1e-12);
/// ```
pub fn centroid(ring: &[DVec2]) -> Option<DVec2> {
    let points = strip_closing_duplicate(ring);
    if points.is_empty() {
        return None;
    }

    let n = points.len();
    let mut doubled_area = 0.0;
    let mut weighted = DVec2::ZERO;
    for i in 0..n {
        let p = points[i];
        let q = points[(i + 1) % n];
        let c = cross(p, q);
        doubled_area += c;
        weighted += (p + q) * c;
    }

    let area = doubled_area * 0.5;
    if area.abs() < CENTROID_AREA_EPSILON {
        let sum: DVec2 = points.iter().copied().sum();
        return Some(sum / n as f64);
    }

    Some(weighted / (6.0 * area))
}

// =============================================================================
// INTERSECTION
// =============================================================================

/// Intersects any number of rings into a single outer ring.
///
/// Returns an empty ring when the rings share no region. Zero rings give an
/// empty ring; a single ring gives its CCW copy. Rings with fewer than 3
/// points or an area below [`DEGENERATE_AREA_EPSILON`] cover no region and
/// make the result empty, and so does an overlap of zero area (rings that
/// only share an edge or a corner).
///
/// See the module docs for the non-convex limitation.
///
/// # Example
///
/// ```rust
/// use area_geometry::ops::clip::intersect;
/// use area_geometry::ring::area;
/// use glam::DVec2;
///
/// let a = vec![
///     DVec2::new(0.0, 0.0),
///     DVec2::new(1.0, 0.0),
///     DVec2::new(1.0, 1.0),
///     DVec2::new(0.0, 1.0),
/// ];
/// let b: Vec<DVec2> = a.iter().map(|&p| p + DVec2::splat(0.5)).collect();
/// let overlap = intersect(&[a, b]);
/// assert!((area(&overlap) - 0.25).abs() < 1e-12);
/// ```
pub fn intersect<P: AsRef<[DVec2]>>(polygons: &[P]) -> Vec<DVec2> {
    let Some((first, rest)) = polygons.split_first() else {
        return Vec::new();
    };
    let Some(mut subject) = normalized(first.as_ref()) else {
        debug!(polygon = 0, "Degenerate ring makes intersection empty");
        return Vec::new();
    };

    for (index, polygon) in rest.iter().enumerate() {
        let Some(clip) = normalized(polygon.as_ref()) else {
            debug!(polygon = index + 1, "Degenerate ring makes intersection empty");
            return Vec::new();
        };

        subject = clip_polygon_with_polygon(&subject, &clip);
        if subject.len() < 3 || area(&subject) < DEGENERATE_AREA_EPSILON {
            debug!(polygon = index + 1, "Intersection became empty");
            return Vec::new();
        }
    }

    subject
}

/// Clips `subject` against every edge of `clip` (Sutherland-Hodgman).
///
/// Both rings are expected CCW. The "inside" of a clip edge `A -> B` is its
/// left side, boundary included. Nearly parallel edge pairs contribute no
/// intersection point. Consecutive points within
/// [`COINCIDENT_VERTEX_EPSILON`] of each other are merged, so the result has
/// neither repeated points nor a closing duplicate.
pub fn clip_polygon_with_polygon(subject: &[DVec2], clip: &[DVec2]) -> Vec<DVec2> {
    let mut output = subject.to_vec();
    let n = clip.len();

    for i in 0..n {
        let Some(&last) = output.last() else {
            break;
        };
        let a = clip[i];
        let b = clip[(i + 1) % n];

        let input = std::mem::take(&mut output);
        let mut s = last;
        for &e in &input {
            let s_inside = is_left_of(s, a, b);
            let e_inside = is_left_of(e, a, b);

            match (s_inside, e_inside) {
                (true, true) => push_distinct(&mut output, e),
                (false, true) => {
                    if let Some(hit) = line_intersection(s, e, a, b) {
                        push_distinct(&mut output, hit);
                    }
                    push_distinct(&mut output, e);
                }
                (true, false) => {
                    if let Some(hit) = line_intersection(s, e, a, b) {
                        push_distinct(&mut output, hit);
                    }
                }
                (false, false) => {}
            }
            s = e;
        }

        if output.len() >= 2 && is_coincident(output[0], output[output.len() - 1]) {
            output.pop();
        }
    }

    output
}

fn is_coincident(p: DVec2, q: DVec2) -> bool {
    p.distance_squared(q) <= COINCIDENT_VERTEX_EPSILON * COINCIDENT_VERTEX_EPSILON
}

/// Appends `point` unless it coincides with the last output point.
fn push_distinct(output: &mut Vec<DVec2>, point: DVec2) {
    if output.last().map_or(true, |&last| !is_coincident(last, point)) {
        output.push(point);
    }
}

/// Strips a closing duplicate and rewinds CCW; `None` for fewer than 3
/// points or a zero-area ring.
fn normalized(ring: &[DVec2]) -> Option<Vec<DVec2>> {
    let ring = strip_closing_duplicate(ring);
    (ring.len() >= 3 && area(ring) >= DEGENERATE_AREA_EPSILON).then(|| to_ccw(ring))
}

// =============================================================================
// CONTAINMENT
// =============================================================================

/// Even-odd point-in-polygon test.
///
/// Points exactly on the boundary may report either side.
pub fn contains_point(ring: &[DVec2], point: DVec2) -> bool {
    let ring = strip_closing_duplicate(ring);
    let n = ring.len();
    if n < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let vi = ring[i];
        let vj = ring[j];
        if (vi.y > point.y) != (vj.y > point.y)
            && point.x < (vj.x - vi.x) * (point.y - vi.y) / (vj.y - vi.y) + vi.x
        {
            inside = !inside;
        }
        j = i;
    }
    inside
}

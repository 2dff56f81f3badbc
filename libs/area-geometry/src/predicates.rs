//! # 2D Geometric Predicates
//!
//! Small pure functions on 2D vectors shared by the triangulator and the
//! clipper. None of them depend on a container type.

use config::constants::{CONVEX_EPSILON, PARALLEL_EPSILON, POINT_IN_TRIANGLE_EPSILON};
use glam::DVec2;

/// 2D cross product (z component of the 3D cross product).
#[inline]
pub fn cross(a: DVec2, b: DVec2) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Turn direction at `b` when walking `a -> b -> c`.
///
/// Positive for a left (counter-clockwise) turn, negative for a right turn,
/// zero when the three points are collinear.
#[inline]
pub fn turn(a: DVec2, b: DVec2, c: DVec2) -> f64 {
    cross(b - a, c - b)
}

/// Returns true if the corner `a -> b -> c` is strictly convex in a CCW ring.
#[inline]
pub fn is_convex(a: DVec2, b: DVec2, c: DVec2) -> bool {
    turn(a, b, c) > CONVEX_EPSILON
}

/// Signed area of triangle `(a, b, c)`; positive when CCW.
#[inline]
pub fn triangle_signed_area(a: DVec2, b: DVec2, c: DVec2) -> f64 {
    0.5 * cross(b - a, c - a)
}

/// Returns true if `p` lies inside or on the boundary of triangle `(a, b, c)`.
///
/// Uses barycentric coordinates with an inclusive tolerance of
/// [`POINT_IN_TRIANGLE_EPSILON`]. A zero-area triangle contains nothing.
///
/// # Example
///
/// ```rust
/// use area_geometry::predicates::point_in_triangle;
/// use glam::DVec2;
///
/// let (a, b, c) = (DVec2::ZERO, DVec2::new(2.0, 0.0), DVec2::new(0.0, 2.0));
/// assert!(point_in_triangle(DVec2::new(0.5, 0.5), a, b, c));
/// assert!(point_in_triangle(DVec2::new(1.0, 0.0), a, b, c));
/// assert!(!point_in_triangle(DVec2::new(2.0, 2.0), a, b, c));
/// ```
pub fn point_in_triangle(p: DVec2, a: DVec2, b: DVec2, c: DVec2) -> bool {
    let v0 = c - a;
    let v1 = b - a;
    let v2 = p - a;

    let dot00 = v0.dot(v0);
    let dot01 = v0.dot(v1);
    let dot02 = v0.dot(v2);
    let dot11 = v1.dot(v1);
    let dot12 = v1.dot(v2);

    let denom = dot00 * dot11 - dot01 * dot01;
    if denom.abs() <= f64::MIN_POSITIVE {
        return false;
    }

    let u = (dot11 * dot02 - dot01 * dot12) / denom;
    let v = (dot00 * dot12 - dot01 * dot02) / denom;

    u >= -POINT_IN_TRIANGLE_EPSILON
        && v >= -POINT_IN_TRIANGLE_EPSILON
        && u + v <= 1.0 + POINT_IN_TRIANGLE_EPSILON
}

/// Returns true if `p` is on the left of, or on, the directed line `a -> b`.
///
/// For a CCW clip polygon this is the "inside" side of each edge.
#[inline]
pub fn is_left_of(p: DVec2, a: DVec2, b: DVec2) -> bool {
    cross(b - a, p - a) >= 0.0
}

/// Intersects the line through `s -> e` with the line through `a -> b`.
///
/// Returns `None` when the directions are nearly parallel
/// (`|cross(d1, d2)| < PARALLEL_EPSILON`).
///
/// # Example
///
/// ```rust
/// use area_geometry::predicates::line_intersection;
/// use glam::DVec2;
///
/// let hit = line_intersection(
///     DVec2::new(0.0, -1.0),
///     DVec2::new(0.0, 1.0),
///     DVec2::new(-1.0, 0.0),
///     DVec2::new(1.0, 0.0),
/// );
/// assert_eq!(hit, Some(DVec2::ZERO));
/// ```
pub fn line_intersection(s: DVec2, e: DVec2, a: DVec2, b: DVec2) -> Option<DVec2> {
    let d1 = e - s;
    let d2 = b - a;
    let denom = cross(d1, d2);
    if denom.abs() < PARALLEL_EPSILON {
        return None;
    }

    let t = cross(a - s, d2) / denom;
    Some(s + d1 * t)
}

// =============================================================================
// TESTS
// =============================================================================

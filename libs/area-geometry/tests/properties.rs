//! Kernel properties checked through the public API.

use std::collections::BTreeSet;
use std::f64::consts::TAU;

use approx::{assert_abs_diff_eq, assert_relative_eq};
use area_geometry::mesh::{IndexBuffer, IndexFormat, TriangleMesh};
use area_geometry::predicates::cross;
use area_geometry::ring::area;
use area_geometry::{
    centroid, fit_and_project, fit_plane, intersect, triangulate, unproject, GeometryError,
};
use glam::{DVec2, DVec3};

/// Star-shaped (hence simple) ring with uneven radii.
fn star(n: usize, seed: usize) -> Vec<DVec2> {
    (0..n)
        .map(|i| {
            let radius = 1.0 + 0.6 * ((i * seed) % 13) as f64 / 13.0;
            let angle = TAU * i as f64 / n as f64;
            DVec2::new(radius * angle.cos(), radius * angle.sin())
        })
        .collect()
}

fn unit_square() -> Vec<DVec2> {
    vec![
        DVec2::new(0.0, 0.0),
        DVec2::new(1.0, 0.0),
        DVec2::new(1.0, 1.0),
        DVec2::new(0.0, 1.0),
    ]
}

fn test_rings() -> Vec<Vec<DVec2>> {
    let mut rings = Vec::new();
    for n in [5, 12, 40, 97] {
        for seed in [7919, 31, 3] {
            let ring = star(n, seed);
            let mut reversed = ring.clone();
            reversed.reverse();
            rings.push(ring);
            rings.push(reversed);
        }
    }
    rings
}

fn triangle_area(ring: &[DVec2], tri: [u32; 3]) -> f64 {
    let [a, b, c] = tri.map(|i| ring[i as usize]);
    cross(b - a, c - a) * 0.5
}

// =============================================================================
// TRIANGULATION
// =============================================================================

#[test]
fn triangle_count_and_index_coverage() {
    for ring in test_rings() {
        let n = ring.len();
        let result = triangulate(&ring).unwrap();

        assert_eq!(result.triangle_count(), n - 2);
        let used: BTreeSet<u32> = result.triangles.iter().flatten().copied().collect();
        let expected: BTreeSet<u32> = (0..n as u32).collect();
        assert_eq!(used, expected);
    }
}

#[test]
fn triangulation_conserves_area() {
    for ring in test_rings() {
        let result = triangulate(&ring).unwrap();
        let sum: f64 = result
            .triangles
            .iter()
            .map(|&tri| triangle_area(&ring, tri).abs())
            .sum();
        assert_relative_eq!(sum, area(&ring), max_relative = 1e-4);
    }
}

#[test]
fn every_triangle_is_counter_clockwise() {
    for ring in test_rings() {
        let result = triangulate(&ring).unwrap();
        for &tri in &result.triangles {
            assert!(triangle_area(&ring, tri) >= 0.0, "clockwise triangle {tri:?}");
        }
    }
}

#[test]
fn uvs_cover_unit_square() {
    let ring = star(40, 31);
    let result = triangulate(&ring).unwrap();
    assert_eq!(result.uvs.len(), ring.len());

    let (min, max) = result
        .uvs
        .iter()
        .fold((DVec2::MAX, DVec2::MIN), |(lo, hi), &uv| (lo.min(uv), hi.max(uv)));
    assert_abs_diff_eq!(min.x, 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(min.y, 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(max.x, 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(max.y, 1.0, epsilon = 1e-12);
}

#[test]
fn two_point_ring_fails_triangulation() {
    let result = triangulate(&[DVec2::ZERO, DVec2::X]);
    assert!(matches!(result, Err(GeometryError::TriangulationFailed { .. })));
}

// =============================================================================
// PLANE FITTING
// =============================================================================

#[test]
fn planar_ring_round_trips_through_plane() {
    let normal = DVec3::new(0.3, 1.0, -0.4).normalize();
    let tangent = normal.cross(DVec3::Z).normalize();
    let bitangent = normal.cross(tangent);
    let origin = DVec3::new(1200.0, 35.0, -800.0);

    let ring: Vec<DVec3> = star(24, 7919)
        .into_iter()
        .map(|p| origin + tangent * p.x * 50.0 + bitangent * p.y * 50.0)
        .collect();

    let (basis, projected) = fit_and_project(&ring).unwrap();
    assert_abs_diff_eq!(basis.normal.length(), 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(basis.normal.dot(normal).abs(), 1.0, epsilon = 1e-9);
    assert_abs_diff_eq!(basis.u.dot(basis.v), 0.0, epsilon = 1e-12);

    let back = unproject(&projected, &basis);
    for (p, q) in ring.iter().zip(&back) {
        assert!(p.distance(*q) < 1e-8, "{p} vs {q}");
    }
}

#[test]
fn collinear_ring_is_degenerate() {
    let ring = [
        DVec3::new(0.0, 0.0, 0.0),
        DVec3::new(1.0, 2.0, 3.0),
        DVec3::new(2.0, 4.0, 6.0),
        DVec3::new(5.0, 10.0, 15.0),
    ];
    assert!(matches!(
        fit_plane(&ring),
        Err(GeometryError::DegenerateGeometry { .. })
    ));
}

// =============================================================================
// CLIPPING
// =============================================================================

#[test]
fn identical_squares_intersect_to_the_square() {
    let result = intersect(&[unit_square(), unit_square()]);
    assert_eq!(result.len(), 4);
    assert_abs_diff_eq!(area(&result), 1.0, epsilon = 1e-12);
}

#[test]
fn disjoint_squares_intersect_to_nothing() {
    let moved: Vec<DVec2> = unit_square().iter().map(|&p| p + DVec2::new(5.0, 0.0)).collect();
    assert!(intersect(&[unit_square(), moved]).is_empty());
}

#[test]
fn overlapping_squares_intersect_to_corner() {
    let moved: Vec<DVec2> = unit_square().iter().map(|&p| p + DVec2::splat(0.5)).collect();
    let result = intersect(&[unit_square(), moved]);
    assert_eq!(result.len(), 4);
    assert_abs_diff_eq!(area(&result), 0.25, epsilon = 1e-12);
}

#[test]
fn triangle_centroid() {
    let ring = [DVec2::new(0.0, 0.0), DVec2::new(2.0, 0.0), DVec2::new(1.0, 2.0)];
    let c = centroid(&ring).unwrap();
    assert_abs_diff_eq!(c.x, 1.0, epsilon = 1e-9);
    assert_abs_diff_eq!(c.y, 0.667, epsilon = 1e-3);
}

// =============================================================================
// WIDE INDICES
// =============================================================================

#[test]
fn large_mesh_uses_wide_indices() {
    let count = 70_000;
    let ring3d: Vec<DVec3> = (0..count)
        .map(|i| {
            let angle = TAU * i as f64 / count as f64;
            DVec3::new(100.0 * angle.cos(), 3.0, -100.0 * angle.sin())
        })
        .collect();

    let (basis, projected) = fit_and_project(&ring3d).unwrap();
    let vertices = unproject(&projected, &basis);
    let last = count as u32 - 1;
    let triangles: Vec<[u32; 3]> = (1..last).map(|i| [0, i, i + 1]).collect();
    let mesh = TriangleMesh::new(vertices, triangles, vec![DVec2::ZERO; count]);

    assert!(mesh.validate());
    assert_eq!(mesh.index_format(), IndexFormat::U32);
    let IndexBuffer::U32(indices) = mesh.index_buffer() else {
        unreachable!("70000 vertices need 32-bit indices");
    };
    assert_eq!(indices.len(), (count - 2) * 3);
    assert_eq!(indices.iter().max(), Some(&last));
}

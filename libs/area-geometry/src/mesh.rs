//! # Triangle Mesh
//!
//! Renderable surface assembled from a ring's original 3D points, the
//! triangulator's index triples and one UV per vertex.

use config::constants::MAX_U16_INDEXED_VERTICES;
use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};

// =============================================================================
// INDEX FORMAT
// =============================================================================

/// Width of the GPU index buffer a mesh needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IndexFormat {
    /// 16-bit indices; enough for up to 65535 vertices
    U16,
    /// 32-bit indices
    U32,
}

impl IndexFormat {
    /// Smallest format able to address `vertex_count` vertices.
    pub fn for_vertex_count(vertex_count: usize) -> Self {
        if vertex_count > MAX_U16_INDEXED_VERTICES {
            Self::U32
        } else {
            Self::U16
        }
    }
}

/// Flattened triangle indices in the width chosen by [`IndexFormat`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum IndexBuffer {
    /// 16-bit indices
    U16(Vec<u16>),
    /// 32-bit indices
    U32(Vec<u32>),
}

impl IndexBuffer {
    /// Returns the index width.
    pub fn format(&self) -> IndexFormat {
        match self {
            Self::U16(_) => IndexFormat::U16,
            Self::U32(_) => IndexFormat::U32,
        }
    }

    /// Returns the number of indices (three per triangle).
    pub fn len(&self) -> usize {
        match self {
            Self::U16(indices) => indices.len(),
            Self::U32(indices) => indices.len(),
        }
    }

    /// Returns true if the buffer holds no indices.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// =============================================================================
// TRIANGLE MESH
// =============================================================================

/// A triangle mesh over the caller's original vertex order.
///
/// Every triangle index is below [`TriangleMesh::vertex_count`] and there is
/// exactly one UV per vertex. Geometry stays `f64`; the `*_f32` exports are
/// for GPU upload.
///
/// # Example
///
/// ```rust
/// use area_geometry::mesh::{IndexFormat, TriangleMesh};
/// use glam::{DVec2, DVec3};
///
/// let mesh = TriangleMesh::new(
///     vec![DVec3::ZERO, DVec3::X, DVec3::Z],
///     vec![[0, 1, 2]],
///     vec![DVec2::ZERO, DVec2::X, DVec2::Y],
/// );
/// assert!(mesh.validate());
/// assert_eq!(mesh.index_format(), IndexFormat::U16);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TriangleMesh {
    /// Vertex positions, in the caller's ring order
    vertices: Vec<DVec3>,
    /// Index triples into `vertices`
    triangles: Vec<[u32; 3]>,
    /// Planar texture coordinates, one per vertex
    uvs: Vec<DVec2>,
    /// Optional per-vertex normals
    normals: Option<Vec<DVec3>>,
}

impl TriangleMesh {
    /// Creates a mesh from its parts.
    pub fn new(vertices: Vec<DVec3>, triangles: Vec<[u32; 3]>, uvs: Vec<DVec2>) -> Self {
        Self {
            vertices,
            triangles,
            uvs,
            normals: None,
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns true if the mesh has no triangles.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Returns the vertex positions.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns the triangles.
    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Returns the UVs.
    #[inline]
    pub fn uvs(&self) -> &[DVec2] {
        &self.uvs
    }

    /// Returns the vertex normals, if computed.
    pub fn normals(&self) -> Option<&[DVec3]> {
        self.normals.as_deref()
    }

    /// Index width needed to address every vertex.
    pub fn index_format(&self) -> IndexFormat {
        IndexFormat::for_vertex_count(self.vertices.len())
    }

    /// Flattened triangle indices in [`TriangleMesh::index_format`] width.
    ///
    /// Never truncates: an index that does not fit 16 bits promotes the
    /// whole buffer to 32 bits.
    pub fn index_buffer(&self) -> IndexBuffer {
        let wide = self.indices_u32();
        if self.index_format() == IndexFormat::U16 {
            let narrow: Result<Vec<u16>, _> = wide.iter().map(|&i| u16::try_from(i)).collect();
            if let Ok(narrow) = narrow {
                return IndexBuffer::U16(narrow);
            }
        }
        IndexBuffer::U32(wide)
    }

    /// Flattened `[i0, i1, i2, i0, i1, i2, ...]` indices.
    pub fn indices_u32(&self) -> Vec<u32> {
        self.triangles.iter().flatten().copied().collect()
    }

    /// Computes area-weighted per-vertex normals from the triangles.
    ///
    /// Vertices touched by no triangle get a zero normal.
    pub fn compute_normals(&mut self) {
        let mut normals = vec![DVec3::ZERO; self.vertices.len()];

        for tri in &self.triangles {
            let [Some(&v0), Some(&v1), Some(&v2)] = tri.map(|i| self.vertices.get(i as usize)) else {
                continue;
            };
            let normal = (v1 - v0).cross(v2 - v0);
            for &i in tri {
                normals[i as usize] += normal;
            }
        }

        for normal in &mut normals {
            *normal = normal.normalize_or_zero();
        }

        self.normals = Some(normals);
    }

    /// Computes the axis-aligned bounding box as `(min, max)`.
    ///
    /// An empty mesh yields `(ZERO, ZERO)`.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        let Some((&first, rest)) = self.vertices.split_first() else {
            return (DVec3::ZERO, DVec3::ZERO);
        };

        rest.iter()
            .fold((first, first), |(min, max), &v| (min.min(v), max.max(v)))
    }

    /// Checks the mesh invariants.
    ///
    /// - every triangle index is in range
    /// - no triangle repeats an index
    /// - one UV per vertex
    /// - one normal per vertex, when normals are present
    pub fn validate(&self) -> bool {
        let vertex_count = self.vertices.len();

        let triangles_ok = self.triangles.iter().all(|tri| {
            tri.iter().all(|&i| (i as usize) < vertex_count)
                && tri[0] != tri[1]
                && tri[1] != tri[2]
                && tri[0] != tri[2]
        });

        let normals_ok = self
            .normals
            .as_ref()
            .map_or(true, |normals| normals.len() == vertex_count);

        triangles_ok && normals_ok && self.uvs.len() == vertex_count
    }

    /// Exports vertices as a flattened `[x, y, z, ...]` f32 array.
    pub fn vertices_f32(&self) -> Vec<f32> {
        self.vertices
            .iter()
            .flat_map(|v| [v.x as f32, v.y as f32, v.z as f32])
            .collect()
    }

    /// Exports UVs as a flattened `[u, v, ...]` f32 array.
    pub fn uvs_f32(&self) -> Vec<f32> {
        self.uvs
            .iter()
            .flat_map(|uv| [uv.x as f32, uv.y as f32])
            .collect()
    }

    /// Exports normals as a flattened f32 array.
    pub fn normals_f32(&self) -> Option<Vec<f32>> {
        self.normals.as_ref().map(|normals| {
            normals
                .iter()
                .flat_map(|n| [n.x as f32, n.y as f32, n.z as f32])
                .collect()
        })
    }
}

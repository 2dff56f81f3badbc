//! # Configuration Constants
//!
//! Centralized constants for the area geometry kernel. All plane-fitting,
//! triangulation and clipping tolerances are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Point identity tolerances
//! - **Plane Fitting**: Newell normal and basis selection thresholds
//! - **Triangulation**: Ear test and UV tolerances
//! - **Clipping**: Centroid and line intersection tolerances
//! - **Limits**: Index width boundaries

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Distance under which the last point of a ring is treated as a copy of the
/// first point and stripped.
///
/// # Example
///
/// ```rust
/// use config::constants::CLOSING_DUPLICATE_EPSILON;
///
/// let gap: f64 = 1e-12;
/// assert!(gap < CLOSING_DUPLICATE_EPSILON);
/// ```
pub const CLOSING_DUPLICATE_EPSILON: f64 = 1e-9;

/// Distance under which two ring vertices count as the same position.
///
/// The ear test ignores vertices that coincide with a corner of the
/// candidate ear, so rings that touch themselves at a vertex still clip.
pub const COINCIDENT_VERTEX_EPSILON: f64 = 1e-9;

// =============================================================================
// PLANE FITTING CONSTANTS
// =============================================================================

/// Minimum squared length of an accumulated Newell normal.
///
/// Below this the ring is collinear or has zero area and no plane exists.
///
/// # Example
///
/// ```rust
/// use config::constants::NORMAL_LENGTH_SQ_EPSILON;
///
/// let collinear_normal_sq = 0.0;
/// assert!(collinear_normal_sq < NORMAL_LENGTH_SQ_EPSILON);
/// ```
pub const NORMAL_LENGTH_SQ_EPSILON: f64 = 1e-10;

/// Absolute dot product above which the preferred basis axis counts as
/// parallel to the plane normal, forcing the fallback axis.
pub const BASIS_PARALLEL_THRESHOLD: f64 = 0.9;

/// Preferred in-plane reference axis ("right").
pub const WORLD_RIGHT: [f64; 3] = [1.0, 0.0, 0.0];

/// Fallback in-plane reference axis ("up"), used when the plane normal is
/// nearly parallel to [`WORLD_RIGHT`].
pub const WORLD_UP: [f64; 3] = [0.0, 1.0, 0.0];

// =============================================================================
// TRIANGULATION CONSTANTS
// =============================================================================

/// Minimum turn cross product for a vertex to count as convex.
///
/// Collinear and reflex vertices fall at or below this value and are never
/// clipped as ears.
pub const CONVEX_EPSILON: f64 = 1e-10;

/// Barycentric tolerance of the point-in-triangle test.
///
/// The test is inclusive: a point within this tolerance of an edge is
/// reported as inside.
pub const POINT_IN_TRIANGLE_EPSILON: f64 = 1e-9;

/// Lower bound on the bounding-box extent used as the UV divisor.
///
/// # Example
///
/// ```rust
/// use config::constants::UV_EXTENT_EPSILON;
///
/// let extent: f64 = 0.0;
/// assert!(extent.max(UV_EXTENT_EPSILON) > 0.0);
/// ```
pub const UV_EXTENT_EPSILON: f64 = 1e-9;

/// Absolute shoelace area under which a polygon is rejected as degenerate
/// before triangulation.
pub const DEGENERATE_AREA_EPSILON: f64 = 1e-12;

// =============================================================================
// CLIPPING CONSTANTS
// =============================================================================

/// Absolute area under which the centroid falls back to the vertex mean.
pub const CENTROID_AREA_EPSILON: f64 = 1e-6;

/// Absolute direction cross product under which two segments are treated
/// as parallel and produce no intersection point.
pub const PARALLEL_EPSILON: f64 = 1e-8;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Largest vertex count that can be addressed with 16-bit indices.
///
/// Meshes with more vertices must be exported with 32-bit indices.
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_U16_INDEXED_VERTICES;
///
/// assert_eq!(MAX_U16_INDEXED_VERTICES, u16::MAX as usize);
/// ```
pub const MAX_U16_INDEXED_VERTICES: usize = 65_535;

/// Largest vertex count a single ring may have.
///
/// Triangle indices are stored as `u32`.
pub const MAX_RING_VERTICES: usize = u32::MAX as usize;

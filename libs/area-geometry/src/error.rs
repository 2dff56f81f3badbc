//! # Geometry Errors
//!
//! Error types for the area geometry kernel.
//!
//! Every failure is recoverable at the call site: a caller processing many
//! features skips the offending one and continues. An empty intersection is
//! not an error and has no variant here.

use thiserror::Error;

/// Errors that can occur while fitting, triangulating or clipping a ring.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// Too few points, collinear points, or near-zero area/normal.
    #[error("Degenerate geometry: {message}")]
    DegenerateGeometry {
        /// What made the input degenerate
        message: String,
    },

    /// No valid ear was found during a full scan of the active vertices.
    #[error("Triangulation failed with {remaining} vertices left: {message}")]
    TriangulationFailed {
        /// Why the ear search stopped
        message: String,
        /// Active vertex count when the scan failed
        remaining: usize,
    },

    /// Ring is too large to be indexed.
    #[error("Too many vertices: {count} (max: {max})")]
    TooManyVertices {
        /// Vertex count of the offending ring
        count: usize,
        /// Largest supported vertex count
        max: usize,
    },
}

impl GeometryError {
    /// Creates a degenerate geometry error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateGeometry {
            message: message.into(),
        }
    }

    /// Creates a triangulation failure error.
    pub fn triangulation_failed(message: impl Into<String>, remaining: usize) -> Self {
        Self::TriangulationFailed {
            message: message.into(),
            remaining,
        }
    }
}

/// Result type alias for kernel operations.
pub type GeometryResult<T> = Result<T, GeometryError>;

// =============================================================================
// TESTS
// =============================================================================

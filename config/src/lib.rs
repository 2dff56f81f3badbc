//! # Config Crate
//!
//! Centralized numeric policy for the area geometry kernel.
//! Every epsilon and threshold used by plane fitting, triangulation and
//! clipping is defined here so the kernel crates never scatter literals.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{CENTROID_AREA_EPSILON, DEGENERATE_AREA_EPSILON};
//!
//! // Centroid falls back to the vertex mean below this area
//! let area: f64 = 1e-8;
//! assert!(area.abs() < CENTROID_AREA_EPSILON);
//!
//! // ...while the triangulator still accepts the polygon
//! assert!(area.abs() > DEGENERATE_AREA_EPSILON);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Fixed Policy**: Tolerances are compile-time constants, not runtime knobs
//! - **Frame Agnostic**: No value assumes world or local coordinates

pub mod constants;

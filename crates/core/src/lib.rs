//! # arsizer Core
//!
//! Shared geometry and error types for the arsizer surface sizing engine.
//!
//! This crate provides the pieces used by both the placement pipeline
//! (`arsizer-layout`) and the panel recommendation pipeline
//! (`arsizer-solar`).
//!
//! ## Core Components
//!
//! - **Polygon measures**: [`polygon::area`], [`polygon::signed_area`], [`polygon::perimeter`]
//! - **Counting helpers**: [`numeric::floor_count`], [`numeric::square_side`]
//! - **Boundary type**: [`BoundaryPolygon`] - a detected surface outline
//! - **Errors**: [`enum@Error`], [`Result`]
//!
//! ## Example
//!
//! ```rust
//! use arsizer_core::BoundaryPolygon;
//!
//! // Interleaved (x, z) buffer as handed out by a plane tracker
//! let plane = BoundaryPolygon::from_interleaved(&[0.0, 0.0, 1.5, 0.0, 1.5, 1.0, 0.0, 1.0]);
//! assert!((plane.area() - 1.5).abs() < 1e-9);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod boundary;
pub mod error;
pub mod numeric;
pub mod polygon;

// Re-exports
pub use boundary::BoundaryPolygon;
pub use error::{Error, Result};

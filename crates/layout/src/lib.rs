//! # arsizer Layout
//!
//! Placement of fixed-footprint items on a detected flat surface.
//!
//! The pipeline is `polygon → area → packing → grid positions`: the tracked
//! boundary is measured, the area is divided into footprint cells, and the
//! largest square grid that fits is laid out as offsets from the placement
//! anchor.
//!
//! ## Quick Start
//!
//! ```rust
//! use arsizer_layout::{BoundaryPolygon, FootprintSpec, GridPacker};
//! use nalgebra::Isometry3;
//!
//! // A 1.2m x 0.9m table top
//! let surface = BoundaryPolygon::rectangle(1.2, 0.9);
//!
//! let packer = GridPacker::new(FootprintSpec::default()).with_hard_cap(16);
//! let layout = packer.pack_boundary(&surface).unwrap();
//!
//! assert_eq!(layout.count(), 9);
//! let positions = layout.world_positions(&Isometry3::identity());
//! assert_eq!(positions.len(), 9);
//! ```

pub mod footprint;
pub mod packer;
pub mod result;

// Re-exports
pub use arsizer_core::{BoundaryPolygon, Error, Result};
pub use footprint::FootprintSpec;
pub use packer::{capacity_by_area, pack, pack_polygon, GridPacker, MAX_GRID_ITEMS};
pub use result::GridLayout;

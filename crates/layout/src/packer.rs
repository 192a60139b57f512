//! Square grid packer.
//!
//! The packer always produces a square `side x side` grid, even when a
//! rectangular arrangement would use more of the area (6 cells give a 2x2
//! grid, not 2x3). The discarded capacity is reported through
//! [`GridLayout::unused_capacity`].

use arsizer_core::numeric::{floor_count, square_side};
use arsizer_core::{BoundaryPolygon, Result};

use crate::footprint::FootprintSpec;
use crate::result::GridLayout;

/// Largest number of items one layout may hold (a 1000x1000 grid).
///
/// Larger requests are clamped so offsets stay allocatable.
pub const MAX_GRID_ITEMS: usize = 1_000_000;

/// Number of footprint cells the area admits: `floor(area / cell_size²)`.
///
/// Non-positive or non-finite areas admit nothing.
pub fn capacity_by_area(area: f64, footprint: &FootprintSpec) -> usize {
    floor_count(area / footprint.cell_area())
}

/// Lays out as many items as fit on `area` in a square grid.
///
/// `hard_cap` further limits the count before the square rule is applied,
/// and no layout exceeds [`MAX_GRID_ITEMS`]. An empty layout (nothing fits,
/// or a cap of zero) is a valid result.
///
/// # Errors
///
/// Returns [`arsizer_core::Error::InvalidFootprint`] if the footprint sizes
/// are not positive.
///
/// # Example
///
/// ```rust
/// use arsizer_layout::{pack, FootprintSpec};
///
/// let layout = pack(0.09, &FootprintSpec::default(), None).unwrap();
/// assert_eq!(layout.count(), 1);
/// assert_eq!(layout.offsets(), &[(0.0, 0.0)]);
/// ```
pub fn pack(area: f64, footprint: &FootprintSpec, hard_cap: Option<usize>) -> Result<GridLayout> {
    footprint.validate()?;

    let max_by_area = capacity_by_area(area, footprint);
    let mut requested = match hard_cap {
        Some(cap) => max_by_area.min(cap),
        None => max_by_area,
    };
    if requested > MAX_GRID_ITEMS {
        log::warn!(
            "area admits {} items; clamping layout to {}",
            requested,
            MAX_GRID_ITEMS
        );
        requested = MAX_GRID_ITEMS;
    }
    let side = square_side(requested);
    let layout = GridLayout::square(side, footprint.cell_size(), max_by_area);

    log::debug!(
        "packed {} of {} cells ({}x{}, cap {:?}, area {:.3})",
        layout.count(),
        max_by_area,
        side,
        side,
        hard_cap,
        area
    );

    Ok(layout)
}

/// Measures a boundary polygon and packs its area.
pub fn pack_polygon(
    points: &[(f64, f64)],
    footprint: &FootprintSpec,
    hard_cap: Option<usize>,
) -> Result<GridLayout> {
    pack(arsizer_core::polygon::area(points), footprint, hard_cap)
}

/// A packer bound to one footprint and an optional hard cap.
#[derive(Debug, Clone, Default)]
pub struct GridPacker {
    footprint: FootprintSpec,
    hard_cap: Option<usize>,
}

impl GridPacker {
    /// Creates a packer for the given footprint.
    pub fn new(footprint: FootprintSpec) -> Self {
        Self {
            footprint,
            hard_cap: None,
        }
    }

    /// Limits the number of placed items.
    pub fn with_hard_cap(mut self, cap: usize) -> Self {
        self.hard_cap = Some(cap);
        self
    }

    /// Returns the footprint.
    pub fn footprint(&self) -> &FootprintSpec {
        &self.footprint
    }

    /// Returns the hard cap, if any.
    pub fn hard_cap(&self) -> Option<usize> {
        self.hard_cap
    }

    /// Packs a known area.
    pub fn pack(&self, area: f64) -> Result<GridLayout> {
        pack(area, &self.footprint, self.hard_cap)
    }

    /// Packs the area enclosed by a tracked boundary.
    pub fn pack_boundary(&self, boundary: &BoundaryPolygon) -> Result<GridLayout> {
        pack(boundary.area(), &self.footprint, self.hard_cap)
    }
}

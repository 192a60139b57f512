//! Grid layout result representation.

use nalgebra::{Isometry3, Point3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A square grid of item offsets relative to the placement anchor.
///
/// `count == rows * cols` and `rows == cols` always hold. Offsets are in
/// row-major order and measured from the anchor, not from the surface
/// centroid.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GridLayout {
    count: usize,
    rows: usize,
    cols: usize,
    cell_size: f64,
    capacity_by_area: usize,
    offsets: Vec<(f64, f64)>,
}

impl GridLayout {
    /// Builds a `side x side` grid with the given pitch.
    pub(crate) fn square(side: usize, cell_size: f64, capacity_by_area: usize) -> Self {
        let mut offsets = Vec::with_capacity(side * side);
        for r in 0..side {
            for c in 0..side {
                offsets.push((r as f64 * cell_size, c as f64 * cell_size));
            }
        }
        Self {
            count: side * side,
            rows: side,
            cols: side,
            cell_size,
            capacity_by_area,
            offsets,
        }
    }

    /// Number of placed items.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Number of grid rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of grid columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Grid pitch used for the offsets.
    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    /// Items the area alone would admit, before the hard cap and the square rule.
    pub fn capacity_by_area(&self) -> usize {
        self.capacity_by_area
    }

    /// Area-implied capacity lost to the cap and the square-grid rule.
    ///
    /// A 6-cell surface only yields a 2x2 grid, so this reports 2.
    pub fn unused_capacity(&self) -> usize {
        self.capacity_by_area.saturating_sub(self.count)
    }

    /// Offsets `(x, z)` relative to the anchor, row-major.
    pub fn offsets(&self) -> &[(f64, f64)] {
        &self.offsets
    }

    /// Offset of the item at grid index `(row, col)`.
    pub fn offset_at(&self, row: usize, col: usize) -> Option<(f64, f64)> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.offsets.get(row * self.cols + col).copied()
    }

    /// Returns true if nothing fits.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Offsets lifted into the anchor's local frame as `(x, 0, z)` points.
    pub fn local_positions(&self) -> Vec<Point3<f64>> {
        self.offsets
            .iter()
            .map(|&(x, z)| Point3::new(x, 0.0, z))
            .collect()
    }

    /// Offsets transformed by the anchor pose into world positions.
    ///
    /// The renderer parents one object to the anchor per returned point.
    pub fn world_positions(&self, anchor: &Isometry3<f64>) -> Vec<Point3<f64>> {
        self.offsets
            .iter()
            .map(|&(x, z)| anchor.transform_point(&Point3::new(x, 0.0, z)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::{Translation3, UnitQuaternion, Vector3};

    #[test]
    fn test_square_grid() {
        let layout = GridLayout::square(3, 0.5, 10);
        assert_eq!(layout.count(), 9);
        assert_eq!(layout.rows(), 3);
        assert_eq!(layout.cols(), 3);
        assert_eq!(layout.unused_capacity(), 1);
        assert_eq!(layout.offsets()[0], (0.0, 0.0));
        assert_eq!(layout.offsets()[1], (0.0, 0.5));
        assert_eq!(layout.offsets()[3], (0.5, 0.0));
        assert_eq!(layout.offset_at(2, 2), Some((1.0, 1.0)));
        assert_eq!(layout.offset_at(3, 0), None);
    }

    #[test]
    fn test_empty_grid() {
        let layout = GridLayout::square(0, 0.3, 0);
        assert!(layout.is_empty());
        assert!(layout.offsets().is_empty());
        assert!(layout.local_positions().is_empty());
    }

    #[test]
    fn test_world_positions_follow_anchor() {
        let layout = GridLayout::square(2, 1.0, 4);
        let anchor = Isometry3::from_parts(
            Translation3::new(10.0, 2.0, -3.0),
            UnitQuaternion::from_axis_angle(&Vector3::y_axis(), std::f64::consts::FRAC_PI_2),
        );
        let world = layout.world_positions(&anchor);
        assert_eq!(world.len(), 4);

        // Origin offset lands on the anchor itself.
        assert_relative_eq!(world[0], Point3::new(10.0, 2.0, -3.0), epsilon = 1e-12);
        // Local +z rotated a quarter turn about y becomes world +x.
        assert_relative_eq!(world[1], Point3::new(11.0, 2.0, -3.0), epsilon = 1e-12);
        for p in &world {
            assert_relative_eq!(p.y, 2.0, epsilon = 1e-12);
        }
    }
}

//! Boundary polygon of a detected flat surface.

use crate::polygon;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An ordered boundary of a detected surface in surface-local `(x, z)` coordinates.
///
/// Produced fresh per tracking update; the engine only reads it.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct BoundaryPolygon {
    points: Vec<(f64, f64)>,
}

impl BoundaryPolygon {
    /// Creates a boundary from `(x, z)` points.
    pub fn new(points: Vec<(f64, f64)>) -> Self {
        Self { points }
    }

    /// Creates a boundary from an interleaved `[x0, z0, x1, z1, ...]` buffer.
    ///
    /// Plane trackers hand out their polygon in this layout. A trailing
    /// unpaired value is ignored.
    pub fn from_interleaved(buffer: &[f32]) -> Self {
        let points = buffer
            .chunks_exact(2)
            .map(|pair| (f64::from(pair[0]), f64::from(pair[1])))
            .collect();
        Self { points }
    }

    /// Creates an axis-aligned rectangular boundary anchored at the origin.
    pub fn rectangle(width: f64, depth: f64) -> Self {
        Self::new(vec![(0.0, 0.0), (width, 0.0), (width, depth), (0.0, depth)])
    }

    /// Returns the boundary points.
    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    /// Returns the number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the boundary has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns true if the boundary has fewer than 3 points.
    pub fn is_degenerate(&self) -> bool {
        self.points.len() < 3
    }

    /// Unsigned enclosed area; zero for degenerate boundaries.
    pub fn area(&self) -> f64 {
        polygon::area(&self.points)
    }

    /// Signed area (positive for counter-clockwise order).
    pub fn signed_area(&self) -> f64 {
        polygon::signed_area(&self.points)
    }

    /// Perimeter of the closed boundary.
    pub fn perimeter(&self) -> f64 {
        polygon::perimeter(&self.points)
    }
}

impl From<Vec<(f64, f64)>> for BoundaryPolygon {
    fn from(points: Vec<(f64, f64)>) -> Self {
        Self::new(points)
    }
}

impl From<Vec<[f64; 2]>> for BoundaryPolygon {
    fn from(points: Vec<[f64; 2]>) -> Self {
        Self::new(points.into_iter().map(|[x, z]| (x, z)).collect())
    }
}

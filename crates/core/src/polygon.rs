//! Planar polygon measures over `(x, z)` surface-local points.
//!
//! Tracked surfaces are not guaranteed to be simple or convex. These
//! functions stay deterministic on any input and never panic: for a
//! self-intersecting ring the shoelace sum is still returned, even though
//! it no longer equals the enclosed area.

/// Twice the signed area of a closed ring (shoelace sum with wraparound).
fn shoelace_sum(points: &[(f64, f64)]) -> f64 {
    let n = points.len();
    let mut sum = 0.0;
    for i in 0..n {
        let (x1, z1) = points[i];
        let (x2, z2) = points[(i + 1) % n];
        sum += x1 * z2 - x2 * z1;
    }
    sum
}

/// Computes the signed area of a polygon.
///
/// Positive for counter-clockwise vertex order, negative for clockwise.
/// Returns exactly `0.0` when fewer than 3 points are given.
pub fn signed_area(points: &[(f64, f64)]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    shoelace_sum(points) / 2.0
}

/// Computes the unsigned area of a polygon with the shoelace formula.
///
/// Fewer than 3 points is a degenerate boundary and yields exactly `0.0`.
/// Collinear and duplicate points contribute nothing to the sum.
///
/// # Example
///
/// ```rust
/// use arsizer_core::polygon::area;
///
/// let square = [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)];
/// assert_eq!(area(&square), 1.0);
/// assert_eq!(area(&square[..2]), 0.0);
/// ```
pub fn area(points: &[(f64, f64)]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    shoelace_sum(points).abs() / 2.0
}

/// Computes the perimeter of the closed ring through `points`.
pub fn perimeter(points: &[(f64, f64)]) -> f64 {
    let n = points.len();
    if n < 2 {
        return 0.0;
    }
    let mut total = 0.0;
    for i in 0..n {
        let (x1, z1) = points[i];
        let (x2, z2) = points[(i + 1) % n];
        total += (x2 - x1).hypot(z2 - z1);
    }
    total
}

//! Numeric helpers for turning continuous capacities into item counts.

/// Tolerance used when snapping a ratio onto the nearest whole count.
pub const COUNT_EPSILON: f64 = 1e-9;

/// Rounds a non-negative ratio down to a whole count.
///
/// Ratios within [`COUNT_EPSILON`] of an integer snap to that integer, so
/// `0.09 / (0.2 + 0.1)^2` counts as one cell even though the floating-point
/// quotient lands just below `1.0`. NaN and non-positive ratios give 0;
/// `+inf` and ratios beyond `usize::MAX` saturate to `usize::MAX`.
///
/// ```rust
/// use arsizer_core::numeric::floor_count;
///
/// assert_eq!(floor_count(0.09 / ((0.2 + 0.1) * (0.2 + 0.1))), 1);
/// assert_eq!(floor_count(2.7), 2);
/// assert_eq!(floor_count(-1.0), 0);
/// ```
pub fn floor_count(ratio: f64) -> usize {
    if ratio.is_nan() || ratio <= 0.0 {
        return 0;
    }
    if ratio.is_infinite() {
        return usize::MAX;
    }
    let nearest = ratio.round();
    let snapped = if (ratio - nearest).abs() <= COUNT_EPSILON * nearest.max(1.0) {
        nearest
    } else {
        ratio.floor()
    };
    snapped as usize
}

/// Largest `side` with `side * side <= n`.
pub fn square_side(n: usize) -> usize {
    let target = n as u128;
    let mut side = (n as f64).sqrt() as u128;
    while side > 0 && side * side > target {
        side -= 1;
    }
    while (side + 1) * (side + 1) <= target {
        side += 1;
    }
    side as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floor_count() {
        assert_eq!(floor_count(0.0), 0);
        assert_eq!(floor_count(0.999), 0);
        assert_eq!(floor_count(1.0), 1);
        assert_eq!(floor_count(3.999_999_999_99), 4);
        assert_eq!(floor_count(7.5), 7);
        assert_eq!(floor_count(f64::NAN), 0);
        assert_eq!(floor_count(f64::NEG_INFINITY), 0);
    }

    #[test]
    fn test_floor_count_saturates() {
        assert_eq!(floor_count(f64::INFINITY), usize::MAX);
        assert_eq!(floor_count(1e300), usize::MAX);
    }

    #[test]
    fn test_square_side() {
        assert_eq!(square_side(0), 0);
        assert_eq!(square_side(1), 1);
        assert_eq!(square_side(3), 1);
        assert_eq!(square_side(4), 2);
        assert_eq!(square_side(6), 2);
        assert_eq!(square_side(99), 9);
        assert_eq!(square_side(100), 10);
        assert_eq!(square_side(usize::MAX), 4_294_967_295);
    }
}

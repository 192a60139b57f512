//! Footprint of a placed item.

use arsizer_core::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Square footprint one placed item occupies, plus its spacing margin.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FootprintSpec {
    /// Edge length of the item itself.
    pub item_size: f64,

    /// Gap kept between neighbouring items.
    pub spacing: f64,
}

impl Default for FootprintSpec {
    /// A 0.2 m item with 0.1 m spacing.
    fn default() -> Self {
        Self {
            item_size: 0.2,
            spacing: 0.1,
        }
    }
}

impl FootprintSpec {
    /// Creates a validated footprint.
    pub fn new(item_size: f64, spacing: f64) -> Result<Self> {
        let footprint = Self { item_size, spacing };
        footprint.validate()?;
        Ok(footprint)
    }

    /// Grid pitch: item size plus spacing.
    pub fn cell_size(&self) -> f64 {
        self.item_size + self.spacing
    }

    /// Area of one grid cell.
    pub fn cell_area(&self) -> f64 {
        let cell = self.cell_size();
        cell * cell
    }

    /// Checks that both sizes are positive and finite.
    pub fn validate(&self) -> Result<()> {
        if !self.item_size.is_finite() || self.item_size <= 0.0 {
            return Err(Error::InvalidFootprint(format!(
                "item size must be positive, got {}",
                self.item_size
            )));
        }
        if !self.spacing.is_finite() || self.spacing <= 0.0 {
            return Err(Error::InvalidFootprint(format!(
                "spacing must be positive, got {}",
                self.spacing
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_footprint() {
        let fp = FootprintSpec::default();
        assert_relative_eq!(fp.cell_size(), 0.3, epsilon = 1e-12);
        assert_relative_eq!(fp.cell_area(), 0.09, epsilon = 1e-12);
        assert!(fp.validate().is_ok());
    }

    #[test]
    fn test_validation() {
        assert!(FootprintSpec::new(0.5, 0.1).is_ok());
        assert!(FootprintSpec::new(0.0, 0.1).is_err());
        assert!(FootprintSpec::new(0.5, 0.0).is_err());
        assert!(FootprintSpec::new(-1.0, 0.1).is_err());
        assert!(matches!(
            FootprintSpec::new(f64::NAN, 0.1),
            Err(Error::InvalidFootprint(_))
        ));
    }
}

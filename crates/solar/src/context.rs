//! Sizing context gathered from the user and the environment.

use arsizer_core::{Error, Result};
use serde::{Deserialize, Serialize};

use crate::config::TemperatureDerating;

/// Days used to turn a monthly demand into a daily one.
pub const DAYS_PER_MONTH: f64 = 30.0;

/// Ambient temperature assumed when no reading is available (°C).
pub const DEFAULT_TEMPERATURE_C: f64 = 25.0;

/// Inputs of one recommendation request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SizingContext {
    /// Total roof area in square meters.
    pub roof_area: f64,

    /// Fraction of the roof the user dedicates to panels (0.0 - 1.0).
    pub usable_fraction: f64,

    /// Spending limit.
    pub budget: f64,

    /// Monthly energy demand in kWh.
    pub monthly_demand_kwh: f64,

    /// Ambient temperature in °C.
    #[serde(default = "default_temperature")]
    pub temperature_c: f64,
}

fn default_temperature() -> f64 {
    DEFAULT_TEMPERATURE_C
}

impl SizingContext {
    /// Creates a context at the default temperature.
    pub fn new(roof_area: f64, usable_fraction: f64, budget: f64, monthly_demand_kwh: f64) -> Self {
        Self {
            roof_area,
            usable_fraction,
            budget,
            monthly_demand_kwh,
            temperature_c: DEFAULT_TEMPERATURE_C,
        }
    }

    /// Creates a context for a rectangular roof of `length x width` meters.
    pub fn from_dimensions(
        length: f64,
        width: f64,
        usable_fraction: f64,
        budget: f64,
        monthly_demand_kwh: f64,
    ) -> Self {
        Self::new(length * width, usable_fraction, budget, monthly_demand_kwh)
    }

    /// Sets the ambient temperature; `None` falls back to 25 °C.
    pub fn with_temperature(mut self, temperature_c: Option<f64>) -> Self {
        self.temperature_c = temperature_c.unwrap_or(DEFAULT_TEMPERATURE_C);
        self
    }

    /// Area available for panels.
    pub fn usable_area(&self) -> f64 {
        self.roof_area * self.usable_fraction
    }

    /// Demand per day in kWh.
    pub fn daily_demand_kwh(&self) -> f64 {
        self.monthly_demand_kwh / DAYS_PER_MONTH
    }

    /// Temperature factor under the default derating.
    pub fn temperature_factor(&self) -> f64 {
        TemperatureDerating::default().factor(self.temperature_c)
    }

    /// Checks the input ranges the optimizer depends on.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidInput`] for a non-positive roof area or demand, a
    /// usable fraction outside `[0, 1]`, or a negative budget.
    pub fn validate(&self) -> Result<()> {
        if !self.roof_area.is_finite() || self.roof_area <= 0.0 {
            return Err(Error::invalid_input(format!(
                "roof area must be positive, got {}",
                self.roof_area
            )));
        }
        if !(0.0..=1.0).contains(&self.usable_fraction) {
            return Err(Error::invalid_input(format!(
                "usable fraction must be within [0, 1], got {}",
                self.usable_fraction
            )));
        }
        if !self.monthly_demand_kwh.is_finite() || self.monthly_demand_kwh <= 0.0 {
            return Err(Error::invalid_input(format!(
                "monthly demand must be positive, got {}",
                self.monthly_demand_kwh
            )));
        }
        if self.budget.is_nan() || self.budget < 0.0 {
            return Err(Error::invalid_input(format!(
                "budget must be non-negative, got {}",
                self.budget
            )));
        }
        Ok(())
    }
}

//! Configuration for output estimation and recommendation.

use std::path::Path;

use arsizer_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Site constants fed into the output estimator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimatorConfig {
    /// Peak sun hours, in kWh per square meter per day.
    pub irradiance_kwh_per_m2_day: f64,

    /// Fraction of output lost to wiring, inverter and soiling (0.0 - 1.0).
    pub system_loss_fraction: f64,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            irradiance_kwh_per_m2_day: 5.0,
            system_loss_fraction: 0.20,
        }
    }
}

impl EstimatorConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the daily irradiance.
    pub fn with_irradiance(mut self, kwh_per_m2_day: f64) -> Self {
        self.irradiance_kwh_per_m2_day = kwh_per_m2_day;
        self
    }

    /// Sets the system loss fraction.
    pub fn with_system_loss(mut self, fraction: f64) -> Self {
        self.system_loss_fraction = fraction.clamp(0.0, 1.0);
        self
    }
}

/// Linear efficiency derating above a reference temperature.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemperatureDerating {
    /// Temperature at which panels run at rated efficiency (°C).
    pub reference_c: f64,

    /// Efficiency lost per degree above the reference.
    pub coefficient_per_c: f64,

    /// Lowest factor the derating may produce.
    pub min_factor: f64,
}

impl Default for TemperatureDerating {
    fn default() -> Self {
        Self {
            reference_c: 25.0,
            coefficient_per_c: 0.005,
            min_factor: 0.5,
        }
    }
}

impl TemperatureDerating {
    /// Multiplicative factor for the given ambient temperature.
    ///
    /// `1.0` at or below the reference, `1 - k * (t - ref)` above it, never
    /// below `min_factor`. A non-finite reading is treated as missing data
    /// and yields `1.0`.
    pub fn factor(&self, temperature_c: f64) -> f64 {
        if !temperature_c.is_finite() || temperature_c <= self.reference_c {
            return 1.0;
        }
        let derated = 1.0 - self.coefficient_per_c * (temperature_c - self.reference_c);
        derated.max(self.min_factor)
    }
}

/// Percentages of the recommended count sampled for the output curve.
pub const DEFAULT_CURVE_PERCENTAGES: [f64; 7] = [0.0, 25.0, 50.0, 75.0, 100.0, 125.0, 150.0];

/// Full configuration of the recommendation optimizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SizingConfig {
    /// Estimator site constants.
    pub estimator: EstimatorConfig,

    /// Temperature derating.
    pub derating: TemperatureDerating,

    /// Utilization percentages for the output curve.
    pub curve_percentages: Vec<f64>,
}

impl Default for SizingConfig {
    fn default() -> Self {
        Self {
            estimator: EstimatorConfig::default(),
            derating: TemperatureDerating::default(),
            curve_percentages: DEFAULT_CURVE_PERCENTAGES.to_vec(),
        }
    }
}

impl SizingConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the estimator constants.
    pub fn with_estimator(mut self, estimator: EstimatorConfig) -> Self {
        self.estimator = estimator;
        self
    }

    /// Sets the temperature derating.
    pub fn with_derating(mut self, derating: TemperatureDerating) -> Self {
        self.derating = derating;
        self
    }

    /// Sets the output curve sample points.
    pub fn with_curve_percentages(mut self, percentages: Vec<f64>) -> Self {
        self.curve_percentages = percentages;
        self
    }

    /// Checks the ranges the estimator and the output curve rely on.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidInput`] for a system loss outside `[0, 1]`, a negative
    /// or non-finite irradiance, a derating with a negative coefficient or a
    /// floor outside `[0, 1]`, or a negative or non-finite curve percentage.
    pub fn validate(&self) -> Result<()> {
        let est = &self.estimator;
        if !(0.0..=1.0).contains(&est.system_loss_fraction) {
            return Err(Error::invalid_input(format!(
                "system loss must be within [0, 1], got {}",
                est.system_loss_fraction
            )));
        }
        if !est.irradiance_kwh_per_m2_day.is_finite() || est.irradiance_kwh_per_m2_day < 0.0 {
            return Err(Error::invalid_input(format!(
                "irradiance must be non-negative, got {}",
                est.irradiance_kwh_per_m2_day
            )));
        }

        let derating = &self.derating;
        if !derating.reference_c.is_finite() {
            return Err(Error::invalid_input("reference temperature must be finite"));
        }
        if !derating.coefficient_per_c.is_finite() || derating.coefficient_per_c < 0.0 {
            return Err(Error::invalid_input(format!(
                "derating coefficient must be non-negative, got {}",
                derating.coefficient_per_c
            )));
        }
        if !(0.0..=1.0).contains(&derating.min_factor) {
            return Err(Error::invalid_input(format!(
                "derating floor must be within [0, 1], got {}",
                derating.min_factor
            )));
        }

        if let Some(p) = self
            .curve_percentages
            .iter()
            .find(|p| !p.is_finite() || **p < 0.0)
        {
            return Err(Error::invalid_input(format!(
                "curve percentages must be non-negative, got {p}"
            )));
        }
        Ok(())
    }

    /// Parses and validates a configuration from TOML. Missing keys keep
    /// their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(|e| Error::ParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Parses and validates a configuration from JSON. Missing keys keep
    /// their defaults.
    pub fn from_json_str(content: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(content).map_err(|e| Error::ParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a configuration file, choosing the format by extension.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::from_toml_str(&content),
            Some("json") => Self::from_json_str(&content),
            other => Err(Error::ParseError(format!(
                "unsupported config format: {}",
                other.unwrap_or("<none>")
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_config() {
        let config = SizingConfig::default();
        assert_eq!(config.estimator.irradiance_kwh_per_m2_day, 5.0);
        assert_eq!(config.estimator.system_loss_fraction, 0.20);
        assert_eq!(config.derating.reference_c, 25.0);
        assert_eq!(config.curve_percentages.len(), 7);
        assert_eq!(config.curve_percentages[0], 0.0);
        assert_eq!(config.curve_percentages[6], 150.0);
    }

    #[test]
    fn test_builder() {
        let config = SizingConfig::new()
            .with_estimator(EstimatorConfig::new().with_irradiance(4.2).with_system_loss(1.5))
            .with_curve_percentages(vec![0.0, 100.0]);
        assert_eq!(config.estimator.irradiance_kwh_per_m2_day, 4.2);
        assert_eq!(config.estimator.system_loss_fraction, 1.0);
        assert_eq!(config.curve_percentages, vec![0.0, 100.0]);
    }

    #[test]
    fn test_temperature_factor() {
        let derating = TemperatureDerating::default();
        assert_eq!(derating.factor(25.0), 1.0);
        assert_eq!(derating.factor(10.0), 1.0);
        assert_relative_eq!(derating.factor(35.0), 0.95, epsilon = 1e-12);
        assert_eq!(derating.factor(f64::NAN), 1.0);
    }

    #[test]
    fn test_temperature_factor_floor() {
        let derating = TemperatureDerating::default();
        assert_eq!(derating.factor(500.0), 0.5);
    }

    #[test]
    fn test_partial_toml() {
        let config = SizingConfig::from_toml_str(
            r#"
            [estimator]
            irradiance_kwh_per_m2_day = 4.5
            "#,
        )
        .unwrap();
        assert_eq!(config.estimator.irradiance_kwh_per_m2_day, 4.5);
        assert_eq!(config.estimator.system_loss_fraction, 0.20);
        assert_eq!(config.curve_percentages, DEFAULT_CURVE_PERCENTAGES.to_vec());
    }

    #[test]
    fn test_out_of_range_files_are_rejected() {
        let err = SizingConfig::from_toml_str(
            r#"
            [estimator]
            system_loss_fraction = 1.5
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidInput(ref msg) if msg.contains("system loss")));

        assert!(SizingConfig::from_json_str(r#"{"derating": {"min_factor": -0.2}}"#).is_err());
        assert!(SizingConfig::from_toml_str("curve_percentages = [0.0, -25.0]").is_err());
        assert!(SizingConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json() {
        let config = SizingConfig::from_json_str(r#"{"derating": {"min_factor": 0.7}}"#).unwrap();
        assert_eq!(config.derating.min_factor, 0.7);
        assert_eq!(config.derating.coefficient_per_c, 0.005);
    }
}

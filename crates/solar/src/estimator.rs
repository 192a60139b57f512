//! Daily energy output of a single panel.

use crate::catalog::CatalogEntry;
use crate::config::EstimatorConfig;

/// Estimated daily output of one panel in kWh.
///
/// `power * efficiency * irradiance * (1 - loss) * temperature_factor / 1000`
///
/// ```rust
/// use arsizer_solar::{daily_output, CatalogEntry};
///
/// let panel = CatalogEntry::new("P-600", 600, 0.22, 2.6, 0.0);
/// let kwh = daily_output(&panel, 5.0, 0.2, 1.0);
/// assert!((kwh - 0.528).abs() < 1e-6);
/// ```
pub fn daily_output(
    entry: &CatalogEntry,
    irradiance_kwh_per_m2_day: f64,
    system_loss_fraction: f64,
    temperature_factor: f64,
) -> f64 {
    f64::from(entry.power_watts)
        * entry.efficiency
        * irradiance_kwh_per_m2_day
        * (1.0 - system_loss_fraction)
        * temperature_factor
        / 1000.0
}

impl EstimatorConfig {
    /// Daily output of one panel under these site constants.
    pub fn daily_output(&self, entry: &CatalogEntry, temperature_factor: f64) -> f64 {
        daily_output(
            entry,
            self.irradiance_kwh_per_m2_day,
            self.system_loss_fraction,
            temperature_factor,
        )
    }
}

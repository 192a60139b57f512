//! Catalog recommendation under area, budget and demand constraints.
//!
//! Entries are evaluated in catalog order. An entry only becomes the best
//! candidate if its output covers the daily demand and strictly exceeds the
//! current best, so the first of several equal entries wins.

use arsizer_core::numeric::floor_count;
use arsizer_core::Result;

use crate::catalog::CatalogEntry;
use crate::config::SizingConfig;
use crate::context::SizingContext;
use crate::result::{Candidate, OutputCurve, Recommendation, SkippedEntry};

/// Recommends a catalog entry using the default configuration.
///
/// # Errors
///
/// [`arsizer_core::Error::InvalidInput`] if the context fails
/// [`SizingContext::validate`]. Finding no viable entry is not an error.
pub fn recommend(catalog: &[CatalogEntry], ctx: &SizingContext) -> Result<Recommendation> {
    Recommender::default().recommend(catalog, ctx)
}

/// Recommends a catalog entry using the given configuration.
pub fn recommend_with_config(
    catalog: &[CatalogEntry],
    ctx: &SizingContext,
    config: &SizingConfig,
) -> Result<Recommendation> {
    Recommender::new(config.clone()).recommend(catalog, ctx)
}

/// Panels the budget pays for; `None` when unbounded.
///
/// A price so small that `budget / price` overflows is unbounded as well.
fn budget_capacity(budget: f64, price: f64) -> Option<usize> {
    if price <= 0.0 || budget.is_infinite() {
        return None;
    }
    let ratio = budget / price;
    if ratio.is_infinite() {
        None
    } else {
        Some(floor_count(ratio))
    }
}

/// Recommendation optimizer bound to one configuration.
#[derive(Debug, Clone, Default)]
pub struct Recommender {
    config: SizingConfig,
}

impl Recommender {
    /// Creates an optimizer with the given configuration.
    pub fn new(config: SizingConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &SizingConfig {
        &self.config
    }

    /// Evaluates one entry. Entries with an unusable footprint are rejected.
    fn evaluate(
        &self,
        entry: &CatalogEntry,
        ctx: &SizingContext,
        temperature_factor: f64,
        daily_demand: f64,
    ) -> std::result::Result<Candidate, String> {
        if !entry.unit_area.is_finite() || entry.unit_area <= 0.0 {
            return Err(format!("unit area must be positive, got {}", entry.unit_area));
        }
        if entry.price.is_nan() || entry.price < 0.0 {
            return Err(format!("price must be non-negative, got {}", entry.price));
        }

        let area_capacity = floor_count(ctx.usable_area() / entry.unit_area);
        let budget_capacity = budget_capacity(ctx.budget, entry.price);
        let count = budget_capacity.map_or(area_capacity, |b| area_capacity.min(b));
        let full_roof_count = floor_count(ctx.roof_area / entry.unit_area);

        let per_unit = self.config.estimator.daily_output(entry, temperature_factor);
        let total = count as f64 * per_unit;

        Ok(Candidate {
            entry: entry.clone(),
            area_capacity,
            budget_capacity,
            count,
            full_roof_count,
            per_unit_output_kwh: per_unit,
            total_output_kwh: total,
            full_roof_output_kwh: full_roof_count as f64 * per_unit,
            meets_demand: total >= daily_demand,
        })
    }

    /// Output at each configured percentage of the candidate's count.
    fn output_curve(&self, candidate: &Candidate) -> OutputCurve {
        let outputs_kwh = self
            .config
            .curve_percentages
            .iter()
            .map(|p| {
                let panels = floor_count(candidate.count as f64 * p / 100.0);
                panels as f64 * candidate.per_unit_output_kwh
            })
            .collect();
        OutputCurve {
            model: candidate.entry.model.clone(),
            percentages: self.config.curve_percentages.clone(),
            outputs_kwh,
        }
    }

    /// Picks the entry with the highest output that meets the demand.
    pub fn recommend(
        &self,
        catalog: &[CatalogEntry],
        ctx: &SizingContext,
    ) -> Result<Recommendation> {
        self.config.validate()?;
        ctx.validate()?;

        let temperature_factor = self.config.derating.factor(ctx.temperature_c);
        let daily_demand = ctx.daily_demand_kwh();

        let mut candidates: Vec<Candidate> = Vec::with_capacity(catalog.len());
        let mut skipped = Vec::new();
        let mut best: Option<usize> = None;

        for entry in catalog {
            let candidate = match self.evaluate(entry, ctx, temperature_factor, daily_demand) {
                Ok(c) => c,
                Err(reason) => {
                    log::warn!("skipping catalog entry '{}': {}", entry.model, reason);
                    skipped.push(SkippedEntry {
                        model: entry.model.clone(),
                        reason,
                    });
                    continue;
                }
            };

            log::debug!(
                "{}: area cap {}, budget cap {:?}, count {}, output {:.3} kWh (demand {:.3})",
                entry.model,
                candidate.area_capacity,
                candidate.budget_capacity,
                candidate.count,
                candidate.total_output_kwh,
                daily_demand
            );

            let improves = best.map_or(true, |i| {
                candidate.total_output_kwh > candidates[i].total_output_kwh
            });
            if candidate.meets_demand && improves {
                best = Some(candidates.len());
            }
            candidates.push(candidate);
        }

        let curves = candidates.iter().map(|c| self.output_curve(c)).collect();
        let best = best.map(|i| candidates[i].clone());

        match &best {
            Some(b) => log::debug!(
                "recommended {} x{} ({:.3} kWh/day)",
                b.entry.model,
                b.count,
                b.total_output_kwh
            ),
            None => log::debug!("no catalog entry meets {:.3} kWh/day", daily_demand),
        }

        Ok(Recommendation {
            count: best.as_ref().map_or(0, |b| b.count),
            daily_output_kwh: best.as_ref().map_or(0.0, |b| b.total_output_kwh),
            meets_demand: best.is_some(),
            best,
            daily_demand_kwh: daily_demand,
            usable_fraction: ctx.usable_fraction,
            temperature_factor,
            candidates,
            skipped,
            curves,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use approx::assert_relative_eq;
    use arsizer_core::Error;

    fn panel(model: &str, power: u32, unit_area: f64, price: f64) -> CatalogEntry {
        CatalogEntry::new(model, power, 0.2, unit_area, price)
    }

    #[test]
    fn test_invalid_roof_area() {
        let ctx = SizingContext::new(-1.0, 0.8, 1000.0, 300.0);
        let err = recommend(Catalog::builtin().entries(), &ctx).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn test_invalid_demand_and_fraction() {
        let catalog = Catalog::builtin();
        let zero_demand = SizingContext::new(50.0, 0.8, 1000.0, 0.0);
        assert!(recommend(catalog.entries(), &zero_demand).is_err());
        let bad_fraction = SizingContext::new(50.0, 1.5, 1000.0, 300.0);
        assert!(recommend(catalog.entries(), &bad_fraction).is_err());
    }

    #[test]
    fn test_builtin_catalog_picks_highest_output() {
        // 60 m² usable -> 31 panels of 1.9 m²
        let ctx = SizingContext::new(75.0, 0.8, 0.0, 300.0);
        let rec = recommend(Catalog::builtin().entries(), &ctx).unwrap();

        assert!(rec.meets_demand);
        assert_eq!(rec.best_entry().map(|e| e.model.as_str()), Some("SPR-MAX3-400"));
        assert_eq!(rec.count, 31);
        // 31 * 400 * 0.226 * 5 * 0.8 / 1000
        assert_relative_eq!(rec.daily_output_kwh, 11.2096, epsilon = 1e-9);
        assert_eq!(rec.candidates.len(), 3);
        assert_eq!(rec.candidates[0].full_roof_count, 39);
        assert!(rec.candidates.iter().all(|c| c.budget_capacity.is_none()));
    }

    #[test]
    fn test_never_selects_below_demand() {
        let catalog = vec![panel("small", 300, 2.0, 0.0), panel("big", 600, 2.0, 0.0)];
        // usable 4 m² -> 2 panels; big gives 2 * 600 * 0.2 * 5 * 0.8 / 1000 = 0.96
        let ctx = SizingContext::new(4.0, 1.0, 0.0, 30.0 * 0.9);
        let rec = recommend(&catalog, &ctx).unwrap();
        assert_eq!(rec.best_entry().map(|e| e.model.as_str()), Some("big"));
        assert!(!rec.candidates[0].meets_demand);

        let hungry = SizingContext::new(4.0, 1.0, 0.0, 30.0 * 5.0);
        let rec = recommend(&catalog, &hungry).unwrap();
        assert!(rec.best.is_none());
        assert!(!rec.meets_demand);
        assert_eq!(rec.count, 0);
        assert_eq!(rec.daily_output_kwh, 0.0);
        assert_eq!(rec.candidates.len(), 2);
    }

    #[test]
    fn test_tie_goes_to_first_entry() {
        let catalog = vec![panel("first", 500, 2.0, 0.0), panel("second", 500, 2.0, 0.0)];
        let ctx = SizingContext::new(20.0, 1.0, 0.0, 30.0);
        let rec = recommend(&catalog, &ctx).unwrap();
        assert_relative_eq!(
            rec.candidates[0].total_output_kwh,
            rec.candidates[1].total_output_kwh
        );
        assert_eq!(rec.best_entry().map(|e| e.model.as_str()), Some("first"));
    }

    #[test]
    fn test_budget_limits_count() {
        let catalog = vec![panel("priced", 400, 2.0, 250.0)];
        let ctx = SizingContext::new(100.0, 1.0, 1000.0, 30.0);
        let rec = recommend(&catalog, &ctx).unwrap();
        let c = &rec.candidates[0];
        assert_eq!(c.area_capacity, 50);
        assert_eq!(c.budget_capacity, Some(4));
        assert_eq!(c.count, 4);
    }

    #[test]
    fn test_zero_price_is_unbounded() {
        let catalog = vec![panel("free", 400, 2.0, 0.0)];
        let ctx = SizingContext::new(100.0, 0.5, 0.0, 30.0);
        let rec = recommend(&catalog, &ctx).unwrap();
        assert_eq!(rec.candidates[0].budget_capacity, None);
        assert_eq!(rec.candidates[0].count, 25);
    }

    #[test]
    fn test_tiny_price_does_not_zero_the_count() {
        let catalog = vec![panel("cheap", 400, 2.0, 1e-300)];
        let ctx = SizingContext::new(100.0, 1.0, 1e10, 30.0);
        let rec = recommend(&catalog, &ctx).unwrap();
        let c = &rec.candidates[0];
        assert_eq!(c.budget_capacity, None);
        assert_eq!(c.area_capacity, 50);
        assert_eq!(c.count, 50);
    }

    #[test]
    fn test_unlimited_budget_with_priced_catalog() {
        let catalog = vec![panel("priced", 400, 2.0, 250.0)];
        let ctx = SizingContext::new(100.0, 1.0, f64::INFINITY, 30.0);
        let rec = recommend(&catalog, &ctx).unwrap();
        assert_eq!(rec.candidates[0].budget_capacity, None);
        assert_eq!(rec.candidates[0].count, 50);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let mut config = SizingConfig::new();
        config.estimator.system_loss_fraction = 1.5;
        let ctx = SizingContext::new(20.0, 1.0, 0.0, 30.0);
        let err = recommend_with_config(Catalog::builtin().entries(), &ctx, &config).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(ref msg) if msg.contains("system loss")));
    }

    #[test]
    fn test_zero_footprint_entry_is_skipped() {
        let catalog = vec![panel("flat", 400, 0.0, 0.0), panel("ok", 400, 2.0, 0.0)];
        let ctx = SizingContext::new(20.0, 1.0, 0.0, 30.0);
        let rec = recommend(&catalog, &ctx).unwrap();
        assert_eq!(rec.skipped.len(), 1);
        assert_eq!(rec.skipped[0].model, "flat");
        assert_eq!(rec.candidates.len(), 1);
        assert_eq!(rec.curves.len(), 1);
        assert_eq!(rec.best_entry().map(|e| e.model.as_str()), Some("ok"));
    }

    #[test]
    fn test_output_curve() {
        let catalog = vec![panel("p", 500, 2.0, 0.0)];
        // 8 panels, 0.4 kWh each
        let ctx = SizingContext::new(16.0, 1.0, 0.0, 30.0);
        let rec = recommend(&catalog, &ctx).unwrap();
        let curve = &rec.curves[0];
        assert_eq!(curve.percentages.len(), 7);
        let expected_panels = [0.0, 2.0, 4.0, 6.0, 8.0, 10.0, 12.0];
        for (out, panels) in curve.outputs_kwh.iter().zip(expected_panels) {
            assert_relative_eq!(*out, panels * 0.4, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_temperature_lowers_output() {
        let catalog = Catalog::builtin();
        let base = SizingContext::new(75.0, 0.8, 0.0, 300.0);
        let hot = base.with_temperature(Some(45.0));
        let cool = recommend(catalog.entries(), &base).unwrap();
        let warm = recommend(catalog.entries(), &hot).unwrap();
        assert_relative_eq!(warm.temperature_factor, 0.9, epsilon = 1e-12);
        assert!(warm.candidates[0].total_output_kwh < cool.candidates[0].total_output_kwh);
    }

    #[test]
    fn test_custom_estimator_config() {
        let catalog = vec![panel("p", 500, 2.0, 0.0)];
        let ctx = SizingContext::new(2.0, 1.0, 0.0, 30.0);
        let config = SizingConfig::new().with_estimator(
            crate::config::EstimatorConfig::new()
                .with_irradiance(4.0)
                .with_system_loss(0.0),
        );
        let rec = recommend_with_config(&catalog, &ctx, &config).unwrap();
        // 500 * 0.2 * 4 / 1000
        assert_relative_eq!(rec.candidates[0].per_unit_output_kwh, 0.4, epsilon = 1e-12);
    }

    #[test]
    fn test_idempotent() {
        let catalog = Catalog::builtin();
        let ctx = SizingContext::new(42.0, 0.65, 0.0, 280.0).with_temperature(Some(33.0));
        let a = recommend(catalog.entries(), &ctx).unwrap();
        let b = recommend(catalog.entries(), &ctx).unwrap();
        assert_eq!(a, b);
    }
}

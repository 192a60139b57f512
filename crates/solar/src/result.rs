//! Recommendation result representation.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::catalog::CatalogEntry;

/// Evaluation of one catalog entry against a sizing context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    /// The evaluated entry.
    pub entry: CatalogEntry,

    /// Panels that fit on the usable area.
    pub area_capacity: usize,

    /// Panels the budget pays for; `None` when the price is zero.
    pub budget_capacity: Option<usize>,

    /// Panels proposed: the smaller of the two capacities.
    pub count: usize,

    /// Panels that would fit if the whole roof were used.
    pub full_roof_count: usize,

    /// Daily output of one panel in kWh.
    pub per_unit_output_kwh: f64,

    /// Daily output of `count` panels in kWh.
    pub total_output_kwh: f64,

    /// Daily output of `full_roof_count` panels in kWh.
    pub full_roof_output_kwh: f64,

    /// Whether `total_output_kwh` covers the daily demand.
    pub meets_demand: bool,
}

/// A catalog entry that could not be evaluated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkippedEntry {
    /// Model name.
    pub model: String,
    /// Why the entry was skipped.
    pub reason: String,
}

/// Projected output of one entry over a range of utilizations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputCurve {
    /// Model name.
    pub model: String,
    /// Utilization percentages of the entry's count.
    pub percentages: Vec<f64>,
    /// Daily output in kWh at each percentage.
    pub outputs_kwh: Vec<f64>,
}

impl OutputCurve {
    /// Axis labels such as `"25%"`.
    pub fn labels(&self) -> Vec<String> {
        self.percentages.iter().map(|p| format!("{p}%")).collect()
    }

    /// `(percentage, output)` pairs.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.percentages
            .iter()
            .copied()
            .zip(self.outputs_kwh.iter().copied())
    }

    /// Largest output on the curve.
    pub fn max_output_kwh(&self) -> f64 {
        self.outputs_kwh.iter().copied().fold(0.0, f64::max)
    }
}

/// Outcome of a recommendation request.
///
/// `best` is `None` when no entry meets the demand within area and budget;
/// callers must report that instead of substituting a default panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Winning candidate, if any.
    pub best: Option<Candidate>,

    /// Panel count of the winner (0 when none).
    pub count: usize,

    /// Daily output of the winner in kWh (0 when none).
    pub daily_output_kwh: f64,

    /// Whether a configuration satisfies the demand.
    pub meets_demand: bool,

    /// Demand the candidates were measured against, in kWh per day.
    pub daily_demand_kwh: f64,

    /// Fraction of the roof that was considered usable.
    pub usable_fraction: f64,

    /// Temperature factor applied to every estimate.
    pub temperature_factor: f64,

    /// Every evaluated entry in catalog order, including those under demand.
    pub candidates: Vec<Candidate>,

    /// Entries rejected during evaluation.
    pub skipped: Vec<SkippedEntry>,

    /// Output curve per evaluated entry, in catalog order.
    pub curves: Vec<OutputCurve>,
}

impl Recommendation {
    /// Returns the winning catalog entry.
    pub fn best_entry(&self) -> Option<&CatalogEntry> {
        self.best.as_ref().map(|c| &c.entry)
    }

    /// Returns true if some configuration satisfies the constraints.
    pub fn is_viable(&self) -> bool {
        self.best.is_some()
    }

    /// Finds the candidate for a model.
    pub fn candidate(&self, model: &str) -> Option<&Candidate> {
        self.candidates.iter().find(|c| c.entry.model == model)
    }

    /// Human-readable per-panel report.
    pub fn summary(&self) -> String {
        let percent = (self.usable_fraction * 100.0).round();
        let mut out = String::new();

        let _ = writeln!(
            out,
            "Daily demand: {:.2} kWh (temperature factor {:.2})",
            self.daily_demand_kwh, self.temperature_factor
        );
        for c in &self.candidates {
            let _ = writeln!(out);
            let _ = writeln!(out, "Panel: {}", c.entry.model);
            let _ = writeln!(out, "  Area per panel: {:.2} m²", c.entry.unit_area);
            let _ = writeln!(out, "  Panel count (full roof): {}", c.full_roof_count);
            let _ = writeln!(out, "  Panel count (limited to {percent}%): {}", c.count);
            let _ = writeln!(
                out,
                "  Daily output per panel: {:.2} kWh",
                c.per_unit_output_kwh
            );
            let _ = writeln!(
                out,
                "  Total output (full roof): {:.2} kWh",
                c.full_roof_output_kwh
            );
            let _ = writeln!(out, "  Total output (limited): {:.2} kWh", c.total_output_kwh);
        }
        for s in &self.skipped {
            let _ = writeln!(out);
            let _ = writeln!(out, "Skipped: {} ({})", s.model, s.reason);
        }

        let _ = writeln!(out);
        match &self.best {
            Some(best) => {
                let _ = writeln!(
                    out,
                    "Best panel (limited area): {} x{} with output {:.2} kWh",
                    best.entry.model, best.count, best.total_output_kwh
                );
            }
            None => {
                let _ = writeln!(
                    out,
                    "No configuration satisfies the demand within the area and budget."
                );
            }
        }
        out
    }
}

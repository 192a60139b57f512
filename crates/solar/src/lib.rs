//! # arsizer Solar
//!
//! Solar panel sizing for a measured roof.
//!
//! Given the roof area, the share of it the user wants to cover, a budget,
//! a monthly demand and the ambient temperature, the optimizer evaluates each
//! catalog entry and recommends the one with the highest daily output that
//! still covers the demand.
//!
//! ## Pipeline
//!
//! 1. **Catalog**: [`Catalog`] - static, validated panel table
//! 2. **Context**: [`SizingContext`] - user and environment inputs
//! 3. **Estimator**: [`daily_output`] - per-panel daily kWh
//! 4. **Optimizer**: [`recommend`] / [`Recommender`] - best entry and output curves
//!
//! ## Quick Start
//!
//! ```rust
//! use arsizer_solar::{recommend, Catalog, SizingContext};
//!
//! let catalog = Catalog::builtin();
//! // 10m x 7.5m roof, 80% usable, no budget limit, 300 kWh/month, no temperature reading
//! let ctx = SizingContext::from_dimensions(10.0, 7.5, 0.8, 0.0, 300.0).with_temperature(None);
//!
//! let rec = recommend(catalog.entries(), &ctx).unwrap();
//! match rec.best_entry() {
//!     Some(panel) => println!("{} x{} -> {:.2} kWh/day", panel.model, rec.count, rec.daily_output_kwh),
//!     None => println!("No configuration satisfies the constraints"),
//! }
//! ```
//!
//! ## Configuration
//!
//! Irradiance, system loss, temperature derating and the output curve
//! sample points live in [`SizingConfig`]:
//!
//! ```rust
//! use arsizer_solar::{EstimatorConfig, SizingConfig};
//!
//! let config = SizingConfig::new()
//!     .with_estimator(EstimatorConfig::new().with_irradiance(4.5).with_system_loss(0.15));
//! ```

pub mod catalog;
pub mod config;
pub mod context;
pub mod estimator;
pub mod optimizer;
pub mod result;

// Re-exports
pub use arsizer_core::{Error, Result};
pub use catalog::{Catalog, CatalogEntry};
pub use config::{EstimatorConfig, SizingConfig, TemperatureDerating, DEFAULT_CURVE_PERCENTAGES};
pub use context::{SizingContext, DAYS_PER_MONTH, DEFAULT_TEMPERATURE_C};
pub use estimator::daily_output;
pub use optimizer::{recommend, recommend_with_config, Recommender};
pub use result::{Candidate, OutputCurve, Recommendation, SkippedEntry};

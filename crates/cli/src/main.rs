//! arsizer CLI: surface area, grid placement and panel recommendation.

mod input;

use std::path::PathBuf;

use anyhow::Context;
use arsizer_layout::{FootprintSpec, GridLayout, GridPacker};
use arsizer_solar::{Catalog, Recommender, SizingConfig, SizingContext};
use clap::{Parser, Subcommand};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "arsizer")]
#[command(about = "Surface placement and solar panel sizing")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the area of a boundary polygon
    Area {
        /// JSON file with [[x, z], ...] points
        polygon: PathBuf,
    },

    /// Lay out fixed-size items on a surface
    Pack {
        /// Surface area in square meters
        #[arg(long, conflicts_with = "polygon", required_unless_present = "polygon")]
        area: Option<f64>,

        /// JSON file with the surface boundary
        #[arg(long)]
        polygon: Option<PathBuf>,

        /// Edge length of one item
        #[arg(long, default_value = "0.2")]
        item_size: f64,

        /// Gap between items
        #[arg(long, default_value = "0.1")]
        spacing: f64,

        /// Maximum number of items
        #[arg(long)]
        cap: Option<usize>,

        /// Anchor position as x,y,z
        #[arg(long, allow_hyphen_values = true)]
        anchor: Option<String>,

        /// Anchor rotation about the vertical axis in degrees
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        yaw: f64,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Recommend a panel model for a roof
    Recommend {
        /// Roof area in square meters
        #[arg(long, conflicts_with_all = ["length", "width"])]
        roof_area: Option<f64>,

        /// Roof length in meters
        #[arg(long, requires = "width")]
        length: Option<f64>,

        /// Roof width in meters
        #[arg(long, requires = "length")]
        width: Option<f64>,

        /// Fraction of the roof to cover (0.0 - 1.0)
        #[arg(long, default_value = "1.0")]
        usable: f64,

        /// Spending limit; omit for no limit
        #[arg(long)]
        budget: Option<f64>,

        /// Monthly energy demand in kWh
        #[arg(long)]
        monthly_kwh: f64,

        /// Ambient temperature in °C (defaults to 25)
        #[arg(long, allow_hyphen_values = true)]
        temperature: Option<f64>,

        /// Catalog file (.toml or .json); defaults to the built-in table
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Sizing configuration file (.toml or .json)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// List catalog entries
    Catalog {
        /// Catalog file (.toml or .json); defaults to the built-in table
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Print the catalog as TOML
        #[arg(long)]
        toml: bool,
    },
}

#[derive(Serialize)]
struct PackReport<'a> {
    area: f64,
    layout: &'a GridLayout,
    unused_capacity: usize,
    positions: Vec<[f64; 3]>,
}

fn load_catalog(path: Option<&PathBuf>) -> anyhow::Result<Catalog> {
    match path {
        Some(p) => Catalog::from_file(p)
            .with_context(|| format!("failed to load catalog {}", p.display())),
        None => Ok(Catalog::builtin()),
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_default_env().init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Area { polygon } => {
            let boundary = input::load_polygon(&polygon)?;
            if boundary.is_degenerate() {
                log::warn!(
                    "boundary has {} points; treating area as zero",
                    boundary.len()
                );
            }
            println!("{:.4}", boundary.area());
        }

        Commands::Pack {
            area,
            polygon,
            item_size,
            spacing,
            cap,
            anchor,
            yaw,
            json,
        } => {
            let area = match (area, polygon) {
                (Some(a), _) => a,
                (None, Some(path)) => input::load_polygon(&path)?.area(),
                (None, None) => anyhow::bail!("either --area or --polygon is required"),
            };
            let footprint = FootprintSpec::new(item_size, spacing)?;
            let mut packer = GridPacker::new(footprint);
            if let Some(cap) = cap {
                packer = packer.with_hard_cap(cap);
            }
            let layout = packer.pack(area)?;
            let anchor = input::parse_anchor(anchor.as_deref(), yaw)?;
            let positions: Vec<[f64; 3]> = layout
                .world_positions(&anchor)
                .into_iter()
                .map(|p| [p.x, p.y, p.z])
                .collect();

            if json {
                let report = PackReport {
                    area,
                    layout: &layout,
                    unused_capacity: layout.unused_capacity(),
                    positions,
                };
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("Surface area: {:.2} m²", area);
                println!(
                    "Placed {} items ({}x{} grid, cell {:.3} m)",
                    layout.count(),
                    layout.rows(),
                    layout.cols(),
                    layout.cell_size()
                );
                if layout.unused_capacity() > 0 {
                    println!(
                        "Area admits {} items; {} left unused by the square grid",
                        layout.capacity_by_area(),
                        layout.unused_capacity()
                    );
                }
                for [x, y, z] in positions {
                    println!("  ({:.3}, {:.3}, {:.3})", x, y, z);
                }
            }
        }

        Commands::Recommend {
            roof_area,
            length,
            width,
            usable,
            budget,
            monthly_kwh,
            temperature,
            catalog,
            config,
            json,
        } => {
            let budget = input::budget_limit(budget);
            let ctx = match (roof_area, length, width) {
                (Some(a), _, _) => SizingContext::new(a, usable, budget, monthly_kwh),
                (None, Some(l), Some(w)) => {
                    SizingContext::from_dimensions(l, w, usable, budget, monthly_kwh)
                }
                _ => anyhow::bail!("either --roof-area or --length and --width are required"),
            }
            .with_temperature(temperature);

            let catalog = load_catalog(catalog.as_ref())?;
            let config = match config {
                Some(p) => SizingConfig::from_file(&p)
                    .with_context(|| format!("failed to load config {}", p.display()))?,
                None => SizingConfig::default(),
            };

            let rec = Recommender::new(config)
                .recommend(catalog.entries(), &ctx)
                .context("cannot size the roof; correct the inputs and retry")?;

            if json {
                println!("{}", serde_json::to_string_pretty(&rec)?);
            } else {
                print!("{}", rec.summary());
                println!();
                for curve in &rec.curves {
                    let points: Vec<String> = curve
                        .labels()
                        .iter()
                        .zip(&curve.outputs_kwh)
                        .map(|(label, kwh)| format!("{label}: {kwh:.2}"))
                        .collect();
                    println!("{} curve (kWh/day): {}", curve.model, points.join(", "));
                }
            }
        }

        Commands::Catalog { catalog, toml } => {
            let catalog = load_catalog(catalog.as_ref())?;
            if toml {
                print!("{}", catalog.to_toml_string()?);
            } else {
                println!("{:<16} {:>8} {:>10} {:>10} {:>10}", "Model", "Watts", "Eff.", "Area m²", "Price");
                for e in catalog.entries() {
                    println!(
                        "{:<16} {:>8} {:>10.3} {:>10.2} {:>10.2}",
                        e.model, e.power_watts, e.efficiency, e.unit_area, e.price
                    );
                }
            }
        }
    }

    Ok(())
}

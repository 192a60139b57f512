//! Parsing of command-line inputs: polygon files and anchor poses.

use std::path::Path;

use anyhow::{bail, Context};
use arsizer_core::BoundaryPolygon;
use nalgebra::{Isometry3, Translation3, UnitQuaternion, Vector3};

/// Reads a boundary polygon from a JSON file of `[[x, z], ...]` points.
pub fn load_polygon(path: &Path) -> anyhow::Result<BoundaryPolygon> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read polygon file {}", path.display()))?;
    parse_polygon(&content).with_context(|| format!("invalid polygon file {}", path.display()))
}

/// Parses a boundary polygon from JSON.
pub fn parse_polygon(content: &str) -> anyhow::Result<BoundaryPolygon> {
    let polygon: BoundaryPolygon = serde_json::from_str(content)?;
    Ok(polygon)
}

/// Spending limit for a recommendation; a missing budget is unbounded.
pub fn budget_limit(budget: Option<f64>) -> f64 {
    budget.unwrap_or(f64::INFINITY)
}

/// Parses an anchor position `x,y,z` plus a yaw about the vertical axis in degrees.
pub fn parse_anchor(position: Option<&str>, yaw_deg: f64) -> anyhow::Result<Isometry3<f64>> {
    let translation = match position {
        None => Translation3::identity(),
        Some(text) => {
            let parts: Vec<f64> = text
                .split(',')
                .map(|p| p.trim().parse::<f64>())
                .collect::<Result<_, _>>()
                .with_context(|| format!("anchor '{text}' is not a list of numbers"))?;
            if parts.len() != 3 {
                bail!("anchor must be 'x,y,z', got {} values", parts.len());
            }
            Translation3::new(parts[0], parts[1], parts[2])
        }
    };
    let rotation = UnitQuaternion::from_axis_angle(&Vector3::y_axis(), yaw_deg.to_radians());
    Ok(Isometry3::from_parts(translation, rotation))
}

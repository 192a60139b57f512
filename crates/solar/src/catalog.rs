//! Panel catalog.
//!
//! The catalog is a static table loaded once and borrowed by the optimizer.
//! Loading validates every entry, so zero-footprint panels never reach the
//! recommendation step through this path.

use std::path::Path;

use arsizer_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// One panel model available for recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Model name.
    pub model: String,

    /// Rated power in watts.
    pub power_watts: u32,

    /// Module efficiency in `(0, 1]`.
    pub efficiency: f64,

    /// Footprint of one panel in square meters.
    pub unit_area: f64,

    /// Unit price. Zero means the budget never limits this model.
    #[serde(default)]
    pub price: f64,
}

impl CatalogEntry {
    /// Creates an entry without validation.
    pub fn new(
        model: impl Into<String>,
        power_watts: u32,
        efficiency: f64,
        unit_area: f64,
        price: f64,
    ) -> Self {
        Self {
            model: model.into(),
            power_watts,
            efficiency,
            unit_area,
            price,
        }
    }

    /// Checks the entry's value ranges.
    pub fn validate(&self) -> Result<()> {
        if self.model.trim().is_empty() {
            return Err(Error::invalid_entry(&self.model, "model name is empty"));
        }
        if !self.unit_area.is_finite() || self.unit_area <= 0.0 {
            return Err(Error::invalid_entry(
                &self.model,
                format!("unit area must be positive, got {}", self.unit_area),
            ));
        }
        if !(self.efficiency > 0.0 && self.efficiency <= 1.0) {
            return Err(Error::invalid_entry(
                &self.model,
                format!("efficiency must be in (0, 1], got {}", self.efficiency),
            ));
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(Error::invalid_entry(
                &self.model,
                format!("price must be non-negative, got {}", self.price),
            ));
        }
        Ok(())
    }
}

/// Serialized catalog layout: `[[panels]]` tables in TOML, `{"panels": [...]}` in JSON.
#[derive(Debug, Serialize, Deserialize)]
struct CatalogDocument {
    panels: Vec<CatalogEntry>,
}

/// JSON accepts either the document form or a bare array of entries.
#[derive(Deserialize)]
#[serde(untagged)]
enum JsonCatalog {
    Document(CatalogDocument),
    Entries(Vec<CatalogEntry>),
}

/// An ordered, validated list of catalog entries.
///
/// Order matters: the optimizer breaks ties in favour of earlier entries.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Creates a catalog, rejecting invalid entries.
    pub fn new(entries: Vec<CatalogEntry>) -> Result<Self> {
        for entry in &entries {
            entry.validate()?;
        }
        Ok(Self { entries })
    }

    /// The built-in SunPower Maxeon 3 table.
    ///
    /// List prices are not part of the table, so the budget never limits
    /// these entries.
    pub fn builtin() -> Self {
        Self {
            entries: vec![
                CatalogEntry::new("SPR-MAX3-400", 400, 0.226, 1.90, 0.0),
                CatalogEntry::new("SPR-MAX3-395", 395, 0.223, 1.90, 0.0),
                CatalogEntry::new("SPR-MAX3-390", 390, 0.221, 1.90, 0.0),
            ],
        }
    }

    /// Parses a catalog from a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let doc: CatalogDocument =
            toml::from_str(content).map_err(|e| Error::ParseError(e.to_string()))?;
        Self::new(doc.panels)
    }

    /// Parses a catalog from a JSON document.
    pub fn from_json_str(content: &str) -> Result<Self> {
        let parsed: JsonCatalog =
            serde_json::from_str(content).map_err(|e| Error::ParseError(e.to_string()))?;
        match parsed {
            JsonCatalog::Document(doc) => Self::new(doc.panels),
            JsonCatalog::Entries(entries) => Self::new(entries),
        }
    }

    /// Loads a catalog file, choosing the format by extension (`.toml` or `.json`).
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::from_toml_str(&content),
            Some("json") => Self::from_json_str(&content),
            other => Err(Error::ParseError(format!(
                "unsupported catalog format: {}",
                other.unwrap_or("<none>")
            ))),
        }
    }

    /// Serializes the catalog as TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        let doc = CatalogDocument {
            panels: self.entries.clone(),
        };
        toml::to_string_pretty(&doc).map_err(|e| Error::ParseError(e.to_string()))
    }

    /// Returns the entries in catalog order.
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Looks up an entry by model name.
    pub fn get(&self, model: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.model == model)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl AsRef<[CatalogEntry]> for Catalog {
    fn as_ref(&self) -> &[CatalogEntry] {
        &self.entries
    }
}

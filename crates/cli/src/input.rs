//! Catalog input: three index-aligned arrays, loaded from JSON.

use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

/// Environment variable naming the input file when no argument is given.
pub const INPUT_ENV: &str = "STOCKROOM_INPUT";

/// Environment variable selecting the report format (`text` or `json`).
pub const FORMAT_ENV: &str = "STOCKROOM_FORMAT";

/// How the report is written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// One display line per product, in labelled sections.
    #[default]
    Text,
    /// A single pretty-printed JSON document.
    Json,
}

impl OutputFormat {
    /// Read [`FORMAT_ENV`]; unset means [`OutputFormat::Text`].
    pub fn from_env() -> anyhow::Result<Self> {
        match std::env::var(FORMAT_ENV) {
            Ok(value) => value.parse(),
            Err(std::env::VarError::NotPresent) => Ok(Self::default()),
            Err(err) => Err(err).context(format!("reading {FORMAT_ENV}")),
        }
    }
}

impl core::str::FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => anyhow::bail!("unknown output format {other:?} (expected text or json)"),
        }
    }
}

/// Parallel product arrays as read from disk.
///
/// ```json
/// { "names": ["Pens"], "inventories": [40], "prices": [1.25] }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CatalogInput {
    pub names: Vec<String>,
    pub inventories: Vec<i64>,
    pub prices: Vec<f64>,
}

impl CatalogInput {
    pub fn from_json(text: &str) -> anyhow::Result<Self> {
        serde_json::from_str(text).context("parsing catalog input")
    }

    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading catalog input {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("in {}", path.display()))
    }

    /// Built-in catalog used when no input file is configured.
    pub fn sample() -> Self {
        let rows: [(&str, i64, f64); 8] = [
            ("Notebook", 125, 2.49),
            ("Stapler", 12, 8.99),
            ("Desk lamp", 7, 34.50),
            ("Ballpoint pens (10)", 340, 3.75),
            ("Printer paper", 60, 6.25),
            ("Monitor stand", 4, 49.00),
            ("Sticky notes", 210, 1.99),
            ("Whiteboard", 3, 49.00),
        ];

        Self {
            names: rows.iter().map(|r| r.0.to_string()).collect(),
            inventories: rows.iter().map(|r| r.1).collect(),
            prices: rows.iter().map(|r| r.2).collect(),
        }
    }
}

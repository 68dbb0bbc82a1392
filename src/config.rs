use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Thresholds and strictness toggles for the row filter and description
/// stitcher. The defaults are the lenient variant observed across the
/// bulletin lineage; different document families can override them from a
/// JSON file without code changes.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CleanConfig {
    /// Rows with fewer positional cells than this are extraction fragments.
    pub min_data_cells: usize,
    /// Rows with more positional cells than this come from merged columns.
    pub max_data_cells: usize,
    /// A cell beyond the first that exceeds this length marks wrapped
    /// description text bleeding into a data row.
    pub max_cell_len: usize,
    /// Minimum joined text length for a row to count as a description
    /// continuation of the preceding record.
    pub description_min_len: usize,
    /// Drop rows whose joined 2nd-3rd cells reappear verbatim in a later
    /// cell (duplicated-prefix extraction artifact). The strict legacy
    /// filter always did this; it is toggleable here.
    pub duplicate_prefix_check: bool,
    /// Require section banners in the second cell exactly, instead of
    /// matching the marker anywhere in the row.
    pub banner_match_exact: bool,
}

impl Default for CleanConfig {
    fn default() -> Self {
        Self {
            min_data_cells: 8,
            max_data_cells: 11,
            max_cell_len: 70,
            description_min_len: 100,
            duplicate_prefix_check: true,
            banner_match_exact: false,
        }
    }
}

impl CleanConfig {
    /// Load overrides from a JSON file; unspecified fields keep defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("parsing config file {}", path.display()))
    }
}

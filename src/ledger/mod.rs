pub mod coerce;
pub mod enrich;
pub mod normalize;
pub mod registry;
pub mod week;
pub mod write;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Section classification forward-propagated from the nearest preceding
/// banner row. `None` is represented as the absence of a tag on an
/// intermediate row, never in a finished record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SectionLabel {
    New,
    Ongoing,
    Closed,
}

impl SectionLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            SectionLabel::New => "New",
            SectionLabel::Ongoing => "Ongoing",
            SectionLabel::Closed => "Closed",
        }
    }
}

/// One reconstructed outbreak record. Field order is the output column
/// contract: the CSV header and cell order come straight from this struct.
///
/// Numeric and date fields are value-or-absent; a cell that failed coercion
/// is `None`, never zero. `country_iso3` is `None` when the country name is
/// not in the registry, which is a valid terminal state (header artifacts
/// and multi-country rows are expected to miss).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedRecord {
    pub source_name: String,
    pub week: u32,
    pub date_range: String,
    pub event_type: SectionLabel,
    pub country_iso3: Option<String>,
    pub country: String,
    pub event_name: String,
    pub grade: String,
    pub date_notified: Option<NaiveDate>,
    pub date_start: Option<NaiveDate>,
    pub date_end: Option<NaiveDate>,
    pub cases_total: Option<u64>,
    pub cases_confirmed: Option<u64>,
    pub deaths: Option<u64>,
    /// Case-fatality ratio as reported, deliberately left uncoerced.
    pub cfr: String,
    pub description: Option<String>,
}

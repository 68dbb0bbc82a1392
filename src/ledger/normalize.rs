use crate::clean::stitch::StitchedRow;
use crate::error::PipelineError;
use crate::ledger::coerce::{parse_count, parse_date};
use crate::ledger::SectionLabel;
use chrono::NaiveDate;
use tracing::debug;

/// The canonical bulletin table header. Positional mapping of every data
/// row is keyed off one of these variants; nothing is ever inferred from a
/// row's own cell count.
const CANONICAL_COLUMNS: &[&str] = &[
    "Country",
    "Event",
    "Grade",
    "Date notified to WCO",
    "Start of reporting period",
    "End of reporting period",
    "Total cases",
    "Cases Confirmed",
    "Deaths",
    "CFR",
];

/// Some extractions prepend an unnamed index column.
const INDEXED_COLUMNS: &[&str] = &[
    "",
    "Country",
    "Event",
    "Grade",
    "Date notified to WCO",
    "Start of reporting period",
    "End of reporting period",
    "Total cases",
    "Cases Confirmed",
    "Deaths",
    "CFR",
];

#[derive(Debug, Clone, Copy)]
pub struct HeaderVariant {
    pub name: &'static str,
    columns: &'static [&'static str],
    /// Index of the `Country` column; named fields start here.
    offset: usize,
}

impl HeaderVariant {
    pub fn width(&self) -> usize {
        self.columns.len()
    }
}

pub const HEADER_VARIANTS: &[HeaderVariant] = &[
    HeaderVariant {
        name: "canonical",
        columns: CANONICAL_COLUMNS,
        offset: 0,
    },
    HeaderVariant {
        name: "indexed",
        columns: INDEXED_COLUMNS,
        offset: 1,
    },
];

/// Named fields pulled out of one stitched row, before enrichment.
#[derive(Debug, Clone, PartialEq)]
pub struct CoreRecord {
    pub section: Option<SectionLabel>,
    pub row: usize,
    pub country: String,
    pub event_name: String,
    pub grade: String,
    pub date_notified: Option<NaiveDate>,
    pub date_start: Option<NaiveDate>,
    pub date_end: Option<NaiveDate>,
    pub cases_total: Option<u64>,
    pub cases_confirmed: Option<u64>,
    pub deaths: Option<u64>,
    pub cfr: String,
    pub description: Option<String>,
}

/// Maps positional rows onto named fields. Header rows switch the active
/// variant and are consumed; data rows must match the active variant's
/// width exactly or the document fails. Truncating or padding would shift
/// every count column after the mismatch, which is worse than failing.
pub struct Normalizer {
    active: HeaderVariant,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Normalizer {
    pub fn new() -> Self {
        Self {
            active: HEADER_VARIANTS[0],
        }
    }

    /// Returns `Ok(None)` for a consumed header row.
    pub fn normalize(
        &mut self,
        row: &StitchedRow,
        source: &str,
        row_idx: usize,
    ) -> Result<Option<CoreRecord>, PipelineError> {
        if let Some(variant) = detect_header(&row.cells) {
            debug!(source, row = row_idx, variant = variant.name, "header row");
            self.active = variant;
            return Ok(None);
        }

        if row.cells.len() != self.active.width() {
            return Err(PipelineError::SchemaMismatch {
                doc: source.to_string(),
                row: row_idx,
                expected: self.active.width(),
                got: row.cells.len(),
            });
        }

        let cell = |i: usize| row.cells[self.active.offset + i].trim().to_string();

        Ok(Some(CoreRecord {
            section: row.section,
            row: row_idx,
            country: cell(0),
            event_name: cell(1),
            grade: cell(2),
            date_notified: parse_date(&cell(3)),
            date_start: parse_date(&cell(4)),
            date_end: parse_date(&cell(5)),
            cases_total: parse_count(&cell(6)),
            cases_confirmed: parse_count(&cell(7)),
            deaths: parse_count(&cell(8)),
            cfr: cell(9),
            description: row.description.clone(),
        }))
    }
}

/// Header detection is tolerant of case and wrapped whitespace, since the
/// extractor breaks long column names across lines.
fn detect_header(cells: &[String]) -> Option<HeaderVariant> {
    HEADER_VARIANTS
        .iter()
        .find(|v| {
            cells.len() == v.columns.len()
                && cells
                    .iter()
                    .zip(v.columns)
                    .all(|(cell, col)| fold(cell) == fold(col))
        })
        .copied()
}

fn fold(s: &str) -> String {
    s.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

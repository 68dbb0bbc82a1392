use crate::clean::sections::TaggedRow;
use crate::config::CleanConfig;
use crate::error::PipelineError;
use crate::ledger::SectionLabel;

/// A data row with any continuation text folded in. At most one following
/// row ever contributes to `description`.
#[derive(Debug, Clone, PartialEq)]
pub struct StitchedRow {
    pub cells: Vec<String>,
    pub section: Option<SectionLabel>,
    pub description: Option<String>,
}

/// Lookahead-by-one scan: a data row immediately followed by a long
/// free-text fragment absorbs it as its description and the scan advances
/// past both. No backtracking, so a fragment is only ever considered for
/// the one row directly before it. A fragment the scan lands on directly
/// (first in the sequence, or following another fragment) has nowhere to
/// attach and must never be emitted as a record of its own, so it fails
/// the document instead.
pub fn stitch_descriptions(
    rows: Vec<TaggedRow>,
    cfg: &CleanConfig,
    doc: &str,
) -> Result<Vec<StitchedRow>, PipelineError> {
    let mut out = Vec::with_capacity(rows.len());
    let mut i = 0;

    while i < rows.len() {
        let row = &rows[i];
        if is_continuation(row, cfg) {
            return Err(PipelineError::DanglingDescription {
                doc: doc.to_string(),
                row: i,
            });
        }
        let description = match rows.get(i + 1) {
            Some(next) if is_continuation(next, cfg) => {
                i += 1;
                Some(continuation_text(next))
            }
            _ => None,
        };
        out.push(StitchedRow {
            cells: row.cells.clone(),
            section: row.section,
            description,
        });
        i += 1;
    }

    Ok(out)
}

/// A continuation row is extractor padding around one long text fragment:
/// it has the positional width of the table (it survived the filter) but
/// too few non-blank cells to be a data row, and its text is long enough to
/// be a wrapped description rather than a stray value.
fn is_continuation(row: &TaggedRow, cfg: &CleanConfig) -> bool {
    let filled = row.cells.iter().filter(|c| !c.trim().is_empty()).count();
    filled < cfg.min_data_cells && continuation_text(row).chars().count() > cfg.description_min_len
}

fn continuation_text(row: &TaggedRow) -> String {
    row.cells
        .iter()
        .map(|c| c.trim())
        .filter(|c| !c.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data_row(country: &str) -> TaggedRow {
        let cells: Vec<String> = vec![
            country.into(),
            "Cholera".into(),
            "Grade 2".into(),
            "12-Mar-2025".into(),
            "10-Mar-2025".into(),
            "20-Mar-2025".into(),
            "1230".into(),
            "400".into(),
            "12".into(),
            "1.0%".into(),
        ];
        TaggedRow {
            cells,
            section: Some(SectionLabel::New),
        }
    }

    fn text_row(len: usize) -> TaggedRow {
        let mut cells = vec!["d".repeat(len)];
        cells.resize(10, String::new());
        TaggedRow {
            cells,
            section: Some(SectionLabel::New),
        }
    }

    fn stitch(rows: Vec<TaggedRow>) -> Result<Vec<StitchedRow>, PipelineError> {
        stitch_descriptions(rows, &CleanConfig::default(), "doc")
    }

    #[test]
    fn long_fragment_becomes_description() {
        let out = stitch(vec![data_row("Kenya"), text_row(150)]).unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].cells[0], "Kenya");
        assert_eq!(out[0].description.as_deref(), Some("d".repeat(150).as_str()));
    }

    #[test]
    fn short_fragment_stays_standalone() {
        let out = stitch(vec![data_row("Kenya"), text_row(40)]).unwrap();
        assert_eq!(out.len(), 2);
        assert!(out[0].description.is_none());
    }

    #[test]
    fn fragment_attaches_to_one_predecessor_only() {
        let out = stitch(vec![data_row("Kenya"), text_row(150), data_row("Chad")]).unwrap();
        assert_eq!(out.len(), 2);
        assert!(out[0].description.is_some());
        assert!(out[1].description.is_none());
    }

    #[test]
    fn second_consecutive_fragment_fails_instead_of_standing_alone() {
        // the second fragment is never reconsidered as a description of the
        // first, and it has the full positional width, so letting it through
        // would turn description text into a record's country
        let err = stitch(vec![data_row("Kenya"), text_row(150), text_row(150)]).unwrap_err();
        match err {
            PipelineError::DanglingDescription { doc, row } => {
                assert_eq!(doc, "doc");
                assert_eq!(row, 2);
            }
            other => panic!("expected DanglingDescription, got {other}"),
        }
    }

    #[test]
    fn leading_fragment_fails_instead_of_standing_alone() {
        let err = stitch(vec![text_row(150), data_row("Kenya")]).unwrap_err();
        assert!(matches!(
            err,
            PipelineError::DanglingDescription { row: 0, .. }
        ));
    }

    #[test]
    fn full_width_rows_are_never_descriptions() {
        let wide = data_row("Somalia");
        let out = stitch(vec![data_row("Kenya"), wide]).unwrap();
        assert_eq!(out.len(), 2);
        assert!(out[0].description.is_none());
    }
}

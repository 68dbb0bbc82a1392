use std::path::PathBuf;
use thiserror::Error;

/// Document-level failures. Row-level noise never escapes the row filter,
/// and a country lookup miss is an absent value rather than an error, so
/// neither appears here.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// A data row's cell count cannot be mapped onto the active header
    /// variant. Fatal for the whole document: padding or truncating the row
    /// would silently misalign every count column after it.
    #[error("schema mismatch in {doc}: row {row} has {got} cells, expected {expected}")]
    SchemaMismatch {
        doc: String,
        row: usize,
        expected: usize,
        got: usize,
    },

    /// A data row appeared before any section banner, so its New/Ongoing/
    /// Closed status is unknown. Guessing a label would misclassify the
    /// event, so the document fails instead.
    #[error("unlabeled record in {doc}: row {row} appears before any section banner")]
    UnlabeledRecord { doc: String, row: usize },

    /// A continuation-text row with no data row directly before it. It can
    /// never be attached to a record, and it must not become one either, so
    /// the document fails.
    #[error("dangling description in {doc}: row {row} is continuation text with no preceding data row")]
    DanglingDescription { doc: String, row: usize },

    /// The source filename does not follow the bulletin naming convention
    /// that carries the reporting week and date range.
    #[error("filename {name:?} does not follow the bulletin naming convention: {reason}")]
    FilenameConvention { name: String, reason: String },

    #[error("no extracted table files found under {0}")]
    NoBatches(PathBuf),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Glob(#[from] glob::PatternError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn document_fields_are_message_context_not_causes() {
        let err = PipelineError::SchemaMismatch {
            doc: "OEW07_010112012025".to_string(),
            row: 4,
            expected: 10,
            got: 9,
        };
        assert!(err.source().is_none());
        assert_eq!(
            err.to_string(),
            "schema mismatch in OEW07_010112012025: row 4 has 9 cells, expected 10"
        );

        let err = PipelineError::UnlabeledRecord {
            doc: "OEW07_010112012025".to_string(),
            row: 0,
        };
        assert!(err.source().is_none());
    }
}

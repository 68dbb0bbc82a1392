use crate::error::PipelineError;
use glob::glob;
use std::fs;
use std::io::Cursor;
use std::path::Path;
use tracing::debug;

/// One named batch of raw rows from the external table extractor.
pub type RawBatch = (String, Vec<Vec<String>>);

/// Load every extracted table CSV under `doc_dir` into named row batches.
///
/// Bytes are decoded with lossy UTF-8 replacement (scanned bulletins
/// routinely produce malformed sequences) and parsed with a flexible
/// reader: varying field counts are data for the row filter to judge, not
/// parse errors. A previously written `*_combined.csv` is skipped so
/// reruns over the same directory stay idempotent.
pub fn load_batches(doc_dir: &Path) -> Result<Vec<RawBatch>, PipelineError> {
    let pattern = doc_dir.join("*.csv");
    let mut batches = Vec::new();

    let mut paths: Vec<_> = glob(&pattern.to_string_lossy())?
        .filter_map(Result::ok)
        .filter(|p| {
            !p.file_name()
                .map(|n| n.to_string_lossy().ends_with("_combined.csv"))
                .unwrap_or(false)
        })
        .collect();
    paths.sort();

    for path in paths {
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let bytes = fs::read(&path)?;
        let text = String::from_utf8_lossy(&bytes).into_owned();

        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(Cursor::new(text));

        let mut rows = Vec::new();
        for record in rdr.records() {
            let record = record?;
            rows.push(record.iter().map(str::to_string).collect());
        }
        debug!(batch = %name, rows = rows.len(), "batch loaded");
        batches.push((name, rows));
    }

    if batches.is_empty() {
        return Err(PipelineError::NoBatches(doc_dir.to_path_buf()));
    }
    Ok(batches)
}

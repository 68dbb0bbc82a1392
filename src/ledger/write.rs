use crate::error::PipelineError;
use crate::ledger::NormalizedRecord;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Write the combined ledger for one document. The header row and column
/// order come from the record struct itself, so the on-disk contract and
/// the type cannot drift apart. Output is deterministic: identical records
/// produce identical bytes.
pub fn write_records(path: &Path, records: &[NormalizedRecord]) -> Result<(), PipelineError> {
    let file = File::create(path)?;
    let mut wtr = csv::Writer::from_writer(BufWriter::new(file));
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    info!(path = %path.display(), records = records.len(), "ledger written");
    Ok(())
}

/// Read a combined ledger back. Used by downstream consumers and by the
/// round-trip tests; absent numeric fields come back absent, not zero.
pub fn read_records(path: &Path) -> Result<Vec<NormalizedRecord>, PipelineError> {
    let mut rdr = csv::Reader::from_path(path)?;
    let mut records = Vec::new();
    for result in rdr.deserialize() {
        records.push(result?);
    }
    Ok(records)
}

/// Append one entry to the per-run error artifact, separate from the main
/// output so a batch run's failures are auditable afterwards.
pub fn append_error_log(path: &Path, source: &str, error: &str) -> Result<(), PipelineError> {
    let mut file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;
    write!(file, "File: {source}\nError: {error}\n\n")?;
    Ok(())
}

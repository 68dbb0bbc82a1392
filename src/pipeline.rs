use crate::clean::filter::{classify, RowClass};
use crate::clean::merge::merge_batches;
use crate::clean::sections::tag_sections;
use crate::clean::stitch::stitch_descriptions;
use crate::config::CleanConfig;
use crate::error::PipelineError;
use crate::extract::{load_batches, RawBatch};
use crate::ledger::enrich::{finalize, DocumentContext};
use crate::ledger::normalize::Normalizer;
use crate::ledger::registry::CountryLookup;
use crate::ledger::week::parse_reporting_window;
use crate::ledger::write::{append_error_log, write_records};
use crate::ledger::NormalizedRecord;
use anyhow::{Context, Result};
use rayon::prelude::*;
use std::fs;
use std::path::Path;
use tracing::{error, info, instrument};

/// Run the full reconstruction for one document's extracted row batches.
/// Strictly sequential: section state and description lookahead both depend
/// on row order. All-or-nothing: any fatal error yields no records at all.
pub fn reconstruct_records(
    source_name: &str,
    batches: Vec<RawBatch>,
    cfg: &CleanConfig,
    registry: &dyn CountryLookup,
    anchor_year: i32,
) -> Result<Vec<NormalizedRecord>, PipelineError> {
    let window = parse_reporting_window(source_name, anchor_year)?;
    let ctx = DocumentContext::new(source_name, window);

    // row filter, per batch, keeping per-batch admission stats
    let mut admitted = Vec::with_capacity(batches.len());
    for (name, rows) in batches {
        let total = rows.len();
        let kept: Vec<(Vec<String>, RowClass)> = rows
            .into_iter()
            .map(|cells| {
                let class = classify(&cells, cfg);
                (cells, class)
            })
            .filter(|(_, class)| *class != RowClass::Drop)
            .collect();
        info!(batch = %name, kept = kept.len(), total, "rows filtered");
        admitted.push((name, kept));
    }

    // deterministic cross-batch order, then the sequential passes
    let merged = merge_batches(admitted);
    let tagged = tag_sections(merged);
    let stitched = stitch_descriptions(tagged, cfg, source_name)?;

    let mut normalizer = Normalizer::new();
    let mut records = Vec::with_capacity(stitched.len());
    for (idx, row) in stitched.iter().enumerate() {
        if let Some(core) = normalizer.normalize(row, source_name, idx)? {
            records.push(finalize(core, &ctx, registry)?);
        }
    }

    Ok(records)
}

/// Process one document directory end to end and write its combined ledger.
/// Returns the number of records written.
#[instrument(level = "info", skip_all, fields(source = %source_name))]
pub fn process_document(
    doc_dir: &Path,
    out_file: &Path,
    source_name: &str,
    cfg: &CleanConfig,
    registry: &dyn CountryLookup,
    anchor_year: i32,
) -> Result<usize, PipelineError> {
    let batches = load_batches(doc_dir)?;
    let records = reconstruct_records(source_name, batches, cfg, registry, anchor_year)?;
    write_records(out_file, &records)?;
    Ok(records.len())
}

#[derive(Debug, Default)]
pub struct RunSummary {
    pub processed: usize,
    pub failed: usize,
    pub records: usize,
}

/// Process every document directory under `input_root`, in parallel across
/// documents. One document's failure is recorded in the error artifact and
/// never aborts the others.
pub fn run_all(
    input_root: &Path,
    output_root: &Path,
    cfg: &CleanConfig,
    registry: &dyn CountryLookup,
    anchor_year: i32,
) -> Result<RunSummary> {
    fs::create_dir_all(output_root)
        .with_context(|| format!("creating output root {}", output_root.display()))?;

    let mut doc_dirs: Vec<_> = fs::read_dir(input_root)
        .with_context(|| format!("reading input root {}", input_root.display()))?
        .filter_map(Result::ok)
        .map(|e| e.path())
        .filter(|p| p.is_dir())
        .collect();
    doc_dirs.sort();
    info!(documents = doc_dirs.len(), "starting batch run");

    let outcomes: Vec<(String, Result<usize, PipelineError>)> = doc_dirs
        .par_iter()
        .map(|doc_dir| {
            let source_name = doc_dir
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            let out_file = output_root.join(format!("{source_name}_combined.csv"));
            let outcome =
                process_document(doc_dir, &out_file, &source_name, cfg, registry, anchor_year);
            (source_name, outcome)
        })
        .collect();

    let mut summary = RunSummary::default();
    let error_log = output_root.join("error_log.txt");
    for (source_name, outcome) in outcomes {
        match outcome {
            Ok(count) => {
                summary.processed += 1;
                summary.records += count;
            }
            Err(e) => {
                error!(source = %source_name, "document failed: {e}");
                append_error_log(&error_log, &source_name, &e.to_string())?;
                summary.failed += 1;
            }
        }
    }

    info!(
        processed = summary.processed,
        failed = summary.failed,
        records = summary.records,
        "batch run complete"
    );
    Ok(summary)
}

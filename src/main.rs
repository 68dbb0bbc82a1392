use anyhow::Result;
use oewscraper::{
    config::CleanConfig,
    ledger::{registry::Iso3Registry, week::current_anchor_year},
    pipeline,
};
use std::env;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_span_events(fmt::format::FmtSpan::CLOSE)
        .init();
    info!("startup");

    // ─── 2) configure dirs ───────────────────────────────────────────
    // one subdirectory of extracted table CSVs per bulletin under the
    // input root; combined ledgers and error_log.txt land in the output root
    let mut args = env::args().skip(1);
    let input_root = PathBuf::from(args.next().unwrap_or_else(|| "tables".to_string()));
    let output_root = PathBuf::from(args.next().unwrap_or_else(|| "ledger".to_string()));
    let cfg = match args.next() {
        Some(path) => CleanConfig::from_file(path)?,
        None => CleanConfig::default(),
    };

    rayon::ThreadPoolBuilder::new()
        .num_threads(num_cpus::get())
        .build_global()
        .ok();

    // ─── 3) process all documents ────────────────────────────────────
    let summary = pipeline::run_all(
        &input_root,
        &output_root,
        &cfg,
        &Iso3Registry,
        current_anchor_year(),
    )?;

    info!(
        processed = summary.processed,
        failed = summary.failed,
        records = summary.records,
        "done"
    );
    Ok(())
}

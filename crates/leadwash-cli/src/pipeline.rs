//! Cleaning run with explicit stages.
//!
//! The run follows these stages in order:
//! 1. **Ingest**: load the raw lead CSV
//! 2. **Clean**: normalize every field, drop rows without a valid phone
//! 3. **Output**: write the cleaned CSV and optional JSON summary
//!
//! A load failure aborts the run before any output is written.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use leadwash_clean::clean_dataset;
use leadwash_ingest::{read_leads, write_leads};
use leadwash_model::CleanSummary;

/// File name used when no explicit output path is given.
pub const DEFAULT_OUTPUT_NAME: &str = "cleaned_data.csv";

/// Options for a cleaning run.
#[derive(Debug, Clone, Default)]
pub struct CleanOptions {
    /// Output file for the cleaned CSV (default: [`DEFAULT_OUTPUT_NAME`]
    /// next to the input).
    pub output: Option<PathBuf>,
    /// Validate and report without writing any files.
    pub dry_run: bool,
    /// Optional path for a machine-readable JSON summary.
    pub summary_json: Option<PathBuf>,
}

/// Result of a cleaning run.
#[derive(Debug)]
pub struct CleanRunResult {
    pub summary: CleanSummary,
    pub output_path: Option<PathBuf>,
    pub summary_json_path: Option<PathBuf>,
}

/// Run the full pipeline over one input file.
pub fn run_clean(input: &Path, options: &CleanOptions) -> Result<CleanRunResult> {
    let run_span = info_span!("clean_run", input = %input.display());
    let _run_guard = run_span.enter();

    let ingest_start = Instant::now();
    let records = info_span!("ingest")
        .in_scope(|| read_leads(input))
        .with_context(|| format!("load {}", input.display()))?;
    info!(
        row_count = records.len(),
        duration_ms = ingest_start.elapsed().as_millis(),
        "ingest complete"
    );

    let clean_start = Instant::now();
    let outcome = info_span!("clean").in_scope(|| clean_dataset(records));
    info!(
        retained_rows = outcome.summary.retained_rows,
        dropped_rows = outcome.summary.dropped_rows(),
        valid_emails = outcome.summary.valid_emails,
        duration_ms = clean_start.elapsed().as_millis(),
        "clean complete"
    );

    let output_path = if options.dry_run {
        info!("output skipped (dry run)");
        None
    } else {
        let path = options
            .output
            .clone()
            .unwrap_or_else(|| default_output_path(input));
        let output_start = Instant::now();
        info_span!("output")
            .in_scope(|| write_leads(&path, &outcome.records))
            .with_context(|| format!("write {}", path.display()))?;
        info!(
            path = %path.display(),
            row_count = outcome.records.len(),
            duration_ms = output_start.elapsed().as_millis(),
            "output complete"
        );
        Some(path)
    };

    let summary_json_path = if options.dry_run {
        None
    } else if let Some(path) = &options.summary_json {
        let file = std::fs::File::create(path)
            .with_context(|| format!("create {}", path.display()))?;
        serde_json::to_writer_pretty(file, &outcome.summary).context("serialize summary")?;
        Some(path.clone())
    } else {
        None
    };

    Ok(CleanRunResult {
        summary: outcome.summary,
        output_path,
        summary_json_path,
    })
}

fn default_output_path(input: &Path) -> PathBuf {
    input.parent().map_or_else(
        || PathBuf::from(DEFAULT_OUTPUT_NAME),
        |dir| dir.join(DEFAULT_OUTPUT_NAME),
    )
}

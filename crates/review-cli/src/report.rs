//! Report export: the augmented table as CSV and a JSON run summary.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use polars::prelude::{CsvWriter, DataFrame, SerWriter};
use serde::{Deserialize, Serialize};
use tracing::info;

use review_core::AnalysisResult;
use review_model::{AnalysisOptions, DistributionSummary, HistogramSummary, TermCount};

/// File name of the augmented review table.
pub const SCORED_REVIEWS_FILE: &str = "scored_reviews.csv";
/// File name of the JSON run summary.
pub const SUMMARY_FILE: &str = "summary.json";

/// Persisted summary of one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub source: PathBuf,
    /// SHA-256 of the input file bytes.
    pub source_sha256: String,
    pub generated_at: DateTime<Utc>,
    pub options: AnalysisOptions,
    pub total_reviews: usize,
    pub distribution: DistributionSummary,
    pub histogram: HistogramSummary,
    pub terms: Vec<TermCount>,
    pub no_text_available: bool,
}

impl AnalysisReport {
    pub fn new(
        source: &Path,
        source_sha256: String,
        options: &AnalysisOptions,
        result: &AnalysisResult,
    ) -> Self {
        let terms = result
            .terms
            .table()
            .map(|table| table.terms.clone())
            .unwrap_or_default();
        Self {
            source: source.to_path_buf(),
            source_sha256,
            generated_at: Utc::now(),
            options: options.clone(),
            total_reviews: result.total_reviews(),
            distribution: result.distribution.clone(),
            histogram: result.histogram.clone(),
            terms,
            no_text_available: result.terms.is_no_text_available(),
        }
    }
}

/// Paths written by [`write_outputs`].
#[derive(Debug, Clone)]
pub struct WrittenOutputs {
    pub scored_reviews: PathBuf,
    pub summary: PathBuf,
}

/// Writes `scored_reviews.csv` and `summary.json` into `output_dir`,
/// creating the directory if needed.
pub fn write_outputs(
    output_dir: &Path,
    frame: &DataFrame,
    report: &AnalysisReport,
) -> Result<WrittenOutputs> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("create output directory {}", output_dir.display()))?;

    let scored_reviews = output_dir.join(SCORED_REVIEWS_FILE);
    write_frame_csv(&scored_reviews, frame)?;

    let summary = output_dir.join(SUMMARY_FILE);
    let json = serde_json::to_string_pretty(report).context("serialize summary")?;
    fs::write(&summary, json).with_context(|| format!("write {}", summary.display()))?;

    info!(
        scored_reviews = %scored_reviews.display(),
        summary = %summary.display(),
        "report written"
    );
    Ok(WrittenOutputs {
        scored_reviews,
        summary,
    })
}

fn write_frame_csv(path: &Path, frame: &DataFrame) -> Result<()> {
    let mut file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    let mut frame = frame.clone();
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(&mut frame)
        .with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

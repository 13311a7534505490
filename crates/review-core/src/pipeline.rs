//! Review pipeline with explicit stages.
//!
//! 1. **Ingest**: read the CSV into a frame (`analyze_file` only)
//! 2. **Validate**: require the `Review` column
//! 3. **Score**: polarity score and label per review
//! 4. **Aggregate**: label distribution and score histogram
//! 5. **Terms**: word frequencies for the word cloud

use std::path::Path;
use std::time::Instant;

use polars::prelude::DataFrame;
use tracing::{info, info_span};

use review_aggregate::{TermOptions, aggregate, extract_frequencies_with};
use review_ingest::{ValidatedTable, read_review_csv, validate};
use review_model::{
    AnalysisOptions, DistributionSummary, HistogramSummary, ScoredReview, SentimentLabel,
    TermFrequencyOutcome,
};
use review_sentiment::{LabelClassifier, PolarityScorer};

use crate::error::Result;
use crate::scoring::{augment_frame, score_reviews};

/// Everything one pipeline run produces.
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    /// Input columns plus `Sentiment Score` and `Sentiment`.
    pub frame: DataFrame,
    /// One entry per input row, in input order.
    pub reviews: Vec<ScoredReview>,
    pub distribution: DistributionSummary,
    pub histogram: HistogramSummary,
    pub terms: TermFrequencyOutcome,
}

impl AnalysisResult {
    pub fn total_reviews(&self) -> usize {
        self.reviews.len()
    }
}

/// A configured pipeline: one scorer reference plus immutable options.
pub struct ReviewPipeline<'a> {
    scorer: &'a dyn PolarityScorer,
    options: AnalysisOptions,
}

impl<'a> ReviewPipeline<'a> {
    pub fn new(scorer: &'a dyn PolarityScorer) -> Self {
        Self {
            scorer,
            options: AnalysisOptions::default(),
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: AnalysisOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &AnalysisOptions {
        &self.options
    }

    /// Runs the score, aggregate and terms stages over a validated table.
    pub fn run(&self, table: &ValidatedTable) -> Result<AnalysisResult> {
        let rows = table.height();
        let classifier = LabelClassifier::new().with_neutral_band(self.options.neutral_band);

        let score_start = Instant::now();
        let reviews = info_span!("score", scorer = self.scorer.name(), rows).in_scope(|| {
            score_reviews(
                table.reviews(),
                self.scorer,
                &classifier,
                self.options.parallel_scoring,
            )
        });
        let frame = augment_frame(table.frame(), &reviews)?;
        info!(
            rows,
            parallel = self.options.parallel_scoring,
            duration_ms = score_start.elapsed().as_millis(),
            "scoring complete"
        );

        let (distribution, histogram) = info_span!("aggregate")
            .in_scope(|| aggregate(&reviews, self.options.histogram_bins));
        info!(
            positive = distribution.count(SentimentLabel::Positive),
            negative = distribution.count(SentimentLabel::Negative),
            neutral = distribution.count(SentimentLabel::Neutral),
            populated_buckets = histogram.populated(),
            "aggregation complete"
        );

        let term_options = TermOptions::from(&self.options);
        let terms = info_span!("terms", top_n = term_options.top_n)
            .in_scope(|| extract_frequencies_with(table.reviews(), &term_options));
        if let Some(table) = terms.table() {
            info!(terms = table.len(), "term extraction complete");
        }

        Ok(AnalysisResult {
            frame,
            reviews,
            distribution,
            histogram,
            terms,
        })
    }
}

/// Reads, validates and analyzes one CSV file.
///
/// Input and schema errors halt before any scoring happens.
pub fn analyze_file(path: &Path, pipeline: &ReviewPipeline<'_>) -> Result<AnalysisResult> {
    let span = info_span!("analyze", source = %path.display());
    let _guard = span.enter();

    let ingest_start = Instant::now();
    let frame = info_span!("ingest").in_scope(|| read_review_csv(path))?;
    info!(
        rows = frame.height(),
        columns = frame.width(),
        duration_ms = ingest_start.elapsed().as_millis(),
        "ingest complete"
    );

    let table = info_span!("validate").in_scope(|| validate(frame))?;
    pipeline.run(&table)
}

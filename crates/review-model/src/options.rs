//! Configuration options for a pipeline run.

use serde::{Deserialize, Serialize};

/// Number of equal-width histogram buckets.
pub const DEFAULT_HISTOGRAM_BINS: usize = 20;
/// Number of tokens kept for the word cloud.
pub const DEFAULT_TOP_TERMS: usize = 100;
/// Shortest token counted for term frequencies.
pub const DEFAULT_MIN_TOKEN_LEN: usize = 2;

/// Options controlling scoring, aggregation and term extraction.
///
/// With the default `neutral_band` of `0.0` only an exact zero score is
/// `Neutral`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisOptions {
    /// Histogram bucket count.
    pub histogram_bins: usize,
    /// Maximum number of terms kept in the term frequency table.
    pub top_terms: usize,
    /// Scores with `|score| <= neutral_band` are labelled `Neutral`.
    pub neutral_band: f64,
    /// Tokens shorter than this (in characters) are not counted.
    pub min_token_len: usize,
    /// Drop common English stop words before counting terms.
    pub filter_stopwords: bool,
    /// Score reviews on a thread pool. Output order is unaffected.
    pub parallel_scoring: bool,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            histogram_bins: DEFAULT_HISTOGRAM_BINS,
            top_terms: DEFAULT_TOP_TERMS,
            neutral_band: 0.0,
            min_token_len: DEFAULT_MIN_TOKEN_LEN,
            filter_stopwords: true,
            parallel_scoring: false,
        }
    }
}

impl AnalysisOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_histogram_bins(mut self, bins: usize) -> Self {
        self.histogram_bins = bins.max(1);
        self
    }

    #[must_use]
    pub fn with_top_terms(mut self, top_terms: usize) -> Self {
        self.top_terms = top_terms;
        self
    }

    /// Widen the neutral band. Negative or non-finite values reset it to zero.
    #[must_use]
    pub fn with_neutral_band(mut self, band: f64) -> Self {
        self.neutral_band = if band.is_finite() && band > 0.0 {
            band
        } else {
            0.0
        };
        self
    }

    #[must_use]
    pub fn with_min_token_len(mut self, len: usize) -> Self {
        self.min_token_len = len.max(1);
        self
    }

    #[must_use]
    pub fn with_stopword_filter(mut self, enable: bool) -> Self {
        self.filter_stopwords = enable;
        self
    }

    #[must_use]
    pub fn with_parallel_scoring(mut self, enable: bool) -> Self {
        self.parallel_scoring = enable;
        self
    }
}

//! Data model for the customer review sentiment pipeline.
//!
//! These types carry no dependency on the tabular engine so that scorers,
//! aggregators and renderers can share them freely.

pub mod error;
pub mod label;
pub mod options;
pub mod review;
pub mod summary;
pub mod terms;

pub use error::SchemaError;
pub use label::SentimentLabel;
pub use options::{
    AnalysisOptions, DEFAULT_HISTOGRAM_BINS, DEFAULT_MIN_TOKEN_LEN, DEFAULT_TOP_TERMS,
};
pub use review::{REVIEW_COLUMN, SCORE_COLUMN, SENTIMENT_COLUMN, ScoredReview};
pub use summary::{DistributionSummary, HistogramBucket, HistogramSummary, LabelCount};
pub use terms::{TermCount, TermFrequencyOutcome, TermFrequencyTable};

use serde::{Deserialize, Serialize};

use crate::label::SentimentLabel;

/// Name of the mandatory free-text column.
pub const REVIEW_COLUMN: &str = "Review";
/// Column appended to the augmented table holding the polarity score.
pub const SCORE_COLUMN: &str = "Sentiment Score";
/// Column appended to the augmented table holding the label.
pub const SENTIMENT_COLUMN: &str = "Sentiment";

/// A review row with its derived sentiment.
///
/// `row` is the zero-based position in the input table; scored reviews are
/// always kept in input order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredReview {
    pub row: usize,
    pub review: String,
    pub score: f64,
    pub label: SentimentLabel,
}

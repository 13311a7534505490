//! Scoring and labelling stages.

use polars::prelude::{Column, DataFrame, PolarsResult};
use rayon::prelude::*;
use tracing::trace;

use review_model::{SCORE_COLUMN, SENTIMENT_COLUMN, ScoredReview};
use review_sentiment::{LabelClassifier, PolarityScorer, sanitize_score};

/// Scores and labels every review exactly once, preserving input order.
///
/// Scorer output is sanitized, so a misbehaving scorer can never push a
/// score outside `[-1, 1]` or abort the batch.
pub fn score_reviews(
    texts: &[String],
    scorer: &dyn PolarityScorer,
    classifier: &LabelClassifier,
    parallel: bool,
) -> Vec<ScoredReview> {
    let score_one = |row: usize, text: &String| {
        let score = sanitize_score(scorer.score(text));
        let label = classifier.classify(score);
        trace!(row, score, label = %label, "scored review");
        ScoredReview {
            row,
            review: text.clone(),
            score,
            label,
        }
    };
    if parallel {
        texts
            .par_iter()
            .enumerate()
            .map(|(row, text)| score_one(row, text))
            .collect()
    } else {
        texts
            .iter()
            .enumerate()
            .map(|(row, text)| score_one(row, text))
            .collect()
    }
}

/// Copies the input frame and appends the score and label columns.
///
/// Existing columns with the same names are replaced.
pub fn augment_frame(frame: &DataFrame, reviews: &[ScoredReview]) -> PolarsResult<DataFrame> {
    let scores: Vec<f64> = reviews.iter().map(|review| review.score).collect();
    let labels: Vec<&str> = reviews.iter().map(|review| review.label.as_str()).collect();
    let mut augmented = frame.clone();
    augmented.with_column(Column::new(SCORE_COLUMN.into(), scores))?;
    augmented.with_column(Column::new(SENTIMENT_COLUMN.into(), labels))?;
    Ok(augmented)
}

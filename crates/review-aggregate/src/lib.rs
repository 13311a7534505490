//! Aggregation of scored reviews into the data the renderers draw.
//!
//! Every function here is a pure function of its input; an empty input yields
//! empty summaries rather than an error.

pub mod distribution;
pub mod histogram;
pub mod stopwords;
pub mod terms;

pub use distribution::{distribution, distribution_of};
pub use histogram::histogram;
pub use stopwords::is_stopword;
pub use terms::{TermOptions, extract_frequencies, extract_frequencies_with};

use review_model::{DistributionSummary, HistogramSummary, ScoredReview};

/// Label distribution and score histogram for a batch of scored reviews.
pub fn aggregate(
    reviews: &[ScoredReview],
    bins: usize,
) -> (DistributionSummary, HistogramSummary) {
    let scores: Vec<f64> = reviews.iter().map(|review| review.score).collect();
    (distribution_of(reviews), histogram(&scores, bins))
}

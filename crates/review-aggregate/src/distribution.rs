use std::collections::BTreeMap;

use review_model::{DistributionSummary, ScoredReview, SentimentLabel};

/// Counts labels. Only labels that occur appear in the summary.
pub fn distribution<I>(labels: I) -> DistributionSummary
where
    I: IntoIterator<Item = SentimentLabel>,
{
    let mut counts: BTreeMap<SentimentLabel, usize> = BTreeMap::new();
    for label in labels {
        *counts.entry(label).or_insert(0) += 1;
    }
    DistributionSummary::from_counts(&counts)
}

pub fn distribution_of(reviews: &[ScoredReview]) -> DistributionSummary {
    distribution(reviews.iter().map(|review| review.label))
}

//! Equal-width score histogram.

use review_model::{HistogramBucket, HistogramSummary};

/// Half-width of the range used when every score is identical.
const DEGENERATE_HALF_WIDTH: f64 = 0.5;

/// Partitions scores into `bins` equal-width buckets spanning the observed
/// minimum and maximum.
///
/// Buckets are half-open except the last, which includes the maximum. When
/// every score is the same value `v`, the range becomes `[v - 0.5, v + 0.5]`
/// and all scores land in the middle bucket. Non-finite scores are counted
/// as `0.0` so bucket counts always sum to `scores.len()`.
pub fn histogram(scores: &[f64], bins: usize) -> HistogramSummary {
    if scores.is_empty() || bins == 0 {
        return HistogramSummary::default();
    }
    let values: Vec<f64> = scores
        .iter()
        .map(|score| if score.is_finite() { *score } else { 0.0 })
        .collect();
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    let mut counts = vec![0usize; bins];
    let edges = if min == max {
        // Centered on the value so the middle bucket contains it exactly.
        let width = 2.0 * DEGENERATE_HALF_WIDTH / bins as f64;
        let offset = bins as f64 / 2.0;
        counts[bins / 2] = values.len();
        (0..=bins)
            .map(|idx| min + (idx as f64 - offset) * width)
            .collect::<Vec<f64>>()
    } else {
        let edges = bin_edges(min, max, bins);
        let width = (max - min) / bins as f64;
        for value in &values {
            counts[bucket_index(*value, min, width, &edges)] += 1;
        }
        edges
    };

    let buckets = counts
        .into_iter()
        .enumerate()
        .map(|(idx, count)| HistogramBucket {
            start: edges[idx],
            end: edges[idx + 1],
            count,
        })
        .collect();
    HistogramSummary { buckets }
}

/// `bins + 1` edges from `lo` to exactly `hi`.
fn bin_edges(lo: f64, hi: f64, bins: usize) -> Vec<f64> {
    let width = (hi - lo) / bins as f64;
    (0..=bins)
        .map(|idx| if idx == bins { hi } else { lo + idx as f64 * width })
        .collect()
}

/// Bucket holding `value`, checked against the reported edges so the
/// division's rounding can never place a score outside its bucket.
fn bucket_index(value: f64, lo: f64, width: f64, edges: &[f64]) -> usize {
    let last = edges.len() - 2;
    let mut idx = (((value - lo) / width).floor().max(0.0) as usize).min(last);
    while idx > 0 && value < edges[idx] {
        idx -= 1;
    }
    while idx < last && value >= edges[idx + 1] {
        idx += 1;
    }
    idx
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spans_observed_range() {
        let summary = histogram(&[-1.0, 0.0, 1.0], 4);
        assert_eq!(summary.buckets.len(), 4);
        assert_eq!(summary.buckets[0].start, -1.0);
        assert_eq!(summary.buckets[3].end, 1.0);
        let counts: Vec<usize> = summary.buckets.iter().map(|b| b.count).collect();
        assert_eq!(counts, vec![1, 0, 1, 1]);
    }

    #[test]
    fn maximum_lands_in_last_bucket() {
        let summary = histogram(&[0.0, 0.5], 20);
        assert_eq!(summary.buckets[19].count, 1);
        assert_eq!(summary.buckets[0].count, 1);
    }

    #[test]
    fn identical_scores_collapse_to_middle_bucket() {
        let summary = histogram(&[0.8; 5], 20);
        assert_eq!(summary.buckets.len(), 20);
        assert_eq!(summary.populated(), 1);
        assert_eq!(summary.buckets[10].count, 5);
        assert!((summary.buckets[0].start - 0.3).abs() < 1e-12);
        assert!((summary.buckets[19].end - 1.3).abs() < 1e-12);
    }

    #[test]
    fn single_bin_holds_everything() {
        let summary = histogram(&[0.1, 0.2, 0.2], 1);
        assert_eq!(summary.buckets.len(), 1);
        assert_eq!(summary.buckets[0].count, 3);
    }

    #[test]
    fn scores_land_inside_their_bucket() {
        let summary = histogram(&[-1.0, 0.1, 1.0], 20);
        let bucket = summary
            .buckets
            .iter()
            .find(|bucket| bucket.start <= 0.1 && 0.1 < bucket.end)
            .expect("bucket containing 0.1");
        assert_eq!(bucket.count, 1);
        assert_eq!(summary.buckets[0].count, 1);
        assert_eq!(summary.buckets[19].count, 1);
        assert_eq!(summary.total(), 3);
    }

    #[test]
    fn non_finite_scores_still_counted() {
        let summary = histogram(&[f64::NAN, 1.0], 2);
        assert_eq!(summary.total(), 2);
    }
}

//! Aggregate summaries produced from scored reviews.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::label::SentimentLabel;

/// Count of reviews carrying one label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelCount {
    pub label: SentimentLabel,
    pub count: usize,
}

/// Label distribution over a set of scored reviews.
///
/// Only labels that actually occur are stored, ordered by descending count
/// (ties in label display order).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributionSummary {
    entries: Vec<LabelCount>,
}

impl DistributionSummary {
    pub fn from_counts(counts: &BTreeMap<SentimentLabel, usize>) -> Self {
        let mut entries: Vec<LabelCount> = counts
            .iter()
            .filter(|(_, count)| **count > 0)
            .map(|(label, count)| LabelCount {
                label: *label,
                count: *count,
            })
            .collect();
        entries.sort_by(|a, b| b.count.cmp(&a.count).then(a.label.cmp(&b.label)));
        Self { entries }
    }

    pub fn entries(&self) -> &[LabelCount] {
        &self.entries
    }

    pub fn count(&self, label: SentimentLabel) -> usize {
        self.entries
            .iter()
            .find(|entry| entry.label == label)
            .map_or(0, |entry| entry.count)
    }

    pub fn total(&self) -> usize {
        self.entries.iter().map(|entry| entry.count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Fraction of reviews carrying `label`, or 0 when empty.
    pub fn share(&self, label: SentimentLabel) -> f64 {
        let total = self.total();
        if total == 0 {
            0.0
        } else {
            self.count(label) as f64 / total as f64
        }
    }
}

/// One equal-width bucket of the score histogram.
///
/// Buckets are half-open `[start, end)` except the last, which also holds `end`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistogramBucket {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistogramSummary {
    pub buckets: Vec<HistogramBucket>,
}

impl HistogramSummary {
    pub fn total(&self) -> usize {
        self.buckets.iter().map(|bucket| bucket.count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Number of buckets holding at least one score.
    pub fn populated(&self) -> usize {
        self.buckets.iter().filter(|bucket| bucket.count > 0).count()
    }

    pub fn max_count(&self) -> usize {
        self.buckets
            .iter()
            .map(|bucket| bucket.count)
            .max()
            .unwrap_or(0)
    }
}

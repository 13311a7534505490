//! Score to label classification.

use review_model::SentimentLabel;

/// Labels a score by its sign: `> 0` Positive, `< 0` Negative, otherwise Neutral.
///
/// The comparison against zero is exact.
pub fn classify(score: f64) -> SentimentLabel {
    if score > 0.0 {
        SentimentLabel::Positive
    } else if score < 0.0 {
        SentimentLabel::Negative
    } else {
        SentimentLabel::Neutral
    }
}

/// Classifier with an optional neutral band around zero.
///
/// With the default band of `0.0` this is exactly [`classify`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LabelClassifier {
    neutral_band: f64,
}

impl LabelClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scores with `|score| <= band` become Neutral. Invalid bands are ignored.
    #[must_use]
    pub fn with_neutral_band(mut self, band: f64) -> Self {
        self.neutral_band = if band.is_finite() && band > 0.0 {
            band
        } else {
            0.0
        };
        self
    }

    pub fn neutral_band(&self) -> f64 {
        self.neutral_band
    }

    pub fn classify(&self, score: f64) -> SentimentLabel {
        if self.neutral_band > 0.0 && score.abs() <= self.neutral_band {
            SentimentLabel::Neutral
        } else {
            classify(score)
        }
    }
}

/// Maps review text to a polarity score.
///
/// Implementations must be pure and total: every input, including the empty
/// string, yields a finite score in `[-1, 1]`, and `""` scores `0.0`. The
/// pipeline calls `score` exactly once per review, possibly from several
/// threads, hence the `Send + Sync` bound.
pub trait PolarityScorer: Send + Sync {
    fn score(&self, text: &str) -> f64;

    /// Short name used in logs and reports.
    fn name(&self) -> &str {
        "custom"
    }
}

impl<F> PolarityScorer for F
where
    F: Fn(&str) -> f64 + Send + Sync,
{
    fn score(&self, text: &str) -> f64 {
        self(text)
    }
}

/// Forces a raw scorer output into the contract range.
///
/// Non-finite values become `0.0`; everything else is clamped to `[-1, 1]`.
pub fn sanitize_score(raw: f64) -> f64 {
    if raw.is_finite() {
        raw.clamp(-1.0, 1.0)
    } else {
        0.0
    }
}

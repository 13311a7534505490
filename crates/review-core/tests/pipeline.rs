//! End-to-end pipeline tests against the lexicon scorer and a fake scorer.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use polars::prelude::DataFrame;
use proptest::prelude::*;

use review_core::{AnalysisError, ReviewPipeline, analyze_file};
use review_ingest::{ValidatedTable, validate};
use review_model::{
    AnalysisOptions, REVIEW_COLUMN, SCORE_COLUMN, SENTIMENT_COLUMN, SchemaError, SentimentLabel,
};
use review_sentiment::LexiconScorer;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

struct WarnCounter(Arc<AtomicUsize>);

impl<S: Subscriber> Layer<S> for WarnCounter {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() == Level::WARN {
            self.0.fetch_add(1, Ordering::Relaxed);
        }
    }
}

fn table(reviews: &[&str]) -> ValidatedTable {
    let column: Vec<String> = reviews.iter().map(|review| (*review).to_string()).collect();
    let frame = DataFrame::new(vec![polars::prelude::Column::new(REVIEW_COLUMN.into(), column)])
        .expect("frame");
    validate(frame).expect("validate")
}

fn write_csv(dir: &tempfile::TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("reviews.csv");
    fs::write(&path, contents).expect("write csv");
    path
}

#[test]
fn mixed_reviews_get_one_of_each_label() {
    let scorer = LexiconScorer::default();
    let result = ReviewPipeline::new(&scorer)
        .run(&table(&[
            "I love this product!",
            "Terrible experience.",
            "It was okay.",
        ]))
        .expect("run");

    assert!(result.reviews[0].score > 0.0);
    assert!(result.reviews[1].score < 0.0);
    assert_eq!(result.reviews[2].score, 0.0);
    assert_eq!(result.distribution.count(SentimentLabel::Positive), 1);
    assert_eq!(result.distribution.count(SentimentLabel::Negative), 1);
    assert_eq!(result.distribution.count(SentimentLabel::Neutral), 1);
    assert_eq!(result.histogram.total(), 3);
    assert_eq!(result.histogram.buckets.len(), 20);
}

#[test]
fn empty_reviews_are_neutral_without_terms() {
    let scorer = LexiconScorer::default();
    let result = ReviewPipeline::new(&scorer)
        .run(&table(&["", "", "", ""]))
        .expect("run");

    assert!(result.reviews.iter().all(|review| review.score == 0.0));
    assert_eq!(result.distribution.entries().len(), 1);
    assert_eq!(result.distribution.count(SentimentLabel::Neutral), 4);
    assert!(result.terms.is_no_text_available());
}

#[test]
fn empty_word_cloud_warns_once() {
    let warnings = Arc::new(AtomicUsize::new(0));
    let subscriber = tracing_subscriber::registry().with(WarnCounter(Arc::clone(&warnings)));
    let scorer = LexiconScorer::default();
    let input = table(&["", "", ""]);

    let result = tracing::subscriber::with_default(subscriber, || {
        ReviewPipeline::new(&scorer).run(&input)
    })
    .expect("run");

    assert!(result.terms.is_no_text_available());
    assert_eq!(warnings.load(Ordering::Relaxed), 1);
}

#[test]
fn missing_review_column_halts_before_scoring() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(&dir, "Id,Comment\n1,great\n2,awful\n");
    let calls = AtomicUsize::new(0);
    let scorer = |_: &str| {
        calls.fetch_add(1, Ordering::Relaxed);
        0.0
    };

    let err = analyze_file(&path, &ReviewPipeline::new(&scorer)).unwrap_err();

    assert!(matches!(
        err,
        AnalysisError::Schema(SchemaError::MissingColumn(ref column)) if column == "Review"
    ));
    assert_eq!(calls.load(Ordering::Relaxed), 0);
}

#[test]
fn identical_reviews_collapse_histogram() {
    let reviews = vec!["great"; 1000];
    let scorer = LexiconScorer::default();
    let result = ReviewPipeline::new(&scorer)
        .run(&table(&reviews))
        .expect("run");

    let terms = result.terms.table().expect("terms");
    let top = terms.top().expect("top term");
    assert_eq!(top.term, "great");
    assert_eq!(top.count, 1000);
    assert_eq!(result.histogram.populated(), 1);
    assert_eq!(result.histogram.max_count(), 1000);
    assert_eq!(result.distribution.count(SentimentLabel::Positive), 1000);
}

#[test]
fn fake_scorer_drives_labels() {
    let scorer = |text: &str| match text {
        "up" => 0.25,
        "down" => -0.75,
        _ => 0.0,
    };
    let result = ReviewPipeline::new(&scorer)
        .run(&table(&["up", "down", "sideways", "up"]))
        .expect("run");

    let labels: Vec<SentimentLabel> = result.reviews.iter().map(|review| review.label).collect();
    assert_eq!(
        labels,
        vec![
            SentimentLabel::Positive,
            SentimentLabel::Negative,
            SentimentLabel::Neutral,
            SentimentLabel::Positive,
        ]
    );
    assert_eq!(result.distribution.entries()[0].label, SentimentLabel::Positive);
    assert_eq!(result.distribution.entries()[0].count, 2);
}

#[test]
fn neutral_band_widens_neutral_label() {
    let scorer = |text: &str| if text == "meh" { 0.04 } else { 0.5 };
    let input = table(&["meh", "good"]);

    let strict = ReviewPipeline::new(&scorer).run(&input).expect("run");
    let banded = ReviewPipeline::new(&scorer)
        .with_options(AnalysisOptions::new().with_neutral_band(0.05))
        .run(&input)
        .expect("run");

    assert_eq!(strict.reviews[0].label, SentimentLabel::Positive);
    assert_eq!(banded.reviews[0].label, SentimentLabel::Neutral);
    assert_eq!(banded.reviews[1].label, SentimentLabel::Positive);
}

#[test]
fn augmented_frame_keeps_input_columns() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(
        &dir,
        "Id,Review\n1,Great value and fast shipping\n2,The box arrived damaged\n",
    );
    let scorer = LexiconScorer::default();

    let result = analyze_file(&path, &ReviewPipeline::new(&scorer)).expect("analyze");

    let names: Vec<String> = result
        .frame
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();
    assert_eq!(names, vec!["Id", REVIEW_COLUMN, SCORE_COLUMN, SENTIMENT_COLUMN]);
    assert_eq!(result.frame.height(), 2);
    assert_eq!(result.total_reviews(), 2);
}

#[test]
fn missing_file_is_an_input_error() {
    let dir = tempfile::tempdir().unwrap();
    let scorer = LexiconScorer::default();
    let err = analyze_file(&dir.path().join("absent.csv"), &ReviewPipeline::new(&scorer))
        .unwrap_err();
    assert!(matches!(err, AnalysisError::Input(_)));
}

#[test]
fn repeated_runs_are_identical() {
    let scorer = LexiconScorer::default();
    let pipeline = ReviewPipeline::new(&scorer);
    let input = table(&[
        "Great phone, great battery",
        "Not good at all",
        "Shipping was slow but support was helpful",
    ]);

    let first = pipeline.run(&input).expect("run");
    let second = pipeline.run(&input).expect("run");

    assert_eq!(first.reviews, second.reviews);
    assert_eq!(first.distribution, second.distribution);
    assert_eq!(first.histogram, second.histogram);
    assert_eq!(first.terms, second.terms);
}

proptest! {
    #[test]
    fn parallel_scoring_preserves_order(reviews in prop::collection::vec("[a-z ]{0,24}", 0..40)) {
        let refs: Vec<&str> = reviews.iter().map(String::as_str).collect();
        let input = table(&refs);
        let scorer = LexiconScorer::default();

        let serial = ReviewPipeline::new(&scorer).run(&input).unwrap();
        let parallel = ReviewPipeline::new(&scorer)
            .with_options(AnalysisOptions::new().with_parallel_scoring(true))
            .run(&input)
            .unwrap();

        prop_assert_eq!(&serial.reviews, &parallel.reviews);
        prop_assert_eq!(serial.distribution.total(), reviews.len());
        prop_assert_eq!(serial.histogram.total(), reviews.len());
        for (row, review) in serial.reviews.iter().enumerate() {
            prop_assert_eq!(review.row, row);
            prop_assert_eq!(&review.review, &reviews[row]);
        }
    }
}

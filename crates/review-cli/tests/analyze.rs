//! Integration tests for the analyze and languages commands.

use std::fs;
use std::path::{Path, PathBuf};

use review_cli::commands::{AnalyzeRequest, languages_table, run_analyze};
use review_cli::locale::Language;
use review_cli::report::{AnalysisReport, SCORED_REVIEWS_FILE, SUMMARY_FILE};
use review_cli::summary::{RenderConfig, render_analysis};
use review_model::{AnalysisOptions, SentimentLabel};

const MIXED_REVIEWS: &str =
    "Id,Review\n1,I love this product!\n2,Terrible experience.\n3,It was okay.\n";

fn write(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write fixture");
    path
}

fn request(dir: &Path, input: Option<PathBuf>) -> AnalyzeRequest {
    AnalyzeRequest {
        input,
        working_dir: dir.to_path_buf(),
        lexicon: None,
        output_dir: None,
        options: AnalysisOptions::default(),
    }
}

fn plain() -> RenderConfig {
    RenderConfig::default().with_styling(false)
}

#[test]
fn analyze_renders_every_section() {
    let dir = tempfile::tempdir().unwrap();
    let input = write(dir.path(), "reviews.csv", MIXED_REVIEWS);

    let outcome = run_analyze(&request(dir.path(), Some(input))).expect("analyze");
    let rendered = render_analysis(&outcome.result, &outcome.source, &plain());

    let text = Language::English.text();
    assert!(rendered.contains(text.title));
    assert!(rendered.contains(text.sentiment_distribution));
    assert!(rendered.contains(text.word_cloud));
    assert!(rendered.contains(text.score_distribution));
    assert!(!rendered.contains(text.default_used));
    assert!(!rendered.contains(text.raw_data));
    assert!(rendered.contains("Reviews: 3"));
    assert!(rendered.contains("Number of Reviews"));
}

#[test]
fn distribution_serializes_in_display_order() {
    let dir = tempfile::tempdir().unwrap();
    let input = write(dir.path(), "reviews.csv", MIXED_REVIEWS);

    let outcome = run_analyze(&request(dir.path(), Some(input))).expect("analyze");
    let json = serde_json::to_string_pretty(&outcome.result.distribution).unwrap();

    insta::assert_snapshot!(json, @r#"
    {
      "entries": [
        {
          "label": "Positive",
          "count": 1
        },
        {
          "label": "Negative",
          "count": 1
        },
        {
          "label": "Neutral",
          "count": 1
        }
      ]
    }
    "#);
}

#[test]
fn missing_input_falls_back_to_sample() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "customer_review.csv", MIXED_REVIEWS);

    let outcome = run_analyze(&request(dir.path(), None)).expect("analyze");
    assert!(outcome.source.is_default_sample());

    let config = plain().with_language(Language::Hindi);
    let rendered = render_analysis(&outcome.result, &outcome.source, &config);
    assert!(rendered.contains(Language::Hindi.text().default_used));
    assert!(rendered.contains(Language::Hindi.text().title));
}

#[test]
fn missing_sample_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = run_analyze(&request(dir.path(), None)).unwrap_err();
    assert!(format!("{err:#}").contains("input file not found"));
}

#[test]
fn missing_review_column_reports_schema_error() {
    let dir = tempfile::tempdir().unwrap();
    let input = write(dir.path(), "comments.csv", "Id,Comment\n1,great\n");

    let err = run_analyze(&request(dir.path(), Some(input))).unwrap_err();

    assert!(format!("{err:#}").contains("the CSV must contain a 'Review' column"));
}

#[test]
fn blank_reviews_show_no_text_notice() {
    let dir = tempfile::tempdir().unwrap();
    let input = write(dir.path(), "blank.csv", "Id,Review\n1,\n2,\n");

    let outcome = run_analyze(&request(dir.path(), Some(input))).expect("analyze");
    let rendered = render_analysis(&outcome.result, &outcome.source, &plain());

    assert!(outcome.result.terms.is_no_text_available());
    assert_eq!(
        outcome.result.distribution.count(SentimentLabel::Neutral),
        2
    );
    assert!(rendered.contains(Language::English.text().no_text_available));
}

#[test]
fn raw_data_is_truncated_to_max_rows() {
    let dir = tempfile::tempdir().unwrap();
    let mut contents = String::from("Review\n");
    for index in 0..30 {
        contents.push_str(&format!("good item {index}\n"));
    }
    let input = write(dir.path(), "many.csv", &contents);

    let outcome = run_analyze(&request(dir.path(), Some(input))).expect("analyze");
    let config = plain().with_show_data(true).with_max_rows(5);
    let rendered = render_analysis(&outcome.result, &outcome.source, &config);

    assert!(rendered.contains(Language::English.text().raw_data));
    assert!(rendered.contains("Sentiment Score"));
    assert!(rendered.contains("… 25 more rows"));
}

#[test]
fn custom_lexicon_replaces_builtin_words() {
    let dir = tempfile::tempdir().unwrap();
    let input = write(dir.path(), "reviews.csv", "Review\nsplendid\ngreat\n");
    let lexicon = write(dir.path(), "lexicon.csv", "word,polarity\nsplendid,0.9\n");

    let mut request = request(dir.path(), Some(input));
    request.lexicon = Some(lexicon);
    let outcome = run_analyze(&request).expect("analyze");

    assert_eq!(outcome.result.reviews[0].label, SentimentLabel::Positive);
    assert_eq!(outcome.result.reviews[1].label, SentimentLabel::Neutral);
}

#[test]
fn invalid_lexicon_halts() {
    let dir = tempfile::tempdir().unwrap();
    let input = write(dir.path(), "reviews.csv", MIXED_REVIEWS);
    let lexicon = write(dir.path(), "lexicon.csv", "word,polarity\nsplendid,4.0\n");

    let mut request = request(dir.path(), Some(input));
    request.lexicon = Some(lexicon);
    let err = run_analyze(&request).unwrap_err();

    assert!(format!("{err:#}").contains("load lexicon"));
}

#[test]
fn output_dir_receives_csv_and_summary() {
    let dir = tempfile::tempdir().unwrap();
    let input = write(dir.path(), "reviews.csv", MIXED_REVIEWS);
    let output_dir = dir.path().join("out");

    let mut request = request(dir.path(), Some(input.clone()));
    request.output_dir = Some(output_dir.clone());
    let outcome = run_analyze(&request).expect("analyze");

    let outputs = outcome.outputs.expect("outputs written");
    assert_eq!(outputs.scored_reviews, output_dir.join(SCORED_REVIEWS_FILE));
    assert_eq!(outputs.summary, output_dir.join(SUMMARY_FILE));

    let csv = fs::read_to_string(&outputs.scored_reviews).unwrap();
    let header = csv.lines().next().unwrap();
    assert_eq!(header, "Id,Review,Sentiment Score,Sentiment");
    assert_eq!(csv.lines().count(), 4);

    let report: AnalysisReport =
        serde_json::from_str(&fs::read_to_string(&outputs.summary).unwrap()).unwrap();
    assert_eq!(report.source, input);
    assert_eq!(report.total_reviews, 3);
    assert_eq!(report.source_sha256.len(), 64);
    assert_eq!(report.options, AnalysisOptions::default());
    assert_eq!(report.histogram.total(), 3);
    assert!(!report.no_text_available);
    assert!(report.terms.iter().any(|term| term.term == "love"));
}

#[test]
fn languages_table_lists_every_language() {
    let rendered = languages_table(&plain()).to_string();
    for language in Language::ALL {
        assert!(rendered.contains(language.name()));
    }
}

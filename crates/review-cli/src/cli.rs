//! CLI argument definitions for the review analyzer.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use review_model::{DEFAULT_HISTOGRAM_BINS, DEFAULT_TOP_TERMS};

#[derive(Parser)]
#[command(
    name = "review-analyzer",
    version,
    about = "Customer review sentiment analyzer",
    long_about = "Score customer reviews from a CSV file with a 'Review' column.\n\n\
                  Labels each review Positive, Negative or Neutral, and reports the\n\
                  label distribution, a score histogram and word-cloud term counts."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Prefix log lines with a timestamp.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Allow review text in trace logs (redacted otherwise).
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Analyze a review CSV (defaults to customer_review.csv).
    Analyze(AnalyzeArgs),

    /// List supported interface languages.
    Languages,
}

#[derive(Parser)]
pub struct AnalyzeArgs {
    /// Review CSV file. Falls back to customer_review.csv in the current directory.
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Interface language for the rendered report.
    #[arg(long = "language", value_enum, default_value = "english")]
    pub language: LanguageArg,

    /// Print the scored table before the charts.
    #[arg(long = "show-data")]
    pub show_data: bool,

    /// Maximum rows shown in the raw table and term list.
    #[arg(long = "max-rows", value_name = "N", default_value_t = 20)]
    pub max_rows: usize,

    /// Number of histogram buckets.
    #[arg(long = "bins", value_name = "N", default_value_t = DEFAULT_HISTOGRAM_BINS)]
    pub bins: usize,

    /// Number of terms kept for the word cloud.
    #[arg(long = "top-terms", value_name = "N", default_value_t = DEFAULT_TOP_TERMS)]
    pub top_terms: usize,

    /// Scores within this distance of zero are labelled Neutral.
    #[arg(long = "neutral-band", value_name = "EPSILON", default_value_t = 0.0)]
    pub neutral_band: f64,

    /// Count stop words in the word-cloud terms.
    #[arg(long = "keep-stopwords")]
    pub keep_stopwords: bool,

    /// Score reviews on multiple threads.
    #[arg(long = "parallel")]
    pub parallel: bool,

    /// CSV lexicon with `word,polarity` columns replacing the built-in one.
    #[arg(long = "lexicon", value_name = "PATH")]
    pub lexicon: Option<PathBuf>,

    /// Write scored_reviews.csv and summary.json into this directory.
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,
}

/// CLI interface language choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LanguageArg {
    English,
    Telugu,
    Hindi,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

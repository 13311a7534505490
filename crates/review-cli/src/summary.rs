//! Terminal rendering of an analysis run.
//!
//! Rendering consumes the pipeline's summaries as plain data; nothing here
//! feeds back into scoring or aggregation.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use polars::prelude::{AnyValue, DataFrame};

use review_core::AnalysisResult;
use review_ingest::{InputSource, any_to_string};
use review_model::{
    DistributionSummary, HistogramBucket, HistogramSummary, SentimentLabel, TermFrequencyOutcome,
    TermFrequencyTable,
};

use crate::locale::Language;

/// Histogram x-axis label.
pub const SCORE_AXIS_LABEL: &str = "Sentiment Score";
/// Histogram y-axis label.
pub const COUNT_AXIS_LABEL: &str = "Number of Reviews";

const BAR_WIDTH: usize = 30;
const TABLE_WIDTH: u16 = 120;
const DEFAULT_MAX_ROWS: usize = 20;

/// Presentation settings passed explicitly into every renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    pub language: Language,
    /// Print the augmented table before the charts.
    pub show_data: bool,
    /// Row cap for the raw table and the term table.
    pub max_rows: usize,
    /// Emit ANSI styling in tables.
    pub styled: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            language: Language::default(),
            show_data: false,
            max_rows: DEFAULT_MAX_ROWS,
            styled: true,
        }
    }
}

impl RenderConfig {
    #[must_use]
    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    #[must_use]
    pub fn with_show_data(mut self, enable: bool) -> Self {
        self.show_data = enable;
        self
    }

    #[must_use]
    pub fn with_max_rows(mut self, max_rows: usize) -> Self {
        self.max_rows = max_rows.max(1);
        self
    }

    #[must_use]
    pub fn with_styling(mut self, enable: bool) -> Self {
        self.styled = enable;
        self
    }
}

pub fn print_analysis(result: &AnalysisResult, source: &InputSource, config: &RenderConfig) {
    println!("{}", render_analysis(result, source, config));
}

/// Renders the full report: heading, optional raw table, distribution,
/// word-cloud terms and score histogram.
pub fn render_analysis(
    result: &AnalysisResult,
    source: &InputSource,
    config: &RenderConfig,
) -> String {
    let text = config.language.text();
    let mut lines = vec![
        text.title.to_string(),
        text.about.to_string(),
        format!("📝 {}", text.instructions),
        String::new(),
    ];
    if source.is_default_sample() {
        lines.push(format!("⚠ {}", text.default_used));
    }
    lines.push(format!("Source: {}", source.path().display()));
    lines.push(format!("Reviews: {}", result.total_reviews()));

    if config.show_data {
        lines.push(section(text.raw_data));
        lines.push(raw_data_table(&result.frame, config).to_string());
        if result.frame.height() > config.max_rows {
            lines.push(format!(
                "… {} more rows",
                result.frame.height() - config.max_rows
            ));
        }
    }

    lines.push(section(text.sentiment_distribution));
    lines.push(distribution_table(&result.distribution, config).to_string());

    lines.push(section(text.word_cloud));
    match &result.terms {
        TermFrequencyOutcome::Terms(terms) => {
            lines.push(terms_table(terms, config).to_string());
        }
        TermFrequencyOutcome::NoTextAvailable => lines.push(text.no_text_available.to_string()),
    }

    lines.push(section(text.score_distribution));
    lines.push(histogram_table(&result.histogram, config).to_string());
    lines.join("\n")
}

fn section(title: &str) -> String {
    format!("\n{title}")
}

/// Label counts in descending order with their share of all reviews.
pub fn distribution_table(summary: &DistributionSummary, config: &RenderConfig) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Sentiment"),
        header_cell("Reviews"),
        header_cell("Share"),
    ]);
    apply_table_style(&mut table, config);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for entry in summary.entries() {
        table.add_row(vec![
            label_cell(entry.label),
            Cell::new(entry.count),
            Cell::new(format!("{:.1}%", summary.share(entry.label) * 100.0)),
        ]);
    }
    table
}

/// Most frequent terms with their relative word-cloud weight.
pub fn terms_table(terms: &TermFrequencyTable, config: &RenderConfig) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Term"),
        header_cell("Count"),
        header_cell("Weight"),
    ]);
    apply_table_style(&mut table, config);
    align_column(&mut table, 1, CellAlignment::Right);
    for term in terms.iter().take(config.max_rows) {
        table.add_row(vec![
            Cell::new(&term.term).add_attribute(Attribute::Bold),
            Cell::new(term.count),
            Cell::new(bar(term.weight)).fg(Color::Blue),
        ]);
    }
    if terms.len() > config.max_rows {
        table.add_row(vec![
            dim_cell(format!("+{} more", terms.len() - config.max_rows)),
            dim_cell("-"),
            dim_cell("-"),
        ]);
    }
    table
}

/// One row per bucket, in score order, with a proportional bar.
pub fn histogram_table(histogram: &HistogramSummary, config: &RenderConfig) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell(SCORE_AXIS_LABEL),
        header_cell(COUNT_AXIS_LABEL),
        header_cell(""),
    ]);
    apply_table_style(&mut table, config);
    align_column(&mut table, 1, CellAlignment::Right);
    let max = histogram.max_count();
    let last = histogram.buckets.len().saturating_sub(1);
    for (index, bucket) in histogram.buckets.iter().enumerate() {
        let weight = if max == 0 {
            0.0
        } else {
            bucket.count as f64 / max as f64
        };
        let count_cell = if bucket.count == 0 {
            dim_cell(bucket.count)
        } else {
            Cell::new(bucket.count)
        };
        table.add_row(vec![
            Cell::new(bucket_label(bucket, index == last)),
            count_cell,
            Cell::new(bar(weight)).fg(Color::Cyan),
        ]);
    }
    table
}

/// Augmented frame, capped at `max_rows` rows.
pub fn raw_data_table(frame: &DataFrame, config: &RenderConfig) -> Table {
    let mut table = Table::new();
    table.set_header(
        frame
            .get_column_names()
            .into_iter()
            .map(|name| header_cell(name.as_str()))
            .collect::<Vec<_>>(),
    );
    apply_table_style(&mut table, config);
    let rows = frame.height().min(config.max_rows);
    for idx in 0..rows {
        let row: Vec<Cell> = frame
            .get_columns()
            .iter()
            .map(|column| Cell::new(any_to_string(column.get(idx).unwrap_or(AnyValue::Null))))
            .collect();
        table.add_row(row);
    }
    table
}

/// Half-open bucket range; the last bucket is closed like the plot it mimics.
pub fn bucket_label(bucket: &HistogramBucket, is_last: bool) -> String {
    let close = if is_last { ']' } else { ')' };
    format!("[{:+.2}, {:+.2}{close}", bucket.start, bucket.end)
}

/// Horizontal bar for a weight in `[0, 1]`. Any positive weight shows at
/// least one block.
pub fn bar(weight: f64) -> String {
    if !weight.is_finite() || weight <= 0.0 {
        return String::new();
    }
    let filled = ((weight.min(1.0) * BAR_WIDTH as f64).round() as usize).max(1);
    "█".repeat(filled)
}

pub fn apply_table_style(table: &mut Table, config: &RenderConfig) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(TABLE_WIDTH);
    if !config.styled {
        table.force_no_tty();
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn label_cell(label: SentimentLabel) -> Cell {
    let color = match label {
        SentimentLabel::Positive => Color::Green,
        SentimentLabel::Negative => Color::Red,
        SentimentLabel::Neutral => Color::Yellow,
    };
    Cell::new(label).fg(color).add_attribute(Attribute::Bold)
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::{info, info_span, trace};

use review_core::{AnalysisResult, ReviewPipeline, analyze_file};
use review_ingest::{InputSource, fingerprint_file, resolve_input};
use review_model::AnalysisOptions;
use review_sentiment::{Lexicon, LexiconScorer, PolarityScorer};

use crate::locale::Language;
use crate::logging::redact_value;
use crate::report::{AnalysisReport, WrittenOutputs, write_outputs};
use crate::summary::{RenderConfig, apply_table_style};

/// Everything the `analyze` command needs, independent of argument parsing.
#[derive(Debug, Clone)]
pub struct AnalyzeRequest {
    /// Uploaded review file; `None` falls back to the bundled sample.
    pub input: Option<PathBuf>,
    /// Directory searched for the bundled sample.
    pub working_dir: PathBuf,
    /// Optional `word,polarity` CSV replacing the built-in lexicon.
    pub lexicon: Option<PathBuf>,
    /// Write `scored_reviews.csv` and `summary.json` here when set.
    pub output_dir: Option<PathBuf>,
    pub options: AnalysisOptions,
}

#[derive(Debug)]
pub struct AnalyzeOutcome {
    pub source: InputSource,
    pub result: AnalysisResult,
    pub outputs: Option<WrittenOutputs>,
}

pub fn run_analyze(request: &AnalyzeRequest) -> Result<AnalyzeOutcome> {
    let source = resolve_input(request.input.as_deref(), &request.working_dir)
        .context("resolve input")?;
    let scorer = build_scorer(request.lexicon.as_deref())?;
    let pipeline = ReviewPipeline::new(&scorer).with_options(request.options.clone());

    let result = analyze_file(source.path(), &pipeline)
        .with_context(|| format!("analyze {}", source.path().display()))?;
    log_scored_reviews(&result);

    let outputs = match &request.output_dir {
        Some(dir) => {
            let _span = info_span!("export", dir = %dir.display()).entered();
            let sha256 = fingerprint_file(source.path()).context("fingerprint input")?;
            let report = AnalysisReport::new(source.path(), sha256, pipeline.options(), &result);
            Some(write_outputs(dir, &result.frame, &report)?)
        }
        None => None,
    };

    Ok(AnalyzeOutcome {
        source,
        result,
        outputs,
    })
}

pub fn run_languages(config: &RenderConfig) -> Result<()> {
    println!("{}", languages_table(config));
    Ok(())
}

pub fn languages_table(config: &RenderConfig) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Language", "Native name", "Title"]);
    apply_table_style(&mut table, config);
    for language in Language::ALL {
        table.add_row(vec![
            language.name(),
            language.native_name(),
            language.text().title,
        ]);
    }
    table
}

fn build_scorer(lexicon: Option<&Path>) -> Result<LexiconScorer> {
    let scorer = match lexicon {
        Some(path) => {
            let lexicon = Lexicon::from_csv_path(path)
                .with_context(|| format!("load lexicon {}", path.display()))?;
            LexiconScorer::new(lexicon)
        }
        None => LexiconScorer::default(),
    };
    info!(
        scorer = scorer.name(),
        words = scorer.lexicon().len(),
        "scorer ready"
    );
    Ok(scorer)
}

fn log_scored_reviews(result: &AnalysisResult) {
    for review in &result.reviews {
        trace!(
            row = review.row,
            score = review.score,
            label = %review.label,
            review = redact_value(&review.review),
            "review scored"
        );
    }
}

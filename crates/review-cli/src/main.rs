//! Customer review sentiment analyzer CLI.

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use clap::{ColorChoice, Parser};
use tracing::level_filters::LevelFilter;

use review_cli::commands::{AnalyzeRequest, run_analyze, run_languages};
use review_cli::locale::Language;
use review_cli::logging::{LogConfig, LogFormat, init_logging};
use review_cli::summary::{RenderConfig, print_analysis};
use review_model::AnalysisOptions;

mod cli;

use crate::cli::{AnalyzeArgs, Cli, Command, LanguageArg, LogFormatArg, LogLevelArg};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let styled = stdout_styled(cli.color.color);
    let exit_code = match &cli.command {
        Command::Analyze(args) => {
            let render = render_config(args, styled);
            match run_analyze(&analyze_request(args)) {
                Ok(outcome) => {
                    print_analysis(&outcome.result, &outcome.source, &render);
                    if let Some(outputs) = &outcome.outputs {
                        println!();
                        println!("Scored reviews: {}", outputs.scored_reviews.display());
                        println!("Summary: {}", outputs.summary.display());
                    }
                    0
                }
                Err(error) => {
                    eprintln!("error: {error:#}");
                    1
                }
            }
        }
        Command::Languages => {
            match run_languages(&RenderConfig::default().with_styling(styled)) {
                Ok(()) => 0,
                Err(error) => {
                    eprintln!("error: {error:#}");
                    1
                }
            }
        }
    };
    std::process::exit(exit_code);
}

fn analyze_request(args: &AnalyzeArgs) -> AnalyzeRequest {
    let options = AnalysisOptions::new()
        .with_histogram_bins(args.bins)
        .with_top_terms(args.top_terms)
        .with_neutral_band(args.neutral_band)
        .with_stopword_filter(!args.keep_stopwords)
        .with_parallel_scoring(args.parallel);
    AnalyzeRequest {
        input: args.input.clone(),
        working_dir: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
        lexicon: args.lexicon.clone(),
        output_dir: args.output_dir.clone(),
        options,
    }
}

fn render_config(args: &AnalyzeArgs, styled: bool) -> RenderConfig {
    let language = match args.language {
        LanguageArg::English => Language::English,
        LanguageArg::Telugu => Language::Telugu,
        LanguageArg::Hindi => Language::Hindi,
    };
    RenderConfig::default()
        .with_language(language)
        .with_show_data(args.show_data)
        .with_max_rows(args.max_rows)
        .with_styling(styled)
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let level_filter = match cli.log_level {
        Some(LogLevelArg::Error) => LevelFilter::ERROR,
        Some(LogLevelArg::Warn) => LevelFilter::WARN,
        Some(LogLevelArg::Info) => LevelFilter::INFO,
        Some(LogLevelArg::Debug) => LevelFilter::DEBUG,
        Some(LogLevelArg::Trace) => LevelFilter::TRACE,
        None => cli.verbosity.tracing_level_filter(),
    };
    let format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    let with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    LogConfig::default()
        .with_level_filter(level_filter)
        .with_env_filter(!(cli.verbosity.is_present() || cli.log_level.is_some()))
        .with_format(format)
        .with_log_file(cli.log_file.clone())
        .with_log_data(cli.log_data)
        .with_timestamps(cli.log_timestamps)
        .with_ansi(with_ansi)
}

fn stdout_styled(choice: ColorChoice) -> bool {
    match choice {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => io::stdout().is_terminal(),
    }
}

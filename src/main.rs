//! csvscrub - clean messy CSV exports

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use csvscrub::config::{parse_column_list, ColumnSelection, Config, ReferenceMode, ReportFormat};
use csvscrub::logging;
use csvscrub::output::{print_error, render_to_stdout};
use csvscrub::pipeline;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliReportFormat {
    Terminal,
    Json,
}

impl From<CliReportFormat> for ReportFormat {
    fn from(f: CliReportFormat) -> Self {
        match f {
            CliReportFormat::Terminal => ReportFormat::Terminal,
            CliReportFormat::Json => ReportFormat::Json,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliReferenceMode {
    /// Keep only the first digit run: [15][a] -> 15
    Digits,
    /// Drop bracket groups and keep whatever text remains
    StripBrackets,
}

impl From<CliReferenceMode> for ReferenceMode {
    fn from(m: CliReferenceMode) -> Self {
        match m {
            CliReferenceMode::Digits => ReferenceMode::Digits,
            CliReferenceMode::StripBrackets => ReferenceMode::StripBrackets,
        }
    }
}

/// Clean a messy CSV file: normalize headers, scrub money, integer, reference and text columns
#[derive(Parser, Debug)]
#[command(name = "csvscrub")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to input CSV file
    #[arg(short, long)]
    input: PathBuf,

    /// Path to output CSV file (extension is forced to .csv)
    #[arg(short, long)]
    output: PathBuf,

    /// Column(s) to treat as money (comma-separated, normalized names)
    #[arg(long, value_delimiter = ',')]
    money_cols: Vec<String>,

    /// Column(s) to treat as integers (comma-separated)
    #[arg(long, value_delimiter = ',')]
    int_cols: Vec<String>,

    /// Column(s) to clean as free text (comma-separated)
    #[arg(long, value_delimiter = ',')]
    text_cols: Vec<String>,

    /// Column(s) holding bracketed references (comma-separated)
    #[arg(long, value_delimiter = ',')]
    ref_cols: Vec<String>,

    /// How reference columns are cleaned
    #[arg(long, value_enum, default_value = "digits")]
    ref_mode: CliReferenceMode,

    /// Keep Unicode symbols in text columns (only the punctuation filter applies)
    #[arg(long)]
    keep_symbols: bool,

    /// Only classify columns named explicitly
    #[arg(long)]
    no_heuristics: bool,

    /// Column to sort by after cleaning (normalized like the headers)
    #[arg(long, default_value = "rank")]
    sort_by: String,

    /// Keep the input row order
    #[arg(long, conflicts_with = "sort_by")]
    no_sort: bool,

    /// Field delimiter (defaults to tab for .tsv input, comma otherwise)
    #[arg(short, long)]
    delimiter: Option<char>,

    /// Number of rows shown in the report preview
    #[arg(long, default_value_t = 5)]
    preview_rows: usize,

    /// Report format
    #[arg(short, long, value_enum, default_value = "terminal")]
    format: CliReportFormat,

    /// Print debug logs to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            print_error(&e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let selection = ColumnSelection {
        money: parse_column_list(&cli.money_cols),
        integer: parse_column_list(&cli.int_cols),
        text: parse_column_list(&cli.text_cols),
        reference: parse_column_list(&cli.ref_cols),
    };

    let mut config = Config::new(cli.input.clone(), cli.output)
        .with_selection(selection)
        .with_reference_mode(cli.ref_mode.into())
        .with_strip_symbols(!cli.keep_symbols)
        .with_sort_by((!cli.no_sort).then_some(cli.sort_by))
        .with_preview_rows(cli.preview_rows)
        .with_report_format(cli.format.into());

    if cli.no_heuristics {
        config = config.with_heuristics(None);
    }
    if let Some(delimiter) = cli.delimiter {
        let byte = u8::try_from(delimiter)
            .ok()
            .filter(u8::is_ascii)
            .with_context(|| format!("delimiter must be a single ASCII character, got {delimiter:?}"))?;
        config = config.with_delimiter(byte);
    }

    let report = pipeline::run(&config)
        .with_context(|| format!("Failed to clean {}", cli.input.display()))?;

    render_to_stdout(&report, config.report_format)?;
    Ok(())
}

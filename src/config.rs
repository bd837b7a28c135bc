//! Configuration handling for csvscrub

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::model::Category;

/// Output format for the cleaning report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    #[default]
    Terminal,
    Json,
}

impl std::str::FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "terminal" => Ok(ReportFormat::Terminal),
            "json" => Ok(ReportFormat::Json),
            _ => Err(format!("Unknown report format: {}", s)),
        }
    }
}

/// Which reference-cleaner contract to apply
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReferenceMode {
    /// Keep only the first digit run: `[15][a]` -> `15`
    #[default]
    Digits,
    /// Legacy: drop every bracket group and keep the trimmed residue
    StripBrackets,
}

/// Options for the free-text cleaner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextOptions {
    /// Drop Unicode symbol-category characters before the punctuation filter
    pub strip_symbols: bool,
}

impl Default for TextOptions {
    fn default() -> Self {
        Self {
            strip_symbols: true,
        }
    }
}

/// Columns named explicitly by the caller, per category.
///
/// Names are compared against normalized headers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSelection {
    pub money: Vec<String>,
    pub integer: Vec<String>,
    pub text: Vec<String>,
    pub reference: Vec<String>,
}

impl ColumnSelection {
    /// Explicit names for one category
    pub fn names(&self, category: Category) -> &[String] {
        match category {
            Category::Money => &self.money,
            Category::Integer => &self.integer,
            Category::Text => &self.text,
            Category::Reference => &self.reference,
        }
    }
}

/// Name-based classification rules used when a column is not listed explicitly
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heuristics {
    /// A header containing any of these substrings is money
    pub money_substrings: Vec<String>,
    /// Exact header names treated as integers
    pub integer_names: Vec<String>,
    /// Exact header names treated as free text
    pub text_names: Vec<String>,
    /// Exact header names treated as reference annotations
    pub reference_names: Vec<String>,
}

impl Default for Heuristics {
    fn default() -> Self {
        fn owned(names: &[&str]) -> Vec<String> {
            names.iter().map(|s| s.to_string()).collect()
        }

        Self {
            money_substrings: owned(&["gross"]),
            integer_names: owned(&["rank", "peak", "all_time_peak", "shows"]),
            text_names: owned(&["tour_title", "artist"]),
            reference_names: owned(&["ref"]),
        }
    }
}

impl Heuristics {
    /// Category suggested by the header name alone
    pub fn classify(&self, name: &str) -> Option<Category> {
        if self.money_substrings.iter().any(|s| name.contains(s.as_str())) {
            Some(Category::Money)
        } else if self.integer_names.iter().any(|n| n == name) {
            Some(Category::Integer)
        } else if self.text_names.iter().any(|n| n == name) {
            Some(Category::Text)
        } else if self.reference_names.iter().any(|n| n == name) {
            Some(Category::Reference)
        } else {
            None
        }
    }
}

/// Configuration for a cleaning run
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the input file
    pub input: PathBuf,
    /// Path to the output file (extension is forced to `.csv`)
    pub output: PathBuf,
    /// Columns named explicitly by the caller
    pub selection: ColumnSelection,
    /// Name heuristics, `None` disables them
    pub heuristics: Option<Heuristics>,
    /// Reference cleaner variant
    pub reference_mode: ReferenceMode,
    /// Text cleaner options
    pub text: TextOptions,
    /// Column to sort by after cleaning
    pub sort_by: Option<String>,
    /// Field delimiter, `None` picks one from the input extension
    pub delimiter: Option<u8>,
    /// Number of rows shown in the report preview
    pub preview_rows: usize,
    /// Report format
    pub report_format: ReportFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::new(),
            output: PathBuf::new(),
            selection: ColumnSelection::default(),
            heuristics: Some(Heuristics::default()),
            reference_mode: ReferenceMode::default(),
            text: TextOptions::default(),
            sort_by: Some("rank".to_string()),
            delimiter: None,
            preview_rows: 5,
            report_format: ReportFormat::default(),
        }
    }
}

impl Config {
    /// Create a new Config with file paths
    pub fn new(input: PathBuf, output: PathBuf) -> Self {
        Self {
            input,
            output,
            ..Default::default()
        }
    }

    /// Set the explicit column lists
    pub fn with_selection(mut self, selection: ColumnSelection) -> Self {
        self.selection = selection;
        self
    }

    /// Replace or disable the name heuristics
    pub fn with_heuristics(mut self, heuristics: Option<Heuristics>) -> Self {
        self.heuristics = heuristics;
        self
    }

    /// Set the reference cleaner variant
    pub fn with_reference_mode(mut self, mode: ReferenceMode) -> Self {
        self.reference_mode = mode;
        self
    }

    /// Enable or disable Unicode symbol stripping in text columns
    pub fn with_strip_symbols(mut self, strip: bool) -> Self {
        self.text.strip_symbols = strip;
        self
    }

    /// Set the sort column, `None` disables sorting
    pub fn with_sort_by(mut self, column: Option<String>) -> Self {
        self.sort_by = column;
        self
    }

    /// Set the field delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = Some(delimiter);
        self
    }

    /// Set the number of preview rows
    pub fn with_preview_rows(mut self, rows: usize) -> Self {
        self.preview_rows = rows;
        self
    }

    /// Set report format
    pub fn with_report_format(mut self, format: ReportFormat) -> Self {
        self.report_format = format;
        self
    }

    /// Output path with the extension forced to `.csv`
    pub fn output_path(&self) -> PathBuf {
        self.output.with_extension("csv")
    }
}

/// Split a comma-separated column list: items are trimmed and lowercased,
/// empty items dropped.
pub fn parse_column_list<S: AsRef<str>>(items: &[S]) -> Vec<String> {
    items
        .iter()
        .flat_map(|item| item.as_ref().split(','))
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}

//! Cleaning pipeline: load, normalize headers, classify, clean, sort, write

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info};

use crate::classify::{classify_columns, Classification};
use crate::clean::{normalize_header, normalize_headers, Cleaner};
use crate::config::Config;
use crate::error::{CleanError, Result};
use crate::model::{CellValue, Table};
use crate::parser::read_table;
use crate::writer::write_table;

/// First rows of the cleaned table
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Preview {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl Preview {
    pub fn from_table(table: &Table, rows: usize) -> Self {
        Self {
            columns: table.columns.iter().map(|c| c.name.clone()).collect(),
            rows: table
                .head(rows)
                .iter()
                .map(|row| row.cells.clone())
                .collect(),
        }
    }
}

/// Summary of one cleaning run
#[derive(Debug, Clone, Serialize)]
pub struct CleanReport {
    pub input: PathBuf,
    pub output: PathBuf,
    /// (rows, columns) as loaded
    pub shape_before: (usize, usize),
    /// (rows, columns) as written
    pub shape_after: (usize, usize),
    pub classification: Classification,
    /// Sort column actually applied, if any
    pub sorted_by: Option<String>,
    pub preview: Preview,
    pub generated_at: DateTime<Utc>,
}

/// Outcome of [`clean_table`]
#[derive(Debug, Clone, PartialEq)]
pub struct CleanOutcome {
    pub classification: Classification,
    pub sorted_by: Option<String>,
}

/// Clean an in-memory table according to `config`.
///
/// Row and column counts are unchanged; only names, cell values and row
/// order change. The first cell that cannot be converted aborts the run.
pub fn clean_table(table: &mut Table, config: &Config) -> Result<CleanOutcome> {
    normalize_headers(table);

    let classification =
        classify_columns(table, &config.selection, config.heuristics.as_ref());

    let cleaner = Cleaner::new(config.reference_mode, config.text);
    for (idx, column) in table.columns.iter().enumerate() {
        let Some(category) = column.category else {
            continue;
        };

        debug!(column = %column.name, %category, "cleaning column");
        for row in &mut table.rows {
            let line = row.source_line;
            let cell = &mut row.cells[idx];
            *cell = cleaner
                .clean(category, cell)
                .map_err(|e| CleanError::Parse {
                    column: column.name.clone(),
                    line,
                    value: e.value,
                    target: e.target,
                })?;
        }
    }

    // The key goes through the same normalization as the headers
    let sort_key = config.sort_by.as_deref().map(|key| normalize_header(key, 0));
    let sorted_by = match sort_key {
        Some(key) if table.sort_by_column(&key) => {
            debug!(column = %key, "sorted rows");
            Some(key)
        }
        Some(key) => {
            info!(column = %key, "sort column not present, keeping input order");
            None
        }
        None => None,
    };

    Ok(CleanOutcome {
        classification,
        sorted_by,
    })
}

/// Run the whole pipeline for the files named in `config`
pub fn run(config: &Config) -> Result<CleanReport> {
    let mut table = read_table(config)?;
    let shape_before = table.shape();

    let outcome = clean_table(&mut table, config)?;

    let output = config.output_path();
    write_table(&table, &output)?;
    info!(
        input = %config.input.display(),
        output = %output.display(),
        classified = outcome.classification.len(),
        "cleaning complete"
    );

    Ok(CleanReport {
        input: config.input.clone(),
        output,
        shape_before,
        shape_after: table.shape(),
        classification: outcome.classification,
        sorted_by: outcome.sorted_by,
        preview: Preview::from_table(&table, config.preview_rows),
        generated_at: Utc::now(),
    })
}

//! CSV file parser

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::{CleanError, Result};
use crate::model::{CellValue, Column, Table};

/// Parser for comma (or otherwise) delimited files with a header row
#[derive(Debug, Clone, Copy)]
pub struct CsvParser {
    delimiter: u8,
}

impl Default for CsvParser {
    fn default() -> Self {
        Self::new(b',')
    }
}

impl CsvParser {
    pub fn new(delimiter: u8) -> Self {
        Self { delimiter }
    }

    /// Parse a file into a table of raw text cells
    pub fn parse(&self, path: &Path) -> Result<Table> {
        let file = File::open(path).map_err(|source| CleanError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.parse_reader(BufReader::new(file), path)
    }

    /// Parse from any reader; `path` is only used in error messages
    pub fn parse_reader<R: Read>(&self, reader: R, path: &Path) -> Result<Table> {
        let csv_error = |source| CleanError::Csv {
            path: path.to_path_buf(),
            source,
        };

        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .delimiter(self.delimiter)
            .from_reader(reader);

        // Read headers
        let headers = csv_reader.headers().map_err(csv_error)?.clone();

        let columns: Vec<Column> = headers
            .iter()
            .enumerate()
            .map(|(i, name)| Column::new(name, i))
            .collect();

        let mut table = Table::new(columns);
        let width = table.column_count();

        // Read rows
        for (row_num, result) in csv_reader.records().enumerate() {
            let record = result.map_err(csv_error)?;
            // +2 for 1-indexing and header when the reader has no position
            let line = record
                .position()
                .map_or(row_num + 2, |p| p.line() as usize);

            if record.len() > width {
                return Err(CleanError::MalformedRow {
                    path: path.to_path_buf(),
                    line,
                    expected: width,
                    found: record.len(),
                });
            }

            let mut cells: Vec<CellValue> = record.iter().map(parse_cell_value).collect();

            // Pad with missing cells if row has fewer columns
            cells.resize(width, CellValue::Missing);

            table.add_row(cells, line);
        }

        Ok(table)
    }
}

/// Markers read as missing, matched exactly (the pandas `read_csv` defaults)
const NA_TOKENS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Raw cells stay verbatim text unless they are an NA marker
fn parse_cell_value(s: &str) -> CellValue {
    if NA_TOKENS.contains(&s) {
        CellValue::Missing
    } else {
        CellValue::Text(s.to_string())
    }
}

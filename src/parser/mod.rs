//! Loader for delimited text files

mod csv;

use std::path::Path;

use tracing::info;

use crate::config::Config;
use crate::error::{CleanError, Result};
use crate::model::Table;

pub use self::csv::CsvParser;

/// Pick the field delimiter: explicit setting first, then tab for `.tsv`, else comma
pub fn delimiter_for(path: &Path, configured: Option<u8>) -> u8 {
    if let Some(delimiter) = configured {
        return delimiter;
    }

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    match ext.as_str() {
        "tsv" | "tab" => b'\t',
        _ => b',',
    }
}

/// Read the input file named by `config` into a table.
///
/// Fails with [`CleanError::InputNotFound`] before opening anything when the
/// path is not a regular file.
pub fn read_table(config: &Config) -> Result<Table> {
    let path = config.input.as_path();
    if !path.is_file() {
        return Err(CleanError::InputNotFound(path.to_path_buf()));
    }

    let parser = CsvParser::new(delimiter_for(path, config.delimiter));
    let table = parser.parse(path)?;

    info!(
        path = %path.display(),
        rows = table.row_count(),
        columns = table.column_count(),
        "loaded table"
    );
    Ok(table)
}

//! Error types for the cleaning pipeline

use std::path::PathBuf;

/// Errors that abort a cleaning run
#[derive(Debug, thiserror::Error)]
pub enum CleanError {
    #[error("input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("column '{column}', line {line}: cannot parse {value:?} as {target}")]
    Parse {
        column: String,
        line: usize,
        value: String,
        target: &'static str,
    },

    #[error("{}: line {line} has {found} fields, expected {expected}", path.display())]
    MalformedRow {
        path: PathBuf,
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("failed to read CSV {}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("failed to write CSV {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("I/O error on {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, CleanError>;

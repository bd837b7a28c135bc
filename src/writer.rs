//! CSV writer for cleaned tables

use std::fs::File;
use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::error::{CleanError, Result};
use crate::model::Table;

/// Write `table` to `path` with a header row
pub fn write_table(table: &Table, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|source| CleanError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    write_to(table, file, path)?;

    info!(path = %path.display(), rows = table.row_count(), "wrote table");
    Ok(())
}

/// Write `table` to any writer; `path` is only used in error messages
pub fn write_to<W: Write>(table: &Table, writer: W, path: &Path) -> Result<()> {
    let csv_error = |source| CleanError::Write {
        path: path.to_path_buf(),
        source,
    };
    let mut writer = csv::Writer::from_writer(writer);

    writer.write_record(table.column_names()).map_err(csv_error)?;
    for row in &table.rows {
        writer
            .write_record(row.cells.iter().map(|c| c.to_field().into_owned()))
            .map_err(csv_error)?;
    }

    writer.flush().map_err(|source| CleanError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CellValue, Column};

    #[test]
    fn test_write_quotes_and_formats_cells() {
        let mut table = Table::new(vec![
            Column::new("rank", 0),
            Column::new("gross", 1),
            Column::new("tour_title", 2),
        ]);
        table.add_row(
            vec![
                CellValue::Integer(1),
                CellValue::Float(10_000_000.0),
                CellValue::from("Earth, Wind & Fire"),
            ],
            2,
        );
        table.add_row(vec![CellValue::Integer(2), CellValue::Missing, CellValue::from("x")], 3);

        let mut out = Vec::new();
        write_to(&table, &mut out, Path::new("out.csv")).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "rank,gross,tour_title\n1,10000000.0,\"Earth, Wind & Fire\"\n2,,x\n"
        );
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("disk full"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_failure_is_reported_as_write_error() {
        let mut table = Table::new(vec![Column::new("a", 0)]);
        table.add_row(vec![CellValue::from("x".repeat(16 * 1024))], 2);

        let err = write_to(&table, FailingWriter, Path::new("out.csv")).unwrap_err();
        assert!(
            matches!(err, CleanError::Write { .. } | CleanError::Io { .. }),
            "unexpected error {err:?}"
        );
        assert!(!err.to_string().contains("read"));
    }

    #[test]
    fn test_write_table_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clean.csv");
        let table = Table::new(vec![Column::new("a", 0)]);

        write_table(&table, &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "a\n");
    }
}

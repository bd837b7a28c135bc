//! JSON report format

use std::io::Write;

use anyhow::Result;
use indexmap::IndexMap;
use serde::Serialize;

use crate::model::{Category, CellValue};
use crate::pipeline::CleanReport;

use super::ReportFormatter;

/// JSON report formatter
pub struct JsonReport {
    pretty: bool,
}

impl JsonReport {
    pub fn new() -> Self {
        Self { pretty: true }
    }

    pub fn compact() -> Self {
        Self { pretty: false }
    }
}

impl Default for JsonReport {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
struct JsonShape {
    rows: usize,
    columns: usize,
}

impl From<(usize, usize)> for JsonShape {
    fn from((rows, columns): (usize, usize)) -> Self {
        Self { rows, columns }
    }
}

#[derive(Serialize)]
struct JsonCleanReport<'a> {
    input: String,
    output: String,
    before: JsonShape,
    after: JsonShape,
    columns_cleaned: &'a IndexMap<Category, Vec<String>>,
    sorted_by: Option<&'a str>,
    /// One object per preview row, keyed by column name in table order
    preview: Vec<IndexMap<&'a str, &'a CellValue>>,
    generated_at: String,
}

impl ReportFormatter for JsonReport {
    fn render(&self, report: &CleanReport, writer: &mut dyn Write) -> Result<()> {
        let preview: Vec<IndexMap<&str, &CellValue>> = report
            .preview
            .rows
            .iter()
            .map(|row| {
                report
                    .preview
                    .columns
                    .iter()
                    .map(String::as_str)
                    .zip(row.iter())
                    .collect()
            })
            .collect();

        let output = JsonCleanReport {
            input: report.input.display().to_string(),
            output: report.output.display().to_string(),
            before: report.shape_before.into(),
            after: report.shape_after.into(),
            columns_cleaned: &report.classification.columns,
            sorted_by: report.sorted_by.as_deref(),
            preview,
            generated_at: report.generated_at.to_rfc3339(),
        };

        if self.pretty {
            serde_json::to_writer_pretty(&mut *writer, &output)?;
        } else {
            serde_json::to_writer(&mut *writer, &output)?;
        }
        writeln!(writer)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::Classification;
    use crate::pipeline::Preview;
    use std::path::PathBuf;

    #[test]
    fn test_render_json_report() {
        let mut classification = Classification::default();
        classification
            .columns
            .insert(Category::Money, vec!["gross".to_string()]);

        let report = CleanReport {
            input: PathBuf::from("in.csv"),
            output: PathBuf::from("out.csv"),
            shape_before: (1, 2),
            shape_after: (1, 2),
            classification,
            sorted_by: None,
            preview: Preview {
                columns: vec!["gross".to_string(), "title".to_string()],
                rows: vec![vec![CellValue::Float(5.0), CellValue::Missing]],
            },
            generated_at: chrono::Utc::now(),
        };

        let mut out = Vec::new();
        JsonReport::compact().render(&report, &mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();

        assert_eq!(value["before"]["rows"], 1);
        assert_eq!(value["after"]["columns"], 2);
        assert_eq!(value["columns_cleaned"]["money"][0], "gross");
        assert!(value["sorted_by"].is_null());
        assert_eq!(value["preview"][0]["gross"], 5.0);
        assert!(value["preview"][0]["title"].is_null());
    }
}

//! Plain terminal report

use std::io::Write;

use anyhow::Result;

use crate::model::Category;
use crate::pipeline::{CleanReport, Preview};

use super::ReportFormatter;

/// Human-readable report with a boxed preview table
pub struct TerminalReport;

impl TerminalReport {
    pub fn new() -> Self {
        Self
    }

    fn write_header(&self, report: &CleanReport, writer: &mut dyn Write) -> Result<()> {
        writeln!(writer, "=== Cleaning report ===")?;
        writeln!(writer, "Input                  : {}", report.input.display())?;
        writeln!(
            writer,
            "Rows, columns (before) : ({}, {})",
            report.shape_before.0, report.shape_before.1
        )?;
        writeln!(
            writer,
            "Rows, columns (after)  : ({}, {})",
            report.shape_after.0, report.shape_after.1
        )?;
        Ok(())
    }

    fn write_categories(&self, report: &CleanReport, writer: &mut dyn Write) -> Result<()> {
        for category in Category::ALL {
            let names = report.classification.names(category);
            let listed = if names.is_empty() {
                "None".to_string()
            } else {
                names.join(", ")
            };
            let label = format!("{} columns cleaned", capitalize(&category.to_string()));
            writeln!(writer, "{:<23}: {}", label, listed)?;
        }

        let sorted = report.sorted_by.as_deref().unwrap_or("None");
        writeln!(writer, "{:<23}: {}", "Sorted by", sorted)?;
        writeln!(writer)?;
        Ok(())
    }

    fn write_preview(&self, preview: &Preview, writer: &mut dyn Write) -> Result<()> {
        writeln!(writer, "Preview (first {} rows):", preview.rows.len())?;
        if preview.columns.is_empty() {
            writeln!(writer, "  (no columns)")?;
            writeln!(writer)?;
            return Ok(());
        }

        let mut table_data: Vec<Vec<String>> = Vec::new();
        table_data.push(preview.columns.clone());
        for row in &preview.rows {
            table_data.push(row.iter().map(|c| c.display().into_owned()).collect());
        }

        writeln!(writer, "{}", build_table(&table_data))?;
        Ok(())
    }
}

impl Default for TerminalReport {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for TerminalReport {
    fn render(&self, report: &CleanReport, writer: &mut dyn Write) -> Result<()> {
        self.write_header(report, writer)?;
        self.write_categories(report, writer)?;
        self.write_preview(&report.preview, writer)?;
        writeln!(writer, "Saved cleaned file to: {}", report.output.display())?;
        Ok(())
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Build a box-drawn table; the first row is the header
fn build_table(data: &[Vec<String>]) -> String {
    if data.is_empty() || data[0].is_empty() {
        return String::new();
    }

    let col_count = data[0].len();

    let mut col_widths: Vec<usize> = vec![0; col_count];
    for row in data {
        for (i, cell) in row.iter().enumerate() {
            if i < col_widths.len() {
                col_widths[i] = col_widths[i].max(cell.chars().count());
            }
        }
    }

    let border = |left: char, mid: char, right: char| {
        let mut line = String::new();
        line.push(left);
        for (i, width) in col_widths.iter().enumerate() {
            line.push_str(&"─".repeat(width + 2));
            if i < col_widths.len() - 1 {
                line.push(mid);
            }
        }
        line.push(right);
        line.push('\n');
        line
    };

    let render_row = |row: &[String]| {
        let mut line = String::from("│");
        for (i, width) in col_widths.iter().enumerate() {
            let cell = row.get(i).map(String::as_str).unwrap_or("");
            let pad = width - cell.chars().count();
            line.push_str(&format!(" {}{} │", cell, " ".repeat(pad)));
        }
        line.push('\n');
        line
    };

    let mut output = border('┌', '┬', '┐');
    output.push_str(&render_row(&data[0]));
    output.push_str(&border('├', '┼', '┤'));
    for row in data.iter().skip(1) {
        output.push_str(&render_row(row));
    }
    output.push_str(&border('└', '┴', '┘'));

    output
}

//! Table, Row, and Cell data structures

use std::borrow::Cow;
use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::schema::Column;

/// A cell value, raw or cleaned
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// Absent or unparseable data, distinct from an empty string
    Missing,
    Text(String),
    Integer(i64),
    Float(f64),
}

impl PartialEq for CellValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (CellValue::Missing, CellValue::Missing) => true,
            (CellValue::Text(a), CellValue::Text(b)) => a == b,
            (CellValue::Integer(a), CellValue::Integer(b)) => a == b,
            (CellValue::Float(a), CellValue::Float(b)) => {
                // Handle NaN comparison
                if a.is_nan() && b.is_nan() {
                    true
                } else {
                    a == b
                }
            }
            _ => false,
        }
    }
}

impl CellValue {
    /// Check if the value is missing
    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Missing)
    }

    /// Text form of the value as written to the output file.
    ///
    /// Missing becomes an empty field. Floats always keep a decimal point so
    /// a cleaned money column reads `10000000.0` rather than `10000000`.
    pub fn to_field(&self) -> Cow<'_, str> {
        match self {
            CellValue::Missing => Cow::Borrowed(""),
            CellValue::Text(s) => Cow::Borrowed(s.as_str()),
            CellValue::Integer(i) => Cow::Owned(i.to_string()),
            CellValue::Float(f) => Cow::Owned(format_float(*f)),
        }
    }

    /// Text form used in previews, where missing cells are made visible
    pub fn display(&self) -> Cow<'_, str> {
        match self {
            CellValue::Missing => Cow::Borrowed("<NA>"),
            other => other.to_field(),
        }
    }

    fn sort_key(&self) -> SortKey<'_> {
        match self {
            CellValue::Missing => SortKey::Missing,
            CellValue::Integer(i) => SortKey::Number(*i as f64),
            CellValue::Float(f) if f.is_nan() => SortKey::Missing,
            CellValue::Float(f) => SortKey::Number(*f),
            CellValue::Text(s) => match s.trim().parse::<f64>() {
                Ok(n) if !n.is_nan() => SortKey::Number(n),
                _ => SortKey::Text(s),
            },
        }
    }
}

fn format_float(f: f64) -> String {
    let s = f.to_string();
    if f.is_finite() && !s.contains('.') {
        format!("{s}.0")
    } else {
        s
    }
}

/// Ordering key: numbers first, then text, missing last. NaN counts as missing.
#[derive(Debug)]
enum SortKey<'a> {
    Number(f64),
    Text(&'a str),
    Missing,
}

impl SortKey<'_> {
    fn bucket(&self) -> u8 {
        match self {
            SortKey::Number(_) => 0,
            SortKey::Text(_) => 1,
            SortKey::Missing => 2,
        }
    }

    /// Total order, so `sort_by` stays well-defined
    fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortKey::Number(a), SortKey::Number(b)) => a.total_cmp(b),
            (SortKey::Text(a), SortKey::Text(b)) => a.cmp(b),
            _ => self.bucket().cmp(&other.bucket()),
        }
    }
}

impl std::fmt::Display for CellValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<i64> for CellValue {
    fn from(i: i64) -> Self {
        CellValue::Integer(i)
    }
}

impl From<f64> for CellValue {
    fn from(f: f64) -> Self {
        CellValue::Float(f)
    }
}

impl<T> From<Option<T>> for CellValue
where
    T: Into<CellValue>,
{
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => CellValue::Missing,
        }
    }
}

/// A row in the table
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    /// Cell values in column order
    pub cells: Vec<CellValue>,
    /// Original line number in source file (1-indexed, header is line 1)
    pub source_line: usize,
}

impl Row {
    pub fn new(cells: Vec<CellValue>, source_line: usize) -> Self {
        Self { cells, source_line }
    }

    /// Get a cell value by column index
    pub fn get(&self, index: usize) -> Option<&CellValue> {
        self.cells.get(index)
    }
}

/// A table containing columns and rows
#[derive(Debug, Clone)]
pub struct Table {
    /// Column definitions
    pub columns: Vec<Column>,
    /// All rows in the table
    pub rows: Vec<Row>,
}

impl Table {
    /// Create a new empty table with column definitions
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Add a row to the table
    pub fn add_row(&mut self, cells: Vec<CellValue>, source_line: usize) {
        self.rows.push(Row::new(cells, source_line));
    }

    /// Get the first column index with this name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    /// Column names in order
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// (rows, columns)
    pub fn shape(&self) -> (usize, usize) {
        (self.row_count(), self.column_count())
    }

    /// First `n` rows
    pub fn head(&self, n: usize) -> &[Row] {
        &self.rows[..n.min(self.rows.len())]
    }

    /// Stable ascending sort of all rows by a column.
    ///
    /// Numbers (including numeric text) order before other text, missing
    /// cells go last. Returns `false` when the column does not exist.
    pub fn sort_by_column(&mut self, column_name: &str) -> bool {
        let Some(col_idx) = self.column_index(column_name) else {
            return false;
        };

        self.rows.sort_by(|a, b| {
            let ka = a.get(col_idx).map_or(SortKey::Missing, CellValue::sort_key);
            let kb = b.get(col_idx).map_or(SortKey::Missing, CellValue::sort_key);
            ka.compare(&kb)
        });
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(keys: &[CellValue]) -> Table {
        let mut table = Table::new(vec![Column::new("rank", 0), Column::new("label", 1)]);
        for (i, key) in keys.iter().enumerate() {
            table.add_row(vec![key.clone(), CellValue::from(format!("r{i}"))], i + 2);
        }
        table
    }

    fn labels(table: &Table) -> Vec<String> {
        table.rows.iter().map(|r| r.cells[1].to_string()).collect()
    }

    #[test]
    fn test_float_field_keeps_decimal_point() {
        assert_eq!(CellValue::Float(10_000_000.0).to_field(), "10000000.0");
        assert_eq!(CellValue::Float(0.0).to_field(), "0.0");
        assert_eq!(CellValue::Float(12.5).to_field(), "12.5");
        assert_eq!(CellValue::Float(-3.0).to_field(), "-3.0");
    }

    #[test]
    fn test_missing_is_empty_field_but_visible_in_display() {
        assert_eq!(CellValue::Missing.to_field(), "");
        assert_eq!(CellValue::Missing.display(), "<NA>");
        assert_ne!(CellValue::Missing, CellValue::from(""));
    }

    #[test]
    fn test_sort_is_stable_with_duplicate_keys() {
        let keys: Vec<CellValue> = [3, 1, 2, 1, 3, 2]
            .iter()
            .map(|&k| CellValue::Integer(k))
            .collect();
        let mut t = table(&keys);

        assert!(t.sort_by_column("rank"));

        let sorted: Vec<i64> = t
            .rows
            .iter()
            .map(|r| match r.cells[0] {
                CellValue::Integer(i) => i,
                _ => unreachable!(),
            })
            .collect();
        assert_eq!(sorted, vec![1, 1, 2, 2, 3, 3]);
        assert_eq!(labels(&t), vec!["r1", "r3", "r2", "r5", "r0", "r4"]);
    }

    #[test]
    fn test_sort_numeric_text_and_missing_last() {
        let keys = vec![
            CellValue::from("10"),
            CellValue::Missing,
            CellValue::from("2"),
            CellValue::from("n/a"),
            CellValue::Float(1.5),
        ];
        let mut t = table(&keys);
        t.sort_by_column("rank");
        assert_eq!(labels(&t), vec!["r4", "r2", "r0", "r3", "r1"]);
    }

    #[test]
    fn test_sort_with_nan_is_ordered() {
        let keys = vec![
            CellValue::Float(3.0),
            CellValue::Float(f64::NAN),
            CellValue::Float(1.0),
            CellValue::from("NaN"),
            CellValue::Float(2.0),
            CellValue::Float(f64::NEG_INFINITY),
        ];
        let mut t = table(&keys);
        assert!(t.sort_by_column("rank"));
        assert_eq!(labels(&t), vec!["r5", "r2", "r4", "r0", "r3", "r1"]);
    }

    #[test]
    fn test_sort_unknown_column_is_noop() {
        let mut t = table(&[CellValue::Integer(2), CellValue::Integer(1)]);
        assert!(!t.sort_by_column("missing"));
        assert_eq!(labels(&t), vec!["r0", "r1"]);
    }

    #[test]
    fn test_head_is_clamped() {
        let t = table(&[CellValue::Integer(1), CellValue::Integer(2)]);
        assert_eq!(t.head(5).len(), 2);
        assert_eq!(t.head(1).len(), 1);
        assert_eq!(t.shape(), (2, 2));
    }
}

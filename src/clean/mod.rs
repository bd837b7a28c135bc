//! Per-cell cleaners and header normalization
//!
//! Every cleaner is a pure function from a cell to a cleaned cell. Missing
//! input always yields missing output.

pub mod header;
mod integer;
mod money;
mod reference;
mod text;

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::{ReferenceMode, TextOptions};
use crate::model::{Category, CellValue};

pub use header::{normalize_header, normalize_headers};
pub use integer::clean_integer;
pub use money::clean_money;
pub use reference::clean_reference;
pub use text::clean_text;

/// Citation-style annotations such as `[4]` or `[15][a]`
static BRACKET_REF: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[.*?\]").unwrap());

/// A cell that could not be converted to its column's target type
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("cannot parse {value:?} as {target}")]
pub struct CellError {
    pub value: String,
    pub target: &'static str,
}

/// Remove every bracketed reference annotation
pub(crate) fn strip_bracket_refs(s: &str) -> Cow<'_, str> {
    BRACKET_REF.replace_all(s, "")
}

/// Cleaner settings shared by every column of a run
#[derive(Debug, Clone, Copy, Default)]
pub struct Cleaner {
    pub reference_mode: ReferenceMode,
    pub text: TextOptions,
}

impl Cleaner {
    pub fn new(reference_mode: ReferenceMode, text: TextOptions) -> Self {
        Self {
            reference_mode,
            text,
        }
    }

    /// Apply the cleaner matching `category` to one cell
    pub fn clean(&self, category: Category, cell: &CellValue) -> Result<CellValue, CellError> {
        match category {
            Category::Money => clean_money(cell),
            Category::Integer => clean_integer(cell),
            Category::Reference => Ok(clean_reference(cell, self.reference_mode)),
            Category::Text => Ok(clean_text(cell, &self.text)),
        }
    }
}

//! Reference-column cleaner (`[15][a]` style citation cells)

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::ReferenceMode;
use crate::model::CellValue;

use super::strip_bracket_refs;

static FIRST_DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]+").unwrap());

/// Clean a reference cell according to `mode`
pub fn clean_reference(cell: &CellValue, mode: ReferenceMode) -> CellValue {
    if cell.is_missing() {
        return CellValue::Missing;
    }

    let raw = cell.to_field();
    match mode {
        ReferenceMode::Digits => match FIRST_DIGITS.find(&raw) {
            Some(m) => CellValue::Text(m.as_str().to_string()),
            None => CellValue::Missing,
        },
        ReferenceMode::StripBrackets => CellValue::Text(strip_bracket_refs(&raw).trim().to_string()),
    }
}

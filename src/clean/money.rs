//! Money cleaner: `$780,000,000[4]` -> `780000000.0`

use crate::model::CellValue;

use super::{strip_bracket_refs, CellError};

/// Clean a currency cell into a float.
///
/// Strips `$`, thousands separators and bracketed annotations. Whatever is
/// left must parse as a number; blank residue and non-finite values
/// (`nan`, `inf`) are missing.
pub fn clean_money(cell: &CellValue) -> Result<CellValue, CellError> {
    match cell {
        CellValue::Missing => return Ok(CellValue::Missing),
        CellValue::Float(f) if !f.is_finite() => return Ok(CellValue::Missing),
        _ => {}
    }

    let raw = cell.to_field();
    let without_symbols: String = raw.chars().filter(|c| !matches!(c, '$' | ',')).collect();
    let stripped = strip_bracket_refs(&without_symbols);
    let residue = stripped.trim();

    if residue.is_empty() {
        return Ok(CellValue::Missing);
    }

    match residue.parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(CellValue::Float(n)),
        Ok(_) => Ok(CellValue::Missing),
        Err(_) => Err(CellError {
            value: raw.into_owned(),
            target: "money",
        }),
    }
}

//! Integer cleaner

use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::CellValue;

use super::CellError;

/// Digits closing the value, allowing trailing punctuation or whitespace (`7[2]`)
static TRAILING_DIGITS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([0-9]+)[\p{P}\s]*$").unwrap());
static FIRST_DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]+").unwrap());

/// Extract an integer from a messy cell.
///
/// The digit run that closes the value wins (`1970-01-01 00:00:00.000000056`
/// gives 56, `7[2]` gives 2); otherwise the first digit run anywhere
/// (`12 shows` gives 12). No digits at all is missing.
pub fn clean_integer(cell: &CellValue) -> Result<CellValue, CellError> {
    match cell {
        CellValue::Missing => return Ok(CellValue::Missing),
        CellValue::Integer(i) => return Ok(CellValue::Integer(*i)),
        CellValue::Float(f) if f.is_finite() && f.fract() == 0.0 => {
            return Ok(CellValue::Integer(*f as i64));
        }
        _ => {}
    }

    let raw = cell.to_field();
    let digits = TRAILING_DIGITS
        .captures(&raw)
        .and_then(|caps| caps.get(1))
        .or_else(|| FIRST_DIGITS.find(&raw))
        .map(|m| m.as_str());

    let Some(digits) = digits else {
        return Ok(CellValue::Missing);
    };

    digits
        .parse::<i64>()
        .map(CellValue::Integer)
        .map_err(|_| CellError {
            value: raw.to_string(),
            target: "integer",
        })
}

//! Header normalization
//!
//! `"Adjusted gross (in 2022 dollars)"` becomes `adjusted_gross_in_2022_dollars`.

use once_cell::sync::Lazy;
use regex::Regex;
use rustc_hash::FxHashSet;
use tracing::{debug, warn};

use crate::model::Table;

static NON_ALNUM_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^0-9a-zA-Z]+").unwrap());
static UNDERSCORE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"_+").unwrap());

/// Rewrite a raw header into a lowercase `snake_case` token.
///
/// `position` is the 1-based column position, used to build the
/// `column_<n>` fallback when nothing alphanumeric survives.
pub fn normalize_header(raw: &str, position: usize) -> String {
    let spaced = raw.replace('\u{a0}', " ");
    let lowered = spaced.trim().to_lowercase();
    let underscored = NON_ALNUM_RUN.replace_all(&lowered, "_");
    let collapsed = UNDERSCORE_RUN.replace_all(&underscored, "_");
    let name = collapsed.trim_matches('_');

    if name.is_empty() {
        format!("column_{position}")
    } else {
        name.to_string()
    }
}

/// Normalize every header of the table in place, keeping the raw name
pub fn normalize_headers(table: &mut Table) {
    let mut seen = FxHashSet::default();

    for (i, column) in table.columns.iter_mut().enumerate() {
        let name = normalize_header(&column.raw_name, i + 1);
        if name != column.raw_name {
            debug!(raw = %column.raw_name, normalized = %name, "renamed column");
        }
        if !seen.insert(name.clone()) {
            warn!(column = %name, "duplicate column name after normalization");
        }
        column.name = name;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Column;

    #[test]
    fn test_normalize_header() {
        assert_eq!(normalize_header("Rank", 1), "rank");
        assert_eq!(normalize_header("Gross ($)", 2), "gross");
        assert_eq!(normalize_header("Tour Title", 3), "tour_title");
        assert_eq!(normalize_header("Year(s)", 4), "year_s");
        assert_eq!(normalize_header("All-time peak", 5), "all_time_peak");
        assert_eq!(
            normalize_header("Adjusted gross (in 2022 dollars)", 6),
            "adjusted_gross_in_2022_dollars"
        );
        assert_eq!(normalize_header("Ref.", 7), "ref");
    }

    #[test]
    fn test_non_breaking_space_and_padding() {
        assert_eq!(normalize_header("\u{a0} Actual\u{a0}gross \u{a0}", 1), "actual_gross");
        assert_eq!(normalize_header("__a__b__", 1), "a_b");
    }

    #[test]
    fn test_non_ascii_letters_become_separators() {
        assert_eq!(normalize_header("Café Name", 1), "caf_name");
        assert_eq!(normalize_header("Größe", 1), "gr_e");
    }

    #[test]
    fn test_all_symbolic_header_falls_back_to_position() {
        assert_eq!(normalize_header("($)", 3), "column_3");
        assert_eq!(normalize_header("", 1), "column_1");
        assert_eq!(normalize_header("\u{a0}", 2), "column_2");
    }

    #[test]
    fn test_normalization_is_idempotent() {
        let raws = [
            "Rank",
            "Gross ($)",
            " Tour\u{a0}Title ",
            "Adjusted gross (in 2022 dollars)",
            "--",
            "Ref.[n]",
            "ÀÉÎ",
        ];
        for (i, raw) in raws.iter().enumerate() {
            let once = normalize_header(raw, i + 1);
            assert_eq!(normalize_header(&once, i + 1), once, "raw header {raw:?}");
        }
    }

    #[test]
    fn test_normalize_headers_keeps_raw_names() {
        let mut table = Table::new(vec![Column::new("Tour Title", 0), Column::new("#", 1)]);
        normalize_headers(&mut table);

        assert_eq!(table.column_names(), vec!["tour_title", "column_2"]);
        assert_eq!(table.columns[0].raw_name, "Tour Title");
    }
}

//! Free-text cleaner for titles and names

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::TextOptions;
use crate::model::CellValue;

use super::strip_bracket_refs;

static SYMBOLS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\p{S}").unwrap());

/// Anything outside word characters, whitespace and `- & . , ' ! ?`
static DISALLOWED: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s\-&.,'!?]").unwrap());

/// Clean a title-like cell: drop annotations, symbols and stray punctuation
pub fn clean_text(cell: &CellValue, options: &TextOptions) -> CellValue {
    if cell.is_missing() {
        return CellValue::Missing;
    }

    let raw = cell.to_field();
    let mut text = strip_bracket_refs(&raw).into_owned();
    if options.strip_symbols {
        text = SYMBOLS.replace_all(&text, "").into_owned();
    }
    let text = DISALLOWED.replace_all(&text, "");

    CellValue::Text(text.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> CellValue {
        clean_text(&CellValue::from(s), &TextOptions::default())
    }

    #[test]
    fn test_clean_text() {
        assert_eq!(text("Eras Tour[4]"), CellValue::from("Eras Tour"));
        assert_eq!(text("A Bigger Bang Tour †"), CellValue::from("A Bigger Bang Tour"));
        assert_eq!(text("‡Taylor Swift[a][12]"), CellValue::from("Taylor Swift"));
        assert_eq!(text("  The Joshua Tree Tour 2017 "), CellValue::from("The Joshua Tree Tour 2017"));
    }

    #[test]
    fn test_disallowed_punctuation_is_stripped() {
        assert_eq!(text("mail@example #1"), CellValue::from("mailexample 1"));
        assert_eq!(text("(Live) \"Tour\"; 2024*"), CellValue::from("Live Tour 2024"));
    }

    #[test]
    fn test_allowed_punctuation_is_kept() {
        assert_eq!(
            text("Guns N' Roses - Not in This Lifetime... Tour!?"),
            CellValue::from("Guns N' Roses - Not in This Lifetime... Tour!?")
        );
        assert_eq!(text("Earth, Wind & Fire"), CellValue::from("Earth, Wind & Fire"));
    }

    #[test]
    fn test_unicode_letters_survive() {
        assert_eq!(text("Beyoncé – Renaissance"), CellValue::from("Beyoncé  Renaissance"));
        assert_eq!(text("Mötley Crüe"), CellValue::from("Mötley Crüe"));
    }

    #[test]
    fn test_symbol_stripping_is_optional() {
        let keep = TextOptions {
            strip_symbols: false,
        };
        // Circled letters are symbols but also word characters
        assert_eq!(clean_text(&CellValue::from("Tour Ⓐ"), &keep), CellValue::from("Tour Ⓐ"));
        assert_eq!(text("Tour Ⓐ"), CellValue::from("Tour"));

        // Daggers are punctuation, so the allow-list drops them either way
        assert_eq!(clean_text(&CellValue::from("Tour †"), &keep), CellValue::from("Tour"));
        assert_eq!(text("Tour †"), CellValue::from("Tour"));
    }

    #[test]
    fn test_missing_passes_through() {
        assert_eq!(clean_text(&CellValue::Missing, &TextOptions::default()), CellValue::Missing);
    }
}

//! # Text Normalization
//!
//! Bounding of the text fields stored in a [`Record`](crate::types::Record).
//!
//! ## What Happens To Input Text
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Text Normalization                                 │
//! │                                                                         │
//! │  Presentation layer reads a line: "Kit Medico\n"                       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Step 1: strip ONE trailing line ending ("\n" or "\r\n")               │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Step 2: keep at most `max` characters (never splits a char)           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Stored:  "Kit Medico"                                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing else is rejected or rewritten: empty names, inner whitespace and
//! leading spaces are all kept as given.
//!
//! ## Usage
//! ```rust
//! use loot_core::validation::{normalize_name, normalize_category};
//!
//! assert_eq!(normalize_name("Faca\n"), "Faca");
//! assert_eq!(normalize_category("arma"), "arma");
//! ```

use crate::{MAX_CATEGORY_LEN, MAX_NAME_LEN};

/// Removes a single trailing line ending, if present.
///
/// ## Example
/// ```rust
/// use loot_core::validation::trim_line_ending;
///
/// assert_eq!(trim_line_ending("Faca\n"), "Faca");
/// assert_eq!(trim_line_ending("Faca\r\n"), "Faca");
/// assert_eq!(trim_line_ending("Faca\n\n"), "Faca\n");
/// ```
pub fn trim_line_ending(text: &str) -> &str {
    text.strip_suffix("\r\n")
        .or_else(|| text.strip_suffix('\n'))
        .unwrap_or(text)
}

/// Trims the line ending and keeps at most `max` characters.
pub fn bound_text(text: &str, max: usize) -> String {
    trim_line_ending(text).chars().take(max).collect()
}

/// Normalizes an item name (max 29 characters).
///
/// ## Example
/// ```rust
/// use loot_core::validation::normalize_name;
///
/// let long = "x".repeat(40);
/// assert_eq!(normalize_name(&long).chars().count(), 29);
/// ```
pub fn normalize_name(name: &str) -> String {
    bound_text(name, MAX_NAME_LEN)
}

/// Normalizes an item category (max 19 characters).
pub fn normalize_category(category: &str) -> String {
    bound_text(category, MAX_CATEGORY_LEN)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_line_ending() {
        assert_eq!(trim_line_ending("Faca"), "Faca");
        assert_eq!(trim_line_ending("Faca\n"), "Faca");
        assert_eq!(trim_line_ending("Faca\r\n"), "Faca");
        assert_eq!(trim_line_ending("\n"), "");
        assert_eq!(trim_line_ending(""), "");
    }

    #[test]
    fn test_only_trailing_newline_is_trimmed() {
        assert_eq!(normalize_name("  Faca  \n"), "  Faca  ");
    }

    #[test]
    fn test_name_is_truncated() {
        let name = "A".repeat(100);
        assert_eq!(normalize_name(&name), "A".repeat(MAX_NAME_LEN));
    }

    #[test]
    fn test_category_is_truncated() {
        let category = "municao-calibre-grosso-especial";
        let bounded = normalize_category(category);
        assert_eq!(bounded.chars().count(), MAX_CATEGORY_LEN);
        assert!(category.starts_with(&bounded));
    }

    #[test]
    fn test_truncation_respects_char_boundaries() {
        let name = "ç".repeat(40);
        let bounded = normalize_name(&name);
        assert_eq!(bounded.chars().count(), MAX_NAME_LEN);
        assert!(bounded.chars().all(|c| c == 'ç'));
    }
}

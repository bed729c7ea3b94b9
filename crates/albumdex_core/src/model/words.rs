//! Word tokenization and character-code comparison.
//!
//! # Responsibility
//! - Split titles and names into whitespace-delimited tokens.
//! - Compare tokens by raw character code, never by locale collation.
//!
//! # Invariants
//! - A proper prefix orders before any longer word that starts with it.
//! - Case-insensitive variants lower-case both sides before comparing.

use once_cell::sync::Lazy;
use regex::Regex;
use std::cmp::Ordering;

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

/// Splits `text` on runs of whitespace.
///
/// A leading whitespace run produces a leading empty token. Trailing empty
/// tokens are dropped, so whitespace-only text yields no tokens at all.
pub fn split_words(text: &str) -> Vec<&str> {
    let mut words: Vec<&str> = WHITESPACE_RE.split(text).collect();
    while words.last().is_some_and(|word| word.is_empty()) {
        words.pop();
    }
    words
}

/// Compares two words character by character using code-point order.
pub fn compare_words(left: &str, right: &str) -> Ordering {
    left.chars().cmp(right.chars())
}

/// Same as [`compare_words`] after lower-casing both sides.
pub fn compare_words_ignore_case(left: &str, right: &str) -> Ordering {
    compare_words(&left.to_lowercase(), &right.to_lowercase())
}

/// Case-insensitive string equality.
pub fn eq_ignore_case(left: &str, right: &str) -> bool {
    left.chars()
        .flat_map(char::to_lowercase)
        .eq(right.chars().flat_map(char::to_lowercase))
}

#[cfg(test)]
mod tests {
    use super::{compare_words, compare_words_ignore_case, eq_ignore_case, split_words};
    use std::cmp::Ordering;

    #[test]
    fn split_words_collapses_whitespace_runs() {
        assert_eq!(split_words("Abbey   Road\tRemaster"), vec!["Abbey", "Road", "Remaster"]);
        assert_eq!(split_words("single"), vec!["single"]);
    }

    #[test]
    fn split_words_keeps_leading_empty_token_and_drops_trailing() {
        assert_eq!(split_words(" Kind of Blue "), vec!["", "Kind", "of", "Blue"]);
        assert!(split_words("   ").is_empty());
        assert!(split_words("").is_empty());
    }

    #[test]
    fn prefix_orders_before_longer_word() {
        assert_eq!(compare_words("blue", "blues"), Ordering::Less);
        assert_eq!(compare_words("blues", "blue"), Ordering::Greater);
        assert_eq!(compare_words("blue", "blue"), Ordering::Equal);
    }

    #[test]
    fn raw_comparison_is_case_sensitive_by_code_point() {
        // 'Z' (90) sorts before 'a' (97).
        assert_eq!(compare_words("Zebra", "apple"), Ordering::Less);
        assert_eq!(compare_words_ignore_case("Zebra", "apple"), Ordering::Greater);
    }

    #[test]
    fn eq_ignore_case_matches_mixed_case() {
        assert!(eq_ignore_case("Thriller", "tHRILLER"));
        assert!(!eq_ignore_case("Thriller", "Thrillers"));
    }
}

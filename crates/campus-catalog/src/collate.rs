//! Locale-aware string comparison.

use std::cmp::Ordering;

/// Compare two display strings the way a person reading a sorted list expects.
///
/// Letters compare case-insensitively first. Strings that differ only in case
/// are then ordered lowercase before uppercase, so the result is a total order
/// and only identical strings compare equal.
#[must_use]
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    let primary = folded(a).cmp(folded(b));
    primary.then_with(|| case_ranks(a).cmp(case_ranks(b)))
}

fn folded(s: &str) -> impl Iterator<Item = char> + '_ {
    s.chars().flat_map(char::to_lowercase)
}

/// 0 for lowercase or caseless characters, 1 for uppercase.
fn case_ranks(s: &str) -> impl Iterator<Item = u8> + '_ {
    s.chars().map(|c| u8::from(c.is_uppercase()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ignores_case_on_first_pass() {
        assert_eq!(locale_cmp("apple", "Banana"), Ordering::Less);
        assert_eq!(locale_cmp("Apple", "banana"), Ordering::Less);
        assert_eq!(locale_cmp("brother Keers", "Sister Enkey"), Ordering::Less);
    }

    #[test]
    fn test_lowercase_before_uppercase_on_tie() {
        assert_eq!(locale_cmp("a", "A"), Ordering::Less);
        assert_eq!(locale_cmp("A", "a"), Ordering::Greater);
    }

    #[test]
    fn test_identical_strings_are_equal() {
        assert_eq!(locale_cmp("STC 392", "STC 392"), Ordering::Equal);
        assert_eq!(locale_cmp("", ""), Ordering::Equal);
    }

    #[test]
    fn test_prefix_sorts_first() {
        assert_eq!(locale_cmp("MC 30", "MC 301"), Ordering::Less);
        assert_eq!(locale_cmp("", "a"), Ordering::Less);
    }

    #[test]
    fn test_rooms() {
        assert_eq!(locale_cmp("STC 390", "STC 392"), Ordering::Less);
        assert_eq!(locale_cmp("GEB 205", "GEB 203"), Ordering::Greater);
    }

    #[test]
    fn test_non_ascii_letters_fold() {
        assert_eq!(locale_cmp("Émile", "émile"), Ordering::Greater);
        assert_eq!(locale_cmp("émile", "Émilie"), Ordering::Less);
    }
}

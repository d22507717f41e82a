//! Canonical forms for comparable values.
//!
//! Every function here is pure and deterministic. Collections normalize to
//! sorted, deduplicated sequences so that two values compare equal exactly
//! when they hold the same members, regardless of order or repetition.
//!
//! ## Guarantees
//!
//! - `f(f(x)) == f(x)` for every normalizer `f`
//! - `f(permute(x)) == f(x)` for every collection normalizer
//! - empty input yields an explicit empty sequence, never "no value"

use std::collections::BTreeSet;

/// Trim a scalar string.
pub fn text(value: &str) -> String {
    value.trim().to_string()
}

/// Normalize a string set: trim, drop empties, dedup, sort.
pub fn string_set<I, S>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    items
        .into_iter()
        .map(|s| s.as_ref().trim().to_string())
        .filter(|s| !s.is_empty())
        .collect::<BTreeSet<String>>()
        .into_iter()
        .collect()
}

/// Normalize a case-insensitive tag set: like [`string_set`] but lower-cased
/// first, so `"Prod"` and `"prod"` collide.
pub fn tag_set<I, S>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    items
        .into_iter()
        .map(|s| s.as_ref().trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect::<BTreeSet<String>>()
        .into_iter()
        .collect()
}

/// Normalize an integer set: dedup, sort ascending.
pub fn int_set<I>(items: I) -> Vec<i64>
where
    I: IntoIterator<Item = i64>,
{
    items
        .into_iter()
        .collect::<BTreeSet<i64>>()
        .into_iter()
        .collect()
}

/// Normalize a string-keyed map.
///
/// Keys are trimmed and lower-cased, values trimmed. Entries with an empty key
/// or a key listed in `ignored_keys` (compared case-insensitively) are
/// dropped. The result is a sorted, deduplicated list of pairs; keeping pairs
/// rather than collapsing to one value per key means inputs whose keys only
/// differ by case still normalize the same way in any order.
pub fn string_map<I, K, V>(entries: I, ignored_keys: &[&str]) -> Vec<(String, String)>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    entries
        .into_iter()
        .map(|(k, v)| (k.as_ref().trim().to_lowercase(), v.as_ref().trim().to_string()))
        .filter(|(k, _)| !k.is_empty())
        .filter(|(k, _)| !ignored_keys.iter().any(|ignored| ignored.eq_ignore_ascii_case(k)))
        .collect::<BTreeSet<(String, String)>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_trims() {
        assert_eq!(text("  api  "), "api");
        assert_eq!(text(""), "");
    }

    #[test]
    fn test_string_set_basic() {
        assert_eq!(
            string_set(["b", " a", "a ", "", "  "]),
            vec!["a".to_string(), "b".to_string()]
        );
    }

    #[test]
    fn test_string_set_is_case_sensitive() {
        assert_eq!(string_set(["Prod", "prod"]).len(), 2);
    }

    #[test]
    fn test_tag_set_folds_case() {
        assert_eq!(tag_set(["Prod", "prod", " PROD "]), vec!["prod".to_string()]);
    }

    #[test]
    fn test_empty_inputs_are_explicit_empty() {
        assert!(string_set(Vec::<String>::new()).is_empty());
        assert!(tag_set(Vec::<String>::new()).is_empty());
        assert!(int_set(Vec::new()).is_empty());
        assert!(string_map(Vec::<(String, String)>::new(), &[]).is_empty());
    }

    #[test]
    fn test_int_set() {
        assert_eq!(int_set([5, 1, 5, 3, 1]), vec![1, 3, 5]);
        assert_eq!(int_set([-1, 0]), vec![-1, 0]);
    }

    #[test]
    fn test_string_map_drops_ignored_keys() {
        let normalized = string_map(
            [
                (" Content-Type ", "application/json"),
                ("X-Api-Key", " abc "),
                ("", "orphan"),
            ],
            &["content-type"],
        );
        assert_eq!(
            normalized,
            vec![("x-api-key".to_string(), "abc".to_string())]
        );
    }

    #[test]
    fn test_string_map_keeps_case_colliding_keys() {
        let a = string_map([("Accept", "a"), ("accept", "b")], &[]);
        let b = string_map([("accept", "b"), ("ACCEPT", "a")], &[]);
        assert_eq!(a, b);
        assert_eq!(a.len(), 2);
    }
}

//! Typo-tolerant text matching.
//!
//! A query matches a candidate when it is a case-insensitive substring, or
//! when a single left-to-right scan of the candidate finds at least 70% of the
//! query's characters in order. "shrt" matches "T-Shirt"; "xyz123" matches
//! nothing in a normal catalog.

/// Share of query characters that must be found in order.
pub const FUZZY_MATCH_THRESHOLD: f64 = 0.7;

/// Whether `query` fuzzy-matches `candidate`. An empty query matches everything.
pub fn fuzzy_match(candidate: &str, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let candidate = candidate.to_lowercase();
    let query = query.to_lowercase();
    if candidate.contains(&query) {
        return true;
    }
    match_ratio(&candidate, &query) >= FUZZY_MATCH_THRESHOLD
}

/// Fraction of `query` characters found in order in `candidate`.
///
/// Comparison is exact; callers fold case first. Each query character is
/// matched at most once and the scan never moves backwards.
pub fn match_ratio(candidate: &str, query: &str) -> f64 {
    let wanted: Vec<char> = query.chars().collect();
    if wanted.is_empty() {
        return 1.0;
    }

    let mut matched = 0;
    for c in candidate.chars() {
        if matched == wanted.len() {
            break;
        }
        if c == wanted[matched] {
            matched += 1;
        }
    }
    matched as f64 / wanted.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty_query_matches() {
        assert!(fuzzy_match("anything", ""));
        assert!(fuzzy_match("", ""));
    }

    #[test]
    fn test_substring_case_insensitive() {
        assert!(fuzzy_match("Organic Cotton T-Shirt", "COTTON"));
        assert!(fuzzy_match("Organic Cotton T-Shirt", "organic cotton t-shirt"));
    }

    #[test]
    fn test_subsequence_tolerance() {
        assert!(fuzzy_match("Organic Cotton T-Shirt", "shrt"));
        assert!(fuzzy_match("Bamboo Toothbrush", "bambo"));
        assert!(!fuzzy_match("Organic Cotton T-Shirt", "xyz123"));
    }

    #[test]
    fn test_threshold_boundary() {
        // 7 of 10 found in order
        assert_eq!(match_ratio("abcdefg", "abcdefgxyz"), 0.7);
        assert!(fuzzy_match("abcdefg", "abcdefgxyz"));
        // 6 of 10
        assert!(!fuzzy_match("abcdef", "abcdefwxyz"));
    }

    #[test]
    fn test_scan_is_order_preserving() {
        assert_eq!(match_ratio("ab", "ba"), 0.5);
        assert!(!fuzzy_match("ab", "ba"));
    }

    #[test]
    fn test_empty_candidate() {
        assert!(!fuzzy_match("", "a"));
    }

    proptest! {
        #[test]
        fn prop_self_match(s in "\\PC{0,24}") {
            prop_assert!(fuzzy_match(&s, &s));
        }

        #[test]
        fn prop_ratio_in_unit_range(a in "[a-z]{0,16}", b in "[a-z]{1,16}") {
            let r = match_ratio(&a, &b);
            prop_assert!((0.0..=1.0).contains(&r));
        }
    }
}

//! Expansion of alphabetic rack-space patterns into concrete codes.

use crate::config::PATTERN_EXPANSION_LIMIT;
use std::collections::HashSet;
use tracing::debug;

/// Check if a normalized code is a pure pattern (ASCII letters only).
pub fn is_pure_pattern(code: &str) -> bool {
    !code.is_empty() && code.chars().all(|c| c.is_ascii_alphabetic())
}

/// Generate the concrete codes `prefix1..=prefix{limit}` for a pattern.
pub fn pattern_family(prefix: &str, limit: u32) -> impl Iterator<Item = String> + '_ {
    (1..=limit).map(move |i| format!("{}{}", prefix, i))
}

/// Set of rack-space codes the main file is matched against.
///
/// Membership is exact string equality on normalized codes. Codes keep the
/// order they were first added in so diagnostics are stable.
#[derive(Debug, Clone, Default)]
pub struct MatchSet {
    codes: Vec<String>,
    index: HashSet<String>,
    patterns: Vec<String>,
}

impl MatchSet {
    /// Create an empty match set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a code; returns false if it was already present.
    pub fn insert(&mut self, code: impl Into<String>) -> bool {
        let code = code.into();
        if self.index.contains(&code) {
            return false;
        }
        self.index.insert(code.clone());
        self.codes.push(code);
        true
    }

    /// Check if a normalized rack space is in the set.
    pub fn contains(&self, code: &str) -> bool {
        self.index.contains(code)
    }

    /// Number of distinct codes.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Check if the set holds no code.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Iterate codes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.codes.iter().map(String::as_str)
    }

    /// Distinct patterns that were expanded, in first-seen order.
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// Codes that name a real rack: every code except the bare patterns.
    pub fn concrete_codes(&self) -> impl Iterator<Item = &str> {
        self.iter().filter(|code| !is_pure_pattern(code))
    }
}

/// Build the match set using the default expansion limit.
pub fn expand_patterns<I, S>(codes: I) -> MatchSet
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    expand_patterns_with_limit(codes, PATTERN_EXPANSION_LIMIT)
}

/// Build the match set from normalized pattern-file codes.
///
/// Every code is kept as a literal. Each distinct letters-only code is also
/// expanded into `code1..=code{limit}`.
pub fn expand_patterns_with_limit<I, S>(codes: I, limit: u32) -> MatchSet
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut set = MatchSet::new();
    let mut seen_patterns = HashSet::new();

    for code in codes {
        let code = code.as_ref();
        set.insert(code);
        if is_pure_pattern(code) && seen_patterns.insert(code.to_string()) {
            set.patterns.push(code.to_string());
        }
    }

    let patterns = set.patterns.clone();
    for prefix in &patterns {
        for generated in pattern_family(prefix, limit) {
            set.insert(generated);
        }
    }

    debug!(
        "Match set: {} code(s), {} pattern(s) expanded x{}",
        set.len(),
        patterns.len(),
        limit
    );

    set
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sorted(set: &MatchSet) -> Vec<String> {
        let mut codes: Vec<String> = set.iter().map(String::from).collect();
        codes.sort();
        codes
    }

    // ==================== is_pure_pattern tests ====================

    #[test]
    fn test_is_pure_pattern() {
        assert!(is_pure_pattern("AA"));
        assert!(is_pure_pattern("rk"));
        assert!(!is_pure_pattern("AA1"));
        assert!(!is_pure_pattern("RK-A"));
        assert!(!is_pure_pattern("A A"));
        assert!(!is_pure_pattern(""));
    }

    #[test]
    fn test_is_pure_pattern_rejects_non_ascii_letters() {
        assert!(!is_pure_pattern("ÄB"));
    }

    // ==================== expand_patterns tests ====================

    #[test]
    fn test_expand_pattern_family() {
        let set = expand_patterns(["AA"]);
        // The literal prefix stays in the set next to its 20 generated codes.
        assert_eq!(set.len(), 21);
        for i in 1..=20 {
            assert!(set.contains(&format!("AA{}", i)));
        }
        assert!(!set.contains("AA0"));
        assert!(!set.contains("AA21"));
        assert!(!set.contains("AA01"));
        assert_eq!(set.patterns(), ["AA".to_string()]);
    }

    #[test]
    fn test_expand_pattern_concrete_codes() {
        let set = expand_patterns(["AA"]);
        let concrete: Vec<&str> = set.concrete_codes().collect();
        let expected: Vec<String> = (1..=20).map(|i| format!("AA{}", i)).collect();
        assert_eq!(concrete, expected);
    }

    #[test]
    fn test_expand_literal_has_no_family() {
        let set = expand_patterns(["AA1"]);
        assert_eq!(sorted(&set), vec!["AA1".to_string()]);
        assert_eq!(set.concrete_codes().collect::<Vec<_>>(), vec!["AA1"]);
        assert!(set.patterns().is_empty());
    }

    #[test]
    fn test_expand_only_literals() {
        let set = expand_patterns(["RK-A1", "BB12", "RK-A1"]);
        assert_eq!(set.len(), 2);
        assert!(set.patterns().is_empty());
    }

    #[test]
    fn test_expand_duplicate_patterns_once() {
        let set = expand_patterns(["AA", "AA"]);
        assert_eq!(set.len(), 21);
        assert_eq!(set.patterns().len(), 1);
    }

    #[test]
    fn test_expand_overlapping_literal_not_duplicated() {
        let set = expand_patterns(["AA5", "AA"]);
        assert_eq!(set.len(), 21);
        let fives = set.iter().filter(|c| *c == "AA5").count();
        assert_eq!(fives, 1);
    }

    #[test]
    fn test_expand_with_custom_limit() {
        let set = expand_patterns_with_limit(["B"], 3);
        assert_eq!(
            set.iter().collect::<Vec<_>>(),
            vec!["B", "B1", "B2", "B3"]
        );
    }

    #[test]
    fn test_expand_zero_limit_keeps_literals() {
        let set = expand_patterns_with_limit(["CC"], 0);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec!["CC"]);
    }

    #[test]
    fn test_expand_empty_input() {
        let set = expand_patterns(Vec::<String>::new());
        assert!(set.is_empty());
    }

    #[test]
    fn test_match_set_insertion_order() {
        let set = expand_patterns_with_limit(["ZZ9", "AB"], 2);
        assert_eq!(
            set.iter().collect::<Vec<_>>(),
            vec!["ZZ9", "AB", "AB1", "AB2"]
        );
    }
}

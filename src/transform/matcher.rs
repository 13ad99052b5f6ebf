//! Selection of main-file rows whose rack space is in the match set.

use super::MatchSet;
use crate::config::{MAIN_SAMPLE_LIMIT, MATCH_SAMPLE_LIMIT};
use crate::error::{MatchDiagnostic, RackError, Result};
use crate::model::InventoryRow;
use tracing::{debug, warn};

/// Keep the rows whose normalized rack space is in `match_set`.
///
/// The result borrows the input rows and keeps their relative order.
pub fn match_rows<'a>(rows: &'a [InventoryRow], match_set: &MatchSet) -> Vec<&'a InventoryRow> {
    let matched: Vec<&InventoryRow> = rows
        .iter()
        .filter(|row| match_set.contains(&row.rack_space))
        .collect();

    debug!("Matched {} of {} row(s)", matched.len(), rows.len());
    matched
}

/// Build the diagnostic shown when nothing matched.
pub fn diagnose_no_match(rows: &[InventoryRow], match_set: &MatchSet) -> MatchDiagnostic {
    MatchDiagnostic {
        main_samples: rows
            .iter()
            .take(MAIN_SAMPLE_LIMIT)
            .map(|row| row.rack_space.clone())
            .collect(),
        match_samples: match_set
            .iter()
            .take(MATCH_SAMPLE_LIMIT)
            .map(String::from)
            .collect(),
    }
}

/// Match rows, failing with a diagnostic when the intersection is empty.
pub fn match_or_diagnose<'a>(
    rows: &'a [InventoryRow],
    match_set: &MatchSet,
) -> Result<Vec<&'a InventoryRow>> {
    let matched = match_rows(rows, match_set);
    if matched.is_empty() {
        let diagnostic = diagnose_no_match(rows, match_set);
        warn!("No matching rack spaces: {}", diagnostic);
        return Err(RackError::NoMatch(diagnostic));
    }
    Ok(matched)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::{expand_patterns, expand_patterns_with_limit};
    use pretty_assertions::assert_eq;

    fn rows(entries: &[(&str, &str)]) -> Vec<InventoryRow> {
        entries
            .iter()
            .map(|(rack, sku)| InventoryRow::new(rack, sku))
            .collect()
    }

    // ==================== match_rows tests ====================

    #[test]
    fn test_match_preserves_order() {
        let rows = rows(&[("RK-A1", "SKU1"), ("RK-B2", "SKU2"), ("RK-C3", "SKU3")]);
        let set = expand_patterns(["RK-C3", "RK-A1"]);
        let matched = match_rows(&rows, &set);
        let skus: Vec<&str> = matched.iter().map(|r| r.sku_code.as_str()).collect();
        assert_eq!(skus, vec!["SKU1", "SKU3"]);
    }

    #[test]
    fn test_match_borrows_rows_unchanged() {
        let rows = rows(&[("'aa5'", "SKU2")]);
        let set = expand_patterns(["AA"]);
        let matched = match_rows(&rows, &set);
        assert_eq!(matched.len(), 1);
        assert!(std::ptr::eq(matched[0], &rows[0]));
        assert_eq!(matched[0].original_rack_space, "'aa5'");
    }

    #[test]
    fn test_match_via_pattern_expansion() {
        let rows = rows(&[("RK-A1", "SKU1"), ("AA5", "SKU2")]);
        let set = expand_patterns(["AA"]);
        let matched = match_rows(&rows, &set);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].sku_code, "SKU2");
        assert_eq!(matched[0].rack_space, "AA5");
    }

    #[test]
    fn test_match_outside_expansion_limit() {
        let rows = rows(&[("AA21", "SKU1"), ("AA3", "SKU2")]);
        let set = expand_patterns(["AA"]);
        let matched = match_rows(&rows, &set);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].rack_space, "AA3");
    }

    #[test]
    fn test_match_keeps_duplicates_from_main_file() {
        let rows = rows(&[("BB1", "SKU1"), ("BB1", "SKU1")]);
        let set = expand_patterns(["BB1"]);
        assert_eq!(match_rows(&rows, &set).len(), 2);
    }

    #[test]
    fn test_match_empty_set() {
        let rows = rows(&[("AA1", "SKU1")]);
        assert!(match_rows(&rows, &MatchSet::new()).is_empty());
    }

    // ==================== match_or_diagnose tests ====================

    #[test]
    fn test_no_match_diagnostic() {
        let rows = rows(&[("ZZ9", "SKU3")]);
        let set = expand_patterns(["AA"]);
        let err = match_or_diagnose(&rows, &set).unwrap_err();
        match err {
            RackError::NoMatch(diagnostic) => {
                assert_eq!(diagnostic.main_samples, vec!["ZZ9".to_string()]);
                assert_eq!(diagnostic.match_samples.len(), 10);
                assert!(diagnostic
                    .match_samples
                    .iter()
                    .any(|code| code.starts_with("AA") && code.len() > 2));
            }
            other => panic!("Expected NoMatch error, got {:?}", other),
        }
    }

    #[test]
    fn test_no_match_sample_limits() {
        let main: Vec<InventoryRow> = (1..=8)
            .map(|i| InventoryRow::new(&format!("ZZ{}", i), "SKU"))
            .collect();
        let set = expand_patterns_with_limit(["AA"], 2);
        let diagnostic = diagnose_no_match(&main, &set);
        assert_eq!(diagnostic.main_samples.len(), 5);
        assert_eq!(diagnostic.main_samples[0], "ZZ1");
        assert_eq!(diagnostic.match_samples, vec!["AA", "AA1", "AA2"]);
    }

    #[test]
    fn test_match_or_diagnose_success() {
        let rows = rows(&[("AA1", "SKU1")]);
        let matched = match_or_diagnose(&rows, &expand_patterns(["AA"])).unwrap();
        assert_eq!(matched.len(), 1);
    }
}

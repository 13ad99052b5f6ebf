//! Header and row checks for uploaded CSV files.

use crate::config::columns;
use crate::model::{FileKind, InventoryRow, MappingRow, Parsed, RackPattern};
use crate::parser::CsvTable;
use crate::transform::is_pure_pattern;
use std::collections::HashMap;

/// Validation result with warnings.
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// Whether validation passed.
    pub passed: bool,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// Error messages.
    pub errors: Vec<String>,
}

impl ValidationResult {
    /// Create a passing result.
    pub fn ok() -> Self {
        Self {
            passed: true,
            ..Default::default()
        }
    }

    /// Create a failing result with an error.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            passed: false,
            errors: vec![message.into()],
            ..Default::default()
        }
    }

    /// Add a warning.
    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Add an error.
    pub fn add_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
        self.passed = false;
    }

    /// Merge another result into this one.
    pub fn merge(&mut self, other: ValidationResult) {
        self.warnings.extend(other.warnings);
        self.errors.extend(other.errors);
        if !other.passed {
            self.passed = false;
        }
    }
}

/// Check that every required column is present in the header.
pub fn validate_columns(table: &CsvTable, kind: FileKind, required: &[&str]) -> ValidationResult {
    let mut result = ValidationResult::ok();

    if table.headers.is_empty() {
        result.add_error(format!("{} file: No header row", kind));
        return result;
    }

    for column in required {
        if !table.has_column(column) {
            result.add_error(format!(
                "{} file: Missing required column '{}'",
                kind, column
            ));
        }
    }

    result
}

fn check_dropped(result: &mut ValidationResult, kind: FileKind, dropped: usize) {
    if dropped > 0 {
        result.add_warning(format!(
            "{} file: {} row(s) skipped for missing fields",
            kind, dropped
        ));
    }
}

/// Validate the main inventory file.
pub fn validate_main_file(table: &CsvTable, parsed: &Parsed<InventoryRow>) -> ValidationResult {
    let mut result = validate_columns(
        table,
        FileKind::Main,
        &[columns::RACK_SPACE, columns::ITEM_SKU_CODE],
    );
    check_dropped(&mut result, FileKind::Main, parsed.dropped);

    if result.passed && parsed.is_empty() {
        result.add_warning(format!("{} file: No usable rows", FileKind::Main));
    }

    result
}

/// Validate the rack-space pattern file.
pub fn validate_pattern_file(table: &CsvTable, parsed: &Parsed<RackPattern>) -> ValidationResult {
    let mut result = validate_columns(table, FileKind::Patterns, &[columns::RACK_SPACE]);
    check_dropped(&mut result, FileKind::Patterns, parsed.dropped);

    let mut counts: HashMap<&str, usize> = HashMap::new();
    for pattern in &parsed.rows {
        if is_pure_pattern(&pattern.rack_space) {
            *counts.entry(pattern.rack_space.as_str()).or_default() += 1;
        }
    }
    let mut repeated: Vec<(&str, usize)> = counts.into_iter().filter(|(_, n)| *n > 1).collect();
    repeated.sort();
    for (pattern, count) in repeated {
        result.add_warning(format!(
            "{} file: Pattern {} listed {} times, expanded once",
            FileKind::Patterns,
            pattern,
            count
        ));
    }

    result
}

/// Validate a bulk mapping file.
pub fn validate_mapping_file(table: &CsvTable, parsed: &Parsed<MappingRow>) -> ValidationResult {
    let mut result = validate_columns(table, FileKind::Mapping, &columns::MAPPING);
    check_dropped(&mut result, FileKind::Mapping, parsed.dropped);

    let mut seen: HashMap<&str, usize> = HashMap::new();
    for (idx, row) in parsed.rows.iter().enumerate() {
        match seen.get(row.order_id.as_str()) {
            Some(first) => result.add_warning(format!(
                "{} file: Order {} appears in rows {} and {}",
                FileKind::Mapping,
                row.order_id,
                first + 1,
                idx + 1
            )),
            None => {
                seen.insert(row.order_id.as_str(), idx);
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{main_rows, mapping_rows, parse_csv, pattern_rows};

    fn table(kind: FileKind, contents: &str) -> CsvTable {
        parse_csv(contents, kind).unwrap()
    }

    // ==================== ValidationResult tests ====================

    #[test]
    fn test_validation_result_ok() {
        let result = ValidationResult::ok();
        assert!(result.passed);
        assert!(result.errors.is_empty());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_validation_result_error() {
        let result = ValidationResult::error("Something went wrong");
        assert!(!result.passed);
        assert_eq!(result.errors, vec!["Something went wrong".to_string()]);
    }

    #[test]
    fn test_validation_result_merge() {
        let mut result1 = ValidationResult::ok();
        result1.add_warning("Warning 1");

        let mut result2 = ValidationResult::ok();
        result2.add_error("Error 1");
        result2.add_warning("Warning 2");

        result1.merge(result2);
        assert!(!result1.passed);
        assert_eq!(result1.warnings.len(), 2);
        assert_eq!(result1.errors.len(), 1);
    }

    // ==================== validate_main_file tests ====================

    #[test]
    fn test_validate_main_file_ok() {
        let t = table(FileKind::Main, "Rack Space,Item SkuCode\nAA1,SKU1\n");
        let result = validate_main_file(&t, &main_rows(&t));
        assert!(result.passed);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_validate_main_file_missing_column() {
        let t = table(FileKind::Main, "Rack Space,SKU\nAA1,SKU1\n");
        let result = validate_main_file(&t, &main_rows(&t));
        assert!(!result.passed);
        assert!(result
            .errors
            .iter()
            .any(|e| e.contains("Missing required column 'Item SkuCode'")));
    }

    #[test]
    fn test_validate_main_file_dropped_rows_warning() {
        let t = table(FileKind::Main, "Rack Space,Item SkuCode\nAA1,\nAA2,SKU2\n");
        let result = validate_main_file(&t, &main_rows(&t));
        assert!(result.passed); // Dropped rows are only a warning
        assert!(result.warnings.iter().any(|w| w.contains("1 row(s) skipped")));
    }

    #[test]
    fn test_validate_empty_file() {
        let t = table(FileKind::Main, "");
        let result = validate_main_file(&t, &main_rows(&t));
        assert!(!result.passed);
        assert!(result.errors[0].contains("No header row"));
    }

    // ==================== validate_pattern_file tests ====================

    #[test]
    fn test_validate_pattern_duplicates() {
        let t = table(FileKind::Patterns, "Rack Space\nAA\naa\nRK-A1\nRK-A1\n");
        let result = validate_pattern_file(&t, &pattern_rows(&t));
        assert!(result.passed);
        assert_eq!(result.warnings.len(), 1);
        assert!(result.warnings[0].contains("Pattern AA listed 2 times"));
    }

    // ==================== validate_mapping_file tests ====================

    #[test]
    fn test_validate_mapping_duplicate_orders() {
        let t = table(
            FileKind::Mapping,
            "order_id,style_number,size,color,rack_space\n1,2,M,Red,A1\n1,2,L,Red,A2\n",
        );
        let parsed = mapping_rows(&t).unwrap();
        let result = validate_mapping_file(&t, &parsed);
        assert!(result.passed);
        assert!(result.warnings[0].contains("Order 1 appears in rows 1 and 2"));
    }
}

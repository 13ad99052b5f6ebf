//! Rows read from the main inventory file and the rack-space pattern file.

use serde::{Deserialize, Serialize};

/// One row of the main inventory file.
///
/// `rack_space` and `sku_code` are never empty; rows without them are
/// dropped while parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryRow {
    /// Rack space as uploaded, trimmed.
    pub original_rack_space: String,
    /// Normalized rack space used for matching.
    pub rack_space: String,
    /// Item SKU code, trimmed.
    pub sku_code: String,
}

impl InventoryRow {
    /// Build a row from raw cells, normalizing the rack space.
    pub fn new(raw_rack_space: &str, sku_code: &str) -> Self {
        Self {
            original_rack_space: raw_rack_space.trim().to_string(),
            rack_space: crate::transform::normalize_rack_space(raw_rack_space),
            sku_code: sku_code.trim().to_string(),
        }
    }
}

/// One row of the rack-space pattern file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RackPattern {
    /// Rack space as uploaded, trimmed.
    pub original_rack_space: String,
    /// Normalized code; letters-only values are expanded into a family.
    pub rack_space: String,
}

impl RackPattern {
    /// Build a pattern from a raw cell, normalizing it.
    pub fn new(raw_rack_space: &str) -> Self {
        Self {
            original_rack_space: raw_rack_space.trim().to_string(),
            rack_space: crate::transform::normalize_rack_space(raw_rack_space),
        }
    }
}

/// Rows kept by a per-file schema, plus how many were dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Parsed<T> {
    /// Rows that passed the schema, in file order.
    pub rows: Vec<T>,
    /// Rows discarded for missing required fields.
    pub dropped: usize,
}

impl<T> Parsed<T> {
    /// Number of kept rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if no row was kept.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl<T> Default for Parsed<T> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            dropped: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inventory_row_normalizes_rack_space() {
        let row = InventoryRow::new("  'rk-a1\" ", " SKU1 ");
        assert_eq!(row.original_rack_space, "'rk-a1\"");
        assert_eq!(row.rack_space, "RK-A1");
        assert_eq!(row.sku_code, "SKU1");
    }

    #[test]
    fn test_rack_pattern_keeps_original() {
        let pattern = RackPattern::new(" `aa` ");
        assert_eq!(pattern.original_rack_space, "`aa`");
        assert_eq!(pattern.rack_space, "AA");
    }

    #[test]
    fn test_parsed_default_is_empty() {
        let parsed: Parsed<RackPattern> = Parsed::default();
        assert!(parsed.is_empty());
        assert_eq!(parsed.len(), 0);
        assert_eq!(parsed.dropped, 0);
    }
}

//! Row schemas for each uploaded file kind.

use super::table::{parse_csv, CsvTable};
use crate::config::columns;
use crate::error::{RackError, Result};
use crate::model::{FileKind, InventoryRow, MappingRow, Parsed, RackPattern};
use tracing::{debug, warn};

/// Apply the main inventory schema to a parsed table.
///
/// Rows need a non-blank `Rack Space` and `Item SkuCode`, and the rack space
/// must not normalize to an empty code. Other rows are counted as dropped.
pub fn main_rows(table: &CsvTable) -> Parsed<InventoryRow> {
    let mut parsed = Parsed::default();

    for row in &table.rows {
        let (Some(rack_space), Some(sku_code)) =
            (row.get(columns::RACK_SPACE), row.get(columns::ITEM_SKU_CODE))
        else {
            debug!("Line {}: missing rack space or SKU code", row.line);
            parsed.dropped += 1;
            continue;
        };

        let inventory = InventoryRow::new(rack_space, sku_code);
        if inventory.rack_space.is_empty() {
            debug!("Line {}: rack space '{}' is empty after cleanup", row.line, rack_space);
            parsed.dropped += 1;
            continue;
        }
        parsed.rows.push(inventory);
    }

    log_dropped(FileKind::Main, parsed.dropped);
    parsed
}

/// Apply the rack-space pattern schema to a parsed table.
pub fn pattern_rows(table: &CsvTable) -> Parsed<RackPattern> {
    let mut parsed = Parsed::default();

    for row in &table.rows {
        let pattern = row.get(columns::RACK_SPACE).map(RackPattern::new);
        match pattern {
            Some(pattern) if !pattern.rack_space.is_empty() => parsed.rows.push(pattern),
            _ => parsed.dropped += 1,
        }
    }

    log_dropped(FileKind::Patterns, parsed.dropped);
    parsed
}

/// Apply the bulk mapping schema to a parsed table.
///
/// Every mapping column must be filled; at least one row must survive.
pub fn mapping_rows(table: &CsvTable) -> Result<Parsed<MappingRow>> {
    let mut parsed = Parsed::default();

    for row in &table.rows {
        let cells: Option<Vec<&str>> = columns::MAPPING.iter().map(|c| row.get(c)).collect();
        match cells.as_deref() {
            Some([order_id, style_number, size, color, rack_space]) => {
                parsed.rows.push(MappingRow {
                    order_id: order_id.to_string(),
                    style_number: style_number.to_string(),
                    size: size.to_string(),
                    color: color.to_string(),
                    rack_space: rack_space.to_string(),
                })
            }
            _ => parsed.dropped += 1,
        }
    }

    if parsed.is_empty() {
        return Err(RackError::NoValidRows {
            kind: FileKind::Mapping,
            dropped: parsed.dropped,
        });
    }

    log_dropped(FileKind::Mapping, parsed.dropped);
    Ok(parsed)
}

/// Parse main inventory CSV text.
pub fn parse_main_file(contents: &str) -> Result<Parsed<InventoryRow>> {
    Ok(main_rows(&parse_csv(contents, FileKind::Main)?))
}

/// Parse rack-space pattern CSV text.
pub fn parse_pattern_file(contents: &str) -> Result<Parsed<RackPattern>> {
    Ok(pattern_rows(&parse_csv(contents, FileKind::Patterns)?))
}

/// Parse bulk mapping CSV text.
pub fn parse_mapping_file(contents: &str) -> Result<Parsed<MappingRow>> {
    mapping_rows(&parse_csv(contents, FileKind::Mapping)?)
}

fn log_dropped(kind: FileKind, dropped: usize) {
    if dropped > 0 {
        warn!("Skipped {} {} row(s) with missing fields", dropped, kind);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // ==================== parse_main_file tests ====================

    #[test]
    fn test_main_file_repeated_rack_space_column() {
        let parsed =
            parse_main_file("Rack Space,Item SkuCode,Rack Space\nAA5,SKU2,\n").unwrap();
        assert_eq!(parsed.dropped, 0);
        assert_eq!(parsed.rows, vec![InventoryRow::new("AA5", "SKU2")]);
    }

    #[test]
    fn test_main_file_rows() {
        let parsed = parse_main_file(
            "Rack Space,Item SkuCode,Qty\n\"'rk-a1\"\"\",SKU1,4\n aa5 , SKU2 ,1\n",
        )
        .unwrap();
        assert_eq!(parsed.dropped, 0);
        assert_eq!(
            parsed.rows,
            vec![
                InventoryRow {
                    original_rack_space: "'rk-a1\"".to_string(),
                    rack_space: "RK-A1".to_string(),
                    sku_code: "SKU1".to_string(),
                },
                InventoryRow {
                    original_rack_space: "aa5".to_string(),
                    rack_space: "AA5".to_string(),
                    sku_code: "SKU2".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_main_file_drops_incomplete_rows() {
        let parsed = parse_main_file(
            "Rack Space,Item SkuCode\nAA1,\n,SKU2\n  ,SKU3\n'',SKU4\nBB2,SKU5\n",
        )
        .unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed.rows[0].sku_code, "SKU5");
        assert_eq!(parsed.dropped, 4);
    }

    #[test]
    fn test_main_file_missing_column() {
        let parsed = parse_main_file("Rack,Item SkuCode\nAA1,SKU1\n").unwrap();
        assert!(parsed.is_empty());
        assert_eq!(parsed.dropped, 1);
    }

    #[test]
    fn test_main_file_invariant_non_empty() {
        let parsed = parse_main_file("Rack Space,Item SkuCode\n`x`,A\n\" \",B\n\"\",C\n").unwrap();
        assert!(parsed
            .rows
            .iter()
            .all(|r| !r.rack_space.is_empty() && !r.sku_code.is_empty()));
    }

    // ==================== parse_pattern_file tests ====================

    #[test]
    fn test_pattern_file_rows() {
        let parsed = parse_pattern_file("Rack Space\naa\n\n'AA'\nRK-B2\n,\n").unwrap();
        let codes: Vec<&str> = parsed.rows.iter().map(|p| p.rack_space.as_str()).collect();
        assert_eq!(codes, vec!["AA", "AA", "RK-B2"]);
        assert_eq!(parsed.dropped, 0);
    }

    #[test]
    fn test_pattern_file_ignores_other_columns() {
        let parsed = parse_pattern_file("Zone,Rack Space\nNorth,\nSouth,CC\n").unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed.dropped, 1);
    }

    // ==================== parse_mapping_file tests ====================

    #[test]
    fn test_mapping_file_counts_invalid() {
        let parsed = parse_mapping_file(
            "order_id,style_number,size,color,rack_space\n\
             133126,19626,XL,Red,RK-A1\n\
             133127,19627,M,,RK-B2\n",
        )
        .unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed.dropped, 1);
        assert_eq!(parsed.rows[0].color, "Red");
    }

    #[test]
    fn test_mapping_file_no_valid_rows() {
        let err = parse_mapping_file("order_id,style_number,size,color,rackspace\n1,2,M,Red,RK\n")
            .unwrap_err();
        match err {
            RackError::NoValidRows { kind, dropped } => {
                assert_eq!(kind, FileKind::Mapping);
                assert_eq!(dropped, 1);
            }
            other => panic!("Expected NoValidRows error, got {:?}", other),
        }
    }
}

//! Configuration constants and settings for matching and export.

/// Number of concrete codes generated for each alphabetic rack-space pattern.
pub const PATTERN_EXPANSION_LIMIT: u32 = 20;

/// Warehouse id written into every inventory reset row.
pub const DROPSHIP_WAREHOUSE_ID: u32 = 22784;

/// Inventory action written into every reset row.
pub const INVENTORY_ACTION_RESET: &str = "RESET";

/// Quantity written into every reset row.
pub const RESET_QTY: u32 = 0;

/// Inventory action of the OMS file exported from a scan session.
pub const INVENTORY_ACTION_ADD: &str = "ADD";

/// Quantity added per scanned order.
pub const ADD_QTY: u32 = 1;

/// Maximum main-file rack spaces listed in a no-match diagnostic.
pub const MAIN_SAMPLE_LIMIT: usize = 5;

/// Maximum match-set codes listed in a no-match diagnostic.
pub const MATCH_SAMPLE_LIMIT: usize = 10;

/// Order ids shorter than this are not looked up.
pub const MIN_ORDER_ID_LEN: usize = 5;

/// Default page size for mapped SKU searches.
pub const DEFAULT_PAGE_LIMIT: u32 = 50;

/// Number of page buttons shown around the current page.
pub const MAX_PAGE_BUTTONS: u32 = 5;

/// Column names of the uploaded CSV files.
pub mod columns {
    pub const RACK_SPACE: &str = "Rack Space";
    pub const ITEM_SKU_CODE: &str = "Item SkuCode";

    pub const ORDER_ID: &str = "order_id";
    pub const STYLE_NUMBER: &str = "style_number";
    pub const SIZE: &str = "size";
    pub const COLOR: &str = "color";
    pub const MAPPING_RACK_SPACE: &str = "rack_space";

    pub const STYLE_CODE: &str = "style_code";

    /// Columns every bulk mapping row must fill.
    pub const MAPPING: [&str; 5] = [ORDER_ID, STYLE_NUMBER, SIZE, COLOR, MAPPING_RACK_SPACE];
}

/// File-name conventions for generated and accepted files.
pub mod filenames {
    /// Prefix of the inventory reset export.
    pub const RESET_EXPORT_PREFIX: &str = "UpdateInStockQtyAnd_orLastPurchasePrice";

    /// Prefix of the scanned orders export, also required on mapping uploads.
    pub const SCANNED_ORDERS_PREFIX: &str = "scanned_orders";

    /// Prefix of the barcode label export.
    pub const BARCODE_PREFIX: &str = "BARCODE CSV";

    /// Extension accepted for every upload.
    pub const CSV_EXTENSION: &str = "csv";
}

/// Settings for one zero-rack export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchConfig {
    /// Codes generated per alphabetic pattern.
    pub expansion_limit: u32,
    /// Warehouse id for the reset rows.
    pub warehouse_id: u32,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            expansion_limit: PATTERN_EXPANSION_LIMIT,
            warehouse_id: DROPSHIP_WAREHOUSE_ID,
        }
    }
}

impl MatchConfig {
    /// Create a configuration with a custom expansion limit.
    pub fn with_expansion_limit(expansion_limit: u32) -> Self {
        Self {
            expansion_limit,
            ..Default::default()
        }
    }
}

/// Settings for the order scanner.
#[derive(Debug, Clone, Default)]
pub struct ScanConfig {
    /// Style numbers kept as exact inventory; scanning them is refused.
    pub blocked_styles: Vec<u32>,
}

impl ScanConfig {
    /// Check if a style number is on the block list.
    pub fn is_blocked(&self, style_number: u32) -> bool {
        self.blocked_styles.contains(&style_number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_config_defaults() {
        let config = MatchConfig::default();
        assert_eq!(config.expansion_limit, 20);
        assert_eq!(config.warehouse_id, 22784);
    }

    #[test]
    fn test_match_config_override_keeps_warehouse() {
        let config = MatchConfig::with_expansion_limit(5);
        assert_eq!(config.expansion_limit, 5);
        assert_eq!(config.warehouse_id, DROPSHIP_WAREHOUSE_ID);
    }

    #[test]
    fn test_scan_config_block_list() {
        let config = ScanConfig {
            blocked_styles: vec![30031, 19181],
        };
        assert!(config.is_blocked(19181));
        assert!(!config.is_blocked(19626));
        assert!(!ScanConfig::default().is_blocked(30031));
    }
}

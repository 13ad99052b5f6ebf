//! Scanned orders and the bulk mapping rows built from them.

use serde::{Deserialize, Serialize};

/// One scanned order held in the scan session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanRecord {
    /// Order id as scanned; the session key.
    pub order_id: String,
    /// Style number returned by the order lookup.
    pub style_number: u32,
    /// Size returned by the order lookup.
    pub size: String,
    /// Color of the style, when the catalog knows it.
    #[serde(default)]
    pub color: Option<String>,
    /// Rack space the order was put on (may be empty).
    #[serde(default)]
    pub rack_space: String,
}

impl ScanRecord {
    /// Barcode SKU: `<style_number>-<size>`.
    pub fn barcode_sku(&self) -> String {
        format!("{}-{}", self.style_number, self.size)
    }

    /// OMS SKU: `<style_number>-<color>-<size>`, color left empty when unknown.
    pub fn oms_sku(&self) -> String {
        format!(
            "{}-{}-{}",
            self.style_number,
            self.color.as_deref().unwrap_or(""),
            self.size
        )
    }
}

/// One row of a bulk mapping upload (`scanned_orders-*.csv`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingRow {
    pub order_id: String,
    pub style_number: String,
    pub size: String,
    pub color: String,
    pub rack_space: String,
}

//! Row of the OMS "update in-stock quantity" reset file.

use super::{InventoryRow, ScanRecord};
use crate::config::{
    MatchConfig, ADD_QTY, DROPSHIP_WAREHOUSE_ID, INVENTORY_ACTION_ADD, INVENTORY_ACTION_RESET,
    RESET_QTY,
};
use serde::Serialize;

/// One row of the inventory reset export, in downstream column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResetRow<'a> {
    #[serde(rename = "DropshipWarehouseId")]
    pub dropship_warehouse_id: u32,
    #[serde(rename = "Item SkuCode")]
    pub item_sku_code: &'a str,
    #[serde(rename = "InventoryAction")]
    pub inventory_action: &'static str,
    #[serde(rename = "QtyIncludesBlocked")]
    pub qty_includes_blocked: &'static str,
    #[serde(rename = "Qty")]
    pub qty: u32,
    #[serde(rename = "RackSpace")]
    pub rack_space: &'a str,
    #[serde(rename = "Last Purchase Price")]
    pub last_purchase_price: &'static str,
    #[serde(rename = "Notes")]
    pub notes: &'static str,
}

impl<'a> ResetRow<'a> {
    /// Column headers in output order.
    pub const HEADERS: [&'static str; 8] = [
        "DropshipWarehouseId",
        "Item SkuCode",
        "InventoryAction",
        "QtyIncludesBlocked",
        "Qty",
        "RackSpace",
        "Last Purchase Price",
        "Notes",
    ];

    /// Build a reset row for a matched inventory row.
    ///
    /// The normalized rack space is exported, not the uploaded one.
    pub fn from_inventory(row: &'a InventoryRow, config: &MatchConfig) -> Self {
        Self {
            dropship_warehouse_id: config.warehouse_id,
            item_sku_code: &row.sku_code,
            inventory_action: INVENTORY_ACTION_RESET,
            qty_includes_blocked: "",
            qty: RESET_QTY,
            rack_space: &row.rack_space,
            last_purchase_price: "",
            notes: "",
        }
    }

    /// Build an "add one" row for a scanned order, using a prebuilt SKU.
    pub fn add_scanned(record: &'a ScanRecord, sku_code: &'a str) -> Self {
        Self {
            dropship_warehouse_id: DROPSHIP_WAREHOUSE_ID,
            item_sku_code: sku_code,
            inventory_action: INVENTORY_ACTION_ADD,
            qty_includes_blocked: "",
            qty: ADD_QTY,
            rack_space: &record.rack_space,
            last_purchase_price: "",
            notes: "",
        }
    }
}

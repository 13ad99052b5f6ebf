//! Traits for the order database, color catalog and mapping service.

use super::browse::{SearchPage, SearchQuery};
use crate::error::{RackError, Result};
use crate::model::{FileKind, MappingRow, Parsed};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Order as returned by the order database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub order_id: u64,
    pub style_number: u32,
    pub size: String,
}

/// Color of a style as listed by the color catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorEntry {
    pub style_code: u32,
    pub color: String,
}

/// Lookup of orders by numeric id.
pub trait OrderLookup {
    /// Find an order; `Ok(None)` when the id is unknown.
    fn find_order(&self, order_id: u64) -> Result<Option<OrderRecord>>;
}

/// Catalog of style colors.
pub trait ColorCatalog {
    /// List every known style color.
    fn colors(&self) -> Result<Vec<ColorEntry>>;
}

/// Search over previously mapped SKUs.
pub trait MappedSkuSearch {
    /// Return one page of results for the query.
    fn search(&self, query: &SearchQuery) -> Result<SearchPage>;
}

/// Receiver of bulk order-id to rack-space mappings.
pub trait RackSpaceUpsert {
    /// Upsert the rows; returns the service's confirmation message.
    fn upsert_rack_spaces(&mut self, rows: &[MappingRow]) -> Result<String>;
}

/// Send parsed mapping rows to the mapping service.
pub fn submit_mapping<U: RackSpaceUpsert>(
    service: &mut U,
    parsed: &Parsed<MappingRow>,
) -> Result<String> {
    if parsed.is_empty() {
        return Err(RackError::EmptyInput {
            kind: FileKind::Mapping,
        });
    }

    let message = service.upsert_rack_spaces(&parsed.rows)?;
    info!("Uploaded {} mapping row(s): {}", parsed.len(), message);
    Ok(message)
}

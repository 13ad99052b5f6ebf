//! CSV-backed implementations of the service traits.

use super::browse::{SearchPage, SearchQuery};
use super::traits::{ColorCatalog, ColorEntry, MappedSkuSearch, OrderLookup, OrderRecord};
use crate::config::columns;
use crate::error::Result;
use crate::model::{FileKind, MappedSku, MappingRow};
use crate::parser::{load_mapping_file, read_csv_file, CsvTable};
use crate::transform::normalize_rack_space;
use std::collections::HashMap;
use std::path::Path;
use tracing::{info, warn};

/// Order lookup over an exported orders table
/// (`order_id, style_number, size`).
#[derive(Debug, Clone, Default)]
pub struct CsvOrderLookup {
    orders: HashMap<u64, OrderRecord>,
}

impl CsvOrderLookup {
    /// Build the lookup from a parsed table, skipping unusable rows.
    pub fn from_table(table: &CsvTable) -> Self {
        let mut orders = HashMap::new();

        for row in &table.rows {
            let order_id = row.get(columns::ORDER_ID).and_then(|v| v.parse::<u64>().ok());
            let style_number = row
                .get(columns::STYLE_NUMBER)
                .and_then(|v| v.parse::<u32>().ok());
            let size = row.get(columns::SIZE);

            match (order_id, style_number, size) {
                (Some(order_id), Some(style_number), Some(size)) => {
                    orders.entry(order_id).or_insert(OrderRecord {
                        order_id,
                        style_number,
                        size: size.to_string(),
                    });
                }
                _ => warn!("Line {}: unusable order row skipped", row.line),
            }
        }

        Self { orders }
    }

    /// Load the lookup from a CSV file.
    pub fn load(path: &Path) -> Result<Self> {
        let lookup = Self::from_table(&read_csv_file(path, FileKind::Orders)?);
        info!("Loaded {} order(s)", lookup.orders.len());
        Ok(lookup)
    }
}

impl OrderLookup for CsvOrderLookup {
    fn find_order(&self, order_id: u64) -> Result<Option<OrderRecord>> {
        Ok(self.orders.get(&order_id).cloned())
    }
}

/// Color catalog over a `style_code, color` table.
#[derive(Debug, Clone, Default)]
pub struct CsvColorCatalog {
    entries: Vec<ColorEntry>,
}

impl CsvColorCatalog {
    /// Build the catalog from a parsed table, skipping unusable rows.
    pub fn from_table(table: &CsvTable) -> Self {
        let entries = table
            .rows
            .iter()
            .filter_map(|row| {
                let style_code = row.get(columns::STYLE_CODE)?.parse::<u32>().ok()?;
                let color = row.get(columns::COLOR)?;
                Some(ColorEntry {
                    style_code,
                    color: color.to_string(),
                })
            })
            .collect();
        Self { entries }
    }

    /// Load the catalog from a CSV file.
    pub fn load(path: &Path) -> Result<Self> {
        Ok(Self::from_table(&read_csv_file(path, FileKind::Colors)?))
    }
}

impl ColorCatalog for CsvColorCatalog {
    fn colors(&self) -> Result<Vec<ColorEntry>> {
        Ok(self.entries.clone())
    }
}

/// Mapped SKU search over a local mapping file.
///
/// The style filter compares trimmed values exactly; the rack-space filter
/// compares normalized codes.
#[derive(Debug, Clone, Default)]
pub struct LocalMappingIndex {
    skus: Vec<MappedSku>,
}

impl LocalMappingIndex {
    /// Build the index from mapping rows.
    pub fn new(rows: Vec<MappingRow>) -> Self {
        let skus = rows
            .into_iter()
            .map(|row| MappedSku {
                order_id: row.order_id,
                style_number: row.style_number,
                size: row.size,
                color: row.color,
                rack_space: row.rack_space,
                in_stock: None,
            })
            .collect();
        Self { skus }
    }

    /// Load the index from a `scanned_orders-*.csv` mapping file.
    pub fn load(path: &Path) -> Result<Self> {
        Ok(Self::new(load_mapping_file(path)?.rows))
    }

    fn matches(sku: &MappedSku, query: &SearchQuery) -> bool {
        let style_ok = query
            .style_number
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map_or(true, |style| sku.style_number == style);
        let rack_ok = query
            .rack_space
            .as_deref()
            .map(normalize_rack_space)
            .filter(|r| !r.is_empty())
            .map_or(true, |rack| normalize_rack_space(&sku.rack_space) == rack);
        style_ok && rack_ok
    }
}

impl MappedSkuSearch for LocalMappingIndex {
    fn search(&self, query: &SearchQuery) -> Result<SearchPage> {
        let hits: Vec<&MappedSku> = self
            .skus
            .iter()
            .filter(|sku| Self::matches(sku, query))
            .collect();

        let skip = query.page.saturating_sub(1) as usize * query.limit as usize;
        let data = hits
            .iter()
            .skip(skip)
            .take(query.limit as usize)
            .map(|sku| (*sku).clone())
            .collect();

        Ok(SearchPage {
            data,
            total_records: hits.len() as u64,
        })
    }
}

//! Order scanning: look up an order, attach its color and rack space, record it.

use super::store::{ScanPersistence, ScanStore};
use crate::config::{ScanConfig, MIN_ORDER_ID_LEN};
use crate::error::{RackError, Result};
use crate::model::ScanRecord;
use crate::services::{ColorCatalog, OrderLookup};
use std::collections::HashMap;
use tracing::{debug, info, warn};

/// Scans orders into a [`ScanStore`].
pub struct Scanner<O: OrderLookup> {
    orders: O,
    colors: HashMap<u32, String>,
    config: ScanConfig,
}

impl<O: OrderLookup> Scanner<O> {
    /// Create a scanner, reading the color catalog once.
    ///
    /// A failing catalog is logged and leaves every scan without a color.
    pub fn new<C: ColorCatalog>(orders: O, catalog: &C, config: ScanConfig) -> Self {
        let mut colors = HashMap::new();
        match catalog.colors() {
            Ok(entries) => {
                for entry in entries {
                    colors.entry(entry.style_code).or_insert(entry.color);
                }
                debug!("Loaded colors for {} style(s)", colors.len());
            }
            Err(e) => warn!("Color catalog unavailable, scanning without colors: {}", e),
        }

        Self {
            orders,
            colors,
            config,
        }
    }

    /// Color known for a style.
    pub fn color_for(&self, style_number: u32) -> Option<&str> {
        self.colors.get(&style_number).map(String::as_str)
    }

    /// Look up an order and record it with the given rack space.
    pub fn scan<P: ScanPersistence>(
        &self,
        store: &mut ScanStore<P>,
        order_id: &str,
        rack_space: &str,
    ) -> Result<ScanRecord> {
        let order_id = order_id.trim();
        let invalid = || RackError::InvalidOrderId {
            order_id: order_id.to_string(),
        };

        if order_id.len() < MIN_ORDER_ID_LEN || !order_id.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }
        let numeric_id: u64 = order_id.parse().map_err(|_| invalid())?;

        let order = self
            .orders
            .find_order(numeric_id)?
            .ok_or_else(|| RackError::OrderNotFound {
                order_id: order_id.to_string(),
            })?;

        if self.config.is_blocked(order.style_number) {
            return Err(RackError::BlockedStyle {
                style_number: order.style_number,
            });
        }

        let record = ScanRecord {
            order_id: order_id.to_string(),
            style_number: order.style_number,
            size: order.size,
            color: self.color_for(order.style_number).map(str::to_string),
            rack_space: rack_space.trim().to_string(),
        };

        let outcome = store.upsert(record.clone())?;
        info!(
            "Scanned order {} (style {}, size {}) into '{}': {:?}",
            record.order_id, record.style_number, record.size, record.rack_space, outcome
        );
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{ColorEntry, OrderRecord};
    use crate::session::{MemoryPersistence, UpsertOutcome};
    use pretty_assertions::assert_eq;

    struct FixedOrders(Vec<OrderRecord>);

    impl OrderLookup for FixedOrders {
        fn find_order(&self, order_id: u64) -> Result<Option<OrderRecord>> {
            Ok(self.0.iter().find(|o| o.order_id == order_id).cloned())
        }
    }

    struct FixedColors(Vec<ColorEntry>);

    impl ColorCatalog for FixedColors {
        fn colors(&self) -> Result<Vec<ColorEntry>> {
            Ok(self.0.clone())
        }
    }

    struct BrokenColors;

    impl ColorCatalog for BrokenColors {
        fn colors(&self) -> Result<Vec<ColorEntry>> {
            Err(RackError::Service {
                service: "color catalog",
                message: "timeout".to_string(),
            })
        }
    }

    fn orders() -> FixedOrders {
        FixedOrders(vec![
            OrderRecord {
                order_id: 133126,
                style_number: 19626,
                size: "XL".to_string(),
            },
            OrderRecord {
                order_id: 133127,
                style_number: 30031,
                size: "M".to_string(),
            },
        ])
    }

    fn colors() -> FixedColors {
        FixedColors(vec![
            ColorEntry {
                style_code: 19626,
                color: "Red".to_string(),
            },
            ColorEntry {
                style_code: 19626,
                color: "Blue".to_string(),
            },
        ])
    }

    fn scanner() -> Scanner<FixedOrders> {
        Scanner::new(
            orders(),
            &colors(),
            ScanConfig {
                blocked_styles: vec![30031],
            },
        )
    }

    // ==================== success tests ====================

    #[test]
    fn test_scan_records_order() {
        let mut store = ScanStore::open(MemoryPersistence::default());
        let record = scanner().scan(&mut store, " 133126 ", "rk-a1 ").unwrap();

        assert_eq!(
            record,
            ScanRecord {
                order_id: "133126".to_string(),
                style_number: 19626,
                size: "XL".to_string(),
                color: Some("Red".to_string()),
                rack_space: "rk-a1".to_string(),
            }
        );
        assert_eq!(store.list_all(), &[record]);
    }

    #[test]
    fn test_rescan_updates_rack_space() {
        let scanner = scanner();
        let mut store = ScanStore::open(MemoryPersistence::default());
        scanner.scan(&mut store, "133126", "").unwrap();
        scanner.scan(&mut store, "133126", "B7").unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.get("133126").unwrap().rack_space, "B7");
        let again = store.upsert(store.list_all()[0].clone()).unwrap();
        assert_eq!(again, UpsertOutcome::Updated);
    }

    #[test]
    fn test_broken_catalog_scans_without_color() {
        let scanner = Scanner::new(orders(), &BrokenColors, ScanConfig::default());
        let mut store = ScanStore::open(MemoryPersistence::default());
        let record = scanner.scan(&mut store, "133126", "A1").unwrap();
        assert_eq!(record.color, None);
    }

    // ==================== error tests ====================

    #[test]
    fn test_short_order_id_rejected() {
        let mut store = ScanStore::open(MemoryPersistence::default());
        let err = scanner().scan(&mut store, " 1331 ", "A1").unwrap_err();
        assert!(matches!(err, RackError::InvalidOrderId { ref order_id } if order_id == "1331"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_non_numeric_order_id_rejected() {
        let mut store = ScanStore::open(MemoryPersistence::default());
        let err = scanner().scan(&mut store, "13A126", "A1").unwrap_err();
        assert_eq!(err.code_value(), 200);
    }

    #[test]
    fn test_signed_order_id_rejected() {
        let mut store = ScanStore::open(MemoryPersistence::default());
        let err = scanner().scan(&mut store, "+133126", "A1").unwrap_err();
        assert!(matches!(err, RackError::InvalidOrderId { ref order_id } if order_id == "+133126"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_unknown_order() {
        let mut store = ScanStore::open(MemoryPersistence::default());
        let err = scanner().scan(&mut store, "999999", "A1").unwrap_err();
        assert_eq!(err.to_string(), "Order id 999999 not found");
    }

    #[test]
    fn test_blocked_style() {
        let mut store = ScanStore::open(MemoryPersistence::default());
        let err = scanner().scan(&mut store, "133127", "A1").unwrap_err();
        assert!(matches!(err, RackError::BlockedStyle { style_number: 30031 }));
        assert!(store.is_empty());
    }
}

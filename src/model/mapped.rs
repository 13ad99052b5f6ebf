//! Previously mapped SKU as returned by the mapping search service.

use serde::{Deserialize, Serialize};

/// A SKU already mapped to an order and a rack space.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappedSku {
    pub order_id: String,
    pub style_number: String,
    pub size: String,
    pub color: String,
    pub rack_space: String,
    /// Stock flag reported by the service, when present.
    #[serde(default, rename = "inStock")]
    pub in_stock: Option<String>,
}

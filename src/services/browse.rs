//! Search and pagination over previously mapped SKUs.

use super::traits::MappedSkuSearch;
use crate::config::{DEFAULT_PAGE_LIMIT, MAX_PAGE_BUTTONS};
use crate::error::{RackError, Result};
use crate::model::MappedSku;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Mapped SKU search parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    pub style_number: Option<String>,
    pub rack_space: Option<String>,
    /// 1-based page number.
    pub page: u32,
    pub limit: u32,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            style_number: None,
            rack_space: None,
            page: 1,
            limit: DEFAULT_PAGE_LIMIT,
        }
    }
}

impl SearchQuery {
    /// Search by style number; blank input searches everything.
    pub fn by_style(style_number: &str) -> Self {
        Self {
            style_number: non_blank(style_number),
            ..Default::default()
        }
    }

    /// Search by rack space; blank input searches everything.
    pub fn by_rack_space(rack_space: &str) -> Self {
        Self {
            rack_space: non_blank(rack_space),
            ..Default::default()
        }
    }

    /// Same filters, another page.
    pub fn with_page(&self, page: u32) -> Self {
        Self {
            page,
            ..self.clone()
        }
    }

    /// Query-string pairs in request order; blank filters are omitted.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(4);
        if let Some(style) = self.style_number.as_deref().and_then(non_blank) {
            pairs.push(("style_number", style));
        }
        if let Some(rack) = self.rack_space.as_deref().and_then(non_blank) {
            pairs.push(("rack_space", rack));
        }
        pairs.push(("page", self.page.to_string()));
        pairs.push(("limit", self.limit.to_string()));
        pairs
    }
}

fn non_blank(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// One page of results as returned by the search service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchPage {
    pub data: Vec<MappedSku>,
    pub total_records: u64,
}

/// Page position within a result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pagination {
    pub current_page: u32,
    pub total_records: u64,
    pub total_pages: u32,
    pub limit: u32,
}

impl Pagination {
    /// Compute pagination for a result set.
    pub fn new(current_page: u32, total_records: u64, limit: u32) -> Self {
        let total_pages = if limit == 0 {
            0
        } else {
            u32::try_from(total_records.div_ceil(u64::from(limit))).unwrap_or(u32::MAX)
        };
        Self {
            current_page,
            total_records,
            total_pages,
            limit,
        }
    }

    /// Page numbers to offer, centred on the current page.
    pub fn page_window(&self, max_buttons: u32) -> Vec<u32> {
        if self.total_pages == 0 || max_buttons == 0 {
            return Vec::new();
        }

        let current = self.current_page.clamp(1, self.total_pages);
        let half = max_buttons / 2;
        let mut start = current.saturating_sub(half).max(1);
        let end = start.saturating_add(max_buttons - 1).min(self.total_pages);
        if end - start < max_buttons - 1 {
            start = end.saturating_sub(max_buttons - 1).max(1);
        }
        (start..=end).collect()
    }

    /// Page window with the default number of buttons.
    pub fn default_window(&self) -> Vec<u32> {
        self.page_window(MAX_PAGE_BUTTONS)
    }
}

/// A page of mapped SKUs with its pagination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MappedSkuPage {
    pub query: SearchQuery,
    pub products: Vec<MappedSku>,
    pub pagination: Pagination,
}

/// Run a search, treating an empty page as "no products found".
pub fn browse<S: MappedSkuSearch + ?Sized>(search: &S, query: &SearchQuery) -> Result<MappedSkuPage> {
    debug!("Searching mapped SKUs: {:?}", query.query_pairs());
    let page = search.search(query)?;

    if page.data.is_empty() {
        return Err(RackError::NoResults);
    }

    Ok(MappedSkuPage {
        query: query.clone(),
        pagination: Pagination::new(query.page, page.total_records, query.limit),
        products: page.data,
    })
}

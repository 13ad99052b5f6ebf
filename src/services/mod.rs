//! Interfaces of the remote collaborators and their local stand-ins.

mod browse;
mod local;
mod traits;

pub use browse::{browse, MappedSkuPage, Pagination, SearchPage, SearchQuery};
pub use local::{CsvColorCatalog, CsvOrderLookup, LocalMappingIndex};
pub use traits::{
    submit_mapping, ColorCatalog, ColorEntry, MappedSkuSearch, OrderLookup, OrderRecord,
    RackSpaceUpsert,
};

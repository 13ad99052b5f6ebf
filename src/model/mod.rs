//! Data model types for rack-space matching and scan sessions.

mod file_kind;
mod inventory;
mod mapped;
mod reset;
mod scan;

pub use file_kind::FileKind;
pub use inventory::{InventoryRow, Parsed, RackPattern};
pub use mapped::MappedSku;
pub use reset::ResetRow;
pub use scan::{MappingRow, ScanRecord};

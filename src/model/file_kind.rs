//! Kinds of CSV files the tool reads or writes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which upload or data slot a file belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FileKind {
    /// Main inventory file (`Rack Space`, `Item SkuCode`).
    Main,
    /// Rack-space pattern file (`Rack Space`).
    Patterns,
    /// Bulk order-id to rack-space mapping file.
    Mapping,
    /// Order lookup table.
    Orders,
    /// Style color table.
    Colors,
    /// Scan session records.
    Scans,
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileKind::Main => write!(f, "main inventory"),
            FileKind::Patterns => write!(f, "rack space"),
            FileKind::Mapping => write!(f, "mapping"),
            FileKind::Orders => write!(f, "orders"),
            FileKind::Colors => write!(f, "colors"),
            FileKind::Scans => write!(f, "scan record"),
        }
    }
}

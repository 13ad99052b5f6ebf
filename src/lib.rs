//! rackspace-rs - Rack-space matching and warehouse CSV tooling.
//!
//! The core of this library is the zero-rack pipeline: a main inventory CSV
//! and a rack-space pattern CSV are normalized, letters-only patterns are
//! expanded into concrete rack codes, and the matching inventory rows are
//! written out as an OMS inventory reset file.
//!
//! Around it sit the scan session (order lookup, rack assignment and
//! scanned-order exports) and browsing of previously mapped SKUs.
//!
//! # Example
//!
//! ```no_run
//! use rackspace_rs::{zero_rack_export, MatchConfig};
//! use std::path::Path;
//!
//! let export = zero_rack_export(
//!     Path::new("inventory.csv"),
//!     Path::new("racks.csv"),
//!     &MatchConfig::default(),
//! )
//! .unwrap();
//! std::fs::write(&export.filename, &export.csv).unwrap();
//! ```

pub mod config;
pub mod error;
pub mod generator;
pub mod model;
pub mod parser;
pub mod services;
pub mod session;
pub mod transform;
pub mod validation;

// Re-exports for convenience
pub use config::{MatchConfig, ScanConfig};
pub use error::{ErrorCode, MatchDiagnostic, RackError, Result};
pub use generator::{format_barcode_export, format_reset_export, format_scanned_orders};
pub use model::{FileKind, InventoryRow, MappedSku, MappingRow, Parsed, RackPattern, ScanRecord};
pub use parser::{parse_csv, parse_main_file, parse_mapping_file, parse_pattern_file};
pub use services::{browse, MappedSkuSearch, OrderLookup, SearchQuery};
pub use session::{ResetExport, ScanStore, Scanner, ZeroRackSession};
pub use transform::{expand_patterns, match_rows, normalize_rack_space, MatchSet};
pub use validation::ValidationResult;

/// Build the inventory reset file from a main inventory file and a
/// rack-space pattern file.
///
/// Both files are loaded into a fresh [`ZeroRackSession`] and exported with
/// the current time in the file name.
pub fn zero_rack_export(
    main_path: &std::path::Path,
    racks_path: &std::path::Path,
    config: &MatchConfig,
) -> Result<ResetExport> {
    let mut session = ZeroRackSession::new();
    session.load_main_path(main_path)?;
    session.load_patterns_path(racks_path)?;

    session.export(config, chrono::Utc::now())
}

//! Reading uploaded CSV files from disk.

use super::schemas::{main_rows, mapping_rows, pattern_rows};
use super::table::{parse_csv_bytes, CsvTable};
use crate::config::filenames::{CSV_EXTENSION, SCANNED_ORDERS_PREFIX};
use crate::error::{RackError, Result};
use crate::model::{FileKind, InventoryRow, MappingRow, Parsed, RackPattern};
use std::fs;
use std::path::Path;
use tracing::info;

/// Check that a path is an existing CSV file acceptable for `kind`.
///
/// Mapping uploads must also be named `scanned_orders-*.csv`.
pub fn check_csv_file(path: &Path, kind: FileKind) -> Result<()> {
    if !path.exists() {
        return Err(RackError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    let wrong_type = || RackError::FileType {
        kind,
        path: path.to_path_buf(),
    };

    if extension != CSV_EXTENSION {
        return Err(wrong_type());
    }

    if kind == FileKind::Mapping {
        let prefix = path
            .file_name()
            .and_then(|n| n.to_str())
            .and_then(|n| n.split('-').next())
            .unwrap_or("");
        if prefix != SCANNED_ORDERS_PREFIX {
            return Err(wrong_type());
        }
    }

    Ok(())
}

/// Check and parse a CSV file from disk.
pub fn read_csv_file(path: &Path, kind: FileKind) -> Result<CsvTable> {
    check_csv_file(path, kind)?;
    let bytes = fs::read(path)?;
    let table = parse_csv_bytes(&bytes, kind)?;
    info!(
        "Read {} row(s) from {} file {}",
        table.len(),
        kind,
        path.display()
    );
    Ok(table)
}

/// Load and parse the main inventory file.
pub fn load_main_file(path: &Path) -> Result<Parsed<InventoryRow>> {
    Ok(main_rows(&read_csv_file(path, FileKind::Main)?))
}

/// Load and parse the rack-space pattern file.
pub fn load_pattern_file(path: &Path) -> Result<Parsed<RackPattern>> {
    Ok(pattern_rows(&read_csv_file(path, FileKind::Patterns)?))
}

/// Load and parse a bulk mapping file.
pub fn load_mapping_file(path: &Path) -> Result<Parsed<MappingRow>> {
    mapping_rows(&read_csv_file(path, FileKind::Mapping)?)
}

//! OMS "update in-stock quantity" reset file.

use crate::config::filenames::RESET_EXPORT_PREFIX;
use crate::config::MatchConfig;
use crate::error::{RackError, Result};
use crate::model::{InventoryRow, ResetRow};
use chrono::{DateTime, Utc};
use csv::{Terminator, WriterBuilder};

/// Render matched rows as the inventory reset CSV.
///
/// The header row is always written. Fields are quoted only when they
/// contain a delimiter, quote or line break; records end with CRLF.
pub fn format_reset_export(matched: &[&InventoryRow], config: &MatchConfig) -> Result<String> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .terminator(Terminator::CRLF)
        .from_writer(Vec::new());

    writer
        .write_record(ResetRow::HEADERS)
        .map_err(RackError::export)?;

    for row in matched {
        writer
            .serialize(ResetRow::from_inventory(row, config))
            .map_err(RackError::export)?;
    }

    let bytes = writer.into_inner().map_err(RackError::export)?;
    String::from_utf8(bytes).map_err(RackError::export)
}

/// File name of a reset export: `UpdateInStockQtyAnd_orLastPurchasePrice - <millis>.csv`.
pub fn reset_export_filename(timestamp: DateTime<Utc>) -> String {
    format!(
        "{} - {}.csv",
        RESET_EXPORT_PREFIX,
        timestamp.timestamp_millis()
    )
}

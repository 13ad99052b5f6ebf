//! Scanned-orders and barcode exports of the scan session.

use crate::config::filenames::{BARCODE_PREFIX, RESET_EXPORT_PREFIX, SCANNED_ORDERS_PREFIX};
use crate::error::{RackError, Result};
use crate::model::{FileKind, ResetRow, ScanRecord};
use chrono::{DateTime, Utc};
use csv::{Terminator, Writer, WriterBuilder};

const SCANNED_HEADERS: [&str; 5] = ["order_id", "style_number", "size", "color", "rack_space"];
const BARCODE_HEADERS: [&str; 5] = ["SKU", "COLOR", "RACK SPACE", "Qty", "ORDER ID"];

fn lf_writer() -> Writer<Vec<u8>> {
    WriterBuilder::new()
        .has_headers(false)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new())
}

fn finish(writer: Writer<Vec<u8>>) -> Result<String> {
    let bytes = writer.into_inner().map_err(RackError::export)?;
    String::from_utf8(bytes).map_err(RackError::export)
}

fn ensure_records(records: &[ScanRecord]) -> Result<()> {
    if records.is_empty() {
        return Err(RackError::EmptyInput {
            kind: FileKind::Scans,
        });
    }
    Ok(())
}

/// Render scan records as a `scanned_orders` mapping file.
///
/// The output is accepted back by the bulk mapping upload when every
/// record has a color and a rack space.
pub fn format_scanned_orders(records: &[ScanRecord]) -> Result<String> {
    ensure_records(records)?;

    let mut writer = lf_writer();
    writer
        .write_record(SCANNED_HEADERS)
        .map_err(RackError::export)?;

    for record in records {
        let style_number = record.style_number.to_string();
        writer
            .write_record([
                record.order_id.as_str(),
                style_number.as_str(),
                record.size.as_str(),
                record.color.as_deref().unwrap_or(""),
                record.rack_space.as_str(),
            ])
            .map_err(RackError::export)?;
    }

    finish(writer)
}

/// Render scan records as a barcode label file, one label per record.
pub fn format_barcode_export(records: &[ScanRecord]) -> Result<String> {
    ensure_records(records)?;

    let mut writer = lf_writer();
    writer
        .write_record(BARCODE_HEADERS)
        .map_err(RackError::export)?;

    for record in records {
        writer
            .write_record([
                record.barcode_sku().as_str(),
                record.color.as_deref().unwrap_or(""),
                record.rack_space.as_str(),
                "1",
                "",
            ])
            .map_err(RackError::export)?;
    }

    finish(writer)
}

/// Render scan records as an OMS inventory file that adds one unit per order.
pub fn format_oms_add_export(records: &[ScanRecord]) -> Result<String> {
    ensure_records(records)?;

    let mut writer = lf_writer();
    writer
        .write_record(ResetRow::HEADERS)
        .map_err(RackError::export)?;

    for record in records {
        let sku_code = record.oms_sku();
        writer
            .serialize(ResetRow::add_scanned(record, &sku_code))
            .map_err(RackError::export)?;
    }

    finish(writer)
}

/// File name of a scanned orders export: `scanned_orders-<YYYY-MM-DD>.csv`.
pub fn scanned_orders_filename(timestamp: DateTime<Utc>) -> String {
    format!("{}-{}.csv", SCANNED_ORDERS_PREFIX, timestamp.format("%Y-%m-%d"))
}

/// File name of a barcode export: `BARCODE CSV-<YYYY-MM-DD>.csv`.
pub fn barcode_filename(timestamp: DateTime<Utc>) -> String {
    format!("{}-{}.csv", BARCODE_PREFIX, timestamp.format("%Y-%m-%d"))
}

/// File name of an OMS add export: `UpdateInStockQtyAnd_orLastPurchasePrice - <YYYY-MM-DD>.csv`.
pub fn oms_add_filename(timestamp: DateTime<Utc>) -> String {
    format!("{} - {}.csv", RESET_EXPORT_PREFIX, timestamp.format("%Y-%m-%d"))
}

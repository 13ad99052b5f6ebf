//! CSV generators for the OMS reset file and scan exports.

mod reset;
mod scans;

pub use reset::{format_reset_export, reset_export_filename};
pub use scans::{
    barcode_filename, format_barcode_export, format_oms_add_export, format_scanned_orders,
    oms_add_filename, scanned_orders_filename,
};

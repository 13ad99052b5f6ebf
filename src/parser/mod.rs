//! CSV ingestion and per-file-kind row schemas.

mod files;
mod schemas;
mod table;

pub use files::{check_csv_file, load_main_file, load_mapping_file, load_pattern_file, read_csv_file};
pub use schemas::*;
pub use table::{parse_csv, parse_csv_bytes, CsvRow, CsvTable};

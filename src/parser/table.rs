//! Header-keyed CSV tables.

use crate::error::{RackError, Result};
use crate::model::FileKind;
use csv::ReaderBuilder;
use std::collections::HashMap;

/// One data row, keyed by header name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvRow {
    /// 1-based line number of the row in the source file.
    pub line: u64,
    /// Raw cell values by header name.
    pub fields: HashMap<String, String>,
}

impl CsvRow {
    /// Get a trimmed cell value, `None` when absent or blank.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields
            .get(column)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    /// Get the raw cell value, untrimmed.
    pub fn raw(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(|v| v.as_str())
    }

    /// Check if every listed column has a non-blank value.
    pub fn has_all(&self, columns: &[&str]) -> bool {
        columns.iter().all(|c| self.get(c).is_some())
    }
}

/// A parsed CSV file: header row plus data rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvTable {
    /// Header names, trimmed, in file order.
    pub headers: Vec<String>,
    /// Data rows in file order, blank rows skipped.
    pub rows: Vec<CsvRow>,
}

impl CsvTable {
    /// Check if a header column exists.
    pub fn has_column(&self, column: &str) -> bool {
        self.headers.iter().any(|h| h == column)
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if the table has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Parse CSV text with a header row.
pub fn parse_csv(contents: &str, kind: FileKind) -> Result<CsvTable> {
    parse_csv_bytes(contents.as_bytes(), kind)
}

/// Parse raw CSV bytes with a header row.
///
/// Rows may be shorter or longer than the header; missing cells are absent
/// from the row and extra cells are ignored. Lines whose cells are all blank
/// are skipped. Invalid UTF-8 is reported as a parse error.
pub fn parse_csv_bytes(contents: &[u8], kind: FileKind) -> Result<CsvTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(contents);

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| RackError::parse(kind, e))?
        .iter()
        .map(|h| h.trim_start_matches('\u{feff}').trim().to_string())
        .collect();

    let mut rows = Vec::new();
    let mut scanned_to = 0usize;
    let mut line = 1u64;
    for result in reader.records() {
        let record = result.map_err(|e| RackError::parse(kind, e))?;

        if record.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }

        // The reader's position can sit on skipped empty lines before the record.
        if let Some(start) = record.position().map(|p| p.byte() as usize) {
            let mut start = start.min(contents.len());
            while start < contents.len() && matches!(contents[start], b'\r' | b'\n') {
                start += 1;
            }
            if start > scanned_to {
                line += contents[scanned_to..start].iter().filter(|&&b| b == b'\n').count() as u64;
                scanned_to = start;
            }
        }

        // Repeated header names keep the first column.
        let mut fields = HashMap::with_capacity(headers.len());
        for (header, value) in headers.iter().zip(record.iter()) {
            fields
                .entry(header.clone())
                .or_insert_with(|| value.to_string());
        }

        rows.push(CsvRow { line, fields });
    }

    Ok(CsvTable { headers, rows })
}

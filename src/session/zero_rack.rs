//! Two-file upload session for the zero-rack export.

use crate::config::MatchConfig;
use crate::error::{RackError, Result};
use crate::generator::{format_reset_export, reset_export_filename};
use crate::model::{FileKind, InventoryRow, Parsed, RackPattern};
use crate::parser::{load_main_file, load_pattern_file, parse_main_file, parse_pattern_file};
use crate::transform::{expand_patterns_with_limit, match_or_diagnose};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::Path;
use tracing::{debug, info};

/// A generated inventory reset file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResetExport {
    /// Suggested file name.
    pub filename: String,
    /// CSV text, CRLF terminated.
    pub csv: String,
    /// Number of matched main-file rows.
    pub matched: usize,
    /// Letters-only patterns that were expanded.
    pub patterns: Vec<String>,
}

/// Holds the main inventory and the rack-space patterns until both are uploaded.
///
/// Each slot is filled independently; loading a slot again replaces it.
#[derive(Debug, Default)]
pub struct ZeroRackSession {
    main: Option<Parsed<InventoryRow>>,
    patterns: Option<Parsed<RackPattern>>,
}

impl ZeroRackSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session from rows that were already parsed.
    pub fn from_parsed(main: Parsed<InventoryRow>, patterns: Parsed<RackPattern>) -> Self {
        Self {
            main: Some(main),
            patterns: Some(patterns),
        }
    }

    /// Parse main inventory CSV text into the main slot.
    pub fn load_main(&mut self, contents: &str) -> Result<&Parsed<InventoryRow>> {
        Self::fill(&mut self.main, parse_main_file(contents), FileKind::Main)
    }

    /// Parse rack-space pattern CSV text into the patterns slot.
    pub fn load_patterns(&mut self, contents: &str) -> Result<&Parsed<RackPattern>> {
        Self::fill(&mut self.patterns, parse_pattern_file(contents), FileKind::Patterns)
    }

    /// Read a main inventory file into the main slot.
    pub fn load_main_path(&mut self, path: &Path) -> Result<&Parsed<InventoryRow>> {
        Self::fill(&mut self.main, load_main_file(path), FileKind::Main)
    }

    /// Read a rack-space pattern file into the patterns slot.
    pub fn load_patterns_path(&mut self, path: &Path) -> Result<&Parsed<RackPattern>> {
        Self::fill(&mut self.patterns, load_pattern_file(path), FileKind::Patterns)
    }

    fn fill<T>(
        slot: &mut Option<Parsed<T>>,
        result: Result<Parsed<T>>,
        kind: FileKind,
    ) -> Result<&Parsed<T>> {
        *slot = None;
        let parsed = result?;
        info!(
            "Loaded {} {} row(s) ({} skipped)",
            parsed.len(),
            kind,
            parsed.dropped
        );
        let parsed: &Parsed<T> = slot.insert(parsed);
        Ok(parsed)
    }

    /// Parsed main inventory, if loaded.
    pub fn main(&self) -> Option<&Parsed<InventoryRow>> {
        self.main.as_ref()
    }

    /// Parsed rack-space patterns, if loaded.
    pub fn patterns(&self) -> Option<&Parsed<RackPattern>> {
        self.patterns.as_ref()
    }

    /// Check if both slots hold at least one row.
    pub fn is_ready(&self) -> bool {
        self.main.as_ref().is_some_and(|p| !p.is_empty())
            && self.patterns.as_ref().is_some_and(|p| !p.is_empty())
    }

    /// Expand the patterns, match the main rows and render the reset file.
    pub fn export(&self, config: &MatchConfig, timestamp: DateTime<Utc>) -> Result<ResetExport> {
        let main = match &self.main {
            Some(parsed) if !parsed.is_empty() => parsed,
            _ => return Err(RackError::EmptyInput { kind: FileKind::Main }),
        };
        let patterns = match &self.patterns {
            Some(parsed) if !parsed.is_empty() => parsed,
            _ => {
                return Err(RackError::EmptyInput {
                    kind: FileKind::Patterns,
                })
            }
        };

        let match_set = expand_patterns_with_limit(
            patterns.rows.iter().map(|p| p.rack_space.as_str()),
            config.expansion_limit,
        );
        debug!(
            "Match set holds {} code(s) from {} pattern(s)",
            match_set.len(),
            match_set.patterns().len()
        );

        let matched = match_or_diagnose(&main.rows, &match_set)?;
        let csv = format_reset_export(&matched, config)?;
        info!("Exporting {} matched row(s)", matched.len());

        Ok(ResetExport {
            filename: reset_export_filename(timestamp),
            csv,
            matched: matched.len(),
            patterns: match_set.patterns().to_vec(),
        })
    }
}

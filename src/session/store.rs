//! Scan session records keyed by order id.

use crate::error::{RackError, Result};
use crate::model::ScanRecord;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Where scan records are loaded from and saved to.
pub trait ScanPersistence {
    /// Load saved records; unreadable data yields an empty list.
    fn load(&self) -> Vec<ScanRecord>;

    /// Save the full record list.
    fn save(&mut self, records: &[ScanRecord]) -> Result<()>;
}

/// Records kept in memory only.
#[derive(Debug, Clone, Default)]
pub struct MemoryPersistence {
    pub records: Vec<ScanRecord>,
    /// Number of saves performed.
    pub saves: usize,
}

impl ScanPersistence for MemoryPersistence {
    fn load(&self) -> Vec<ScanRecord> {
        self.records.clone()
    }

    fn save(&mut self, records: &[ScanRecord]) -> Result<()> {
        self.records = records.to_vec();
        self.saves += 1;
        Ok(())
    }
}

/// Records saved as a JSON array in a file.
#[derive(Debug, Clone)]
pub struct JsonFilePersistence {
    path: PathBuf,
}

impl JsonFilePersistence {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ScanPersistence for JsonFilePersistence {
    fn load(&self) -> Vec<ScanRecord> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => {
                debug!("No saved scan records at {}: {}", self.path.display(), e);
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<ScanRecord>>(&content) {
            Ok(records) => records,
            Err(e) => {
                warn!(
                    "Ignoring unreadable scan records in {}: {}",
                    self.path.display(),
                    e
                );
                Vec::new()
            }
        }
    }

    fn save(&mut self, records: &[ScanRecord]) -> Result<()> {
        let json = serde_json::to_string_pretty(records).map_err(|e| RackError::Persistence {
            message: e.to_string(),
        })?;
        fs::write(&self.path, json).map_err(|e| RackError::Persistence {
            message: format!("{}: {}", self.path.display(), e),
        })
    }
}

/// What an upsert did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    /// New order id, added at the front.
    Inserted,
    /// Known order id, replaced in place.
    Updated,
    /// Record without an order id; nothing changed.
    Ignored,
}

/// Ordered scan records, newest first, persisted after every change.
#[derive(Debug)]
pub struct ScanStore<P: ScanPersistence> {
    records: Vec<ScanRecord>,
    persistence: P,
}

impl<P: ScanPersistence> ScanStore<P> {
    /// Open a store, loading whatever the persistence holds.
    pub fn open(persistence: P) -> Self {
        let records = persistence.load();
        debug!("Opened scan store with {} record(s)", records.len());
        Self {
            records,
            persistence,
        }
    }

    /// All records, newest scan first.
    pub fn list_all(&self) -> &[ScanRecord] {
        &self.records
    }

    /// Find a record by order id.
    pub fn get(&self, order_id: &str) -> Option<&ScanRecord> {
        self.records.iter().find(|r| r.order_id == order_id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Insert a new order at the front, or replace an existing one in place.
    pub fn upsert(&mut self, record: ScanRecord) -> Result<UpsertOutcome> {
        if record.order_id.trim().is_empty() {
            return Ok(UpsertOutcome::Ignored);
        }

        let mut records = self.records.clone();
        let outcome = match records.iter().position(|r| r.order_id == record.order_id) {
            Some(idx) => {
                records[idx] = record;
                UpsertOutcome::Updated
            }
            None => {
                records.insert(0, record);
                UpsertOutcome::Inserted
            }
        };

        self.commit(records)?;
        Ok(outcome)
    }

    /// Remove an order; returns whether it was present.
    pub fn delete(&mut self, order_id: &str) -> Result<bool> {
        let records: Vec<ScanRecord> = self
            .records
            .iter()
            .filter(|r| r.order_id != order_id)
            .cloned()
            .collect();
        let removed = records.len() != self.records.len();
        self.commit(records)?;
        Ok(removed)
    }

    /// Remove every record.
    pub fn clear(&mut self) -> Result<()> {
        self.commit(Vec::new())
    }

    /// Save the new record list, then make it current. A failed save
    /// leaves the store unchanged.
    fn commit(&mut self, records: Vec<ScanRecord>) -> Result<()> {
        self.persistence.save(&records)?;
        self.records = records;
        Ok(())
    }

    /// Access the persistence backend.
    pub fn persistence(&self) -> &P {
        &self.persistence
    }
}

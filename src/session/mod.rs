//! Upload and scan sessions.

mod scanner;
mod store;
mod zero_rack;

pub use scanner::Scanner;
pub use store::{JsonFilePersistence, MemoryPersistence, ScanPersistence, ScanStore, UpsertOutcome};
pub use zero_rack::{ResetExport, ZeroRackSession};

//! Error types for rack-space matching and CSV processing.

use crate::model::FileKind;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Error codes surfaced to the user alongside the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Wrong file extension or file name (-1)
    FileTypeError = -1,
    /// File does not exist (-2)
    FileNotFound = -2,
    /// Malformed CSV structure (-3)
    ParseError = -3,
    /// Required file not uploaded yet (-4)
    EmptyInputError = -4,
    /// Matching completed with an empty intersection (E100)
    NoMatchError = 100,
    /// File parsed but no row passed the schema (E101)
    NoValidRows = 101,
    /// Order id rejected before lookup (E200)
    InvalidOrderId = 200,
    /// Order lookup returned nothing (E201)
    OrderNotFound = 201,
    /// Style is on the exact-inventory block list (E202)
    BlockedStyle = 202,
    /// Mapped SKU search returned nothing (E203)
    NoResults = 203,
    /// External collaborator failed (E300)
    ServiceError = 300,
    /// Writing CSV output failed (E400)
    ExportError = 400,
    /// Scan store could not be saved (E401)
    PersistenceError = 401,
    /// Underlying I/O failure (E500)
    IoError = 500,
}

/// Samples gathered when the match set and the main file share no rack space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchDiagnostic {
    /// Up to five normalized rack spaces from the main file.
    pub main_samples: Vec<String>,
    /// Up to ten codes from the match set.
    pub match_samples: Vec<String>,
}

impl fmt::Display for MatchDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Sample Main: {} | Looking for: {}",
            self.main_samples.join(", "),
            self.match_samples.join(", ")
        )
    }
}

/// Main error type for the crate.
#[derive(Debug, Error)]
pub enum RackError {
    #[error("Not a valid {kind} CSV file: {path}")]
    FileType { kind: FileKind, path: PathBuf },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Error parsing {kind} CSV: {message}")]
    Parse { kind: FileKind, message: String },

    #[error("No {kind} data loaded; upload and parse the file first")]
    EmptyInput { kind: FileKind },

    #[error("No matching rack spaces found ({0})")]
    NoMatch(MatchDiagnostic),

    #[error("No valid rows found in {kind} CSV ({dropped} rows skipped)")]
    NoValidRows { kind: FileKind, dropped: usize },

    #[error("Invalid order id '{order_id}'")]
    InvalidOrderId { order_id: String },

    #[error("Order id {order_id} not found")]
    OrderNotFound { order_id: String },

    #[error("Style {style_number} is an exact inventory style and must not be scanned")]
    BlockedStyle { style_number: u32 },

    #[error("No products found for your search")]
    NoResults,

    #[error("{service} failed: {message}")]
    Service {
        service: &'static str,
        message: String,
    },

    #[error("Failed to write CSV output: {message}")]
    Export { message: String },

    #[error("Failed to persist scan records: {message}")]
    Persistence { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl RackError {
    /// Get the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            RackError::FileType { .. } => ErrorCode::FileTypeError,
            RackError::FileNotFound { .. } => ErrorCode::FileNotFound,
            RackError::Parse { .. } => ErrorCode::ParseError,
            RackError::EmptyInput { .. } => ErrorCode::EmptyInputError,
            RackError::NoMatch(_) => ErrorCode::NoMatchError,
            RackError::NoValidRows { .. } => ErrorCode::NoValidRows,
            RackError::InvalidOrderId { .. } => ErrorCode::InvalidOrderId,
            RackError::OrderNotFound { .. } => ErrorCode::OrderNotFound,
            RackError::BlockedStyle { .. } => ErrorCode::BlockedStyle,
            RackError::NoResults => ErrorCode::NoResults,
            RackError::Service { .. } => ErrorCode::ServiceError,
            RackError::Export { .. } => ErrorCode::ExportError,
            RackError::Persistence { .. } => ErrorCode::PersistenceError,
            RackError::Io(_) => ErrorCode::IoError,
        }
    }

    /// Get the numeric error code value.
    pub fn code_value(&self) -> i32 {
        self.code() as i32
    }

    /// Wrap a `csv` crate error raised while reading a file of the given kind.
    pub(crate) fn parse(kind: FileKind, err: impl fmt::Display) -> Self {
        RackError::Parse {
            kind,
            message: err.to_string(),
        }
    }

    /// Wrap a failure raised while writing CSV output.
    pub(crate) fn export(err: impl fmt::Display) -> Self {
        RackError::Export {
            message: err.to_string(),
        }
    }
}

/// Result type alias for crate operations.
pub type Result<T> = std::result::Result<T, RackError>;

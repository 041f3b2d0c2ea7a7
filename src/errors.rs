//! Unified application error type.
//! All modules (storage, core, cli, export) return AppError to keep the
//! error handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Storage-related
    // ---------------------------
    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("Storage unavailable: {0}")]
    Persistence(String),

    #[error("Corrupt stored value for key '{key}': {source}")]
    CorruptValue {
        key: String,
        source: serde_json::Error,
    },

    // ---------------------------
    // Serialization
    // ---------------------------
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("No entry at position {0}")]
    OutOfRange(usize),

    #[error("No entry with id {0}")]
    EntryNotFound(i64),

    #[error("No archived log for {0}")]
    ArchiveNotFound(String),

    #[error("Name must not be empty")]
    EmptyName,

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    // ---------------------------
    // Authorization
    // ---------------------------
    #[error("Admin password required or incorrect")]
    Unauthorized,

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;

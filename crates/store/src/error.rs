// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! Store and import errors
//!

use thiserror::Error;

/// Errors that can occur when reading from or writing to the local store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("SQLx database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("Database migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    #[error(transparent)]
    StdIo(#[from] std::io::Error),

    /// The stored value is not valid JSON for its key
    #[error("The value stored under '{key}' is invalid: {source}")]
    InvalidStoredValue {
        key: String,
        source: serde_json::Error,
    },

    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),
}

/// Errors that can occur when importing a file.  Any of these leaves the
/// existing collection untouched.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error(transparent)]
    StdIo(#[from] std::io::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("No title column found (expected one of: {0})")]
    NoTitleColumn(String),

    #[error("No start date column found (expected one of: {0})")]
    NoStartColumn(String),

    #[error("Unsupported file type '{0}' (expected .json or .csv)")]
    UnsupportedFileType(String),
}

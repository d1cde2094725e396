// SPDX-License-Identifier: MIT

//! Error types for inventory database operations.

use std::path::PathBuf;

use rusqlite::ffi;
use thiserror::Error;

/// Result type for inventory database operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during inventory database operations.
#[derive(Error, Debug)]
pub enum Error {
    /// A CHECK or NOT NULL constraint failed (non-positive identifier,
    /// negative size, empty required text).
    #[error("Invalid parameters: {0}")]
    InvalidParams(String),

    /// A uniqueness constraint failed (duplicate identifier, or a placement
    /// that is already recorded).
    #[error("Already exists: {0}")]
    AlreadyExists(String),

    /// A referenced entity or placement was absent (zero rows affected, or a
    /// foreign-key violation on a placement insert).
    #[error("Not found")]
    NotFound,

    /// Unclassified SQLite error
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Failed to open database with context
    #[error("Failed to open database at '{path}': {source}")]
    DatabaseOpen {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// Database file not found
    #[error("Database not found at: {0}")]
    DatabaseNotFound(PathBuf),
}

impl Error {
    /// Classify a statement-level SQLite error into the constraint taxonomy.
    ///
    /// Uniqueness violations become [`Error::AlreadyExists`], CHECK and NOT
    /// NULL violations become [`Error::InvalidParams`], and foreign-key
    /// violations become [`Error::NotFound`] (a placement insert referencing
    /// an absent endpoint). Anything else is passed through unclassified.
    pub(crate) fn classify(err: rusqlite::Error) -> Self {
        if let rusqlite::Error::SqliteFailure(e, msg) = &err {
            match e.extended_code {
                ffi::SQLITE_CONSTRAINT_PRIMARYKEY | ffi::SQLITE_CONSTRAINT_UNIQUE => {
                    return Error::AlreadyExists(msg.clone().unwrap_or_default());
                }
                ffi::SQLITE_CONSTRAINT_CHECK | ffi::SQLITE_CONSTRAINT_NOTNULL => {
                    return Error::InvalidParams(msg.clone().unwrap_or_default());
                }
                ffi::SQLITE_CONSTRAINT_FOREIGNKEY => return Error::NotFound,
                _ => {}
            }
        }
        Error::Sqlite(err)
    }
}

// SPDX-License-Identifier: MIT

//! Database connection management.

use std::path::Path;

use rusqlite::{Connection, OpenFlags, Transaction};
use tracing::debug;

use crate::error::{Error, Result};
use crate::schema::{DROP_SQL, SCHEMA_SQL, VIEWS_SQL};

/// Database open mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenMode {
    /// Read-only access
    ReadOnly,
    /// Read-write access to an existing database
    ReadWrite,
    /// Create new database if it doesn't exist
    Create,
}

/// SQLite database connection for inventory metadata.
pub struct InventoryDb {
    pub(crate) conn: Connection,
}

impl InventoryDb {
    /// Open or create a database at the given path.
    pub fn open<P: AsRef<Path>>(path: P, mode: OpenMode) -> Result<Self> {
        let path = path.as_ref();
        let flags = match mode {
            OpenMode::ReadOnly => {
                if !path.exists() {
                    return Err(Error::DatabaseNotFound(path.to_owned()));
                }
                OpenFlags::SQLITE_OPEN_READ_ONLY
            }
            OpenMode::ReadWrite => {
                if !path.exists() {
                    return Err(Error::DatabaseNotFound(path.to_owned()));
                }
                OpenFlags::SQLITE_OPEN_READ_WRITE
            }
            OpenMode::Create => OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_CREATE,
        };

        let conn = Connection::open_with_flags(path, flags).map_err(|e| Error::DatabaseOpen {
            path: path.to_owned(),
            source: e,
        })?;
        let db = Self { conn };

        db.configure_pragmas(mode)?;
        if mode == OpenMode::Create {
            db.create_schema()?;
        }

        debug!("Opened database at {} ({:?})", path.display(), mode);
        Ok(db)
    }

    /// Create an in-memory database (for testing).
    ///
    /// The database is initialized with the full schema.
    pub fn open_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.configure_pragmas(OpenMode::Create)?;
        db.create_schema()?;
        debug!("Created in-memory database");
        Ok(db)
    }

    /// Configure SQLite pragmas.
    ///
    /// Foreign-key enforcement must be on in every mode: placement integrity
    /// and cascade deletes depend on it.
    fn configure_pragmas(&self, mode: OpenMode) -> Result<()> {
        if mode != OpenMode::ReadOnly {
            self.conn.execute_batch(
                r#"
                PRAGMA journal_mode = WAL;
                PRAGMA synchronous = NORMAL;
                PRAGMA temp_store = MEMORY;
                "#,
            )?;
        }
        self.conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        Ok(())
    }

    /// Create the database schema (tables + views).
    pub fn create_schema(&self) -> Result<()> {
        self.conn.execute_batch(SCHEMA_SQL)?;
        self.conn.execute_batch(VIEWS_SQL)?;
        debug!("Created database schema");
        Ok(())
    }

    /// Delete all rows from every table, leaving the schema in place.
    ///
    /// Placement tables are cleared first so no cascade work is needed.
    pub fn clear_tables(&mut self) -> Result<()> {
        self.in_transaction(|tx| {
            tx.execute_batch(
                r#"
                delete from file_on_disk;
                delete from ram_on_disk;
                delete from file;
                delete from ram;
                delete from disk;
                "#,
            )
        })?;
        debug!("Cleared all tables");
        Ok(())
    }

    /// Drop the schema entirely (views, then tables).
    pub fn drop_tables(&mut self) -> Result<()> {
        self.in_transaction(|tx| tx.execute_batch(DROP_SQL))?;
        debug!("Dropped database schema");
        Ok(())
    }

    /// Check if the database has the expected schema tables.
    pub fn has_schema(&self) -> Result<bool> {
        let count: i32 = self.conn.query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name='disk'",
            [],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }

    /// Get raw connection (for advanced usage).
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Get mutable raw connection (for transactions).
    pub fn connection_mut(&mut self) -> &mut Connection {
        &mut self.conn
    }

    /// Run `f` inside a single transaction and classify statement errors.
    ///
    /// Commits when `f` succeeds; any statement failure rolls back the whole
    /// transaction (on drop) before the error is classified and returned.
    /// Every mutating operation in this crate goes through here, so no
    /// operation ever spans more than one transaction.
    pub(crate) fn in_transaction<T>(
        &mut self,
        f: impl FnOnce(&Transaction<'_>) -> rusqlite::Result<T>,
    ) -> Result<T> {
        let tx = self.conn.transaction()?;
        let out = f(&tx).map_err(Error::classify)?;
        tx.commit()?;
        Ok(out)
    }
}

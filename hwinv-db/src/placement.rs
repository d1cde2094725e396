// SPDX-License-Identifier: MIT

//! Placement operations: attaching files and RAM modules to disks.
//!
//! File placement and the `disk.free_space` adjustment always travel in the
//! same transaction, so free space stays consistent with the `file_on_disk`
//! table under rollback. RAM placement has no free-space side effect.

use rusqlite::params;

use crate::connection::InventoryDb;
use crate::error::{Error, Result};

impl InventoryDb {
    /// Attach a file to a disk and debit the disk's free space by the file's
    /// stored size.
    ///
    /// Returns [`Error::NotFound`] when either endpoint is absent (surfaced
    /// as a foreign-key violation) and [`Error::AlreadyExists`] when the
    /// placement is already recorded. There is no application-level space
    /// check: a file larger than the remaining free space trips the
    /// `free_space >= 0` schema constraint and surfaces as
    /// [`Error::InvalidParams`], rolling the placement back.
    pub fn add_file_to_disk(&mut self, file_id: i64, disk_id: i64) -> Result<()> {
        self.in_transaction(|tx| {
            tx.execute(
                "INSERT INTO file_on_disk (file_id, disk_id) VALUES (?1, ?2)",
                params![file_id, disk_id],
            )?;
            tx.execute(
                r#"
                UPDATE disk
                SET free_space = free_space - (SELECT size FROM file WHERE file_id = ?1)
                WHERE disk_id = ?2
                "#,
                params![file_id, disk_id],
            )?;
            Ok(())
        })
    }

    /// Detach a file from a disk and credit the disk's free space.
    ///
    /// The credit is guarded by an existence predicate on the placement row,
    /// so detaching a pair that was never attached is a committed no-op and
    /// still returns `Ok` — free space is untouched and the delete affects
    /// zero rows.
    pub fn remove_file_from_disk(&mut self, file_id: i64, disk_id: i64) -> Result<()> {
        self.in_transaction(|tx| {
            tx.execute(
                r#"
                UPDATE disk
                SET free_space = free_space + (SELECT size FROM file WHERE file_id = ?1)
                WHERE disk_id = ?2
                  AND EXISTS (
                      SELECT 1 FROM file_on_disk
                      WHERE file_id = ?1 AND disk_id = ?2
                  )
                "#,
                params![file_id, disk_id],
            )?;
            tx.execute(
                "DELETE FROM file_on_disk WHERE file_id = ?1 AND disk_id = ?2",
                params![file_id, disk_id],
            )?;
            Ok(())
        })
    }

    /// Attach a RAM module to a disk.
    ///
    /// Both endpoints must exist ([`Error::NotFound`] otherwise); a repeated
    /// placement returns [`Error::AlreadyExists`].
    pub fn add_ram_to_disk(&mut self, ram_id: i64, disk_id: i64) -> Result<()> {
        self.in_transaction(|tx| {
            tx.execute(
                "INSERT INTO ram_on_disk (ram_id, disk_id) VALUES (?1, ?2)",
                params![ram_id, disk_id],
            )?;
            Ok(())
        })
    }

    /// Detach a RAM module from a disk.
    ///
    /// Unlike [`Self::remove_file_from_disk`], an absent placement is
    /// reported as [`Error::NotFound`].
    pub fn remove_ram_from_disk(&mut self, ram_id: i64, disk_id: i64) -> Result<()> {
        let rows = self.in_transaction(|tx| {
            tx.execute(
                "DELETE FROM ram_on_disk WHERE ram_id = ?1 AND disk_id = ?2",
                params![ram_id, disk_id],
            )
        })?;
        if rows == 0 {
            return Err(Error::NotFound);
        }
        Ok(())
    }
}

// SPDX-License-Identifier: MIT

//! CRUD operations for file, disk and RAM records.
//!
//! Every mutation is one transaction. Constraint enforcement lives in the
//! schema: duplicate identifiers surface as [`Error::AlreadyExists`], CHECK
//! and NOT NULL failures as [`Error::InvalidParams`].

use rusqlite::params;

use crate::connection::InventoryDb;
use crate::error::{Error, Result};
use crate::types::{Disk, File, Ram};

impl InventoryDb {
    /// Insert a new file record.
    pub fn add_file(&mut self, file: &File) -> Result<()> {
        self.in_transaction(|tx| {
            tx.execute(
                "INSERT INTO file (file_id, type, size) VALUES (?1, ?2, ?3)",
                params![file.id, file.file_type, file.size],
            )?;
            Ok(())
        })
    }

    /// Query a file by its identifier.
    ///
    /// Returns `None` if the file is not in the database.
    pub fn file_by_id(&self, file_id: i64) -> Result<Option<File>> {
        let mut stmt = self
            .conn
            .prepare_cached("SELECT file_id, type, size FROM file WHERE file_id = ?1")?;

        let file = stmt.query_row(params![file_id], |row| {
            Ok(File {
                id: row.get(0)?,
                file_type: row.get(1)?,
                size: row.get(2)?,
            })
        });

        match file {
            Ok(file) => Ok(Some(file)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Delete a file record.
    ///
    /// Within the same transaction, every disk currently holding the file is
    /// credited the file's stored size *before* the row is deleted; the
    /// cascade on `file_on_disk` would otherwise erase the linkage needed to
    /// find those disks.
    pub fn delete_file(&mut self, file_id: i64) -> Result<()> {
        let rows = self.in_transaction(|tx| {
            tx.execute(
                r#"
                UPDATE disk
                SET free_space = free_space + (SELECT size FROM file WHERE file_id = ?1)
                WHERE disk_id IN (SELECT disk_id FROM file_on_disk WHERE file_id = ?1)
                "#,
                params![file_id],
            )?;
            tx.execute("DELETE FROM file WHERE file_id = ?1", params![file_id])
        })?;
        if rows == 0 {
            return Err(Error::NotFound);
        }
        Ok(())
    }

    /// Insert a new disk record.
    pub fn add_disk(&mut self, disk: &Disk) -> Result<()> {
        self.in_transaction(|tx| {
            tx.execute(
                r#"
                INSERT INTO disk (disk_id, company, speed, free_space, cost)
                VALUES (?1, ?2, ?3, ?4, ?5)
                "#,
                params![disk.id, disk.company, disk.speed, disk.free_space, disk.cost],
            )?;
            Ok(())
        })
    }

    /// Query a disk by its identifier.
    ///
    /// Returns `None` if the disk is not in the database.
    pub fn disk_by_id(&self, disk_id: i64) -> Result<Option<Disk>> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT disk_id, company, speed, free_space, cost FROM disk WHERE disk_id = ?1",
        )?;

        let disk = stmt.query_row(params![disk_id], |row| {
            Ok(Disk {
                id: row.get(0)?,
                company: row.get(1)?,
                speed: row.get(2)?,
                free_space: row.get(3)?,
                cost: row.get(4)?,
            })
        });

        match disk {
            Ok(disk) => Ok(Some(disk)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Delete a disk record.
    ///
    /// Cascades any file and RAM placements away; the files and RAM modules
    /// themselves are kept.
    pub fn delete_disk(&mut self, disk_id: i64) -> Result<()> {
        let rows = self.in_transaction(|tx| {
            tx.execute("DELETE FROM disk WHERE disk_id = ?1", params![disk_id])
        })?;
        if rows == 0 {
            return Err(Error::NotFound);
        }
        Ok(())
    }

    /// Insert a new RAM record.
    pub fn add_ram(&mut self, ram: &Ram) -> Result<()> {
        self.in_transaction(|tx| {
            tx.execute(
                "INSERT INTO ram (ram_id, company, size) VALUES (?1, ?2, ?3)",
                params![ram.id, ram.company, ram.size],
            )?;
            Ok(())
        })
    }

    /// Query a RAM module by its identifier.
    ///
    /// Returns `None` if the module is not in the database.
    pub fn ram_by_id(&self, ram_id: i64) -> Result<Option<Ram>> {
        let mut stmt = self
            .conn
            .prepare_cached("SELECT ram_id, company, size FROM ram WHERE ram_id = ?1")?;

        let ram = stmt.query_row(params![ram_id], |row| {
            Ok(Ram {
                id: row.get(0)?,
                company: row.get(1)?,
                size: row.get(2)?,
            })
        });

        match ram {
            Ok(ram) => Ok(Some(ram)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Delete a RAM record, cascading any placements away.
    pub fn delete_ram(&mut self, ram_id: i64) -> Result<()> {
        let rows = self
            .in_transaction(|tx| tx.execute("DELETE FROM ram WHERE ram_id = ?1", params![ram_id]))?;
        if rows == 0 {
            return Err(Error::NotFound);
        }
        Ok(())
    }

    /// Insert a disk and a file as a single all-or-nothing transaction.
    pub fn add_disk_and_file(&mut self, disk: &Disk, file: &File) -> Result<()> {
        self.in_transaction(|tx| {
            tx.execute(
                r#"
                INSERT INTO disk (disk_id, company, speed, free_space, cost)
                VALUES (?1, ?2, ?3, ?4, ?5)
                "#,
                params![disk.id, disk.company, disk.speed, disk.free_space, disk.cost],
            )?;
            tx.execute(
                "INSERT INTO file (file_id, type, size) VALUES (?1, ?2, ?3)",
                params![file.id, file.file_type, file.size],
            )?;
            Ok(())
        })
    }
}

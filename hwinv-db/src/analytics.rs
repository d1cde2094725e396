// SPDX-License-Identifier: MIT

//! Analytical queries over the inventory schema.
//!
//! All operations are read-only single statements. An empty result maps to a
//! type-appropriate default inside `Ok` (zero, vacuous true, empty list);
//! only a genuine store failure yields `Err`, so the two cases are
//! distinguishable by the caller.

use rusqlite::params;

use crate::connection::InventoryDb;
use crate::error::Result;

impl InventoryDb {
    /// Mean size of the files placed on a disk.
    ///
    /// Returns `0.0` when the disk holds no files or does not exist.
    pub fn average_file_size_on_disk(&self, disk_id: i64) -> Result<f64> {
        let mut stmt = self
            .conn
            .prepare_cached("SELECT AVG(size) FROM all_files_on_disk WHERE disk_id = ?1")?;
        let avg: Option<f64> = stmt.query_row(params![disk_id], |row| row.get(0))?;
        Ok(avg.unwrap_or(0.0))
    }

    /// Total size of the RAM modules placed on a disk.
    ///
    /// Returns `0` when the disk holds no RAM or does not exist.
    pub fn disk_total_ram(&self, disk_id: i64) -> Result<i64> {
        let mut stmt = self
            .conn
            .prepare_cached("SELECT SUM(size) FROM all_rams_on_disk WHERE disk_id = ?1")?;
        let sum: Option<i64> = stmt.query_row(params![disk_id], |row| row.get(0))?;
        Ok(sum.unwrap_or(0))
    }

    /// Total storage cost for every placed file of the given type, summing
    /// `disk.cost * file.size` over all matching placements.
    ///
    /// Returns `0` when no file of that type is placed anywhere.
    pub fn cost_for_type(&self, file_type: &str) -> Result<i64> {
        let mut stmt = self.conn.prepare_cached(
            r#"
            SELECT SUM(d.cost * v.size)
            FROM all_files_on_disk v
            JOIN disk d ON v.disk_id = d.disk_id
            WHERE v.type = ?1
            "#,
        )?;
        let sum: Option<i64> = stmt.query_row(params![file_type], |row| row.get(0))?;
        Ok(sum.unwrap_or(0))
    }

    /// Files that currently fit on the disk (size ≤ its free space), largest
    /// identifiers first, at most five.
    ///
    /// An absent disk yields an empty list.
    pub fn files_fitting_on_disk(&self, disk_id: i64) -> Result<Vec<i64>> {
        let mut stmt = self.conn.prepare_cached(
            r#"
            SELECT f.file_id
            FROM file f, (SELECT free_space FROM disk WHERE disk_id = ?1) d
            WHERE f.size <= d.free_space
            ORDER BY f.file_id DESC
            LIMIT 5
            "#,
        )?;

        let mut files = Vec::new();
        let mut rows = stmt.query(params![disk_id])?;
        while let Some(row) = rows.next()? {
            files.push(row.get(0)?);
        }
        Ok(files)
    }

    /// Files that would fit on both the disk and its RAM.
    ///
    /// Declared extension point with no implemented algorithm; always returns
    /// an empty list. (Both files and RAM modules carry a `size`, and the
    /// intended comparison between them was never defined.)
    pub fn files_fitting_on_disk_and_ram(&self, _disk_id: i64) -> Result<Vec<i64>> {
        Ok(Vec::new())
    }

    /// Whether every RAM module on the disk comes from the disk's own
    /// manufacturer.
    ///
    /// Vacuously true when no RAM is attached; false when the disk itself
    /// does not exist.
    pub fn is_company_exclusive(&self, disk_id: i64) -> Result<bool> {
        let mut stmt = self.conn.prepare_cached(
            r#"
            SELECT NOT EXISTS (
                SELECT 1 FROM all_rams_on_disk r
                WHERE r.disk_id = d.disk_id AND r.company <> d.company
            )
            FROM disk d
            WHERE d.disk_id = ?1
            "#,
        )?;

        match stmt.query_row(params![disk_id], |row| row.get(0)) {
            Ok(exclusive) => Ok(exclusive),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    /// Distinct disks sharing at least one file with a different disk,
    /// ascending.
    pub fn conflicting_disks(&self) -> Result<Vec<i64>> {
        let mut stmt = self.conn.prepare_cached(
            r#"
            SELECT DISTINCT a.disk_id
            FROM file_on_disk a
            JOIN file_on_disk b ON a.file_id = b.file_id AND a.disk_id <> b.disk_id
            ORDER BY a.disk_id ASC
            "#,
        )?;

        let mut disks = Vec::new();
        let mut rows = stmt.query([])?;
        while let Some(row) = rows.next()? {
            disks.push(row.get(0)?);
        }
        Ok(disks)
    }

    /// Top five disks ranked by how many files would currently fit on them,
    /// ties broken by speed descending, then disk ID descending.
    pub fn most_available_disks(&self) -> Result<Vec<i64>> {
        let mut stmt = self.conn.prepare_cached(
            r#"
            SELECT d.disk_id
            FROM disk d
            LEFT JOIN file f ON f.size <= d.free_space
            GROUP BY d.disk_id
            ORDER BY COUNT(f.file_id) DESC, d.speed DESC, d.disk_id DESC
            LIMIT 5
            "#,
        )?;

        let mut disks = Vec::new();
        let mut rows = stmt.query([])?;
        while let Some(row) = rows.next()? {
            disks.push(row.get(0)?);
        }
        Ok(disks)
    }

    /// Files co-located with the given file on at least half of the disks
    /// that hold it.
    ///
    /// The ten strongest candidates by shared-disk count are selected (ties
    /// by file ID ascending) and returned sorted ascending. A file placed on
    /// no disks makes the threshold vacuous, so every file qualifies; the
    /// subject file itself is not excluded.
    pub fn close_files(&self, file_id: i64) -> Result<Vec<i64>> {
        let mut stmt = self.conn.prepare_cached(
            r#"
            SELECT file_id FROM (
                SELECT file_id, shared FROM (
                    SELECT f.file_id AS file_id,
                           (SELECT COUNT(*)
                            FROM file_on_disk a
                            JOIN file_on_disk b ON a.disk_id = b.disk_id
                            WHERE a.file_id = ?1 AND b.file_id = f.file_id) AS shared
                    FROM file f
                )
                WHERE 2 * shared >= (SELECT COUNT(*) FROM file_on_disk WHERE file_id = ?1)
                ORDER BY shared DESC, file_id ASC
                LIMIT 10
            )
            ORDER BY file_id ASC
            "#,
        )?;

        let mut files = Vec::new();
        let mut rows = stmt.query(params![file_id])?;
        while let Some(row) = rows.next()? {
            files.push(row.get(0)?);
        }
        Ok(files)
    }
}

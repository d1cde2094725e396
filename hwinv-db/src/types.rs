// SPDX-License-Identifier: MIT

//! Database row types for inventory metadata.

/// A file record.
///
/// Represents a row from the `file` table. A file may be placed on any
/// number of disks via the `file_on_disk` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    /// Unique positive identifier
    pub id: i64,
    /// File type label (e.g. "png"); never empty
    pub file_type: String,
    /// Size in storage units, non-negative
    pub size: i64,
}

/// A disk record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Disk {
    /// Unique positive identifier
    pub id: i64,
    /// Manufacturer name
    pub company: String,
    /// Transfer speed, positive
    pub speed: i64,
    /// Remaining capacity. A cached derived value: debited when a file is
    /// attached, credited when it is detached or deleted, never recomputed
    /// from placements on read.
    pub free_space: i64,
    /// Cost per storage unit, positive
    pub cost: i64,
}

/// A RAM module record.
///
/// RAM placement does not consume disk capacity in this model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ram {
    /// Unique positive identifier
    pub id: i64,
    /// Manufacturer name
    pub company: String,
    /// Module size, positive
    pub size: i64,
}

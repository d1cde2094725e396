// SPDX-License-Identifier: MIT

//! SQLite database interface for hardware inventory metadata.
//!
//! This crate provides read and write access to an inventory database of
//! files, disks and RAM modules, including the placement relations between
//! them and the derived free-space bookkeeping those relations imply.
//!
//! # Key Features
//!
//! - Full schema support (file, disk, ram, placement tables and views)
//! - Typed CRUD operations with classified constraint errors
//! - Transactional attach/detach keeping `disk.free_space` consistent
//! - Analytical queries (averages, sums, rankings, conflict detection)
//! - In-memory database for testing
//!
//! # Example
//!
//! ```ignore
//! use hwinv_db::{InventoryDb, OpenMode};
//!
//! // Open an existing inventory database (read-only)
//! let db = InventoryDb::open("/var/lib/hwinv/inventory.sqlite", OpenMode::ReadOnly)?;
//!
//! // Query a disk
//! if let Some(disk) = db.disk_by_id(1)? {
//!     println!("free space: {}", disk.free_space);
//! }
//! ```

mod analytics;
mod connection;
mod entities;
mod error;
mod placement;
mod schema;
mod types;

pub use connection::{InventoryDb, OpenMode};
pub use error::{Error, Result};
pub use types::*;

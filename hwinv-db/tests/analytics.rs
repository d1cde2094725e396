// SPDX-License-Identifier: MIT

//! Analytics query tests for hwinv-db.
//!
//! Each test builds its fixture in an in-memory database. Empty results must
//! come back as the documented defaults inside `Ok`, never as errors.

use hwinv_db::{Disk, File, InventoryDb, Ram};

fn file(id: i64, file_type: &str, size: i64) -> File {
    File {
        id,
        file_type: file_type.into(),
        size,
    }
}

fn disk(id: i64, company: &str, speed: i64, free_space: i64, cost: i64) -> Disk {
    Disk {
        id,
        company: company.into(),
        speed,
        free_space,
        cost,
    }
}

fn ram(id: i64, company: &str, size: i64) -> Ram {
    Ram {
        id,
        company: company.into(),
        size,
    }
}

#[test]
fn test_average_file_size() {
    let mut db = InventoryDb::open_memory().unwrap();
    db.add_disk(&disk(1, "wd", 10, 1000, 5)).unwrap();

    // no files, and a disk that does not exist at all
    assert_eq!(db.average_file_size_on_disk(1).unwrap(), 0.0);
    assert_eq!(db.average_file_size_on_disk(99).unwrap(), 0.0);

    db.add_file(&file(10, "png", 100)).unwrap();
    db.add_file(&file(11, "png", 200)).unwrap();
    db.add_file(&file(12, "png", 400)).unwrap(); // left unplaced
    db.add_file_to_disk(10, 1).unwrap();
    db.add_file_to_disk(11, 1).unwrap();

    assert_eq!(db.average_file_size_on_disk(1).unwrap(), 150.0);
}

#[test]
fn test_disk_total_ram() {
    let mut db = InventoryDb::open_memory().unwrap();
    db.add_disk(&disk(1, "wd", 10, 1000, 5)).unwrap();

    assert_eq!(db.disk_total_ram(1).unwrap(), 0);
    assert_eq!(db.disk_total_ram(99).unwrap(), 0);

    db.add_ram(&ram(1, "kingston", 8)).unwrap();
    db.add_ram(&ram(2, "kingston", 16)).unwrap();
    db.add_ram_to_disk(1, 1).unwrap();
    db.add_ram_to_disk(2, 1).unwrap();

    assert_eq!(db.disk_total_ram(1).unwrap(), 24);
}

#[test]
fn test_cost_for_type() {
    let mut db = InventoryDb::open_memory().unwrap();
    db.add_disk(&disk(1, "wd", 10, 1000, 3)).unwrap();
    db.add_disk(&disk(2, "sg", 10, 1000, 7)).unwrap();

    assert_eq!(db.cost_for_type("png").unwrap(), 0);

    db.add_file(&file(10, "png", 100)).unwrap();
    db.add_file(&file(11, "txt", 50)).unwrap();
    db.add_file_to_disk(10, 1).unwrap();
    db.add_file_to_disk(10, 2).unwrap();
    db.add_file_to_disk(11, 1).unwrap();

    // file 10 is charged on both holders: 3*100 + 7*100
    assert_eq!(db.cost_for_type("png").unwrap(), 1000);
    assert_eq!(db.cost_for_type("txt").unwrap(), 150);
    // a type nothing was placed for stays at the empty default
    assert_eq!(db.cost_for_type("iso").unwrap(), 0);
}

/// Attaching a file shrinks the candidate set, ordering is by file ID
/// descending, and the list is capped at five.
#[test]
fn test_files_fitting_on_disk() {
    let mut db = InventoryDb::open_memory().unwrap();
    db.add_disk(&disk(1, "wd", 10, 500, 5)).unwrap();
    db.add_file(&file(10, "png", 100)).unwrap();
    db.add_file(&file(20, "iso", 450)).unwrap();

    db.add_file_to_disk(10, 1).unwrap();
    assert_eq!(db.disk_by_id(1).unwrap().unwrap().free_space, 400);

    // 450 no longer fits in 400; 100 still does
    assert_eq!(db.files_fitting_on_disk(1).unwrap(), vec![10]);

    for id in 30..36 {
        db.add_file(&file(id, "txt", 50)).unwrap();
    }
    // six candidates of size 50 plus file 10: capped at 5, descending
    assert_eq!(
        db.files_fitting_on_disk(1).unwrap(),
        vec![35, 34, 33, 32, 31]
    );

    // absent disk
    assert_eq!(db.files_fitting_on_disk(99).unwrap(), Vec::<i64>::new());
}

#[test]
fn test_files_fitting_on_disk_and_ram_is_unimplemented() {
    let mut db = InventoryDb::open_memory().unwrap();
    db.add_disk(&disk(1, "wd", 10, 500, 5)).unwrap();
    db.add_file(&file(10, "png", 100)).unwrap();
    db.add_ram(&ram(1, "wd", 256)).unwrap();
    db.add_ram_to_disk(1, 1).unwrap();

    assert_eq!(
        db.files_fitting_on_disk_and_ram(1).unwrap(),
        Vec::<i64>::new()
    );
}

#[test]
fn test_company_exclusive() {
    let mut db = InventoryDb::open_memory().unwrap();
    db.add_disk(&disk(1, "acme", 10, 500, 5)).unwrap();

    // vacuously true with no RAM attached; false for a missing disk
    assert!(db.is_company_exclusive(1).unwrap());
    assert!(!db.is_company_exclusive(99).unwrap());

    db.add_ram(&ram(1, "acme", 8)).unwrap();
    db.add_ram(&ram(2, "acme", 8)).unwrap();
    db.add_ram_to_disk(1, 1).unwrap();
    db.add_ram_to_disk(2, 1).unwrap();
    assert!(db.is_company_exclusive(1).unwrap());

    db.add_ram(&ram(3, "other", 8)).unwrap();
    db.add_ram_to_disk(3, 1).unwrap();
    assert!(!db.is_company_exclusive(1).unwrap());

    // exclusivity is restored once the foreign module is detached
    db.remove_ram_from_disk(3, 1).unwrap();
    assert!(db.is_company_exclusive(1).unwrap());
}

#[test]
fn test_conflicting_disks() {
    let mut db = InventoryDb::open_memory().unwrap();
    assert_eq!(db.conflicting_disks().unwrap(), Vec::<i64>::new());

    db.add_disk(&disk(1, "wd", 10, 500, 5)).unwrap();
    db.add_disk(&disk(2, "sg", 10, 500, 5)).unwrap();
    db.add_disk(&disk(3, "ts", 10, 500, 5)).unwrap();
    db.add_file(&file(42, "iso", 10)).unwrap();
    db.add_file(&file(43, "iso", 10)).unwrap();

    // disk 3 holds only an unshared file
    db.add_file_to_disk(43, 3).unwrap();
    assert_eq!(db.conflicting_disks().unwrap(), Vec::<i64>::new());

    db.add_file_to_disk(42, 1).unwrap();
    db.add_file_to_disk(42, 2).unwrap();
    assert_eq!(db.conflicting_disks().unwrap(), vec![1, 2]);
}

#[test]
fn test_most_available_disks() {
    let mut db = InventoryDb::open_memory().unwrap();
    assert_eq!(db.most_available_disks().unwrap(), Vec::<i64>::new());

    db.add_file(&file(1, "a", 100)).unwrap();
    db.add_file(&file(2, "a", 200)).unwrap();
    db.add_file(&file(3, "a", 300)).unwrap();

    // fits 3 files
    db.add_disk(&disk(1, "wd", 10, 350, 5)).unwrap();
    // fits 1 file
    db.add_disk(&disk(2, "wd", 99, 150, 5)).unwrap();
    // both fit 2 files: tie broken by speed, then by id descending
    db.add_disk(&disk(3, "wd", 20, 250, 5)).unwrap();
    db.add_disk(&disk(4, "wd", 10, 250, 5)).unwrap();
    db.add_disk(&disk(5, "wd", 10, 250, 5)).unwrap();

    assert_eq!(db.most_available_disks().unwrap(), vec![1, 3, 5, 4, 2]);

    // a sixth disk pushes the weakest one off the top five
    db.add_disk(&disk(6, "wd", 10, 350, 5)).unwrap();
    assert_eq!(db.most_available_disks().unwrap(), vec![6, 1, 3, 5, 4]);
}

#[test]
fn test_close_files() {
    let mut db = InventoryDb::open_memory().unwrap();
    for id in 1..=4 {
        db.add_disk(&disk(id, "wd", 10, 10_000, 5)).unwrap();
    }
    db.add_file(&file(100, "a", 1)).unwrap(); // subject, on disks 1 and 2
    db.add_file(&file(50, "a", 1)).unwrap(); // shares disk 1 only
    db.add_file(&file(60, "a", 1)).unwrap(); // shares nothing
    db.add_file(&file(70, "a", 1)).unwrap(); // shares both disks

    db.add_file_to_disk(100, 1).unwrap();
    db.add_file_to_disk(100, 2).unwrap();
    db.add_file_to_disk(50, 1).unwrap();
    db.add_file_to_disk(60, 3).unwrap();
    db.add_file_to_disk(70, 1).unwrap();
    db.add_file_to_disk(70, 2).unwrap();

    // subject is on 2 disks, so the bar is 1 shared disk; the subject
    // itself qualifies and the result comes back ascending
    assert_eq!(db.close_files(100).unwrap(), vec![50, 70, 100]);

    // a subject placed nowhere makes the bar vacuous: everything qualifies
    db.add_file(&file(200, "a", 1)).unwrap();
    assert_eq!(db.close_files(200).unwrap(), vec![50, 60, 70, 100, 200]);
}

#[test]
fn test_close_files_caps_at_ten() {
    let mut db = InventoryDb::open_memory().unwrap();
    db.add_disk(&disk(1, "wd", 10, 10_000, 5)).unwrap();
    db.add_file(&file(500, "a", 1)).unwrap();
    db.add_file_to_disk(500, 1).unwrap();

    // twelve files all sharing the subject's single disk
    for id in 1..=12 {
        db.add_file(&file(id, "a", 1)).unwrap();
        db.add_file_to_disk(id, 1).unwrap();
    }

    let close = db.close_files(500).unwrap();
    assert_eq!(close.len(), 10);
    // ties broken by file id ascending before the cap, then returned sorted
    assert_eq!(close, (1..=10).collect::<Vec<i64>>());
}

/// A genuine store failure is an `Err`, never the empty-result default.
#[test]
fn test_store_failure_distinct_from_empty() {
    let mut db = InventoryDb::open_memory().unwrap();

    // intact but empty schema: every aggregate yields its default inside Ok
    assert_eq!(db.average_file_size_on_disk(1).unwrap(), 0.0);
    assert_eq!(db.disk_total_ram(1).unwrap(), 0);
    assert_eq!(db.cost_for_type("png").unwrap(), 0);
    assert_eq!(db.files_fitting_on_disk(1).unwrap(), Vec::<i64>::new());
    assert!(!db.is_company_exclusive(1).unwrap());
    assert_eq!(db.conflicting_disks().unwrap(), Vec::<i64>::new());
    assert_eq!(db.most_available_disks().unwrap(), Vec::<i64>::new());
    assert_eq!(db.close_files(1).unwrap(), Vec::<i64>::new());

    // with the schema gone the same calls must surface the failure
    db.drop_tables().unwrap();

    assert!(db.average_file_size_on_disk(1).is_err());
    assert!(db.disk_total_ram(1).is_err());
    assert!(db.cost_for_type("png").is_err());
    assert!(db.files_fitting_on_disk(1).is_err());
    assert!(db.is_company_exclusive(1).is_err());
    assert!(db.conflicting_disks().is_err());
    assert!(db.most_available_disks().is_err());
    assert!(db.close_files(1).is_err());
}

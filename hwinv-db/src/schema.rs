// SPDX-License-Identifier: MIT

//! Database schema definitions for the inventory store.
//!
//! Three entity tables, two placement tables and two convenience views.
//! Identifier positivity and size/speed/cost ranges are enforced here with
//! CHECK constraints; placement integrity is enforced with cascading foreign
//! keys (requires `PRAGMA foreign_keys = ON`).

/// Entity and placement tables.
pub const SCHEMA_SQL: &str = r#"
create table if not exists file (
    file_id integer primary key not null check (file_id > 0),
    type    text not null check (length(type) > 0),
    size    integer not null check (size >= 0)
);

create table if not exists disk (
    disk_id    integer primary key not null check (disk_id > 0),
    company    text not null,
    speed      integer not null check (speed > 0),
    free_space integer not null check (free_space >= 0),
    cost       integer not null check (cost > 0)
);

create table if not exists ram (
    ram_id  integer primary key not null check (ram_id > 0),
    company text not null,
    size    integer not null check (size > 0)
);

create table if not exists file_on_disk (
    file_id integer not null,
    disk_id integer not null,
    primary key (file_id, disk_id),
    foreign key (file_id) references file(file_id)
        on update cascade on delete cascade,
    foreign key (disk_id) references disk(disk_id)
        on update cascade on delete cascade
);

create table if not exists ram_on_disk (
    ram_id  integer not null,
    disk_id integer not null,
    primary key (ram_id, disk_id),
    foreign key (ram_id) references ram(ram_id)
        on update cascade on delete cascade,
    foreign key (disk_id) references disk(disk_id)
        on update cascade on delete cascade
);
"#;

/// Read-only views joining placements to their entity rows.
pub const VIEWS_SQL: &str = r#"
create view if not exists all_files_on_disk as
    select fd.disk_id, f.file_id, f.type, f.size
    from file f
    inner join file_on_disk fd on f.file_id = fd.file_id;

create view if not exists all_rams_on_disk as
    select rd.disk_id, r.ram_id, r.company, r.size
    from ram r
    inner join ram_on_disk rd on r.ram_id = rd.ram_id;
"#;

/// Teardown, views before the tables they read.
pub const DROP_SQL: &str = r#"
drop view if exists all_files_on_disk;
drop view if exists all_rams_on_disk;
drop table if exists file_on_disk;
drop table if exists ram_on_disk;
drop table if exists file;
drop table if exists ram;
drop table if exists disk;
"#;

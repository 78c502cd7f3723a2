//! SQLite persistence for cities, bike lanes and pollution regions.
//!
//! Geometry columns hold 2-D WKB. Every handle enforces foreign keys and
//! registers the spatial SQL functions the schema's `CHECK` constraints use.
//! Bulk inserts run in one transaction per call; a failed row rolls the whole
//! batch back.

mod city;
mod functions;
mod lanes;
mod regions;
mod schema;

use std::path::Path;

use rusqlite::Connection;
use tracing::debug;

use crate::Result;

/// Handle on the relational store. Created once and passed to every component.
#[derive(Debug)]
pub struct Store {
    conn: Connection,
}

impl Store {
    /// Open (or create) a store file at `path`.
    pub fn open(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "opening store");
        Self::configure(Connection::open(path)?)
    }

    /// Open a transient store, used by tests and dry runs.
    pub fn open_in_memory() -> Result<Self> {
        Self::configure(Connection::open_in_memory()?)
    }

    fn configure(conn: Connection) -> Result<Self> {
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        functions::register_spatial_functions(&conn)?;
        Ok(Self { conn })
    }
}

//! SQLite storage for projects, milestones, and dependency edges.
//!
//! All methods are synchronous; [`crate::tracker::Tracker`] moves them onto
//! blocking tasks. Timestamps are stored as RFC 3339 text and target dates as
//! `YYYY-MM-DD`.

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod migrations;
pub mod milestone_queries;
pub mod project_queries;
pub mod snapshot_queries;
pub mod utils;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Opens (or creates) the database at `path` and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}

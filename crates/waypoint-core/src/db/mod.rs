//! SQLite-backed key/value storage for the planner.
//!
//! This module provides the low-level storage interface. The planner persists
//! three JSON values: the canonical course under a fixed key, the session
//! record, and (while a share link is being viewed) the hydrated shared
//! snapshot. Decoding the stored shapes into domain models happens in
//! [`course_queries`].

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod course_queries;

/// Fixed key holding the canonical course JSON.
pub const COURSE_KEY: &str = "course";
/// Key holding the session record.
pub const SESSION_KEY: &str = "session";
/// Key holding a read-only shared snapshot while one is active.
pub const SHARED_COURSE_KEY: &str = "shared_course";

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Initializes the storage schema using the embedded SQL file.
    fn initialize_schema(&self) -> Result<()> {
        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")?;
        Ok(())
    }

    /// Reads the raw value stored under a key.
    pub(crate) fn get_value(&self, key: &str) -> Result<Option<String>> {
        use rusqlite::OptionalExtension;

        self.connection
            .query_row(
                "SELECT value FROM storage WHERE key = ?1",
                rusqlite::params![key],
                |row| row.get(0),
            )
            .optional()
            .db_context("Failed to read storage value")
    }

    /// Writes the raw value stored under a key, replacing any previous value.
    pub(crate) fn put_value(&mut self, key: &str, value: &str) -> Result<()> {
        self.connection
            .execute(
                "INSERT INTO storage (key, value) VALUES (?1, ?2) \
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value",
                rusqlite::params![key, value],
            )
            .db_context("Failed to write storage value")?;
        Ok(())
    }

    /// Deletes the value stored under a key, if any.
    pub(crate) fn delete_value(&mut self, key: &str) -> Result<()> {
        self.connection
            .execute(
                "DELETE FROM storage WHERE key = ?1",
                rusqlite::params![key],
            )
            .db_context("Failed to delete storage value")?;
        Ok(())
    }
}

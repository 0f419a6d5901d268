//! SQLite-backed key-value store for drafts.
//!
//! The store holds only a path; a connection is opened per operation so the
//! store stays `Send + Sync` and can be shared with the autosave task.

use std::path::{Path, PathBuf};

use rusqlite::{params, Connection, OptionalExtension};

use super::KeyValueStore;
use crate::error::{Result, StorageResultExt, WizardError};

/// Durable draft storage in a single SQLite table.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    db_path: PathBuf,
}

impl SqliteStore {
    /// Creates a store at the given path, initializing the schema and any
    /// missing parent directories.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let db_path = path.as_ref().to_path_buf();
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| WizardError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }
        let store = Self { db_path };
        store.open()?;
        Ok(store)
    }

    /// Creates a store at the default XDG data path:
    /// `$XDG_DATA_HOME/innkeeper/innkeeper.db`.
    pub fn at_default_path() -> Result<Self> {
        Self::new(Self::default_database_path()?)
    }

    /// Default database path following the XDG Base Directory specification.
    pub fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("innkeeper")
            .place_data_file("innkeeper.db")
            .map_err(|e| WizardError::XdgDirectory(e.to_string()))
    }

    fn open(&self) -> Result<Connection> {
        let connection = Connection::open(&self.db_path)
            .storage_context("Failed to open draft database connection")?;
        let schema_sql = include_str!("../../assets/schema.sql");
        connection
            .execute_batch(schema_sql)
            .storage_context("Failed to initialize draft schema")?;
        Ok(connection)
    }
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let connection = self.open()?;
        connection
            .query_row("SELECT value FROM drafts WHERE key = ?1", params![key], |row| {
                row.get(0)
            })
            .optional()
            .storage_context("Failed to read draft slot")
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let connection = self.open()?;
        connection
            .execute(
                "INSERT INTO drafts (key, value, updated_at)
                 VALUES (?1, ?2, strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
                 ON CONFLICT(key) DO UPDATE SET
                     value = excluded.value,
                     updated_at = excluded.updated_at",
                params![key, value],
            )
            .storage_context("Failed to write draft slot")?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let connection = self.open()?;
        connection
            .execute("DELETE FROM drafts WHERE key = ?1", params![key])
            .storage_context("Failed to remove draft slot")?;
        Ok(())
    }
}

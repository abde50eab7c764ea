//! Preference storage for the chosen language
//!
//! A small key/value surface, shaped like the browser's `localStorage`:
//! - `MemoryStorage`: per-session map, used by tests and the demo
//! - `SqliteStorage`: persistent table under the user data directory

use crate::core::{Error, Result};
use rusqlite::{params, Connection, OptionalExtension};
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Trait for language preference backends
pub trait PreferenceStorage {
    /// Read a stored value
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Write a value, replacing any previous one
    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Name of this backend
    fn name(&self) -> &str;
}

/// In-memory storage scoped to one session
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-seeded with a single entry
    pub fn with_item(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage.items.borrow_mut().insert(key.to_string(), value.to_string());
        storage
    }
}

impl PreferenceStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}

/// SQLite-backed preference storage
pub struct SqliteStorage {
    conn: Connection,
}

impl SqliteStorage {
    /// Open the storage at the default location
    pub fn new() -> Result<Self> {
        Self::open(&Self::db_path()?)
    }

    /// Open the storage at an explicit path
    pub fn open(path: &Path) -> Result<Self> {
        let storage = Self {
            conn: Connection::open(path)?,
        };
        storage.init_schema()?;
        Ok(storage)
    }

    /// Open a throwaway in-memory database
    pub fn open_in_memory() -> Result<Self> {
        let storage = Self {
            conn: Connection::open_in_memory()?,
        };
        storage.init_schema()?;
        Ok(storage)
    }

    /// Get the database file path
    fn db_path() -> Result<PathBuf> {
        let data_dir = dirs::data_dir()
            .ok_or_else(|| Error::StorageUnavailable("Could not determine data directory".to_string()))?;

        let app_dir = data_dir.join("portfolio-i18n");
        std::fs::create_dir_all(&app_dir)?;

        Ok(app_dir.join("preferences.db"))
    }

    fn init_schema(&self) -> Result<()> {
        self.conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS preferences (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL,
                updated_at INTEGER NOT NULL
            );
            "#,
        )?;

        Ok(())
    }

    /// Unix timestamp of the last write to `key`
    #[cfg(test)]
    fn updated_at(&self, key: &str) -> Result<Option<i64>> {
        let updated = self
            .conn
            .query_row(
                "SELECT updated_at FROM preferences WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(updated)
    }
}

impl PreferenceStorage for SqliteStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM preferences WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            r#"INSERT INTO preferences (key, value, updated_at)
               VALUES (?1, ?2, ?3)
               ON CONFLICT(key) DO UPDATE SET
                   value = ?2,
                   updated_at = ?3"#,
            params![key, value, chrono::Utc::now().timestamp()],
        )?;
        Ok(())
    }

    fn name(&self) -> &str {
        "sqlite"
    }
}

use std::path::{Path, PathBuf};

use anyhow::Context;
use core_model::Friend;
use rusqlite::{Connection, OptionalExtension, params};

/// Owned handle to the friends table. Constructed once at startup and closed
/// exactly once when dropped.
pub struct FriendStore {
    conn: Connection,
}

impl FriendStore {
    pub fn open_default() -> anyhow::Result<Self> {
        let base = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        let path = base.join("vennekontakt").join("venner.db");
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating parent dir for {}", path.display()))?;
        }
        Self::open(path)
    }

    pub fn open(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let conn = Connection::open(path.as_ref())
            .with_context(|| format!("opening sqlite db {}", path.as_ref().display()))?;
        Ok(Self { conn })
    }

    pub fn init_schema(&self) -> anyhow::Result<()> {
        self.conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS venner (
              id INTEGER PRIMARY KEY AUTOINCREMENT,
              navn TEXT NOT NULL,
              siste_kontakt TEXT NOT NULL
            );
            "#,
        )?;
        Ok(())
    }

    /// Name uniqueness lives here in the caller's pre-check, not in a
    /// constraint on the table.
    pub fn exists(&self, name: &str) -> anyhow::Result<bool> {
        self.conn
            .query_row(
                "SELECT EXISTS(SELECT 1 FROM venner WHERE navn = ?1)",
                params![name],
                |r| r.get(0),
            )
            .map_err(Into::into)
    }

    pub fn insert(&self, name: &str, date: &str) -> anyhow::Result<i64> {
        self.conn.execute(
            "INSERT INTO venner (navn, siste_kontakt) VALUES (?1, ?2)",
            params![name, date],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    pub fn update_date(&self, name: &str, new_date: &str) -> anyhow::Result<usize> {
        self.conn
            .execute(
                "UPDATE venner SET siste_kontakt = ?1 WHERE navn = ?2",
                params![new_date, name],
            )
            .map_err(Into::into)
    }

    pub fn delete(&self, name: &str) -> anyhow::Result<usize> {
        self.conn
            .execute("DELETE FROM venner WHERE navn = ?1", params![name])
            .map_err(Into::into)
    }

    pub fn list_all(&self) -> anyhow::Result<Vec<Friend>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, navn, siste_kontakt FROM venner ORDER BY id ASC")?;
        let rows = stmt.query_map([], |r| {
            Ok(Friend {
                id: r.get(0)?,
                name: r.get(1)?,
                last_contact: r.get(2)?,
            })
        })?;
        rows.collect::<rusqlite::Result<Vec<_>>>()
            .map_err(Into::into)
    }

    pub fn find_by_name(&self, name: &str) -> anyhow::Result<Option<Friend>> {
        self.conn
            .query_row(
                "SELECT id, navn, siste_kontakt FROM venner WHERE navn = ?1",
                params![name],
                |r| {
                    Ok(Friend {
                        id: r.get(0)?,
                        name: r.get(1)?,
                        last_contact: r.get(2)?,
                    })
                },
            )
            .optional()
            .map_err(Into::into)
    }
}

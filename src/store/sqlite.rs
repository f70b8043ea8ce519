//! SQLite-backed message store.
//!
//! CHANGELOG:
//! - 10/11/2026 - Added thread_for_address
//! - 10/09/2026 - Initial read-only store

use super::{queries, MessageStore};
use crate::error::StoreError;
use crate::model::MessageRow;
use rusqlite::{Connection, OpenFlags, OptionalExtension};
use std::path::Path;
use tracing::debug;

/// Read-only connection to an SMS database.
pub struct SqliteMessageStore {
    conn: Connection,
}

impl SqliteMessageStore {
    /// Open the database at `path` read-only.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        let conn = Connection::open_with_flags(
            &path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(|source| StoreError::Open {
            path: path.clone(),
            source,
        })?;

        debug!(path = ?path, "opened message store");
        Ok(Self { conn })
    }
}

impl MessageStore for SqliteMessageStore {
    fn scan(&self, visit: &mut dyn FnMut(MessageRow)) -> Result<(), StoreError> {
        // Statement and cursor live only inside this call.
        let mut stmt = self.conn.prepare(queries::SCAN_MESSAGES)?;
        let rows = stmt.query_map([], |row| {
            Ok(MessageRow {
                thread_id: row.get(0)?,
                address: row.get(1)?,
                body: row.get(2)?,
                timestamp: row.get(3)?,
            })
        })?;

        for row in rows {
            visit(row?);
        }

        Ok(())
    }

    fn thread_for_address(&self, address: &str) -> Result<Option<String>, StoreError> {
        let mut stmt = self.conn.prepare(queries::THREAD_FOR_ADDRESS)?;
        let thread = stmt
            .query_row([address], |row| row.get::<_, String>(0))
            .optional()?;
        Ok(thread)
    }
}

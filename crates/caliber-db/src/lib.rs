pub mod migration;
pub mod ops;
pub mod origin;
pub mod schema;
pub mod store;

pub use origin::Origin;
pub use store::{KeyValueStore, MemoryStore, SqliteStore};

use rusqlite::Connection;
use std::path::Path;

/// Open (or create) the storage database at the given path and run migrations.
pub fn open_db(path: &Path) -> anyhow::Result<Connection> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let conn = Connection::open(path)?;
    conn.execute_batch("PRAGMA journal_mode=WAL;")?;
    migration::run_migrations(&conn)?;
    Ok(conn)
}

/// Open an in-memory database for testing.
pub fn open_memory_db() -> anyhow::Result<Connection> {
    let conn = Connection::open_in_memory()?;
    migration::run_migrations(&conn)?;
    Ok(conn)
}

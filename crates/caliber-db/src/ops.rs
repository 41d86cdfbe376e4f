use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};

// ── Items ──

pub fn get_item(conn: &Connection, origin: &str, key: &str) -> anyhow::Result<Option<String>> {
    let value = conn
        .query_row(
            "SELECT value FROM storage_items WHERE origin = ?1 AND key = ?2",
            params![origin, key],
            |row| row.get::<_, String>(0),
        )
        .optional()?;
    Ok(value)
}

/// Insert or replace the value stored under `key`.
pub fn set_item(conn: &Connection, origin: &str, key: &str, value: &str) -> anyhow::Result<()> {
    conn.execute(
        "INSERT INTO storage_items (origin, key, value, updated_at)
         VALUES (?1, ?2, ?3, ?4)
         ON CONFLICT(origin, key) DO UPDATE SET
            value = excluded.value,
            updated_at = excluded.updated_at",
        params![origin, key, value, Utc::now().to_rfc3339()],
    )?;
    Ok(())
}

pub fn remove_item(conn: &Connection, origin: &str, key: &str) -> anyhow::Result<()> {
    conn.execute(
        "DELETE FROM storage_items WHERE origin = ?1 AND key = ?2",
        params![origin, key],
    )?;
    Ok(())
}

pub fn list_keys(conn: &Connection, origin: &str) -> anyhow::Result<Vec<String>> {
    let mut stmt =
        conn.prepare("SELECT key FROM storage_items WHERE origin = ?1 ORDER BY key")?;
    let rows = stmt.query_map(params![origin], |row| row.get::<_, String>(0))?;
    let mut keys = Vec::new();
    for key in rows {
        keys.push(key?);
    }
    Ok(keys)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::open_memory_db;

    #[test]
    fn test_item_crud() {
        let conn = open_memory_db().unwrap();
        assert_eq!(get_item(&conn, "http://localhost", "k").unwrap(), None);

        set_item(&conn, "http://localhost", "k", "[]").unwrap();
        assert_eq!(
            get_item(&conn, "http://localhost", "k").unwrap(),
            Some("[]".to_string())
        );

        set_item(&conn, "http://localhost", "k", "[1]").unwrap();
        assert_eq!(
            get_item(&conn, "http://localhost", "k").unwrap(),
            Some("[1]".to_string())
        );

        remove_item(&conn, "http://localhost", "k").unwrap();
        assert_eq!(get_item(&conn, "http://localhost", "k").unwrap(), None);
    }

    #[test]
    fn test_origins_are_isolated() {
        let conn = open_memory_db().unwrap();
        set_item(&conn, "https://a.example", "k", "a").unwrap();
        set_item(&conn, "https://b.example", "k", "b").unwrap();

        assert_eq!(
            get_item(&conn, "https://a.example", "k").unwrap(),
            Some("a".to_string())
        );
        assert_eq!(list_keys(&conn, "https://b.example").unwrap(), vec!["k"]);
        assert!(list_keys(&conn, "https://c.example").unwrap().is_empty());
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let conn = open_memory_db().unwrap();
        remove_item(&conn, "http://localhost", "absent").unwrap();
    }
}

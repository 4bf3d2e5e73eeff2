// Entries repository for Recipe-Local
// Key-value CRUD over the entries table; the favorites collection and the
// announcement flag are stored through this surface

use anyhow::{Context, Result};
use rusqlite::{Connection, params};

use super::DatabaseManager;

impl DatabaseManager {
    /// Get a single entry by key
    pub fn get_entry(&self, key: &str) -> Result<Option<String>> {
        self.with_connection(|conn| {
            get_entry_impl(conn, key)
        })
    }

    /// Set a single entry (insert or overwrite)
    pub fn set_entry(&self, key: &str, value: &str, value_type: &str) -> Result<()> {
        self.with_connection(|conn| {
            set_entry_impl(conn, key, value, value_type)
        })
    }

    /// Set a boolean entry
    pub fn set_bool_entry(&self, key: &str, value: bool) -> Result<()> {
        self.set_entry(key, if value { "true" } else { "false" }, "boolean")
    }

    /// Get a boolean entry
    pub fn get_bool_entry(&self, key: &str, default: bool) -> Result<bool> {
        match self.get_entry(key)? {
            Some(v) => Ok(v == "true"),
            None => Ok(default),
        }
    }

    /// Delete an entry by key
    pub fn delete_entry(&self, key: &str) -> Result<()> {
        self.with_connection(|conn| {
            delete_entry_impl(conn, key)
        })
    }
}

fn get_entry_impl(conn: &Connection, key: &str) -> Result<Option<String>> {
    let mut stmt = conn.prepare(
        "SELECT value FROM entries WHERE key = ?"
    ).context("Failed to prepare get_entry query")?;

    let result = stmt.query_row(params![key], |row| row.get(0));

    match result {
        Ok(value) => Ok(Some(value)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e).context("Failed to get entry"),
    }
}

fn set_entry_impl(conn: &Connection, key: &str, value: &str, value_type: &str) -> Result<()> {
    let now = chrono::Utc::now().to_rfc3339();

    conn.execute(
        r#"
        INSERT INTO entries (key, value, value_type, updated_at)
        VALUES (?1, ?2, ?3, ?4)
        ON CONFLICT(key) DO UPDATE SET
            value = excluded.value,
            value_type = excluded.value_type,
            updated_at = excluded.updated_at
        "#,
        params![key, value, value_type, now],
    ).context("Failed to set entry")?;

    Ok(())
}

fn delete_entry_impl(conn: &Connection, key: &str) -> Result<()> {
    conn.execute(
        "DELETE FROM entries WHERE key = ?",
        params![key],
    ).context("Failed to delete entry")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::{tempdir, TempDir};

    fn create_test_db() -> (DatabaseManager, TempDir) {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("test.db");
        (DatabaseManager::new(db_path).unwrap(), dir)
    }

    #[test]
    fn test_set_and_get_entry() {
        let (db, _dir) = create_test_db();

        db.set_entry("test_key", "test_value", "string").unwrap();
        let value = db.get_entry("test_key").unwrap();
        assert_eq!(value, Some("test_value".to_string()));

        // Setting the same key again overwrites
        db.set_entry("test_key", "second_value", "string").unwrap();
        let value = db.get_entry("test_key").unwrap();
        assert_eq!(value, Some("second_value".to_string()));
    }

    #[test]
    fn test_get_missing_entry() {
        let (db, _dir) = create_test_db();

        assert_eq!(db.get_entry("never_set").unwrap(), None);
    }

    #[test]
    fn test_bool_entry() {
        let (db, _dir) = create_test_db();

        // Missing key falls back to the default
        assert_eq!(db.get_bool_entry("test_bool", false).unwrap(), false);
        assert_eq!(db.get_bool_entry("test_bool", true).unwrap(), true);

        db.set_bool_entry("test_bool", true).unwrap();
        assert_eq!(db.get_bool_entry("test_bool", false).unwrap(), true);

        db.set_bool_entry("test_bool", false).unwrap();
        assert_eq!(db.get_bool_entry("test_bool", true).unwrap(), false);
    }

    #[test]
    fn test_delete_entry() {
        let (db, _dir) = create_test_db();

        db.set_entry("doomed", "value", "string").unwrap();
        db.delete_entry("doomed").unwrap();
        assert_eq!(db.get_entry("doomed").unwrap(), None);

        // Deleting a missing key is not an error
        db.delete_entry("doomed").unwrap();
    }
}

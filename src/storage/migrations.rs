/// Database migration management
///
/// This module handles creating and updating the SQLite database schema.
/// It ensures the database has all the required tables and indexes.

use rusqlite::Connection;
use crate::storage::StorageError;

/// Current database schema version
///
/// Increment this when you add new migrations
const CURRENT_VERSION: i32 = 1;

/// Initialize the database schema
///
/// This creates all required tables and indexes if they don't exist.
/// It also sets up the version tracking for future migrations.
pub fn initialize_database(conn: &Connection) -> Result<(), StorageError> {
    // Create version tracking table first
    conn.execute(
        "CREATE TABLE IF NOT EXISTS schema_version (
            version INTEGER PRIMARY KEY
        )",
        [],
    )?;

    // Check current version
    let current_version = get_current_version(conn)?;

    // Run migrations if needed
    if current_version < CURRENT_VERSION {
        run_migrations(conn, current_version)?;
        set_version(conn, CURRENT_VERSION)?;
    }

    Ok(())
}

/// Get the current database schema version
fn get_current_version(conn: &Connection) -> Result<i32, StorageError> {
    let version = conn
        .query_row("SELECT version FROM schema_version LIMIT 1", [], |row| {
            row.get::<_, i32>(0)
        })
        .unwrap_or(0); // Default to version 0 if no version record exists

    Ok(version)
}

/// Set the database schema version
fn set_version(conn: &Connection, version: i32) -> Result<(), StorageError> {
    conn.execute("DELETE FROM schema_version", [])?;
    conn.execute("INSERT INTO schema_version (version) VALUES (?1)", [version])?;
    Ok(())
}

/// Run database migrations from the current version to the latest
fn run_migrations(conn: &Connection, from_version: i32) -> Result<(), StorageError> {
    if from_version < 1 {
        migration_v1(conn)?;
    }

    // Future migrations would go here:
    // if from_version < 2 {
    //     migration_v2(conn)?;
    // }

    Ok(())
}

/// Migration to version 1: Create initial tables
///
/// This creates the core tables for the profile, routines, daily logs,
/// and routine entries
fn migration_v1(conn: &Connection) -> Result<(), StorageError> {
    // Single-row profile table; the server tracks one user
    conn.execute(
        "CREATE TABLE IF NOT EXISTS profile (
            id INTEGER PRIMARY KEY CHECK (id = 1),
            username TEXT NOT NULL,
            first_name TEXT
        )",
        [],
    )?;

    // Create routines table
    conn.execute(
        "CREATE TABLE IF NOT EXISTS routines (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            description TEXT,
            category TEXT NOT NULL,
            frequency TEXT NOT NULL,
            target_duration INTEGER NOT NULL,
            priority INTEGER NOT NULL,
            created_at TEXT NOT NULL,
            is_active BOOLEAN DEFAULT TRUE
        )",
        [],
    )?;

    // Create daily_logs table
    conn.execute(
        "CREATE TABLE IF NOT EXISTS daily_logs (
            id TEXT PRIMARY KEY,
            log_date TEXT NOT NULL,
            mood INTEGER,
            energy_level INTEGER,
            stress_level INTEGER,
            notes TEXT,
            highlights TEXT,
            challenges TEXT
        )",
        [],
    )?;

    // Create routine_entries table
    conn.execute(
        "CREATE TABLE IF NOT EXISTS routine_entries (
            id TEXT PRIMARY KEY,
            log_id TEXT NOT NULL,
            routine_id TEXT NOT NULL,
            status TEXT NOT NULL,
            completion_percentage INTEGER NOT NULL,
            actual_duration INTEGER,
            difficulty_felt INTEGER,
            notes TEXT,
            FOREIGN KEY (log_id) REFERENCES daily_logs (id),
            FOREIGN KEY (routine_id) REFERENCES routines (id)
        )",
        [],
    )?;

    // Create indexes for better query performance
    create_indexes_v1(conn)?;

    tracing::info!("Applied migration v1: Created initial database schema");
    Ok(())
}

/// Create database indexes for version 1
fn create_indexes_v1(conn: &Connection) -> Result<(), StorageError> {
    // Routine names are the grouping key for statistics, so they must be unique
    conn.execute(
        "CREATE UNIQUE INDEX IF NOT EXISTS idx_routines_name
         ON routines (name)",
        [],
    )?;

    // Index for filtering routines by category
    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_routines_category
         ON routines (category)",
        [],
    )?;

    // One daily log per calendar date
    conn.execute(
        "CREATE UNIQUE INDEX IF NOT EXISTS idx_daily_logs_date
         ON daily_logs (log_date)",
        [],
    )?;

    // Index for finding a log's entries (most common query)
    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_routine_entries_log
         ON routine_entries (log_id)",
        [],
    )?;

    // One entry per routine per daily log
    conn.execute(
        "CREATE UNIQUE INDEX IF NOT EXISTS idx_routine_entries_unique
         ON routine_entries (log_id, routine_id)",
        [],
    )?;

    tracing::info!("Created database indexes for v1");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    #[test]
    fn test_initialize_database() {
        let conn = Connection::open_in_memory().unwrap();

        // Should succeed on a fresh database
        let result = initialize_database(&conn);
        assert!(result.is_ok());

        // Should succeed when called again (idempotent)
        let result = initialize_database(&conn);
        assert!(result.is_ok());

        // Verify tables were created
        let table_count: i32 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name IN ('profile', 'routines', 'daily_logs', 'routine_entries')",
                [],
                |row| row.get(0),
            )
            .unwrap();

        assert_eq!(table_count, 4);
    }

    #[test]
    fn test_version_tracking() {
        let conn = Connection::open_in_memory().unwrap();

        // Initialize should set version to current
        initialize_database(&conn).unwrap();
        let version = get_current_version(&conn).unwrap();
        assert_eq!(version, CURRENT_VERSION);
    }
}

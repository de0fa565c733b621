/// SQLite implementation of the mentor storage interface
///
/// This module provides the concrete SQLite implementation for storing
/// and retrieving routine data. It handles all SQL queries and data
/// conversion between database rows and domain types.

use std::path::PathBuf;
use rusqlite::{Connection, Row, params};
use chrono::NaiveDate;

use crate::domain::{
    Category, DailyLog, EntryId, EntryStatus, LogId, Routine, RoutineEntry, RoutineId, User,
};
use crate::storage::{MentorStorage, StorageError, migrations};

/// SQLite-based storage implementation
///
/// This struct holds a connection to the SQLite database and implements
/// all the storage operations defined in the MentorStorage trait.
pub struct SqliteStorage {
    conn: Connection,
}

impl SqliteStorage {
    /// Create a new SQLite storage instance
    ///
    /// This opens the database file and runs any necessary migrations
    /// to ensure the schema is up to date.
    pub fn new(db_path: PathBuf) -> Result<Self, StorageError> {
        // Open the SQLite database
        let conn = Connection::open(&db_path)
            .map_err(|e| StorageError::Connection(format!("Failed to open database: {}", e)))?;

        // Enable foreign key constraints
        conn.execute("PRAGMA foreign_keys = ON", [])
            .map_err(|e| StorageError::Connection(format!("Failed to enable foreign keys: {}", e)))?;

        // Initialize/migrate the database schema
        migrations::initialize_database(&conn)?;

        tracing::info!("SQLite storage initialized at: {:?}", db_path);

        Ok(Self { conn })
    }

    /// Map a database row to a Routine
    ///
    /// Expects columns in the order: id, name, description, category,
    /// frequency, target_duration, priority, created_at, is_active.
    fn map_routine_row(row: &Row<'_>) -> rusqlite::Result<Routine> {
        let id_str: String = row.get(0)?;
        let id = RoutineId::from_string(&id_str).map_err(|_| {
            rusqlite::Error::InvalidColumnType(0, "Invalid UUID".to_string(), rusqlite::types::Type::Text)
        })?;

        let category_str: String = row.get(3)?;
        let category = Category::parse(&category_str).map_err(|_| {
            rusqlite::Error::InvalidColumnType(3, "Invalid category".to_string(), rusqlite::types::Type::Text)
        })?;

        let created_at_str: String = row.get(7)?;
        let created_at = chrono::DateTime::parse_from_rfc3339(&created_at_str)
            .map_err(|_| {
                rusqlite::Error::InvalidColumnType(7, "Invalid datetime".to_string(), rusqlite::types::Type::Text)
            })?
            .with_timezone(&chrono::Utc);

        Ok(Routine::from_existing(
            id,
            row.get(1)?, // name
            row.get(2)?, // description
            category,
            row.get(4)?, // frequency
            row.get(5)?, // target_duration
            row.get(6)?, // priority
            created_at,
            row.get(8)?, // is_active
        ))
    }

    /// Map a database row to a DailyLog
    ///
    /// Expects columns in the order: id, log_date, mood, energy_level,
    /// stress_level, notes, highlights, challenges.
    fn map_daily_log_row(row: &Row<'_>) -> rusqlite::Result<DailyLog> {
        let id_str: String = row.get(0)?;
        let id = LogId::from_string(&id_str).map_err(|_| {
            rusqlite::Error::InvalidColumnType(0, "Invalid UUID".to_string(), rusqlite::types::Type::Text)
        })?;

        let date_str: String = row.get(1)?;
        let log_date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|_| {
            rusqlite::Error::InvalidColumnType(1, "Invalid date".to_string(), rusqlite::types::Type::Text)
        })?;

        Ok(DailyLog::from_existing(
            id,
            log_date,
            row.get(2)?, // mood
            row.get(3)?, // energy_level
            row.get(4)?, // stress_level
            row.get(5)?, // notes
            row.get(6)?, // highlights
            row.get(7)?, // challenges
        ))
    }

    /// Map a database row to a RoutineEntry
    ///
    /// Expects columns in the order: id, log_id, routine_id, status,
    /// completion_percentage, actual_duration, difficulty_felt, notes.
    fn map_entry_row(row: &Row<'_>) -> rusqlite::Result<RoutineEntry> {
        let id_str: String = row.get(0)?;
        let id = EntryId::from_string(&id_str).map_err(|_| {
            rusqlite::Error::InvalidColumnType(0, "Invalid UUID".to_string(), rusqlite::types::Type::Text)
        })?;

        let log_id_str: String = row.get(1)?;
        let log_id = LogId::from_string(&log_id_str).map_err(|_| {
            rusqlite::Error::InvalidColumnType(1, "Invalid UUID".to_string(), rusqlite::types::Type::Text)
        })?;

        let routine_id_str: String = row.get(2)?;
        let routine_id = RoutineId::from_string(&routine_id_str).map_err(|_| {
            rusqlite::Error::InvalidColumnType(2, "Invalid UUID".to_string(), rusqlite::types::Type::Text)
        })?;

        let status_str: String = row.get(3)?;
        let status = EntryStatus::parse(&status_str).map_err(|_| {
            rusqlite::Error::InvalidColumnType(3, "Invalid status".to_string(), rusqlite::types::Type::Text)
        })?;

        Ok(RoutineEntry::from_existing(
            id,
            log_id,
            routine_id,
            status,
            row.get(4)?, // completion_percentage
            row.get(5)?, // actual_duration
            row.get(6)?, // difficulty_felt
            row.get(7)?, // notes
        ))
    }
}

impl MentorStorage for SqliteStorage {
    /// Create or replace the single user profile row
    fn upsert_profile(&self, user: &User) -> Result<(), StorageError> {
        self.conn.execute(
            "INSERT OR REPLACE INTO profile (id, username, first_name) VALUES (1, ?1, ?2)",
            params![user.username, user.first_name],
        )?;

        tracing::debug!("Stored profile for user: {}", user.username);
        Ok(())
    }

    /// Get the user profile
    fn get_profile(&self) -> Result<User, StorageError> {
        let result = self.conn.query_row(
            "SELECT username, first_name FROM profile WHERE id = 1",
            [],
            |row| {
                Ok(User {
                    username: row.get(0)?,
                    first_name: row.get(1)?,
                })
            },
        );

        match result {
            Ok(user) => Ok(user),
            Err(rusqlite::Error::QueryReturnedNoRows) => Err(StorageError::ProfileNotSet),
            Err(e) => Err(StorageError::Query(e)),
        }
    }

    /// Create a new routine in the database
    fn create_routine(&self, routine: &Routine) -> Result<(), StorageError> {
        // Names group historical statistics, so enforce uniqueness up front
        let existing: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM routines WHERE name = ?1",
            params![routine.name],
            |row| row.get(0),
        )?;
        if existing > 0 {
            return Err(StorageError::DuplicateRoutine {
                name: routine.name.clone(),
            });
        }

        self.conn.execute(
            "INSERT INTO routines (
                id, name, description, category, frequency,
                target_duration, priority, created_at, is_active
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            params![
                routine.id.to_string(),
                routine.name,
                routine.description,
                routine.category.as_str(),
                routine.frequency,
                routine.target_duration,
                routine.priority,
                routine.created_at.to_rfc3339(),
                routine.is_active
            ],
        )?;

        tracing::debug!("Created routine: {} ({})", routine.name, routine.id.to_string());
        Ok(())
    }

    /// Get a routine by its ID
    fn get_routine(&self, routine_id: &RoutineId) -> Result<Routine, StorageError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, description, category, frequency, target_duration, priority, created_at, is_active
             FROM routines WHERE id = ?1",
        )?;

        let result = stmt.query_row(params![routine_id.to_string()], Self::map_routine_row);

        match result {
            Ok(routine) => Ok(routine),
            Err(rusqlite::Error::QueryReturnedNoRows) => Err(StorageError::RoutineNotFound {
                routine_id: routine_id.to_string(),
            }),
            Err(e) => Err(StorageError::Query(e)),
        }
    }

    /// List routines with optional filtering
    fn list_routines(
        &self,
        category: Option<Category>,
        active_only: bool,
    ) -> Result<Vec<Routine>, StorageError> {
        let mut sql = "SELECT id, name, description, category, frequency, target_duration, priority, created_at, is_active FROM routines".to_string();

        let mut clauses = Vec::new();
        if category.is_some() {
            clauses.push("category = ?1");
        }
        if active_only {
            clauses.push("is_active = 1");
        }
        if !clauses.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&clauses.join(" AND "));
        }

        sql.push_str(" ORDER BY created_at ASC");

        let mut stmt = self.conn.prepare(&sql)?;
        let mut routines = Vec::new();

        if let Some(category) = category {
            let iter = stmt.query_map(params![category.as_str()], Self::map_routine_row)?;
            for routine in iter {
                routines.push(routine?);
            }
        } else {
            let iter = stmt.query_map([], Self::map_routine_row)?;
            for routine in iter {
                routines.push(routine?);
            }
        }

        Ok(routines)
    }

    /// Create a new daily log
    fn create_daily_log(&self, log: &DailyLog) -> Result<(), StorageError> {
        self.conn.execute(
            "INSERT INTO daily_logs (
                id, log_date, mood, energy_level, stress_level, notes, highlights, challenges
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                log.id.to_string(),
                log.log_date.to_string(),
                log.mood,
                log.energy_level,
                log.stress_level,
                log.notes,
                log.highlights,
                log.challenges
            ],
        )?;

        tracing::debug!("Created daily log for {}", log.log_date);
        Ok(())
    }

    /// Update an existing daily log
    fn update_daily_log(&self, log: &DailyLog) -> Result<(), StorageError> {
        let rows_affected = self.conn.execute(
            "UPDATE daily_logs SET
                mood = ?2,
                energy_level = ?3,
                stress_level = ?4,
                notes = ?5,
                highlights = ?6,
                challenges = ?7
             WHERE id = ?1",
            params![
                log.id.to_string(),
                log.mood,
                log.energy_level,
                log.stress_level,
                log.notes,
                log.highlights,
                log.challenges
            ],
        )?;

        if rows_affected == 0 {
            return Err(StorageError::LogNotFound {
                date: log.log_date.to_string(),
            });
        }

        tracing::debug!("Updated daily log for {}", log.log_date);
        Ok(())
    }

    /// Get the daily log for a specific date
    fn get_daily_log(&self, date: NaiveDate) -> Result<DailyLog, StorageError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, log_date, mood, energy_level, stress_level, notes, highlights, challenges
             FROM daily_logs WHERE log_date = ?1",
        )?;

        let result = stmt.query_row(params![date.to_string()], Self::map_daily_log_row);

        match result {
            Ok(log) => Ok(log),
            Err(rusqlite::Error::QueryReturnedNoRows) => Err(StorageError::LogNotFound {
                date: date.to_string(),
            }),
            Err(e) => Err(StorageError::Query(e)),
        }
    }

    /// Create a new routine entry
    fn create_entry(&self, entry: &RoutineEntry) -> Result<(), StorageError> {
        self.conn.execute(
            "INSERT INTO routine_entries (
                id, log_id, routine_id, status, completion_percentage,
                actual_duration, difficulty_felt, notes
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                entry.id.to_string(),
                entry.log_id.to_string(),
                entry.routine_id.to_string(),
                entry.status.as_str(),
                entry.completion_percentage,
                entry.actual_duration,
                entry.difficulty_felt,
                entry.notes
            ],
        )?;

        tracing::debug!(
            "Created entry {} for routine {}",
            entry.id.to_string(),
            entry.routine_id.to_string()
        );
        Ok(())
    }

    /// Get all entries belonging to a daily log
    fn get_entries_for_log(&self, log_id: &LogId) -> Result<Vec<RoutineEntry>, StorageError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, log_id, routine_id, status, completion_percentage, actual_duration, difficulty_felt, notes
             FROM routine_entries WHERE log_id = ?1
             ORDER BY rowid ASC",
        )?;

        let entry_iter = stmt.query_map(params![log_id.to_string()], Self::map_entry_row)?;

        let mut entries = Vec::new();
        for entry in entry_iter {
            entries.push(entry?);
        }

        Ok(entries)
    }

    /// Delete all entries belonging to a daily log
    fn delete_entries_for_log(&self, log_id: &LogId) -> Result<(), StorageError> {
        self.conn.execute(
            "DELETE FROM routine_entries WHERE log_id = ?1",
            params![log_id.to_string()],
        )?;

        tracing::debug!("Cleared entries for log {}", log_id.to_string());
        Ok(())
    }

    /// Get all daily logs within a date range, each paired with its entries
    fn get_logs_in_range(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<(DailyLog, Vec<RoutineEntry>)>, StorageError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, log_date, mood, energy_level, stress_level, notes, highlights, challenges
             FROM daily_logs
             WHERE log_date BETWEEN ?1 AND ?2
             ORDER BY log_date ASC",
        )?;

        let log_iter = stmt.query_map(
            params![start_date.to_string(), end_date.to_string()],
            Self::map_daily_log_row,
        )?;

        let mut logs = Vec::new();
        for log in log_iter {
            logs.push(log?);
        }

        let mut result = Vec::with_capacity(logs.len());
        for log in logs {
            let entries = self.get_entries_for_log(&log.id)?;
            result.push((log, entries));
        }

        Ok(result)
    }
}

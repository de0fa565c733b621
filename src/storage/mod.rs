/// Storage layer for persisting routine data
///
/// This module handles all database operations using SQLite. It provides
/// a clean interface for storing and retrieving the user profile, routines,
/// daily logs, and routine entries. The aggregation and prompt code never
/// touches this layer directly; it receives plain slices loaded here.

pub mod migrations;
pub mod sqlite;

// Re-export the main storage types
pub use sqlite::*;

use chrono::NaiveDate;
use thiserror::Error;
use crate::domain::{Category, DailyLog, LogId, Routine, RoutineEntry, RoutineId, User};

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Database connection error: {0}")]
    Connection(String),

    #[error("Database query error: {0}")]
    Query(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("No user profile has been set")]
    ProfileNotSet,

    #[error("Routine not found: {routine_id}")]
    RoutineNotFound { routine_id: String },

    #[error("Duplicate routine name: {name}")]
    DuplicateRoutine { name: String },

    #[error("No daily log found for date {date}")]
    LogNotFound { date: String },

    #[error("Migration error: {0}")]
    Migration(String),
}

/// Trait defining the storage interface for the routine mentor
///
/// This trait allows us to potentially swap out SQLite for other databases
/// in the future while keeping the same interface.
pub trait MentorStorage {
    /// Create or replace the user profile
    fn upsert_profile(&self, user: &User) -> Result<(), StorageError>;

    /// Get the user profile
    fn get_profile(&self) -> Result<User, StorageError>;

    /// Create a new routine
    fn create_routine(&self, routine: &Routine) -> Result<(), StorageError>;

    /// Get a routine by ID
    fn get_routine(&self, routine_id: &RoutineId) -> Result<Routine, StorageError>;

    /// List routines with optional filtering
    fn list_routines(
        &self,
        category: Option<Category>,
        active_only: bool,
    ) -> Result<Vec<Routine>, StorageError>;

    /// Create a new daily log
    fn create_daily_log(&self, log: &DailyLog) -> Result<(), StorageError>;

    /// Update an existing daily log
    fn update_daily_log(&self, log: &DailyLog) -> Result<(), StorageError>;

    /// Get the daily log for a specific date
    fn get_daily_log(&self, date: NaiveDate) -> Result<DailyLog, StorageError>;

    /// Create a new routine entry
    fn create_entry(&self, entry: &RoutineEntry) -> Result<(), StorageError>;

    /// Get all entries belonging to a daily log
    fn get_entries_for_log(&self, log_id: &LogId) -> Result<Vec<RoutineEntry>, StorageError>;

    /// Delete all entries belonging to a daily log (used when re-logging a day)
    fn delete_entries_for_log(&self, log_id: &LogId) -> Result<(), StorageError>;

    /// Get all daily logs within a date range, each paired with its entries
    ///
    /// Both bounds are inclusive; logs come back ordered by date ascending.
    fn get_logs_in_range(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<(DailyLog, Vec<RoutineEntry>)>, StorageError>;
}

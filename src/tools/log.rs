/// Tool for recording a day's log and routine results
///
/// This module implements the day_log MCP tool. Logging the same date twice
/// replaces that day's ratings and entries rather than duplicating them.

use serde::{Deserialize, Serialize};
use chrono::{NaiveDate, Utc};
use crate::domain::{DailyLog, EntryStatus, RoutineEntry, RoutineId};
use crate::storage::MentorStorage;
use crate::tools::ToolError;

/// One routine result inside a day_log call
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct DayLogEntryParams {
    pub routine_id: String,
    /// One of: completed, partial, missed
    pub status: String,
    /// How much got done, 0-100
    pub completion_percentage: u8,
    pub actual_duration: Option<u32>,
    pub difficulty_felt: Option<u8>,
    pub notes: Option<String>,
}

/// Parameters for logging a day
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct DayLogParams {
    /// Date to log (YYYY-MM-DD), defaults to today
    pub log_date: Option<String>,
    pub mood: Option<u8>,
    pub energy_level: Option<u8>,
    pub stress_level: Option<u8>,
    pub notes: Option<String>,
    pub highlights: Option<String>,
    pub challenges: Option<String>,
    #[serde(default)]
    pub entries: Vec<DayLogEntryParams>,
}

/// Response from logging a day
#[derive(Debug, Serialize)]
pub struct DayLogResponse {
    pub success: bool,
    pub log_date: String,
    pub entries_recorded: usize,
    pub message: String,
}

/// Parse an optional YYYY-MM-DD date parameter, defaulting to today
pub(crate) fn parse_log_date(raw: Option<&str>) -> Result<NaiveDate, ToolError> {
    match raw {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map_err(|_| ToolError::InvalidParams(format!("Invalid date '{}', expected YYYY-MM-DD", s))),
        None => Ok(Utc::now().naive_utc().date()),
    }
}

/// Record a day's log and its routine entries using the provided storage
pub fn log_day<S: MentorStorage>(
    storage: &S,
    params: DayLogParams,
) -> Result<DayLogResponse, ToolError> {
    let log_date = parse_log_date(params.log_date.as_deref())?;

    // Resolve and validate entries before touching the database
    let mut pending = Vec::with_capacity(params.entries.len());
    for entry_params in &params.entries {
        let routine_id = RoutineId::from_string(&entry_params.routine_id).map_err(|_| {
            ToolError::InvalidParams(format!("Invalid routine id '{}'", entry_params.routine_id))
        })?;
        // Fails with RoutineNotFound when the id is unknown
        let routine = storage.get_routine(&routine_id)?;
        let status = EntryStatus::parse(&entry_params.status)?;
        pending.push((routine, status, entry_params));
    }

    let mut log = DailyLog::new(
        log_date,
        params.mood,
        params.energy_level,
        params.stress_level,
        params.notes,
        params.highlights,
        params.challenges,
    )?;

    // Re-logging a date replaces the stored log and its entries
    match storage.get_daily_log(log_date) {
        Ok(existing) => {
            log.id = existing.id;
            storage.update_daily_log(&log)?;
            storage.delete_entries_for_log(&log.id)?;
        }
        Err(crate::storage::StorageError::LogNotFound { .. }) => {
            storage.create_daily_log(&log)?;
        }
        Err(e) => return Err(e.into()),
    }

    for (routine, status, entry_params) in &pending {
        let entry = RoutineEntry::new(
            log.id.clone(),
            routine.id.clone(),
            *status,
            entry_params.completion_percentage,
            entry_params.actual_duration,
            entry_params.difficulty_felt,
            entry_params.notes.clone(),
        )?;
        storage.create_entry(&entry)?;
    }

    tracing::info!("Logged {} with {} entries", log_date, pending.len());

    Ok(DayLogResponse {
        success: true,
        log_date: log_date.to_string(),
        entries_recorded: pending.len(),
        message: format!(
            "📝 Logged {} routine result{} for {}",
            pending.len(),
            if pending.len() == 1 { "" } else { "s" },
            log_date
        ),
    })
}

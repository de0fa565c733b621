/// RoutineEntry entity for per-day routine results
///
/// This module defines the RoutineEntry struct that records how a single
/// routine went on a single day: its status, how much of it got done, and
/// optional duration, difficulty, and notes.

use serde::{Deserialize, Serialize};
use crate::domain::{DomainError, EntryId, EntryStatus, LogId, RoutineId};

/// One day's recorded attempt at a specific routine
///
/// Each entry belongs to exactly one daily log and references one routine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutineEntry {
    /// Unique identifier for this entry
    pub id: EntryId,
    /// Which daily log this entry belongs to
    pub log_id: LogId,
    /// Which routine this entry is for
    pub routine_id: RoutineId,
    /// How the attempt went
    pub status: EntryStatus,
    /// How much of the routine got done, 0-100
    pub completion_percentage: u8,
    /// Actual time spent in minutes, if tracked
    pub actual_duration: Option<u32>,
    /// Subjective difficulty rating from 1-10
    pub difficulty_felt: Option<u8>,
    /// User's notes about this attempt
    pub notes: Option<String>,
}

impl RoutineEntry {
    /// Create a new routine entry with validation
    pub fn new(
        log_id: LogId,
        routine_id: RoutineId,
        status: EntryStatus,
        completion_percentage: u8,
        actual_duration: Option<u32>,
        difficulty_felt: Option<u8>,
        notes: Option<String>,
    ) -> Result<Self, DomainError> {
        Self::validate_completion_percentage(completion_percentage)?;
        Self::validate_actual_duration(&actual_duration)?;
        Self::validate_difficulty(&difficulty_felt)?;
        Self::validate_notes(&notes)?;

        Ok(Self {
            id: EntryId::new(),
            log_id,
            routine_id,
            status,
            completion_percentage,
            actual_duration,
            difficulty_felt,
            notes,
        })
    }

    /// Create an entry from existing data (used when loading from database)
    pub fn from_existing(
        id: EntryId,
        log_id: LogId,
        routine_id: RoutineId,
        status: EntryStatus,
        completion_percentage: u8,
        actual_duration: Option<u32>,
        difficulty_felt: Option<u8>,
        notes: Option<String>,
    ) -> Self {
        Self {
            id,
            log_id,
            routine_id,
            status,
            completion_percentage,
            actual_duration,
            difficulty_felt,
            notes,
        }
    }

    // Validation helper methods

    /// Validate the completion percentage (0-100)
    fn validate_completion_percentage(percentage: u8) -> Result<(), DomainError> {
        if percentage > 100 {
            return Err(DomainError::InvalidValue {
                message: "Completion percentage cannot exceed 100".to_string(),
            });
        }
        Ok(())
    }

    /// Validate the optional actual duration in minutes
    fn validate_actual_duration(duration: &Option<u32>) -> Result<(), DomainError> {
        if let Some(minutes) = duration {
            if *minutes > 1440 {
                return Err(DomainError::InvalidValue {
                    message: "Actual duration cannot exceed 1440 minutes".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Validate the optional difficulty rating (1-10)
    fn validate_difficulty(difficulty: &Option<u8>) -> Result<(), DomainError> {
        if let Some(rating) = difficulty {
            if !(1..=10).contains(rating) {
                return Err(DomainError::InvalidValue {
                    message: "Difficulty must be between 1 and 10".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Validate the optional notes field
    fn validate_notes(notes: &Option<String>) -> Result<(), DomainError> {
        if let Some(note_text) = notes {
            if note_text.len() > 500 {
                return Err(DomainError::InvalidValue {
                    message: "Notes cannot be longer than 500 characters".to_string(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_valid_entry() {
        let log_id = LogId::new();
        let routine_id = RoutineId::new();

        let entry = RoutineEntry::new(
            log_id.clone(),
            routine_id.clone(),
            EntryStatus::Completed,
            100,
            Some(32),
            Some(6),
            Some("Felt strong today".to_string()),
        );

        assert!(entry.is_ok());
        let entry = entry.unwrap();
        assert_eq!(entry.log_id, log_id);
        assert_eq!(entry.routine_id, routine_id);
        assert_eq!(entry.completion_percentage, 100);
        assert!(entry.status.is_completed());
    }

    #[test]
    fn test_difficulty_out_of_range() {
        let result = RoutineEntry::new(
            LogId::new(),
            RoutineId::new(),
            EntryStatus::Partial,
            50,
            None,
            Some(0),
            None,
        );

        assert!(result.is_err());
    }

    #[test]
    fn test_missed_entry_with_zero_completion() {
        let entry = RoutineEntry::new(
            LogId::new(),
            RoutineId::new(),
            EntryStatus::Missed,
            0,
            None,
            None,
            None,
        );

        assert!(entry.is_ok());
        assert!(!entry.unwrap().status.is_completed());
    }
}

/// DailyLog entity for one day's self-report
///
/// This module defines the DailyLog struct that represents everything the user
/// recorded about a single calendar day: subjective ratings and free-text
/// reflections. There is at most one log per date.

use serde::{Deserialize, Serialize};
use chrono::NaiveDate;
use crate::domain::{DomainError, LogId};

/// A single day's self-reported log
///
/// All rating fields use a 1-10 scale and all of them are optional - users
/// often log routine results without rating their day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyLog {
    /// Unique identifier for this log
    pub id: LogId,
    /// Which calendar day this log is for (unique per user)
    pub log_date: NaiveDate,
    /// Subjective mood rating from 1-10
    pub mood: Option<u8>,
    /// Subjective energy rating from 1-10
    pub energy_level: Option<u8>,
    /// Subjective stress rating from 1-10
    pub stress_level: Option<u8>,
    /// Free-form notes about the day
    pub notes: Option<String>,
    /// What went well
    pub highlights: Option<String>,
    /// What was hard
    pub challenges: Option<String>,
}

impl DailyLog {
    /// Create a new daily log with validation
    pub fn new(
        log_date: NaiveDate,
        mood: Option<u8>,
        energy_level: Option<u8>,
        stress_level: Option<u8>,
        notes: Option<String>,
        highlights: Option<String>,
        challenges: Option<String>,
    ) -> Result<Self, DomainError> {
        Self::validate_rating("Mood", &mood)?;
        Self::validate_rating("Energy level", &energy_level)?;
        Self::validate_rating("Stress level", &stress_level)?;
        Self::validate_text("Notes", &notes)?;
        Self::validate_text("Highlights", &highlights)?;
        Self::validate_text("Challenges", &challenges)?;

        Ok(Self {
            id: LogId::new(),
            log_date,
            mood,
            energy_level,
            stress_level,
            notes,
            highlights,
            challenges,
        })
    }

    /// Create a log from existing data (used when loading from database)
    pub fn from_existing(
        id: LogId,
        log_date: NaiveDate,
        mood: Option<u8>,
        energy_level: Option<u8>,
        stress_level: Option<u8>,
        notes: Option<String>,
        highlights: Option<String>,
        challenges: Option<String>,
    ) -> Self {
        Self {
            id,
            log_date,
            mood,
            energy_level,
            stress_level,
            notes,
            highlights,
            challenges,
        }
    }

    // Validation helper methods

    /// Validate an optional 1-10 rating
    fn validate_rating(field: &str, rating: &Option<u8>) -> Result<(), DomainError> {
        if let Some(value) = rating {
            if !(1..=10).contains(value) {
                return Err(DomainError::InvalidValue {
                    message: format!("{} must be between 1 and 10", field),
                });
            }
        }
        Ok(())
    }

    /// Validate an optional free-text field
    fn validate_text(field: &str, text: &Option<String>) -> Result<(), DomainError> {
        if let Some(value) = text {
            if value.len() > 1000 {
                return Err(DomainError::InvalidValue {
                    message: format!("{} cannot be longer than 1000 characters", field),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_create_valid_log() {
        let log = DailyLog::new(
            date("2025-06-01"),
            Some(7),
            Some(6),
            Some(4),
            Some("Solid day".to_string()),
            None,
            None,
        );

        assert!(log.is_ok());
        let log = log.unwrap();
        assert_eq!(log.mood, Some(7));
        assert_eq!(log.highlights, None);
    }

    #[test]
    fn test_all_fields_optional() {
        let log = DailyLog::new(date("2025-06-01"), None, None, None, None, None, None);
        assert!(log.is_ok());
    }

    #[test]
    fn test_rating_out_of_range() {
        let result = DailyLog::new(date("2025-06-01"), Some(11), None, None, None, None, None);
        assert!(result.is_err());

        let result = DailyLog::new(date("2025-06-01"), None, Some(0), None, None, None, None);
        assert!(result.is_err());
    }
}

/// Core types and enums used throughout the domain layer
///
/// This module defines the fundamental types like Category, EntryStatus, and ID
/// types that are used by Routine, DailyLog, RoutineEntry, and other domain
/// entities.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a routine
///
/// This is a wrapper around UUID to provide type safety - you can't accidentally
/// pass a routine ID where a log ID is expected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoutineId(pub Uuid);

impl RoutineId {
    /// Generate a new random routine ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a routine ID from a string (useful for database loading)
    pub fn from_string(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self(Uuid::parse_str(s)?))
    }

    /// Convert to string representation
    pub fn to_string(&self) -> String {
        self.0.to_string()
    }
}

/// Unique identifier for a daily log
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LogId(pub Uuid);

impl LogId {
    /// Generate a new random log ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a log ID from a string
    pub fn from_string(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self(Uuid::parse_str(s)?))
    }

    /// Convert to string representation
    pub fn to_string(&self) -> String {
        self.0.to_string()
    }
}

/// Unique identifier for a routine entry
///
/// Similar to RoutineId but for individual per-day routine records
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntryId(pub Uuid);

impl EntryId {
    /// Generate a new random entry ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create an entry ID from a string
    pub fn from_string(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self(Uuid::parse_str(s)?))
    }

    /// Convert to string representation
    pub fn to_string(&self) -> String {
        self.0.to_string()
    }
}

/// Categories for organizing routines into different life areas
///
/// This is the fixed set the routine generation prompt asks the model to
/// choose from, so it is deliberately small.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Health-related routines (exercise, diet, sleep)
    Health,
    /// Work and career routines (deep work, studying, planning)
    Work,
    /// Personal growth and self-care
    Personal,
    /// Relationship and communication routines
    Social,
}

impl Category {
    /// Lowercase string form used in the database and in prompts
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Health => "health",
            Category::Work => "work",
            Category::Personal => "personal",
            Category::Social => "social",
        }
    }

    /// Get the display name for this category
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Health => "Health",
            Category::Work => "Work",
            Category::Personal => "Personal",
            Category::Social => "Social",
        }
    }

    /// Parse a category from its string form
    pub fn parse(s: &str) -> Result<Self, crate::domain::DomainError> {
        match s.trim().to_lowercase().as_str() {
            "health" => Ok(Category::Health),
            "work" => Ok(Category::Work),
            "personal" => Ok(Category::Personal),
            "social" => Ok(Category::Social),
            other => Err(crate::domain::DomainError::InvalidCategory(format!(
                "Invalid category '{}'. Valid options: health, work, personal, social",
                other
            ))),
        }
    }
}

/// Outcome of a single day's attempt at a routine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryStatus {
    /// The routine was fully completed
    Completed,
    /// The routine was started but not finished
    Partial,
    /// The routine was not attempted or abandoned
    Missed,
}

impl EntryStatus {
    /// Lowercase string form used in the database and in prompts
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryStatus::Completed => "completed",
            EntryStatus::Partial => "partial",
            EntryStatus::Missed => "missed",
        }
    }

    /// Whether this status counts toward a routine's completion rate
    pub fn is_completed(&self) -> bool {
        matches!(self, EntryStatus::Completed)
    }

    /// Parse a status from its string form
    pub fn parse(s: &str) -> Result<Self, crate::domain::DomainError> {
        match s.trim().to_lowercase().as_str() {
            "completed" => Ok(EntryStatus::Completed),
            "partial" => Ok(EntryStatus::Partial),
            "missed" => Ok(EntryStatus::Missed),
            other => Err(crate::domain::DomainError::InvalidStatus(format!(
                "Invalid status '{}'. Valid options: completed, partial, missed",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_round_trip() {
        for category in [Category::Health, Category::Work, Category::Personal, Category::Social] {
            assert_eq!(Category::parse(category.as_str()).unwrap(), category);
        }
        assert!(Category::parse("finance").is_err());
    }

    #[test]
    fn test_status_completion() {
        assert!(EntryStatus::Completed.is_completed());
        assert!(!EntryStatus::Partial.is_completed());
        assert!(!EntryStatus::Missed.is_completed());
    }

    #[test]
    fn test_status_parse_is_case_insensitive() {
        assert_eq!(EntryStatus::parse("Completed").unwrap(), EntryStatus::Completed);
        assert_eq!(EntryStatus::parse(" MISSED ").unwrap(), EntryStatus::Missed);
        assert!(EntryStatus::parse("skipped").is_err());
    }
}

/// Routine entity and related functionality
///
/// This module defines the core Routine struct that represents a recurring
/// activity the user wants to perform, along with its validation rules.

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use crate::domain::{Category, DomainError, RoutineId};

/// A routine is a recurring activity the user commits to
///
/// Routine names are the grouping key for historical statistics, so they
/// must be unique. Frequency is free text ("daily", "3x per week") because
/// the routine generation flow lets the model phrase it naturally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Routine {
    /// Unique identifier for this routine
    pub id: RoutineId,
    /// Display name (e.g., "Morning Run", "Deep Work Block")
    pub name: String,
    /// Optional one-sentence description
    pub description: Option<String>,
    /// Life area this routine belongs to
    pub category: Category,
    /// How often the routine should happen, as free text
    pub frequency: String,
    /// Planned duration in minutes
    pub target_duration: u32,
    /// Importance from 1 (lowest) to 10 (highest)
    pub priority: u8,
    /// When this routine was created
    pub created_at: DateTime<Utc>,
    /// Whether this routine is currently active (can be paused)
    pub is_active: bool,
}

impl Routine {
    /// Create a new routine with validation
    pub fn new(
        name: String,
        description: Option<String>,
        category: Category,
        frequency: String,
        target_duration: u32,
        priority: u8,
    ) -> Result<Self, DomainError> {
        Self::validate_name(&name)?;
        Self::validate_description(&description)?;
        Self::validate_frequency(&frequency)?;
        Self::validate_target_duration(target_duration)?;
        Self::validate_priority(priority)?;

        Ok(Self {
            id: RoutineId::new(),
            name,
            description,
            category,
            frequency,
            target_duration,
            priority,
            created_at: Utc::now(),
            is_active: true,
        })
    }

    /// Create a routine from existing data (used when loading from database)
    ///
    /// This constructor assumes data is already validated and is mainly used
    /// by the storage layer when loading routines from the database.
    pub fn from_existing(
        id: RoutineId,
        name: String,
        description: Option<String>,
        category: Category,
        frequency: String,
        target_duration: u32,
        priority: u8,
        created_at: DateTime<Utc>,
        is_active: bool,
    ) -> Self {
        Self {
            id,
            name,
            description,
            category,
            frequency,
            target_duration,
            priority,
            created_at,
            is_active,
        }
    }

    // Validation helper methods

    /// Validate routine name according to business rules
    fn validate_name(name: &str) -> Result<(), DomainError> {
        let trimmed = name.trim();

        if trimmed.is_empty() {
            return Err(DomainError::InvalidRoutineName(
                "Routine name cannot be empty".to_string(),
            ));
        }

        if trimmed.len() > 100 {
            return Err(DomainError::InvalidRoutineName(
                "Routine name cannot be longer than 100 characters".to_string(),
            ));
        }

        Ok(())
    }

    /// Validate optional description
    fn validate_description(description: &Option<String>) -> Result<(), DomainError> {
        if let Some(desc) = description {
            if desc.len() > 500 {
                return Err(DomainError::Validation {
                    message: "Description cannot be longer than 500 characters".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Validate the free-text frequency field
    fn validate_frequency(frequency: &str) -> Result<(), DomainError> {
        let trimmed = frequency.trim();

        if trimmed.is_empty() {
            return Err(DomainError::Validation {
                message: "Frequency cannot be empty".to_string(),
            });
        }

        if trimmed.len() > 50 {
            return Err(DomainError::Validation {
                message: "Frequency cannot be longer than 50 characters".to_string(),
            });
        }

        Ok(())
    }

    /// Validate the planned duration in minutes
    fn validate_target_duration(target_duration: u32) -> Result<(), DomainError> {
        if target_duration == 0 {
            return Err(DomainError::InvalidValue {
                message: "Target duration must be greater than 0".to_string(),
            });
        }
        if target_duration > 1440 {
            return Err(DomainError::InvalidValue {
                message: "Target duration cannot exceed 1440 minutes".to_string(),
            });
        }
        Ok(())
    }

    /// Validate the priority rating (1-10)
    fn validate_priority(priority: u8) -> Result<(), DomainError> {
        if !(1..=10).contains(&priority) {
            return Err(DomainError::InvalidValue {
                message: "Priority must be between 1 and 10".to_string(),
            });
        }
        Ok(())
    }
}

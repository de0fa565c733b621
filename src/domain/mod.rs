/// Domain module containing core business logic and data types
///
/// This module defines the core entities (User, Routine, DailyLog, RoutineEntry)
/// and their validation rules. These types represent the fundamental concepts in
/// the routine mentor system.

pub mod daily_log;
pub mod entry;
pub mod routine;
pub mod types;
pub mod user;

// Re-export public types for easy access
pub use daily_log::*;
pub use entry::*;
pub use routine::*;
pub use types::*;
pub use user::*;

use thiserror::Error;

/// Errors that can occur during domain operations
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Invalid routine name: {0}")]
    InvalidRoutineName(String),

    #[error("Invalid category: {0}")]
    InvalidCategory(String),

    #[error("Invalid status: {0}")]
    InvalidStatus(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid value: {message}")]
    InvalidValue { message: String },
}

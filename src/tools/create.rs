/// Tool for creating new routines
///
/// This module implements the routine_create MCP tool.

use serde::{Deserialize, Serialize};
use crate::domain::{Category, Routine};
use crate::storage::MentorStorage;
use crate::tools::ToolError;

/// Parameters for creating a new routine
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CreateRoutineParams {
    pub name: String,
    pub description: Option<String>,
    /// One of: health, work, personal, social
    pub category: String,
    /// Free text, e.g. "daily" or "3x per week"
    pub frequency: String,
    /// Planned minutes per session
    pub target_duration: u32,
    /// Importance 1-10
    pub priority: u8,
}

/// Response from creating a routine
#[derive(Debug, Serialize)]
pub struct CreateRoutineResponse {
    pub success: bool,
    pub routine_id: Option<String>,
    pub message: String,
}

/// Create a new routine using the provided storage
pub fn create_routine<S: MentorStorage>(
    storage: &S,
    params: CreateRoutineParams,
) -> Result<CreateRoutineResponse, ToolError> {
    let category = Category::parse(&params.category)?;

    let routine = Routine::new(
        params.name.clone(),
        params.description,
        category,
        params.frequency,
        params.target_duration,
        params.priority,
    )?;

    let routine_id = routine.id.to_string();
    storage.create_routine(&routine)?;

    Ok(CreateRoutineResponse {
        success: true,
        routine_id: Some(routine_id),
        message: format!("✅ Created routine '{}'", params.name),
    })
}

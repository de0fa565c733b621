/// Tool for listing routines
///
/// This module implements the routine_list MCP tool.

use serde::{Deserialize, Serialize};
use crate::domain::Category;
use crate::storage::MentorStorage;
use crate::tools::ToolError;

/// Parameters for listing routines
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ListRoutinesParams {
    /// Filter by category (health, work, personal, social)
    pub category: Option<String>,
    /// Show only active routines (default: true)
    pub active_only: Option<bool>,
}

/// Information about a single routine in the listing
#[derive(Debug, Serialize)]
pub struct RoutineInfo {
    pub routine_id: String,
    pub name: String,
    pub category: String,
    pub frequency: String,
    pub target_duration: u32,
    pub priority: u8,
    pub is_active: bool,
}

/// Response from listing routines
#[derive(Debug, Serialize)]
pub struct ListRoutinesResponse {
    pub routines: Vec<RoutineInfo>,
    pub total: usize,
}

/// List routines using the provided storage
pub fn list_routines<S: MentorStorage>(
    storage: &S,
    params: ListRoutinesParams,
) -> Result<ListRoutinesResponse, ToolError> {
    let category = match params.category.as_deref() {
        Some(s) => Some(Category::parse(s)?),
        None => None,
    };
    let active_only = params.active_only.unwrap_or(true);

    let routines = storage.list_routines(category, active_only)?;

    let infos: Vec<RoutineInfo> = routines
        .iter()
        .map(|r| RoutineInfo {
            routine_id: r.id.to_string(),
            name: r.name.clone(),
            category: r.category.as_str().to_string(),
            frequency: r.frequency.clone(),
            target_duration: r.target_duration,
            priority: r.priority,
            is_active: r.is_active,
        })
        .collect();

    Ok(ListRoutinesResponse {
        total: infos.len(),
        routines: infos,
    })
}

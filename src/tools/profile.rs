/// Tool for setting the user profile
///
/// This module implements the profile_set MCP tool. The profile supplies
/// the display name the prompt builders address the user by.

use serde::{Deserialize, Serialize};
use crate::domain::User;
use crate::storage::MentorStorage;
use crate::tools::ToolError;

/// Parameters for setting the user profile
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SetProfileParams {
    pub username: String,
    pub first_name: Option<String>,
}

/// Response from setting the profile
#[derive(Debug, Serialize)]
pub struct SetProfileResponse {
    pub success: bool,
    pub message: String,
}

/// Create or replace the user profile using the provided storage
pub fn set_profile<S: MentorStorage>(
    storage: &S,
    params: SetProfileParams,
) -> Result<SetProfileResponse, ToolError> {
    let user = User::new(params.username, params.first_name)?;
    storage.upsert_profile(&user)?;

    Ok(SetProfileResponse {
        success: true,
        message: format!("Profile saved. Prompts will address you as {}.", user.display_name()),
    })
}

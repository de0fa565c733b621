/// Tool for assembling the routine generation prompt
///
/// This module implements the routine_generation_prompt MCP tool. The
/// returned prompt asks the LLM for a JSON object of 4-7 new routines;
/// invoking the model and validating its reply is the caller's job.

use serde::{Deserialize, Serialize};
use crate::prompts::{DEFAULT_ROUTINE_SYSTEM_PROMPT, RoutineGenerationRequest, build_routine_generation_prompt};
use crate::storage::MentorStorage;
use crate::tools::ToolError;

/// Parameters for building the routine generation prompt
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GenerationPromptParams {
    pub goals: Option<String>,
    pub challenges: Option<String>,
    pub unavailable_times: Option<String>,
    pub desired_routines: Option<String>,
}

/// Response carrying the assembled prompt pair
#[derive(Debug, Serialize)]
pub struct GenerationPromptResponse {
    pub system_prompt: String,
    pub prompt: String,
}

/// Build the routine generation prompt using the provided storage
pub fn build_generation<S: MentorStorage>(
    storage: &S,
    params: GenerationPromptParams,
) -> Result<GenerationPromptResponse, ToolError> {
    let user = storage.get_profile()?;

    let request = RoutineGenerationRequest {
        goals: params.goals,
        challenges: params.challenges,
        unavailable_times: params.unavailable_times,
        desired_routines: params.desired_routines,
    };

    let prompt = build_routine_generation_prompt(&user, &request);

    Ok(GenerationPromptResponse {
        system_prompt: DEFAULT_ROUTINE_SYSTEM_PROMPT.to_string(),
        prompt,
    })
}

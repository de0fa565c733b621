/// Tool for assembling the routine summary prompt
///
/// This module implements the routine_summary_prompt MCP tool. Given a
/// proposed routine set (typically the parsed output of a generation call),
/// it renders the prompt asking the LLM for a short narrative summary.

use serde::{Deserialize, Serialize};
use crate::prompts::{
    GeneratedRoutine, ROUTINE_SUMMARY_SYSTEM_PROMPT, RoutineGenerationRequest,
    build_routine_summary_prompt,
};
use crate::storage::MentorStorage;
use crate::tools::ToolError;

/// Parameters for building the routine summary prompt
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SummaryPromptParams {
    pub goals: Option<String>,
    pub challenges: Option<String>,
    pub unavailable_times: Option<String>,
    pub desired_routines: Option<String>,
    /// The proposed routines the narrative should cover
    pub routines: Vec<GeneratedRoutine>,
}

/// Response carrying the assembled prompt pair
#[derive(Debug, Serialize)]
pub struct SummaryPromptResponse {
    pub system_prompt: String,
    pub prompt: String,
}

/// Build the routine summary prompt using the provided storage
pub fn build_summary<S: MentorStorage>(
    storage: &S,
    params: SummaryPromptParams,
) -> Result<SummaryPromptResponse, ToolError> {
    let user = storage.get_profile()?;

    let request = RoutineGenerationRequest {
        goals: params.goals,
        challenges: params.challenges,
        unavailable_times: params.unavailable_times,
        desired_routines: params.desired_routines,
    };

    let prompt = build_routine_summary_prompt(&user, &request, &params.routines);

    Ok(SummaryPromptResponse {
        system_prompt: ROUTINE_SUMMARY_SYSTEM_PROMPT.to_string(),
        prompt,
    })
}

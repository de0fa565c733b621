/// Tool for assembling the daily feedback prompt
///
/// This module implements the feedback_prompt MCP tool: it loads the day
/// being reviewed, aggregates the preceding historical window, and renders
/// the mentor feedback prompt. The returned text is sent to the LLM service
/// by the caller; no network call happens here.

use serde::{Deserialize, Serialize};
use chrono::Duration;
use crate::analytics::aggregate_history;
use crate::prompts::{DEFAULT_FEEDBACK_SYSTEM_PROMPT, build_feedback_prompt};
use crate::storage::MentorStorage;
use crate::tools::{ToolError, log::parse_log_date};

/// Parameters for building the feedback prompt
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct FeedbackPromptParams {
    /// Date to review (YYYY-MM-DD), defaults to today
    pub log_date: Option<String>,
}

/// Response carrying the assembled prompt pair
#[derive(Debug, Serialize)]
pub struct FeedbackPromptResponse {
    pub system_prompt: String,
    pub prompt: String,
    pub log_date: String,
    pub days_in_window: u32,
}

/// Build the feedback prompt for a logged day using the provided storage
///
/// The historical window covers the `window_days` calendar days before the
/// reviewed date, excluding the date itself.
pub fn build_feedback<S: MentorStorage>(
    storage: &S,
    window_days: u32,
    params: FeedbackPromptParams,
) -> Result<FeedbackPromptResponse, ToolError> {
    let user = storage.get_profile()?;
    let log_date = parse_log_date(params.log_date.as_deref())?;

    // The day under review; LogNotFound if nothing was logged for it
    let daily_log = storage.get_daily_log(log_date)?;
    let entries = storage.get_entries_for_log(&daily_log.id)?;

    // All routines, paused ones included, so historical names resolve
    let routines = storage.list_routines(None, false)?;

    let today: Vec<_> = entries
        .into_iter()
        .filter_map(|entry| {
            match routines.iter().find(|r| r.id == entry.routine_id) {
                Some(routine) => Some((entry, routine.clone())),
                None => {
                    tracing::warn!(
                        "Entry {} references missing routine {}",
                        entry.id.to_string(),
                        entry.routine_id.to_string()
                    );
                    None
                }
            }
        })
        .collect();

    // Window excludes the reviewed day itself
    let window_start = log_date - Duration::days(i64::from(window_days));
    let window_end = log_date - Duration::days(1);
    let window = storage.get_logs_in_range(window_start, window_end)?;

    let stats = aggregate_history(&window, &routines);
    let prompt = build_feedback_prompt(&user, &daily_log, &stats, &today);

    tracing::info!(
        "Assembled feedback prompt for {} over {} logged days",
        log_date,
        stats.total_days_logged
    );

    Ok(FeedbackPromptResponse {
        system_prompt: DEFAULT_FEEDBACK_SYSTEM_PROMPT.to_string(),
        prompt,
        log_date: log_date.to_string(),
        days_in_window: stats.total_days_logged,
    })
}

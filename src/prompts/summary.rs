/// Routine summary prompt assembly
///
/// This module builds the prompt that asks the LLM to write a short narrative
/// summary of a proposed routine set: one fixed-format bullet per routine,
/// then a fixed instruction block asking for a cohesive paragraph.

use crate::domain::User;
use crate::prompts::{GeneratedRoutine, RoutineGenerationRequest, NONE_PROVIDED, text_or};

/// System prompt that sets the summarizer persona
pub const ROUTINE_SUMMARY_SYSTEM_PROMPT: &str = "You are a concise, empathetic coach. Write a short, 5-7 sentence summary \
about the user's current life situation (as implied by goals/challenges) and \
the set of proposed routines and why they fit. Maintain a balanced, supportive tone.";

/// Build the routine summary prompt for the LLM service
///
/// `routines` is the proposed set the narrative should cover, rendered one
/// bullet per routine in a fixed format. Deterministic for identical inputs.
pub fn build_routine_summary_prompt(
    user: &User,
    request: &RoutineGenerationRequest,
    routines: &[GeneratedRoutine],
) -> String {
    let routines_block = routines
        .iter()
        .map(|r| {
            format!(
                "- {} ({}, {} min, {}, priority {}) — {}",
                r.name,
                r.category.as_str(),
                r.target_duration,
                r.frequency,
                r.priority,
                r.description
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"
User Information:
- Name: {name}
- Goals: {goals}
- Challenges: {challenges}
- Unavailable Times: {unavailable_times}
- Desired Routines: {desired_routines}

Proposed Routines:
{routines_block}

Task:
Write a short summary (5-7 sentences) that:
- Reflects the user's situation and constraints.
- Explains why these routines were chosen and how they support the goals.
- Maintains a balanced, encouraging tone.
- Is direct and scannable; no lists, just a cohesive paragraph.
"#,
        name = user.display_name(),
        goals = text_or(request.goals.as_deref(), NONE_PROVIDED),
        challenges = text_or(request.challenges.as_deref(), NONE_PROVIDED),
        unavailable_times = text_or(request.unavailable_times.as_deref(), NONE_PROVIDED),
        desired_routines = text_or(request.desired_routines.as_deref(), NONE_PROVIDED),
        routines_block = routines_block,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Category;

    fn test_user() -> User {
        User::new("dgoggins".to_string(), None).unwrap()
    }

    fn proposed(name: &str, category: Category, minutes: u32, frequency: &str, priority: u8) -> GeneratedRoutine {
        GeneratedRoutine {
            name: name.to_string(),
            description: format!("{} every scheduled day.", name),
            category,
            frequency: frequency.to_string(),
            target_duration: minutes,
            priority,
        }
    }

    #[test]
    fn test_one_bullet_per_routine() {
        let request = RoutineGenerationRequest {
            goals: Some("Get stronger".to_string()),
            ..Default::default()
        };
        let routines = vec![
            proposed("Morning Run", Category::Health, 30, "3x per week", 8),
            proposed("Evening Reading", Category::Personal, 20, "daily", 5),
        ];

        let prompt = build_routine_summary_prompt(&test_user(), &request, &routines);

        assert!(prompt.contains(
            "- Morning Run (health, 30 min, 3x per week, priority 8) — Morning Run every scheduled day."
        ));
        assert!(prompt.contains(
            "- Evening Reading (personal, 20 min, daily, priority 5) — Evening Reading every scheduled day."
        ));
        assert!(prompt.contains("Write a short summary (5-7 sentences) that:"));
        assert!(prompt.contains("no lists, just a cohesive paragraph."));
    }

    #[test]
    fn test_blank_inputs_render_none_provided() {
        let request = RoutineGenerationRequest::default();
        let routines = vec![proposed("Stretch", Category::Health, 10, "daily", 4)];

        let prompt = build_routine_summary_prompt(&test_user(), &request, &routines);

        assert!(prompt.contains("- Name: dgoggins"));
        assert!(prompt.contains("- Goals: None provided"));
        assert!(prompt.contains("- Desired Routines: None provided"));
    }

    #[test]
    fn test_prompt_is_idempotent() {
        let request = RoutineGenerationRequest::default();
        let routines = vec![proposed("Stretch", Category::Health, 10, "daily", 4)];
        let user = test_user();

        assert_eq!(
            build_routine_summary_prompt(&user, &request, &routines),
            build_routine_summary_prompt(&user, &request, &routines)
        );
    }
}

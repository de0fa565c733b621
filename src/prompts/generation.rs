/// Routine generation prompt assembly
///
/// This module builds the prompt that asks the LLM to design a new set of
/// routines from the user's goals and constraints, and defines the JSON
/// response schema the prompt requests. Validating and parsing the model's
/// reply is the caller's job; this module only specifies what is asked for.

use serde::{Deserialize, Serialize};
use crate::domain::{Category, User};
use crate::prompts::{NONE_PROVIDED, text_or};

/// System prompt that sets the coach persona for routine generation
pub const DEFAULT_ROUTINE_SYSTEM_PROMPT: &str = r#"You are a helpful coach who designs realistic daily routines
aligned with user goals. Create routines with flexible frequency descriptions (e.g., '3x per week', 'daily').
Always return strictly valid JSON following the requested schema."#;

/// Free-text inputs for routine generation and summarization
///
/// Every field is optional; blank input renders as "None provided".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutineGenerationRequest {
    /// What the user wants to achieve
    pub goals: Option<String>,
    /// What tends to get in their way
    pub challenges: Option<String>,
    /// Times of day that are off limits
    pub unavailable_times: Option<String>,
    /// Routines the user already knows they want
    pub desired_routines: Option<String>,
}

/// One routine as the generation prompt asks the model to shape it
///
/// This is the element schema of the requested `routines` array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, schemars::JsonSchema)]
pub struct GeneratedRoutine {
    /// Short, conventional name
    pub name: String,
    /// One-sentence description
    pub description: String,
    /// One of the fixed category set
    pub category: Category,
    /// Free-text frequency (e.g., "daily", "3x per week")
    pub frequency: String,
    /// Minutes, 5 to 120
    pub target_duration: u32,
    /// 1-10, higher means more important
    pub priority: u8,
}

/// Top-level shape of the JSON document the prompt requests
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedRoutineSet {
    pub routines: Vec<GeneratedRoutine>,
}

/// Build the routine generation prompt for the LLM service
///
/// Deterministic for identical inputs; the schema instructions are fixed
/// text and never vary with the request.
pub fn build_routine_generation_prompt(user: &User, request: &RoutineGenerationRequest) -> String {
    format!(
        r#"
User Information:
- Name: {name}

User Inputs:
- Goals: {goals}
- Challenges: {challenges}
- Unavailable Times: {unavailable_times}
- Desired Routines: {desired_routines}

Task:
Design a set of 4-7 daily routines tailored to the user's goals and constraints. Prefer names that are short and conventional. Keep durations realistic and sustainable.

Output Requirements:
- Return a single JSON object with a top-level key "routines".
- The value of "routines" must be an array of 4-7 routine objects.
- Each routine must be an object with fields:
    - name: string (short, conventional name)
    - description: string (one sentence)
    - category: one of ["health", "work", "personal", "social"]
    - frequency: string (e.g., "daily", "3x per week", "weekly")
    - target_duration: integer minutes (5 to 120)
    - priority: integer 1-10 (higher means more important)

Constraints:
- Avoid duplicates by name.
- Keep JSON strictly valid; do not include comments or extra text.
- If desired routines are specified, try to include them where appropriate.
- Frequency should be flexible - not all routines need to be daily.
"#,
        name = user.display_name(),
        goals = text_or(request.goals.as_deref(), NONE_PROVIDED),
        challenges = text_or(request.challenges.as_deref(), NONE_PROVIDED),
        unavailable_times = text_or(request.unavailable_times.as_deref(), NONE_PROVIDED),
        desired_routines = text_or(request.desired_routines.as_deref(), NONE_PROVIDED),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_user() -> User {
        User::new("dgoggins".to_string(), Some("David".to_string())).unwrap()
    }

    #[test]
    fn test_all_fields_rendered() {
        let request = RoutineGenerationRequest {
            goals: Some("Train for a marathon".to_string()),
            challenges: Some("Late work nights".to_string()),
            unavailable_times: Some("9am-6pm weekdays".to_string()),
            desired_routines: Some("Morning run".to_string()),
        };

        let prompt = build_routine_generation_prompt(&test_user(), &request);

        assert!(prompt.contains("- Name: David"));
        assert!(prompt.contains("- Goals: Train for a marathon"));
        assert!(prompt.contains("- Challenges: Late work nights"));
        assert!(prompt.contains("- Unavailable Times: 9am-6pm weekdays"));
        assert!(prompt.contains("- Desired Routines: Morning run"));
    }

    #[test]
    fn test_empty_fields_render_none_provided() {
        let request = RoutineGenerationRequest {
            goals: Some("".to_string()),
            challenges: None,
            unavailable_times: Some("   ".to_string()),
            desired_routines: None,
        };

        let prompt = build_routine_generation_prompt(&test_user(), &request);

        assert!(prompt.contains("- Goals: None provided"));
        assert!(prompt.contains("- Challenges: None provided"));
        assert!(prompt.contains("- Unavailable Times: None provided"));
        assert!(prompt.contains("- Desired Routines: None provided"));
        // The schema instructions are fixed regardless of input.
        assert!(prompt.contains("Return a single JSON object with a top-level key \"routines\"."));
        assert!(prompt.contains("must be an array of 4-7 routine objects"));
        assert!(prompt.contains("category: one of [\"health\", \"work\", \"personal\", \"social\"]"));
        assert!(prompt.contains("target_duration: integer minutes (5 to 120)"));
        assert!(prompt.contains("- Avoid duplicates by name."));
        assert!(prompt.contains("Keep JSON strictly valid; do not include comments or extra text."));
    }

    #[test]
    fn test_prompt_is_idempotent() {
        let request = RoutineGenerationRequest {
            goals: Some("Sleep better".to_string()),
            ..Default::default()
        };

        let user = test_user();
        assert_eq!(
            build_routine_generation_prompt(&user, &request),
            build_routine_generation_prompt(&user, &request)
        );
    }

    #[test]
    fn test_generated_routine_set_schema_round_trip() {
        let json = r#"{
            "routines": [
                {
                    "name": "Morning Run",
                    "description": "Easy 5k to start the day.",
                    "category": "health",
                    "frequency": "3x per week",
                    "target_duration": 30,
                    "priority": 8
                }
            ]
        }"#;

        let set: GeneratedRoutineSet = serde_json::from_str(json).unwrap();
        assert_eq!(set.routines.len(), 1);
        assert_eq!(set.routines[0].category, Category::Health);
        assert_eq!(set.routines[0].target_duration, 30);

        let back = serde_json::to_string(&set).unwrap();
        assert!(back.contains("\"category\":\"health\""));
    }
}

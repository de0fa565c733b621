/// Mentor feedback prompt assembly
///
/// This module builds the daily-performance feedback prompt from today's log,
/// today's routine entries, and the historical statistics summary. The section
/// layout and default substitutions are a contract with the downstream LLM
/// consumer, so rendering here must stay byte-stable.

use crate::analytics::HistoricalStats;
use crate::domain::{DailyLog, Routine, RoutineEntry, User};
use crate::prompts::{NOT_AVAILABLE, NOT_LOGGED, NO_NOTES, NONE_GIVEN, NO_ROUTINES_LOGGED, NO_HISTORICAL_DATA, text_or};

/// System prompt that sets the mentor persona for feedback generation
pub const DEFAULT_FEEDBACK_SYSTEM_PROMPT: &str = r#"You are a no-nonsense, brutally honest mentor inspired by David Goggins.
You don't sugarcoat performance—you call out mediocrity while respecting effort. Your style is direct,
intense, and unapologetically demanding, but you balance the intensity with sharp wit and dark humor.

Your approach:
- CELEBRATE REAL WINS: When someone crushes it, acknowledge it genuinely. No participation trophies.
- EXPOSE EXCUSES: When someone underperforms, point out the excuse directly. Be specific and blunt.
- USE DARK HUMOR: Make them laugh while they're being called out. Self-aware jokes about struggle.
- DEMAND ACCOUNTABILITY: No deflection. Own your performance. That's growth.
- INSPIRE THROUGH CHALLENGE: Push them harder than they think they can go, but show them why they can.
- RESPECT THE GRIND: Honor the process and effort, even when results fall short.

Tone: Think of someone who's been through hell, survived it, and now tells you the truth about
what separates achievers from excuse-makers. Intense. Motivational. Funny in a "laugh-cry" way.

Creative expression: Use creative censoring (f***, sh*t, damn, hell) when appropriate for emphasis.
Don't hold back on intensity."#;

/// Build the complete feedback prompt for the LLM service
///
/// `today` carries the day's routine entries paired with their routines; the
/// routine supplies the name and target duration each per-routine block needs.
/// Missing optional data renders as the documented default strings, so this
/// never fails. Calling it twice with identical inputs produces byte-identical
/// output.
pub fn build_feedback_prompt(
    user: &User,
    daily_log: &DailyLog,
    stats: &HistoricalStats,
    today: &[(RoutineEntry, Routine)],
) -> String {
    let routine_performance: String = today
        .iter()
        .map(|(entry, routine)| render_routine_performance(entry, routine, stats))
        .collect();
    let routine_performance = if routine_performance.is_empty() {
        NO_ROUTINES_LOGGED.to_string()
    } else {
        routine_performance
    };

    let routine_stats_block = if stats.routine_stats.is_empty() {
        NO_HISTORICAL_DATA.to_string()
    } else {
        stats
            .routine_stats
            .iter()
            .map(|s| {
                format!(
                    "- {}: {:.0}% ({}/{} completed)\n",
                    s.name, s.completion_rate, s.completed, s.total_attempts
                )
            })
            .collect()
    };

    let (best_routine, best_routine_rate) = extreme_routine(stats, stats.best_routine.as_deref());
    let (worst_routine, worst_routine_rate) = extreme_routine(stats, stats.worst_routine.as_deref());

    let avg_compliance = match stats.avg_compliance {
        Some(rate) => format!("{:.0}", rate),
        None => NOT_AVAILABLE.to_string(),
    };

    format!(
        r#"
You are a David Goggins-style personal mentor analyzing a user's daily routine performance.

USER INFORMATION:
- Name: {user_name}

TODAY'S LOG:
- Date: {log_date}
- Mood: {mood}/10
- Energy Level: {energy_level}/10
- Stress Level: {stress_level}/10
- Notes: {notes}
- Highlights: {highlights}
- Challenges: {challenges}

TODAY'S ROUTINE PERFORMANCE:
{routine_performance}

HISTORICAL PERFORMANCE (Last 30 days):
- Total Days Logged: {total_days_logged}
- Average Mood: {avg_mood}/10
- Average Energy: {avg_energy}/10
- Average Stress: {avg_stress}/10
- Best Performing Routine: {best_routine} ({best_routine_rate}% completion)
- Worst Performing Routine: {worst_routine} ({worst_routine_rate}% completion)
- Overall Compliance Rate: {avg_compliance}%

Routine Completion Rates:
{routine_stats}

TASK:
Generate brutally honest feedback that:
1. CALLS OUT THE TRUTH: Compare today to their historical average. Did they show up or mail it in?
2. RESPECTS THE WORK: If they crushed it, say it. If they struggled but tried, acknowledge the fight.
3. EXPOSES PATTERNS: Show where they're consistently weak. No hiding from it.
4. USES HUMOR: Make them laugh at themselves. Self-deprecating jokes about struggle are fair game.
5. DEMANDS BETTER: Give specific, actionable steps. Not suggestions—expectations.

Structure:
- SUMMARY: One sentence that captures the overall assessment of today's performance.
- DETAILED FEEDBACK: Follow with a maximum of 10 sentences that include:
  * Specific feedback on completed/missed routines
  * Pattern analysis ("You always crush X but tank Y")
  * One hard truth they need to hear
  * One challenge for tomorrow

Tone: Direct, intense, funny, motivational. Like a coach who respects effort but won't accept excuses.
Keep it concise. Every sentence should matter. Maximum total of 11 sentences (1 summary + 10 detailed).
"#,
        user_name = user.display_name(),
        log_date = daily_log.log_date,
        mood = rating_or_not_logged(daily_log.mood),
        energy_level = rating_or_not_logged(daily_log.energy_level),
        stress_level = rating_or_not_logged(daily_log.stress_level),
        notes = text_or(daily_log.notes.as_deref(), NO_NOTES),
        highlights = text_or(daily_log.highlights.as_deref(), NONE_GIVEN),
        challenges = text_or(daily_log.challenges.as_deref(), NONE_GIVEN),
        routine_performance = routine_performance,
        total_days_logged = stats.total_days_logged,
        avg_mood = format!("{:.1}", stats.average_mood),
        avg_energy = format!("{:.1}", stats.average_energy),
        avg_stress = format!("{:.1}", stats.average_stress),
        best_routine = best_routine,
        best_routine_rate = best_routine_rate,
        worst_routine = worst_routine,
        worst_routine_rate = worst_routine_rate,
        avg_compliance = avg_compliance,
        routine_stats = routine_stats_block,
    )
}

/// Render the per-routine performance block for one of today's entries
fn render_routine_performance(
    entry: &RoutineEntry,
    routine: &Routine,
    stats: &HistoricalStats,
) -> String {
    // A routine absent from the window has no rate; a stored rate of exactly
    // zero renders the same way.
    let historical_rate = stats
        .routine_stat(&routine.name)
        .map(|s| s.completion_rate)
        .unwrap_or(0.0);
    let historical_rate = if historical_rate != 0.0 {
        format!("{:.0}", historical_rate)
    } else {
        NOT_AVAILABLE.to_string()
    };

    let difficulty_felt = match entry.difficulty_felt {
        Some(rating) => rating.to_string(),
        None => NOT_AVAILABLE.to_string(),
    };

    format!(
        r#"
Routine: {routine_name}
Status: {status}
Completion: {completion_percentage}%
Target Duration: {target_duration} min | Actual: {actual_duration} min
Difficulty Felt: {difficulty_felt}/10
Notes: {notes}
Historical Completion Rate: {historical_rate}%
"#,
        routine_name = routine.name,
        status = entry.status.as_str(),
        completion_percentage = entry.completion_percentage,
        target_duration = routine.target_duration,
        actual_duration = entry.actual_duration.unwrap_or(0),
        difficulty_felt = difficulty_felt,
        notes = text_or(entry.notes.as_deref(), NO_NOTES),
        historical_rate = historical_rate,
    )
}

/// Name and rendered rate for the best/worst slot, with N/A fallbacks
fn extreme_routine<'a>(stats: &'a HistoricalStats, name: Option<&'a str>) -> (&'a str, String) {
    match name {
        Some(name) => {
            let rate = stats
                .routine_stat(name)
                .map(|s| s.completion_rate)
                .unwrap_or(0.0);
            (name, format!("{:.0}", rate))
        }
        None => (NOT_AVAILABLE, NOT_AVAILABLE.to_string()),
    }
}

/// Render an optional 1-10 rating, substituting the not-logged marker
fn rating_or_not_logged(rating: Option<u8>) -> String {
    match rating {
        Some(value) => value.to_string(),
        None => NOT_LOGGED.to_string(),
    }
}

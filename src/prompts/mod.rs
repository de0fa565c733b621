/// Prompt assembly for the external LLM service
///
/// This module renders daily logs, routine entries, and historical statistics
/// into the fixed-structure text prompts the mentor feature sends to the
/// text-generation service. The builders are pure string transformations:
/// identical inputs always produce byte-identical prompts, and missing data
/// is substituted with the documented defaults rather than failing.
///
/// The network call itself, and parsing of whatever the model returns, live
/// with the caller.

pub mod feedback;
pub mod generation;
pub mod summary;

// Re-export builders and schema types for easy access
pub use feedback::*;
pub use generation::*;
pub use summary::*;

/// Substitute for a statistic that has no data behind it
pub const NOT_AVAILABLE: &str = "N/A";
/// Substitute for an unrated mood/energy/stress field
pub const NOT_LOGGED: &str = "Not logged";
/// Substitute for absent note text
pub const NO_NOTES: &str = "No notes";
/// Substitute for absent highlights/challenges text
pub const NONE_GIVEN: &str = "None";
/// Substitute for a routine-generation input the user left blank
pub const NONE_PROVIDED: &str = "None provided";
/// Shown in place of the per-routine block when today has no entries
pub const NO_ROUTINES_LOGGED: &str = "No routines logged";
/// Shown in place of the completion-rate list when the window has no entries
pub const NO_HISTORICAL_DATA: &str = "No historical data";

/// Render optional free text, treating blank strings as missing
pub(crate) fn text_or<'a>(value: Option<&'a str>, default: &'a str) -> &'a str {
    match value {
        Some(text) if !text.trim().is_empty() => text,
        _ => default,
    }
}

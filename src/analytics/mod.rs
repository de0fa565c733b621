/// Historical performance aggregation
///
/// This module reduces a window of daily logs and their routine entries into
/// the summary statistics the feedback prompt is built from: per-routine
/// completion rates, mood/energy/stress averages, best and worst performing
/// routine, and overall compliance.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use crate::domain::{DailyLog, Routine, RoutineEntry};

/// Default number of calendar days considered for aggregation
pub const DEFAULT_HISTORY_WINDOW_DAYS: u32 = 30;

/// Completion statistics for one routine over the window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutineStat {
    /// Routine name, the grouping key
    pub name: String,
    /// Number of entries whose status was completed
    pub completed: u32,
    /// Total number of entries recorded for this routine
    pub total_attempts: u32,
    /// completed / total_attempts * 100, kept unrounded until render time
    pub completion_rate: f64,
}

/// Summary statistics derived from a window of daily logs
///
/// This is ephemeral data: computed fresh per request, never persisted.
/// `routine_stats` keeps first-encounter order, which also decides ties
/// for best and worst routine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalStats {
    /// Number of daily logs found in the window
    pub total_days_logged: u32,
    /// Mean mood over logs that rated it, 0 when none did
    pub average_mood: f64,
    /// Mean energy over logs that rated it, 0 when none did
    pub average_energy: f64,
    /// Mean stress over logs that rated it, 0 when none did
    pub average_stress: f64,
    /// Per-routine completion statistics in first-encounter order
    pub routine_stats: Vec<RoutineStat>,
    /// Routine name with the highest completion rate, if any entries exist
    pub best_routine: Option<String>,
    /// Routine name with the lowest completion rate, if any entries exist
    pub worst_routine: Option<String>,
    /// Unweighted mean of all completion rates, None when no routine has entries
    pub avg_compliance: Option<f64>,
}

impl HistoricalStats {
    /// Stats for an empty window: all zeros, no routine groups
    pub fn empty() -> Self {
        Self {
            total_days_logged: 0,
            average_mood: 0.0,
            average_energy: 0.0,
            average_stress: 0.0,
            routine_stats: Vec::new(),
            best_routine: None,
            worst_routine: None,
            avg_compliance: None,
        }
    }

    /// Look up the stats for a routine by name
    pub fn routine_stat(&self, name: &str) -> Option<&RoutineStat> {
        self.routine_stats.iter().find(|s| s.name == name)
    }
}

/// Reduce a window of daily logs into summary statistics
///
/// `logs` is the historical window, each log paired with its routine entries.
/// `routines` supplies the name for each entry's routine id; entries whose
/// routine cannot be resolved are skipped since they cannot be grouped by
/// name. Pure function: no side effects, deterministic for identical inputs,
/// and every division is guarded so an empty window never errors.
pub fn aggregate_history(
    logs: &[(DailyLog, Vec<RoutineEntry>)],
    routines: &[Routine],
) -> HistoricalStats {
    let names_by_id: HashMap<_, _> = routines
        .iter()
        .map(|r| (&r.id, r.name.as_str()))
        .collect();

    // Group entries by routine name, preserving first-encounter order.
    let mut stats: Vec<RoutineStat> = Vec::new();
    let mut index_by_name: HashMap<String, usize> = HashMap::new();

    for (_, entries) in logs {
        for entry in entries {
            let Some(name) = names_by_id.get(&entry.routine_id) else {
                tracing::warn!(
                    "Skipping entry {} with unknown routine id {}",
                    entry.id.to_string(),
                    entry.routine_id.to_string()
                );
                continue;
            };

            let index = *index_by_name.entry(name.to_string()).or_insert_with(|| {
                stats.push(RoutineStat {
                    name: name.to_string(),
                    completed: 0,
                    total_attempts: 0,
                    completion_rate: 0.0,
                });
                stats.len() - 1
            });

            stats[index].total_attempts += 1;
            if entry.status.is_completed() {
                stats[index].completed += 1;
            }
        }
    }

    for stat in &mut stats {
        stat.completion_rate = if stat.total_attempts > 0 {
            f64::from(stat.completed) / f64::from(stat.total_attempts) * 100.0
        } else {
            0.0
        };
    }

    // First-encountered routine wins ties for best and worst.
    let mut best_routine = None;
    let mut worst_routine = None;
    let mut best_rate = f64::NEG_INFINITY;
    let mut worst_rate = f64::INFINITY;
    for stat in &stats {
        if stat.completion_rate > best_rate {
            best_rate = stat.completion_rate;
            best_routine = Some(stat.name.clone());
        }
        if stat.completion_rate < worst_rate {
            worst_rate = stat.completion_rate;
            worst_routine = Some(stat.name.clone());
        }
    }

    let avg_compliance = if stats.is_empty() {
        None
    } else {
        let sum: f64 = stats.iter().map(|s| s.completion_rate).sum();
        Some(sum / stats.len() as f64)
    };

    HistoricalStats {
        total_days_logged: logs.len() as u32,
        average_mood: average_rating(logs, |log| log.mood),
        average_energy: average_rating(logs, |log| log.energy_level),
        average_stress: average_rating(logs, |log| log.stress_level),
        routine_stats: stats,
        best_routine,
        worst_routine,
        avg_compliance,
    }
}

/// Mean of an optional 1-10 rating over the logs that recorded it
///
/// Missing values contribute to neither numerator nor denominator; the
/// average is 0 when no log recorded the field at all.
fn average_rating<F>(logs: &[(DailyLog, Vec<RoutineEntry>)], field: F) -> f64
where
    F: Fn(&DailyLog) -> Option<u8>,
{
    let mut sum = 0u32;
    let mut count = 0u32;
    for (log, _) in logs {
        if let Some(value) = field(log) {
            sum += u32::from(value);
            count += 1;
        }
    }

    if count > 0 {
        f64::from(sum) / f64::from(count)
    } else {
        0.0
    }
}

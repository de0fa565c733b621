/// Basic unit tests to verify core functionality through the public API
use routine_mentor_mcp::*;
use chrono::NaiveDate;
use tempfile::NamedTempFile;

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

#[test]
fn test_routine_creation() {
    let routine = Routine::new(
        "Morning Run".to_string(),
        Some("Easy 5k before work".to_string()),
        Category::Health,
        "daily".to_string(),
        30,
        8,
    );

    assert!(routine.is_ok());
    let routine = routine.unwrap();
    assert_eq!(routine.name, "Morning Run");
    assert!(routine.is_active);
}

#[test]
fn test_daily_log_creation() {
    let log = DailyLog::new(
        date("2025-06-15"),
        Some(7),
        Some(6),
        Some(4),
        Some("Long day at work".to_string()),
        None,
        None,
    );

    assert!(log.is_ok());
    let log = log.unwrap();
    assert_eq!(log.mood, Some(7));
    assert_eq!(log.highlights, None);
}

#[test]
fn test_routine_entry_creation() {
    let log_id = LogId::new();
    let routine_id = RoutineId::new();

    let entry = RoutineEntry::new(
        log_id.clone(),
        routine_id.clone(),
        EntryStatus::Partial,
        60,
        Some(18),
        Some(7),
        None,
    );

    assert!(entry.is_ok());
    let entry = entry.unwrap();
    assert_eq!(entry.log_id, log_id);
    assert_eq!(entry.completion_percentage, 60);
}

#[test]
fn test_aggregation_over_ten_days() {
    // Routine "Run" attempted 10 times, completed 8; "Read" attempted 5, completed 1.
    let run = Routine::new("Run".to_string(), None, Category::Health, "daily".to_string(), 30, 8).unwrap();
    let read = Routine::new("Read".to_string(), None, Category::Personal, "daily".to_string(), 20, 5).unwrap();

    let mut logs = Vec::new();
    for day in 1..=10u32 {
        let log = DailyLog::new(
            NaiveDate::from_ymd_opt(2025, 6, day).unwrap(),
            None,
            None,
            None,
            None,
            None,
            None,
        )
        .unwrap();

        let mut entries = Vec::new();
        let run_status = if day <= 8 { EntryStatus::Completed } else { EntryStatus::Missed };
        entries.push(
            RoutineEntry::new(log.id.clone(), run.id.clone(), run_status, 100, None, None, None).unwrap(),
        );
        if day <= 5 {
            let read_status = if day == 1 { EntryStatus::Completed } else { EntryStatus::Missed };
            entries.push(
                RoutineEntry::new(log.id.clone(), read.id.clone(), read_status, 0, None, None, None).unwrap(),
            );
        }
        logs.push((log, entries));
    }

    let stats = aggregate_history(&logs, &[run, read]);

    assert_eq!(stats.total_days_logged, 10);
    assert_eq!(stats.routine_stat("Run").unwrap().completion_rate, 80.0);
    assert_eq!(stats.routine_stat("Read").unwrap().completion_rate, 20.0);
    assert_eq!(stats.best_routine.as_deref(), Some("Run"));
    assert_eq!(stats.worst_routine.as_deref(), Some("Read"));
    assert_eq!(stats.avg_compliance, Some(50.0));
}

#[test]
fn test_aggregation_of_empty_window() {
    let stats = aggregate_history(&[], &[]);

    assert_eq!(stats.total_days_logged, 0);
    assert_eq!(stats.average_mood, 0.0);
    assert!(stats.routine_stats.is_empty());
    assert_eq!(stats.best_routine, None);
    assert_eq!(stats.worst_routine, None);
    assert_eq!(stats.avg_compliance, None);
}

#[test]
fn test_feedback_prompt_empty_history_renders_sentinels() {
    let user = User::new("dgoggins".to_string(), Some("David".to_string())).unwrap();
    let log = DailyLog::new(date("2025-06-15"), Some(7), Some(6), Some(4), None, None, None).unwrap();
    let run = Routine::new("Run".to_string(), None, Category::Health, "daily".to_string(), 30, 8).unwrap();
    let entry = RoutineEntry::new(
        log.id.clone(),
        run.id.clone(),
        EntryStatus::Completed,
        100,
        None,
        None,
        None,
    )
    .unwrap();

    let stats = aggregate_history(&[], &[]);
    let prompt = build_feedback_prompt(&user, &log, &stats, &[(entry, run)]);

    assert!(prompt.contains("- Total Days Logged: 0"));
    assert!(prompt.contains("- Average Mood: 0.0/10"));
    assert!(prompt.contains("- Best Performing Routine: N/A (N/A% completion)"));
    assert!(prompt.contains("- Overall Compliance Rate: N/A%"));
    // Today's routine has no history yet
    assert!(prompt.contains("Historical Completion Rate: N/A%"));
}

#[test]
fn test_generation_prompt_with_no_inputs() {
    let user = User::new("dgoggins".to_string(), None).unwrap();
    let request = RoutineGenerationRequest::default();

    let prompt = build_routine_generation_prompt(&user, &request);

    assert!(prompt.contains("- Goals: None provided"));
    assert!(prompt.contains("- Challenges: None provided"));
    assert!(prompt.contains("- Unavailable Times: None provided"));
    assert!(prompt.contains("- Desired Routines: None provided"));
    assert!(prompt.contains("Return a single JSON object with a top-level key \"routines\"."));
}

#[test]
fn test_summary_prompt_lists_each_routine() {
    let user = User::new("dgoggins".to_string(), None).unwrap();
    let request = RoutineGenerationRequest {
        goals: Some("Run a marathon".to_string()),
        ..Default::default()
    };
    let routines = vec![GeneratedRoutine {
        name: "Tempo Run".to_string(),
        description: "Sustained effort at threshold pace.".to_string(),
        category: Category::Health,
        frequency: "2x per week".to_string(),
        target_duration: 45,
        priority: 9,
    }];

    let prompt = build_routine_summary_prompt(&user, &request, &routines);

    assert!(prompt.contains("- Goals: Run a marathon"));
    assert!(prompt.contains("Tempo Run (health, 45 min, 2x per week, priority 9)"));
    assert!(prompt.contains("Write a short summary (5-7 sentences) that:"));
}

#[test]
fn test_storage_creation() {
    let temp_file = NamedTempFile::new().expect("Failed to create temp file");
    let storage = SqliteStorage::new(temp_file.path().to_path_buf());
    assert!(storage.is_ok());
}

#[tokio::test]
async fn test_server_creation() {
    let temp_file = NamedTempFile::new().expect("Failed to create temp file");
    let server = RoutineMentorServer::new(temp_file.path().to_path_buf(), DEFAULT_HISTORY_WINDOW_DAYS).await;
    assert!(server.is_ok());
    assert_eq!(server.unwrap().history_window_days(), 30);
}

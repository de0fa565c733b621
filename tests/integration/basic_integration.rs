/// End-to-end tests driving the tool layer against real SQLite storage
use routine_mentor_mcp::*;
use tempfile::NamedTempFile;

fn storage() -> (SqliteStorage, NamedTempFile) {
    let temp_file = NamedTempFile::new().expect("Failed to create temp file");
    let storage = SqliteStorage::new(temp_file.path().to_path_buf()).expect("Failed to create storage");
    (storage, temp_file)
}

fn seed_profile(storage: &SqliteStorage) {
    set_profile(
        storage,
        SetProfileParams {
            username: "dgoggins".to_string(),
            first_name: Some("David".to_string()),
        },
    )
    .expect("Failed to set profile");
}

fn seed_routine(storage: &SqliteStorage, name: &str, category: &str, minutes: u32) -> String {
    let response = create_routine(
        storage,
        CreateRoutineParams {
            name: name.to_string(),
            description: None,
            category: category.to_string(),
            frequency: "daily".to_string(),
            target_duration: minutes,
            priority: 7,
        },
    )
    .expect("Failed to create routine");
    response.routine_id.expect("Missing routine id")
}

fn log_result(storage: &SqliteStorage, day: &str, routine_id: &str, status: &str, percentage: u8) {
    log_day(
        storage,
        DayLogParams {
            log_date: Some(day.to_string()),
            mood: Some(6),
            energy_level: None,
            stress_level: None,
            notes: None,
            highlights: None,
            challenges: None,
            entries: vec![DayLogEntryParams {
                routine_id: routine_id.to_string(),
                status: status.to_string(),
                completion_percentage: percentage,
                actual_duration: None,
                difficulty_felt: None,
                notes: None,
            }],
        },
    )
    .expect("Failed to log day");
}

#[tokio::test]
async fn test_server_basic_workflow() {
    let temp_file = NamedTempFile::new().expect("Failed to create temp file");
    let server = RoutineMentorServer::new(temp_file.path().to_path_buf(), 30)
        .await
        .expect("Failed to create server");

    // Verify server exposes storage and its configured window
    let _storage = server.storage();
    assert_eq!(server.history_window_days(), 30);
}

#[tokio::test]
async fn test_database_persistence() {
    let temp_file = NamedTempFile::new().expect("Failed to create temp file");
    let db_path = temp_file.path().to_path_buf();

    {
        let server = RoutineMentorServer::new(db_path.clone(), 30)
            .await
            .expect("Failed to create first server");
        seed_profile(server.storage());
        seed_routine(server.storage(), "Run", "health", 30);
    }

    // A second server over the same file sees the stored data
    let server = RoutineMentorServer::new(db_path, 30)
        .await
        .expect("Failed to create second server");
    let listing = list_routines(
        server.storage(),
        ListRoutinesParams {
            category: None,
            active_only: Some(true),
        },
    )
    .expect("Failed to list routines");

    assert_eq!(listing.total, 1);
    assert_eq!(listing.routines[0].name, "Run");
}

#[test]
fn test_feedback_prompt_end_to_end() {
    let (storage, _guard) = storage();
    seed_profile(&storage);

    let run_id = seed_routine(&storage, "Run", "health", 30);
    let read_id = seed_routine(&storage, "Read", "personal", 20);

    // Ten days of history before the reviewed date: Run 8/10, Read 1/5
    for day in 1..=10u32 {
        let date = format!("2025-06-{:02}", day);
        let run_status = if day <= 8 { "completed" } else { "missed" };
        log_result(&storage, &date, &run_id, run_status, if day <= 8 { 100 } else { 0 });
    }
    for day in 1..=5u32 {
        let date = format!("2025-06-{:02}", day);
        let read_status = if day == 1 { "completed" } else { "missed" };
        // Re-log the day with both entries so the log keeps one entry per routine
        log_day(
            &storage,
            DayLogParams {
                log_date: Some(date),
                mood: Some(6),
                energy_level: None,
                stress_level: None,
                notes: None,
                highlights: None,
                challenges: None,
                entries: vec![
                    DayLogEntryParams {
                        routine_id: run_id.clone(),
                        status: (if day <= 8 { "completed" } else { "missed" }).to_string(),
                        completion_percentage: 100,
                        actual_duration: None,
                        difficulty_felt: None,
                        notes: None,
                    },
                    DayLogEntryParams {
                        routine_id: read_id.clone(),
                        status: read_status.to_string(),
                        completion_percentage: if day == 1 { 100 } else { 0 },
                        actual_duration: None,
                        difficulty_felt: None,
                        notes: None,
                    },
                ],
            },
        )
        .expect("Failed to re-log day");
    }

    // The day under review
    log_day(
        &storage,
        DayLogParams {
            log_date: Some("2025-06-11".to_string()),
            mood: Some(7),
            energy_level: Some(6),
            stress_level: Some(4),
            notes: Some("Strong morning".to_string()),
            highlights: None,
            challenges: None,
            entries: vec![DayLogEntryParams {
                routine_id: run_id.clone(),
                status: "completed".to_string(),
                completion_percentage: 100,
                actual_duration: Some(28),
                difficulty_felt: Some(5),
                notes: None,
            }],
        },
    )
    .expect("Failed to log reviewed day");

    let response = build_feedback(
        &storage,
        30,
        FeedbackPromptParams {
            log_date: Some("2025-06-11".to_string()),
        },
    )
    .expect("Failed to build feedback prompt");

    assert_eq!(response.days_in_window, 10);
    assert!(response.system_prompt.contains("brutally honest mentor"));

    let prompt = &response.prompt;
    assert!(prompt.contains("- Name: David"));
    assert!(prompt.contains("- Date: 2025-06-11"));
    assert!(prompt.contains("Routine: Run"));
    assert!(prompt.contains("Status: completed"));
    assert!(prompt.contains("Target Duration: 30 min | Actual: 28 min"));
    assert!(prompt.contains("Historical Completion Rate: 80%"));
    assert!(prompt.contains("- Total Days Logged: 10"));
    assert!(prompt.contains("- Best Performing Routine: Run (80% completion)"));
    assert!(prompt.contains("- Worst Performing Routine: Read (20% completion)"));
    assert!(prompt.contains("- Overall Compliance Rate: 50%"));
    assert!(prompt.contains("- Run: 80% (8/10 completed)"));
    assert!(prompt.contains("- Read: 20% (1/5 completed)"));

    // Identical inputs produce identical prompts
    let again = build_feedback(
        &storage,
        30,
        FeedbackPromptParams {
            log_date: Some("2025-06-11".to_string()),
        },
    )
    .expect("Failed to rebuild feedback prompt");
    assert_eq!(response.prompt, again.prompt);
}

#[test]
fn test_feedback_prompt_requires_logged_day() {
    let (storage, _guard) = storage();
    seed_profile(&storage);

    let result = build_feedback(
        &storage,
        30,
        FeedbackPromptParams {
            log_date: Some("2025-06-11".to_string()),
        },
    );

    assert!(matches!(
        result,
        Err(ToolError::Storage(StorageError::LogNotFound { .. }))
    ));
}

#[test]
fn test_relogging_a_day_replaces_entries() {
    let (storage, _guard) = storage();
    seed_profile(&storage);
    let run_id = seed_routine(&storage, "Run", "health", 30);

    log_result(&storage, "2025-06-10", &run_id, "missed", 0);
    log_result(&storage, "2025-06-10", &run_id, "completed", 100);

    log_result(&storage, "2025-06-11", &run_id, "completed", 100);
    let response = build_feedback(
        &storage,
        30,
        FeedbackPromptParams {
            log_date: Some("2025-06-11".to_string()),
        },
    )
    .expect("Failed to build feedback prompt");

    // The re-log replaced the miss, so history shows a single completed attempt
    assert!(response.prompt.contains("- Run: 100% (1/1 completed)"));
}

#[test]
fn test_generation_and_summary_prompts() {
    let (storage, _guard) = storage();
    seed_profile(&storage);

    let generation = build_generation(
        &storage,
        GenerationPromptParams {
            goals: Some("Train for a triathlon".to_string()),
            challenges: None,
            unavailable_times: None,
            desired_routines: None,
        },
    )
    .expect("Failed to build generation prompt");

    assert!(generation.system_prompt.contains("helpful coach"));
    assert!(generation.prompt.contains("- Goals: Train for a triathlon"));
    assert!(generation.prompt.contains("- Challenges: None provided"));
    assert!(generation.prompt.contains("array of 4-7 routine objects"));

    let summary = build_summary(
        &storage,
        SummaryPromptParams {
            goals: Some("Train for a triathlon".to_string()),
            challenges: None,
            unavailable_times: None,
            desired_routines: None,
            routines: vec![GeneratedRoutine {
                name: "Swim Drills".to_string(),
                description: "Technique-focused pool session.".to_string(),
                category: Category::Health,
                frequency: "3x per week".to_string(),
                target_duration: 40,
                priority: 9,
            }],
        },
    )
    .expect("Failed to build summary prompt");

    assert!(summary.system_prompt.contains("empathetic coach"));
    assert!(summary.prompt.contains("Swim Drills (health, 40 min, 3x per week, priority 9)"));
    assert!(summary.prompt.contains("no lists, just a cohesive paragraph."));
}

#[test]
fn test_prompt_tools_require_profile() {
    let (storage, _guard) = storage();

    let result = build_generation(
        &storage,
        GenerationPromptParams {
            goals: None,
            challenges: None,
            unavailable_times: None,
            desired_routines: None,
        },
    );

    assert!(matches!(
        result,
        Err(ToolError::Storage(StorageError::ProfileNotSet))
    ));
}

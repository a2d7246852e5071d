use coach_core::{
    CoachError, CompletionFilter, Database, GoalCatalog, GoalFilter, UpdateGoalRequest,
};
use tempfile::NamedTempFile;

mod common;
use common::{create_test_catalog, seed_goal};

/// Helper function to create a temporary database for testing
fn create_test_db() -> (NamedTempFile, Database) {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    let db = Database::new(temp_file.path()).expect("Failed to create test database");
    (temp_file, db)
}

#[test]
fn test_database_initialization() {
    let (temp_file, db) = create_test_db();
    assert!(temp_file.path().exists());
    assert!(db.list_goals(&GoalFilter::default()).unwrap().is_empty());
}

#[test]
fn test_create_goal() {
    let (_temp_file, mut db) = create_test_db();

    let goal = seed_goal(&mut db, "  Biceps ", 40.0, false);

    assert!(goal.id > 0);
    assert_eq!(goal.target, "Biceps");
    assert_eq!(goal.goal_value, 40.0);
    assert_eq!(goal.goal_progress, 0.0);
    assert!(!goal.completed);
    assert!(goal.progress_notes.is_empty());
    assert_eq!(goal.created_at, goal.updated_at);
}

#[test]
fn test_create_goal_rejects_invalid_input() {
    let (_temp_file, mut db) = create_test_db();

    let blank = db.create_goal(&coach_core::CreateGoal::new("   ", 10.0));
    assert!(matches!(blank, Err(CoachError::InvalidInput { ref field, .. }) if field == "target"));

    let negative = db.create_goal(&coach_core::CreateGoal::new("calves", -1.0));
    assert!(matches!(negative, Err(CoachError::InvalidInput { ref field, .. }) if field == "goal_value"));

    let nan = db.create_goal(&coach_core::CreateGoal {
        goal_progress: f64::NAN,
        ..coach_core::CreateGoal::new("calves", 1.0)
    });
    assert!(matches!(nan, Err(CoachError::InvalidInput { ref field, .. }) if field == "goal_progress"));

    assert!(db.list_goals(&GoalFilter::default()).unwrap().is_empty());
}

#[test]
fn test_get_goal() {
    let (_temp_file, mut db) = create_test_db();
    let created = seed_goal(&mut db, "quads", 120.0, true);

    let retrieved = db
        .get_goal(created.id)
        .expect("Failed to get goal")
        .expect("Goal should exist");
    assert_eq!(retrieved, created);

    assert!(db.get_goal(created.id + 100).unwrap().is_none());
}

#[test]
fn test_database_is_a_goal_catalog() {
    let (_temp_file, mut db) = create_test_db();
    let created = seed_goal(&mut db, "lats", 30.0, false);

    assert_eq!(db.get_by_id(created.id).unwrap(), Some(created));
    assert_eq!(db.get_by_id(999).unwrap(), None);
}

#[test]
fn test_list_goals_filters() {
    let (_temp_file, mut db) = create_test_db();
    seed_goal(&mut db, "triceps", 20.0, false);
    seed_goal(&mut db, "Biceps", 40.0, true);
    seed_goal(&mut db, "biceps", 45.0, false);

    let all = db.list_goals(&GoalFilter::default()).unwrap();
    let ids: Vec<u64> = all.iter().map(|g| g.id).collect();
    let mut sorted = ids.clone();
    sorted.sort_unstable();
    assert_eq!(ids, sorted);
    assert_eq!(all.len(), 3);

    let biceps = db.list_goals(&GoalFilter::for_target("BICEPS")).unwrap();
    assert_eq!(biceps.len(), 2);

    let done = db
        .list_goals(&GoalFilter {
            completion: Some(CompletionFilter::Completed),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(done.len(), 1);
    assert_eq!(done[0].target, "Biceps");

    let pending_biceps = db
        .list_goals(&GoalFilter {
            target: Some("biceps".to_string()),
            completion: Some(CompletionFilter::Pending),
            sort_by_target: false,
        })
        .unwrap();
    assert_eq!(pending_biceps.len(), 1);
    assert_eq!(pending_biceps[0].goal_value, 45.0);

    let by_target = db
        .list_goals(&GoalFilter {
            sort_by_target: true,
            ..Default::default()
        })
        .unwrap();
    assert_eq!(by_target.last().unwrap().target, "triceps");
}

#[test]
fn test_update_goal() {
    let (_temp_file, mut db) = create_test_db();
    let goal = seed_goal(&mut db, "glutes", 100.0, false);

    let updated = db
        .update_goal(
            goal.id,
            UpdateGoalRequest {
                goal_progress: Some(60.0),
                completed: Some(true),
                ..Default::default()
            },
        )
        .expect("Failed to update goal");

    assert_eq!(updated.target, "glutes");
    assert_eq!(updated.goal_progress, 60.0);
    assert!(updated.completed);
    assert!(updated.updated_at >= goal.updated_at);

    let stored = db.get_goal(goal.id).unwrap().unwrap();
    assert_eq!(stored, updated);
}

#[test]
fn test_update_goal_edge_cases() {
    let (_temp_file, mut db) = create_test_db();
    let goal = seed_goal(&mut db, "abs", 10.0, false);

    let unchanged = db.update_goal(goal.id, UpdateGoalRequest::default()).unwrap();
    assert_eq!(unchanged, goal);

    assert!(matches!(
        db.update_goal(goal.id + 1, UpdateGoalRequest::default()),
        Err(CoachError::NotFound { .. })
    ));

    let blank = db.update_goal(
        goal.id,
        UpdateGoalRequest {
            target: Some(" ".to_string()),
            ..Default::default()
        },
    );
    assert!(matches!(blank, Err(CoachError::InvalidInput { .. })));
    assert_eq!(db.get_goal(goal.id).unwrap().unwrap().target, "abs");
}

#[test]
fn test_add_progress_note() {
    let (_temp_file, mut db) = create_test_db();
    let goal = seed_goal(&mut db, "chest", 80.0, false);

    db.add_progress_note(goal.id, "Bench 60kg").unwrap();
    let annotated = db.add_progress_note(goal.id, "  Bench 65kg  ").unwrap();
    assert_eq!(annotated.progress_notes, vec!["Bench 60kg", "Bench 65kg"]);

    let stored = db.get_goal(goal.id).unwrap().unwrap();
    assert_eq!(stored.progress_notes, annotated.progress_notes);

    assert!(matches!(
        db.add_progress_note(goal.id, "   "),
        Err(CoachError::InvalidInput { .. })
    ));
    assert!(matches!(
        db.add_progress_note(goal.id + 1, "note"),
        Err(CoachError::NotFound { .. })
    ));
}

#[test]
fn test_delete_goal() {
    let (_temp_file, mut db) = create_test_db();
    let goal = seed_goal(&mut db, "traps", 15.0, false);

    db.delete_goal(goal.id).expect("Failed to delete goal");
    assert!(db.get_goal(goal.id).unwrap().is_none());

    assert!(matches!(
        db.delete_goal(goal.id),
        Err(CoachError::NotFound { id }) if id == goal.id
    ));
}

#[test]
fn test_ids_are_not_reused_after_reset() {
    let (_temp_file, mut db) = create_test_db();
    seed_goal(&mut db, "a", 1.0, false);
    let last = seed_goal(&mut db, "b", 1.0, false);

    assert_eq!(db.reset_goals().unwrap(), 2);
    assert!(db.list_goals(&GoalFilter::default()).unwrap().is_empty());
    assert_eq!(db.reset_goals().unwrap(), 0);

    let fresh = seed_goal(&mut db, "c", 1.0, false);
    assert!(fresh.id > last.id);
}

#[test]
fn test_goals_persist_across_connections() {
    let (temp_dir, mut db) = create_test_catalog();
    let goal = seed_goal(&mut db, "hamstrings", 50.0, true);
    drop(db);

    let reopened = Database::new(temp_dir.path().join("test.db")).unwrap();
    assert_eq!(reopened.get_goal(goal.id).unwrap(), Some(goal));
}

#[test]
fn test_migration_adds_progress_notes_column() {
    let temp_file = NamedTempFile::new().unwrap();
    {
        let conn = rusqlite::Connection::open(temp_file.path()).unwrap();
        conn.execute_batch(
            "CREATE TABLE goals (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                target TEXT NOT NULL,
                goal_value REAL NOT NULL,
                goal_progress REAL NOT NULL DEFAULT 0,
                completed INTEGER NOT NULL DEFAULT 0,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            );
            INSERT INTO goals (target, goal_value, goal_progress, completed, created_at, updated_at)
            VALUES ('shoulders', 25.0, 5.0, 0, '2024-01-01T00:00:00Z', '2024-01-01T00:00:00Z');",
        )
        .unwrap();
    }

    let mut db = Database::new(temp_file.path()).expect("Migration should succeed");
    let goal = db.get_goal(1).unwrap().expect("Legacy goal should survive");
    assert_eq!(goal.target, "shoulders");
    assert!(goal.progress_notes.is_empty());

    let noted = db.add_progress_note(1, "First note").unwrap();
    assert_eq!(noted.progress_notes, vec!["First note"]);
}

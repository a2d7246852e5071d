use coach_core::{CatalogBuilder, CreateGoal, Database, Goal};
use tempfile::TempDir;

/// Helper function to create a catalog backed by a fresh database file
pub fn create_test_catalog() -> (TempDir, Database) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let catalog = CatalogBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .expect("Failed to create catalog");
    (temp_dir, catalog)
}

/// Creates a goal, optionally already completed.
#[allow(dead_code)]
pub fn seed_goal(db: &mut Database, target: &str, goal_value: f64, completed: bool) -> Goal {
    db.create_goal(&CreateGoal {
        completed,
        ..CreateGoal::new(target, goal_value)
    })
    .expect("Failed to create goal")
}

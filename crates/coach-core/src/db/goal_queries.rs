//! Goal CRUD operations and queries.

use jiff::Timestamp;
use rusqlite::{params, types::Type, OptionalExtension};

use crate::{
    error::{CoachError, DatabaseResultExt, Result},
    models::{Goal, GoalFilter, UpdateGoalRequest},
    params::CreateGoal,
};

const INSERT_GOAL_SQL: &str = "INSERT INTO goals (target, goal_value, goal_progress, completed, progress_notes, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)";
const SELECT_GOAL_SQL: &str = "SELECT id, target, goal_value, goal_progress, completed, progress_notes, created_at, updated_at FROM goals WHERE id = ?1";
const UPDATE_GOAL_SQL: &str = "UPDATE goals SET target = ?1, goal_value = ?2, goal_progress = ?3, completed = ?4, updated_at = ?5 WHERE id = ?6";
const UPDATE_GOAL_NOTES_SQL: &str =
    "UPDATE goals SET progress_notes = ?1, updated_at = ?2 WHERE id = ?3";
const DELETE_GOAL_SQL: &str = "DELETE FROM goals WHERE id = ?1";
const DELETE_ALL_GOALS_SQL: &str = "DELETE FROM goals";

const GOAL_COLUMNS: &str =
    "id, target, goal_value, goal_progress, completed, progress_notes, created_at, updated_at";

impl super::Database {
    /// Helper function to construct a Goal from a database row
    fn build_goal_from_row(row: &rusqlite::Row) -> rusqlite::Result<Goal> {
        let notes_json: String = row.get(5)?;
        let progress_notes: Vec<String> = serde_json::from_str(&notes_json)
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(5, Type::Text, Box::new(e)))?;

        Ok(Goal {
            id: row.get::<_, i64>(0)? as u64,
            target: row.get(1)?,
            goal_value: row.get(2)?,
            goal_progress: row.get(3)?,
            completed: row.get(4)?,
            progress_notes,
            created_at: row.get::<_, String>(6)?.parse::<Timestamp>().map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(6, Type::Text, Box::new(e))
            })?,
            updated_at: row.get::<_, String>(7)?.parse::<Timestamp>().map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(7, Type::Text, Box::new(e))
            })?,
        })
    }

    /// Creates a new goal. The target is trimmed; amounts must be finite and
    /// non-negative.
    pub fn create_goal(&mut self, params: &CreateGoal) -> Result<Goal> {
        let target = validate_target(&params.target)?;
        let goal_value = validate_amount("goal_value", params.goal_value)?;
        let goal_progress = validate_amount("goal_progress", params.goal_progress)?;

        log::info!("Creating goal for target '{target}'");

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let now = Timestamp::now();
        let now_str = now.to_string();

        tx.execute(
            INSERT_GOAL_SQL,
            params![
                &target,
                goal_value,
                goal_progress,
                params.completed,
                "[]",
                &now_str,
                &now_str
            ],
        )
        .db_context("Failed to insert goal")?;

        let id = tx.last_insert_rowid() as u64;

        tx.commit().db_context("Failed to commit transaction")?;

        log::info!("Goal {id} created for target '{target}'");

        Ok(Goal {
            id,
            target,
            goal_value,
            goal_progress,
            completed: params.completed,
            progress_notes: Vec::new(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Retrieves a goal by its ID.
    pub fn get_goal(&self, id: u64) -> Result<Option<Goal>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_GOAL_SQL)
            .db_context("Failed to prepare query")?;

        stmt.query_row(params![id as i64], Self::build_goal_from_row)
            .optional()
            .db_context("Failed to query goal")
    }

    /// Lists goals matching the filter, ordered by id unless the filter asks
    /// for target order.
    pub fn list_goals(&self, filter: &GoalFilter) -> Result<Vec<Goal>> {
        let mut query = format!("SELECT {GOAL_COLUMNS} FROM goals");

        let mut conditions = Vec::new();
        let mut params_vec: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

        if let Some(ref target) = filter.target {
            conditions.push("target = ? COLLATE NOCASE");
            params_vec.push(Box::new(target.trim().to_string()));
        }

        if let Some(completion) = filter.completion {
            conditions.push("completed = ?");
            params_vec.push(Box::new(completion.as_flag()));
        }

        if !conditions.is_empty() {
            query.push_str(" WHERE ");
            query.push_str(&conditions.join(" AND "));
        }

        if filter.sort_by_target {
            query.push_str(" ORDER BY target COLLATE NOCASE, id");
        } else {
            query.push_str(" ORDER BY id");
        }

        let mut stmt = self
            .connection
            .prepare(&query)
            .db_context("Failed to prepare query")?;

        let params_refs: Vec<&dyn rusqlite::ToSql> = params_vec.iter().map(|b| &**b).collect();

        let goals = stmt
            .query_map(&params_refs[..], Self::build_goal_from_row)
            .db_context("Failed to query goals")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch goals")?;

        log::info!("Retrieved {} goals from the catalog", goals.len());
        Ok(goals)
    }

    /// Applies a partial update and returns the stored result.
    ///
    /// An empty request returns the goal unchanged without touching
    /// `updated_at`.
    pub fn update_goal(&mut self, id: u64, request: UpdateGoalRequest) -> Result<Goal> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let current = tx
            .query_row(SELECT_GOAL_SQL, params![id as i64], Self::build_goal_from_row)
            .optional()
            .db_context("Failed to load goal for update")?
            .ok_or(CoachError::NotFound { id })?;

        if request.is_empty() {
            return Ok(current);
        }

        let target = match request.target {
            Some(ref target) => validate_target(target)?,
            None => current.target,
        };
        let goal_value = match request.goal_value {
            Some(value) => validate_amount("goal_value", value)?,
            None => current.goal_value,
        };
        let goal_progress = match request.goal_progress {
            Some(progress) => validate_amount("goal_progress", progress)?,
            None => current.goal_progress,
        };
        let completed = request.completed.unwrap_or(current.completed);

        let now = Timestamp::now();

        tx.execute(
            UPDATE_GOAL_SQL,
            params![
                &target,
                goal_value,
                goal_progress,
                completed,
                now.to_string(),
                id as i64
            ],
        )
        .db_context("Failed to update goal")?;

        tx.commit().db_context("Failed to commit transaction")?;

        log::info!("Goal {id} updated");

        Ok(Goal {
            id,
            target,
            goal_value,
            goal_progress,
            completed,
            progress_notes: current.progress_notes,
            created_at: current.created_at,
            updated_at: now,
        })
    }

    /// Appends a note to the goal's progress history.
    pub fn add_progress_note(&mut self, id: u64, note: &str) -> Result<Goal> {
        let note = note.trim();
        if note.is_empty() {
            return Err(CoachError::invalid_input("note").with_reason("Note must not be empty"));
        }

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let mut goal = tx
            .query_row(SELECT_GOAL_SQL, params![id as i64], Self::build_goal_from_row)
            .optional()
            .db_context("Failed to load goal")?
            .ok_or(CoachError::NotFound { id })?;

        goal.progress_notes.push(note.to_string());
        goal.updated_at = Timestamp::now();

        let notes_json = serde_json::to_string(&goal.progress_notes)?;
        tx.execute(
            UPDATE_GOAL_NOTES_SQL,
            params![notes_json, goal.updated_at.to_string(), id as i64],
        )
        .db_context("Failed to store progress note")?;

        tx.commit().db_context("Failed to commit transaction")?;

        log::info!(
            "Goal {id} now has {} progress notes",
            goal.progress_notes.len()
        );
        Ok(goal)
    }

    /// Permanently deletes a goal.
    pub fn delete_goal(&mut self, id: u64) -> Result<()> {
        let affected = self
            .connection
            .execute(DELETE_GOAL_SQL, params![id as i64])
            .db_context("Failed to delete goal")?;

        if affected == 0 {
            log::warn!("Attempted to delete non-existent goal {id}");
            return Err(CoachError::NotFound { id });
        }

        log::info!("Goal {id} deleted");
        Ok(())
    }

    /// Deletes every goal and returns how many were removed. Ids are not
    /// reused afterwards.
    pub fn reset_goals(&mut self) -> Result<usize> {
        let removed = self
            .connection
            .execute(DELETE_ALL_GOALS_SQL, [])
            .db_context("Failed to reset goals")?;

        log::info!("Removed {removed} goals from the catalog");
        Ok(removed)
    }
}

fn validate_target(target: &str) -> Result<String> {
    let target = target.trim();
    if target.is_empty() {
        return Err(CoachError::invalid_input("target").with_reason("Target must not be empty"));
    }
    Ok(target.to_string())
}

fn validate_amount(field: &str, value: f64) -> Result<f64> {
    if !value.is_finite() || value < 0.0 {
        return Err(CoachError::invalid_input(field)
            .with_reason(format!("Must be a non-negative number, got {value}")));
    }
    Ok(value)
}

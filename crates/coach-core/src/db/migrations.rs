//! Database schema initialization and migrations.

use crate::error::{DatabaseResultExt, Result};

impl super::Database {
    /// Initializes the database schema using the embedded SQL file.
    pub(super) fn initialize_schema(&self) -> Result<()> {
        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")?;

        // Apply migrations for existing databases
        self.apply_migrations()?;

        Ok(())
    }

    /// Brings databases created by earlier versions up to date.
    fn apply_migrations(&self) -> Result<()> {
        // Progress notes were added after the first release
        let has_notes_column: bool = self
            .connection
            .query_row(
                "SELECT COUNT(*) FROM pragma_table_info('goals') WHERE name = 'progress_notes'",
                [],
                |row| row.get(0),
            )
            .map(|count: i64| count > 0)
            .db_context("Failed to inspect goals table")?;

        if !has_notes_column {
            log::info!("Adding progress_notes column to goals table");
            self.connection
                .execute(
                    "ALTER TABLE goals ADD COLUMN progress_notes TEXT NOT NULL DEFAULT '[]'",
                    [],
                )
                .db_context("Failed to add progress_notes column to goals table")?;
        }

        Ok(())
    }
}

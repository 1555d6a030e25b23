//! Project CRUD operations and queries.

use jiff::Timestamp;
use rusqlite::{OptionalExtension, params};

use super::utils::{id_column, parse_column};
use crate::{
    error::{DatabaseResultExt, Result, VantageError},
    models::{Priority, Project, ProjectId, ProjectStatus},
};

const INSERT_PROJECT_SQL: &str =
    "INSERT INTO projects (name, status, priority, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5)";
const PROJECT_COLUMNS: &str = "id, name, status, priority, updated_at";
const UPDATE_PROJECT_STATUS_SQL: &str =
    "UPDATE projects SET status = ?1, updated_at = ?2 WHERE id = ?3";

impl super::Database {
    pub(super) fn build_project_from_row(row: &rusqlite::Row) -> rusqlite::Result<Project> {
        Ok(Project {
            id: id_column(row, 0)?,
            name: row.get(1)?,
            status: parse_column::<ProjectStatus>(row, 2)?,
            priority: parse_column::<Priority>(row, 3)?,
            updated_at: parse_column::<Timestamp>(row, 4)?,
        })
    }

    /// Creates a new active project.
    pub fn create_project(&mut self, name: &str, priority: Priority) -> Result<Project> {
        let now = Timestamp::now();
        let now_str = now.to_string();
        let status = ProjectStatus::Active;

        self.connection
            .execute(
                INSERT_PROJECT_SQL,
                params![name, status.as_str(), priority.as_str(), &now_str, &now_str],
            )
            .db_context("Failed to insert project")?;

        Ok(Project {
            id: self.connection.last_insert_rowid() as u64,
            name: name.to_string(),
            status,
            priority,
            updated_at: now,
        })
    }

    /// Retrieves a project by its ID.
    pub fn get_project(&self, id: ProjectId) -> Result<Option<Project>> {
        let sql = format!("SELECT {PROJECT_COLUMNS} FROM projects WHERE id = ?1");
        let mut stmt = self
            .connection
            .prepare(&sql)
            .db_context("Failed to prepare query")?;

        stmt.query_row(params![id as i64], Self::build_project_from_row)
            .optional()
            .db_context("Failed to query project")
    }

    /// Lists projects ordered by ID, hiding archived ones unless asked.
    pub fn list_projects(&self, include_archived: bool) -> Result<Vec<Project>> {
        let sql = if include_archived {
            format!("SELECT {PROJECT_COLUMNS} FROM projects ORDER BY id")
        } else {
            format!("SELECT {PROJECT_COLUMNS} FROM projects WHERE status <> 'archived' ORDER BY id")
        };
        let mut stmt = self
            .connection
            .prepare(&sql)
            .db_context("Failed to prepare query")?;

        let projects = stmt
            .query_map([], Self::build_project_from_row)
            .db_context("Failed to query projects")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch projects")?;

        Ok(projects)
    }

    /// Moves a project to `status` and records the change as activity.
    pub fn set_project_status(&mut self, id: ProjectId, status: ProjectStatus) -> Result<Project> {
        let now = Timestamp::now();
        let updated = self
            .connection
            .execute(
                UPDATE_PROJECT_STATUS_SQL,
                params![status.as_str(), now.to_string(), id as i64],
            )
            .db_context("Failed to update project status")?;

        if updated == 0 {
            return Err(VantageError::ProjectNotFound { id });
        }
        self.get_project(id)?
            .ok_or(VantageError::ProjectNotFound { id })
    }

    pub(super) fn project_exists(&self, id: ProjectId) -> Result<bool> {
        self.connection
            .query_row(
                "SELECT EXISTS(SELECT 1 FROM projects WHERE id = ?1)",
                params![id as i64],
                |row| row.get(0),
            )
            .db_context("Failed to check project existence")
    }
}

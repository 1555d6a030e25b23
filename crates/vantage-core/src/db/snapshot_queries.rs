//! Whole-store reads and writes in the engine's [`Snapshot`] shape.

use jiff::Timestamp;
use rusqlite::params;

use super::utils::id_column;
use crate::{
    error::{DatabaseResultExt, Result, VantageError},
    models::{MilestoneDependency, Snapshot},
};

const SELECT_ALL_PROJECTS_SQL: &str =
    "SELECT id, name, status, priority, updated_at FROM projects ORDER BY id";
const SELECT_ALL_MILESTONES_SQL: &str = "SELECT id, project_id, title, status, percent_complete, target_date, sort_order FROM milestones ORDER BY project_id, sort_order, id";
const SELECT_ALL_DEPENDENCIES_SQL: &str =
    "SELECT milestone_id, depends_on FROM milestone_dependencies ORDER BY milestone_id, depends_on";
const INSERT_PROJECT_WITH_ID_SQL: &str = "INSERT INTO projects (id, name, status, priority, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?5)";
const INSERT_MILESTONE_WITH_ID_SQL: &str = "INSERT INTO milestones (id, project_id, title, status, percent_complete, target_date, sort_order, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?8)";
const INSERT_DEPENDENCY_SQL: &str = "INSERT OR IGNORE INTO milestone_dependencies (milestone_id, depends_on, created_at) VALUES (?1, ?2, ?3)";

impl super::Database {
    /// Reads every record, archived projects included, in a stable order.
    pub fn load_snapshot(&self) -> Result<Snapshot> {
        let projects = {
            let mut stmt = self
                .connection
                .prepare(SELECT_ALL_PROJECTS_SQL)
                .db_context("Failed to prepare query")?;
            let projects = stmt
                .query_map([], Self::build_project_from_row)
                .db_context("Failed to query projects")?
                .collect::<std::result::Result<Vec<_>, _>>()
                .db_context("Failed to fetch projects")?;
            projects
        };

        let milestones = {
            let mut stmt = self
                .connection
                .prepare(SELECT_ALL_MILESTONES_SQL)
                .db_context("Failed to prepare query")?;
            let milestones = stmt
                .query_map([], Self::build_milestone_from_row)
                .db_context("Failed to query milestones")?
                .collect::<std::result::Result<Vec<_>, _>>()
                .db_context("Failed to fetch milestones")?;
            milestones
        };

        let dependencies = {
            let mut stmt = self
                .connection
                .prepare(SELECT_ALL_DEPENDENCIES_SQL)
                .db_context("Failed to prepare query")?;
            let dependencies = stmt
                .query_map([], |row| {
                    Ok(MilestoneDependency::new(id_column(row, 0)?, id_column(row, 1)?))
                })
                .db_context("Failed to query dependencies")?
                .collect::<std::result::Result<Vec<_>, _>>()
                .db_context("Failed to fetch dependencies")?;
            dependencies
        };

        Ok(Snapshot {
            projects,
            milestones,
            dependencies,
        })
    }

    /// Replaces the store contents with `snapshot`, keeping its identifiers
    /// and timestamps.
    ///
    /// Dependency edges may reference unknown milestones; they are stored
    /// as-is and surface as warnings when the roadmap is planned. Repeated
    /// edges collapse into one.
    ///
    /// # Errors
    ///
    /// Returns `VantageError::InvalidInput` if the snapshot fails
    /// [`Snapshot::validate`], holds a self-dependency, or uses an id too
    /// large for SQLite, and `VantageError::ProjectNotFound` if a milestone
    /// names a project missing from the snapshot. Nothing is written on
    /// error.
    pub fn import_snapshot(&mut self, snapshot: &Snapshot) -> Result<()> {
        snapshot.validate()?;
        if let Some(edge) = snapshot.dependencies.iter().find(|e| e.is_self_loop()) {
            return Err(VantageError::invalid_input("depends_on").with_reason(format!(
                "Milestone {} cannot depend on itself",
                edge.milestone_id
            )));
        }
        for milestone in &snapshot.milestones {
            if !snapshot.projects.iter().any(|p| p.id == milestone.project_id) {
                return Err(VantageError::ProjectNotFound {
                    id: milestone.project_id,
                });
            }
        }

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;
        tx.execute_batch(
            "DELETE FROM milestone_dependencies; DELETE FROM milestones; DELETE FROM projects;",
        )
        .db_context("Failed to clear existing records")?;

        for project in &snapshot.projects {
            tx.execute(
                INSERT_PROJECT_WITH_ID_SQL,
                params![
                    sql_id(project.id, "id")?,
                    &project.name,
                    project.status.as_str(),
                    project.priority.as_str(),
                    project.updated_at.to_string()
                ],
            )
            .db_context("Failed to insert project")?;
        }

        let now = Timestamp::now().to_string();
        for milestone in &snapshot.milestones {
            tx.execute(
                INSERT_MILESTONE_WITH_ID_SQL,
                params![
                    sql_id(milestone.id, "id")?,
                    sql_id(milestone.project_id, "project_id")?,
                    &milestone.title,
                    milestone.status.as_str(),
                    i64::from(milestone.percent_complete),
                    milestone.target_date.map(|d| d.to_string()),
                    milestone.sort_order,
                    &now
                ],
            )
            .db_context("Failed to insert milestone")?;
        }

        for edge in &snapshot.dependencies {
            tx.execute(
                INSERT_DEPENDENCY_SQL,
                params![
                    sql_id(edge.milestone_id, "milestone_id")?,
                    sql_id(edge.depends_on, "depends_on")?,
                    &now
                ],
            )
            .db_context("Failed to insert dependency")?;
        }

        tx.commit().db_context("Failed to commit transaction")?;
        Ok(())
    }
}

fn sql_id(id: u64, field: &str) -> Result<i64> {
    i64::try_from(id).map_err(|_| {
        VantageError::invalid_input(field).with_reason(format!("{id} exceeds the storable range"))
    })
}

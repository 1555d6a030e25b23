//! Milestone and dependency edge operations.

use jiff::{Timestamp, civil::Date};
use rusqlite::{OptionalExtension, params};

use super::utils::{id_column, parse_column, parse_optional_column, touch_project, touch_project_of};
use crate::{
    error::{DatabaseResultExt, Result, VantageError},
    models::{Milestone, MilestoneDependency, MilestoneId, MilestoneStatus, ProjectId},
    params::MilestoneChanges,
};

const MILESTONE_COLUMNS: &str =
    "id, project_id, title, status, percent_complete, target_date, sort_order";
const NEXT_SORT_ORDER_SQL: &str =
    "SELECT COALESCE(MAX(sort_order), -1) + 1 FROM milestones WHERE project_id = ?1";
const INSERT_MILESTONE_SQL: &str = "INSERT INTO milestones (project_id, title, status, percent_complete, target_date, sort_order, created_at, updated_at) VALUES (?1, ?2, ?3, 0, ?4, ?5, ?6, ?7)";
const UPDATE_MILESTONE_SQL: &str = "UPDATE milestones SET title = ?1, status = ?2, percent_complete = ?3, target_date = ?4, sort_order = ?5, updated_at = ?6 WHERE id = ?7";
const INSERT_DEPENDENCY_SQL: &str = "INSERT OR IGNORE INTO milestone_dependencies (milestone_id, depends_on, created_at) VALUES (?1, ?2, ?3)";
const DELETE_DEPENDENCY_SQL: &str =
    "DELETE FROM milestone_dependencies WHERE milestone_id = ?1 AND depends_on = ?2";
const SELECT_PROJECT_DEPENDENCIES_SQL: &str = "SELECT d.milestone_id, d.depends_on FROM milestone_dependencies d JOIN milestones m ON m.id = d.milestone_id WHERE m.project_id = ?1 ORDER BY d.milestone_id, d.depends_on";

impl super::Database {
    pub(super) fn build_milestone_from_row(row: &rusqlite::Row) -> rusqlite::Result<Milestone> {
        let percent: i64 = row.get(4)?;
        Ok(Milestone {
            id: id_column(row, 0)?,
            project_id: id_column(row, 1)?,
            title: row.get(2)?,
            status: parse_column::<MilestoneStatus>(row, 3)?,
            percent_complete: u8::try_from(percent).map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(
                    4,
                    rusqlite::types::Type::Integer,
                    Box::new(e),
                )
            })?,
            target_date: parse_optional_column::<Date>(row, 5)?,
            sort_order: row.get(6)?,
        })
    }

    /// Adds a milestone to a project, appending it after its siblings unless
    /// `sort_order` is given.
    pub fn create_milestone(
        &mut self,
        project_id: ProjectId,
        title: &str,
        target_date: Option<Date>,
        sort_order: Option<i64>,
    ) -> Result<Milestone> {
        if !self.project_exists(project_id)? {
            return Err(VantageError::ProjectNotFound { id: project_id });
        }

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let sort_order = match sort_order {
            Some(order) => order,
            None => tx
                .query_row(NEXT_SORT_ORDER_SQL, params![project_id as i64], |row| {
                    row.get(0)
                })
                .db_context("Failed to get next sort order")?,
        };

        let now = Timestamp::now();
        let now_str = now.to_string();
        let status = MilestoneStatus::NotStarted;
        tx.execute(
            INSERT_MILESTONE_SQL,
            params![
                project_id as i64,
                title,
                status.as_str(),
                target_date.map(|d| d.to_string()),
                sort_order,
                &now_str,
                &now_str
            ],
        )
        .db_context("Failed to insert milestone")?;
        let id = tx.last_insert_rowid() as u64;

        touch_project(&tx, project_id, now)?;
        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Milestone {
            id,
            project_id,
            title: title.to_string(),
            status,
            percent_complete: 0,
            target_date,
            sort_order,
        })
    }

    /// Retrieves a single milestone by its ID.
    pub fn get_milestone(&self, id: MilestoneId) -> Result<Option<Milestone>> {
        let sql = format!("SELECT {MILESTONE_COLUMNS} FROM milestones WHERE id = ?1");
        let mut stmt = self
            .connection
            .prepare(&sql)
            .db_context("Failed to prepare query")?;

        stmt.query_row(params![id as i64], Self::build_milestone_from_row)
            .optional()
            .db_context("Failed to get milestone")
    }

    /// Applies `changes` to a milestone and touches its project.
    pub fn update_milestone(
        &mut self,
        id: MilestoneId,
        changes: &MilestoneChanges,
    ) -> Result<Milestone> {
        let current = self
            .get_milestone(id)?
            .ok_or(VantageError::MilestoneNotFound { id })?;

        let updated = Milestone {
            title: changes.title.clone().unwrap_or(current.title),
            status: changes.status.unwrap_or(current.status),
            percent_complete: changes.percent_complete.unwrap_or(current.percent_complete),
            target_date: changes.target_date.unwrap_or(current.target_date),
            sort_order: changes.sort_order.unwrap_or(current.sort_order),
            ..current
        };

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;
        let now = Timestamp::now();
        tx.execute(
            UPDATE_MILESTONE_SQL,
            params![
                &updated.title,
                updated.status.as_str(),
                i64::from(updated.percent_complete),
                updated.target_date.map(|d| d.to_string()),
                updated.sort_order,
                now.to_string(),
                id as i64
            ],
        )
        .db_context("Failed to update milestone")?;
        touch_project(&tx, updated.project_id, now)?;
        tx.commit().db_context("Failed to commit transaction")?;

        Ok(updated)
    }

    /// Lists a project's milestones by `(sort_order, id)`.
    pub fn list_milestones(&self, project_id: ProjectId) -> Result<Vec<Milestone>> {
        if !self.project_exists(project_id)? {
            return Err(VantageError::ProjectNotFound { id: project_id });
        }

        let sql = format!(
            "SELECT {MILESTONE_COLUMNS} FROM milestones WHERE project_id = ?1 ORDER BY sort_order, id"
        );
        let mut stmt = self
            .connection
            .prepare(&sql)
            .db_context("Failed to prepare query")?;

        let milestones = stmt
            .query_map(params![project_id as i64], Self::build_milestone_from_row)
            .db_context("Failed to query milestones")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch milestones")?;

        Ok(milestones)
    }

    /// Records that `milestone_id` depends on `depends_on`.
    ///
    /// Returns `false` when the edge already existed. Both milestones must
    /// exist; they may belong to different projects.
    pub fn add_dependency(&mut self, milestone_id: MilestoneId, depends_on: MilestoneId) -> Result<bool> {
        if milestone_id == depends_on {
            return Err(VantageError::invalid_input("depends_on").with_reason(format!(
                "Milestone {milestone_id} cannot depend on itself"
            )));
        }
        for id in [milestone_id, depends_on] {
            if self.get_milestone(id)?.is_none() {
                return Err(VantageError::MilestoneNotFound { id });
            }
        }

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;
        let now = Timestamp::now();
        let inserted = tx
            .execute(
                INSERT_DEPENDENCY_SQL,
                params![milestone_id as i64, depends_on as i64, now.to_string()],
            )
            .db_context("Failed to insert dependency")?;
        if inserted > 0 {
            touch_project_of(&tx, milestone_id, now)?;
        }
        tx.commit().db_context("Failed to commit transaction")?;

        Ok(inserted > 0)
    }

    /// Deletes an edge. Returns `false` when there was nothing to delete.
    pub fn remove_dependency(
        &mut self,
        milestone_id: MilestoneId,
        depends_on: MilestoneId,
    ) -> Result<bool> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;
        let now = Timestamp::now();
        let deleted = tx
            .execute(
                DELETE_DEPENDENCY_SQL,
                params![milestone_id as i64, depends_on as i64],
            )
            .db_context("Failed to delete dependency")?;
        if deleted > 0 {
            touch_project_of(&tx, milestone_id, now)?;
        }
        tx.commit().db_context("Failed to commit transaction")?;

        Ok(deleted > 0)
    }

    /// Edges whose dependent milestone belongs to `project_id`.
    pub fn list_dependencies(&self, project_id: ProjectId) -> Result<Vec<MilestoneDependency>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_PROJECT_DEPENDENCIES_SQL)
            .db_context("Failed to prepare query")?;

        let edges = stmt
            .query_map(params![project_id as i64], |row| {
                Ok(MilestoneDependency::new(id_column(row, 0)?, id_column(row, 1)?))
            })
            .db_context("Failed to query dependencies")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch dependencies")?;

        Ok(edges)
    }
}

//! Interface-agnostic request structures.
//!
//! Each front end (today only the CLI) defines its own argument structs with
//! framework derives and converts them into these types, so the core never
//! depends on `clap`.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │  Core Params    │    │    Tracker      │
//! │  (clap derives) │───▶│ (serde derives) │───▶│   operations    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Status and date fields arrive as strings and are parsed by the `validate`
//! methods, which report `VantageError::InvalidInput` naming the field.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::{
    error::{Result, VantageError},
    models::{MilestoneId, MilestoneStatus, Priority, ProjectId, ProjectStatus},
};

/// Generic parameters for operations requiring just an ID.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Id {
    pub id: u64,
}

/// Parameters for creating a project.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateProject {
    pub name: String,
    /// 'high', 'medium' (default) or 'low'
    pub priority: Option<String>,
}

impl CreateProject {
    /// Returns the trimmed name and parsed priority.
    pub fn validate(&self) -> Result<(String, Priority)> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(VantageError::invalid_input("name").with_reason("Name cannot be empty"));
        }
        let priority = match &self.priority {
            Some(p) => p
                .parse::<Priority>()
                .map_err(|e| VantageError::invalid_input("priority").with_reason(e))?,
            None => Priority::default(),
        };
        Ok((name.to_string(), priority))
    }
}

/// Parameters for changing a project's lifecycle state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SetProjectStatus {
    pub id: ProjectId,
    /// 'active', 'paused', 'completed' or 'archived'
    pub status: String,
}

impl SetProjectStatus {
    pub fn validate(&self) -> Result<ProjectStatus> {
        self.status
            .parse::<ProjectStatus>()
            .map_err(|e| VantageError::invalid_input("status").with_reason(e))
    }
}

/// Parameters for adding a milestone to a project.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateMilestone {
    pub project_id: ProjectId,
    pub title: String,
    /// Target date as `YYYY-MM-DD`
    pub target_date: Option<String>,
    /// Position among siblings; appended after the last one when absent
    pub sort_order: Option<i64>,
}

impl CreateMilestone {
    pub fn validate(&self) -> Result<(String, Option<Date>)> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(VantageError::invalid_input("title").with_reason("Title cannot be empty"));
        }
        let target = self.target_date.as_deref().map(parse_date).transpose()?;
        Ok((title.to_string(), target))
    }
}

/// Parameters for a partial milestone update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateMilestone {
    pub id: MilestoneId,
    pub title: Option<String>,
    /// 'not_started', 'in_progress' or 'completed'
    pub status: Option<String>,
    pub percent_complete: Option<u8>,
    /// New target date as `YYYY-MM-DD`
    pub target_date: Option<String>,
    /// Remove the target date; conflicts with `target_date`
    #[serde(default)]
    pub clear_target_date: bool,
    pub sort_order: Option<i64>,
}

/// Parsed form of [`UpdateMilestone`]; `None` leaves a column untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MilestoneChanges {
    pub title: Option<String>,
    pub status: Option<MilestoneStatus>,
    pub percent_complete: Option<u8>,
    pub target_date: Option<Option<Date>>,
    pub sort_order: Option<i64>,
}

impl MilestoneChanges {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Human-readable list of the fields being changed.
    pub fn describe(&self) -> Vec<String> {
        let mut changes = Vec::new();
        if let Some(title) = &self.title {
            changes.push(format!("title: {title}"));
        }
        if let Some(status) = self.status {
            changes.push(format!("status: {}", status.as_str()));
        }
        if let Some(percent) = self.percent_complete {
            changes.push(format!("progress: {percent}%"));
        }
        match self.target_date {
            Some(Some(date)) => changes.push(format!("target date: {date}")),
            Some(None) => changes.push("target date cleared".to_string()),
            None => {}
        }
        if let Some(order) = self.sort_order {
            changes.push(format!("sort order: {order}"));
        }
        changes
    }
}

impl UpdateMilestone {
    /// Parses the update into [`MilestoneChanges`].
    ///
    /// Marking a milestone completed without an explicit percentage sets it to
    /// 100.
    ///
    /// # Errors
    ///
    /// Returns `VantageError::InvalidInput` when a field fails to parse, the
    /// percentage exceeds 100, a date is both set and cleared, or nothing
    /// would change.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vantage_core::{models::MilestoneStatus, params::UpdateMilestone};
    ///
    /// let params = UpdateMilestone {
    ///     id: 1,
    ///     status: Some("completed".to_string()),
    ///     ..UpdateMilestone::default()
    /// };
    /// let changes = params.validate()?;
    /// assert_eq!(changes.status, Some(MilestoneStatus::Completed));
    /// assert_eq!(changes.percent_complete, Some(100));
    /// # Ok::<(), vantage_core::VantageError>(())
    /// ```
    pub fn validate(&self) -> Result<MilestoneChanges> {
        let title = match &self.title {
            Some(t) if t.trim().is_empty() => {
                return Err(
                    VantageError::invalid_input("title").with_reason("Title cannot be empty")
                );
            }
            Some(t) => Some(t.trim().to_string()),
            None => None,
        };

        let status = self
            .status
            .as_deref()
            .map(|s| {
                s.parse::<MilestoneStatus>().map_err(|_| {
                    VantageError::invalid_input("status").with_reason(format!(
                        "Invalid status: {s}. Must be 'not_started', 'in_progress', or 'completed'"
                    ))
                })
            })
            .transpose()?;

        if let Some(percent) = self.percent_complete.filter(|p| *p > 100) {
            return Err(VantageError::invalid_input("percent_complete")
                .with_reason(format!("{percent} is outside 0-100")));
        }
        let percent_complete = match (status, self.percent_complete) {
            (Some(MilestoneStatus::Completed), None) => Some(100),
            (_, percent) => percent,
        };

        let target_date = match (&self.target_date, self.clear_target_date) {
            (Some(_), true) => {
                return Err(VantageError::invalid_input("target_date")
                    .with_reason("Cannot set and clear the target date at once"));
            }
            (Some(date), false) => Some(Some(parse_date(date)?)),
            (None, true) => Some(None),
            (None, false) => None,
        };

        let changes = MilestoneChanges {
            title,
            status,
            percent_complete,
            target_date,
            sort_order: self.sort_order,
        };
        if changes.is_empty() {
            return Err(VantageError::invalid_input("update")
                .with_reason("No fields to update were provided"));
        }
        Ok(changes)
    }
}

/// Parameters for adding or removing a dependency edge.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct AddDependency {
    /// The dependent milestone
    pub milestone_id: MilestoneId,
    /// The milestone that has to complete first
    pub depends_on: MilestoneId,
}

impl AddDependency {
    pub fn validate(&self) -> Result<()> {
        if self.milestone_id == self.depends_on {
            return Err(VantageError::invalid_input("depends_on").with_reason(format!(
                "Milestone {} cannot depend on itself",
                self.milestone_id
            )));
        }
        Ok(())
    }
}

/// Parameters selecting which roadmaps to show.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct RoadmapQuery {
    /// A single project, or every project when absent
    pub project_id: Option<ProjectId>,
}

fn parse_date(value: &str) -> Result<Date> {
    value.trim().parse::<Date>().map_err(|e| {
        VantageError::invalid_input("target_date")
            .with_reason(format!("Invalid date '{value}', expected YYYY-MM-DD: {e}"))
    })
}

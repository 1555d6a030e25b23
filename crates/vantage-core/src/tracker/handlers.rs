//! Tracker operations that return display wrapper types.

use super::Tracker;
use crate::{
    display::{CreateResult, Milestones, OperationStatus, Projects, UpdateResult},
    error::Result,
    models::{Milestone, Project},
    params::{AddDependency, CreateMilestone, CreateProject, Id, SetProjectStatus, UpdateMilestone},
};

impl Tracker {
    pub async fn create_project_result(
        &self,
        params: &CreateProject,
    ) -> Result<CreateResult<Project>> {
        Ok(CreateResult::new(self.create_project(params).await?))
    }

    pub async fn list_projects_view(&self, include_archived: bool) -> Result<Projects> {
        Ok(Projects(self.list_projects(include_archived).await?))
    }

    pub async fn set_project_status_result(
        &self,
        params: &SetProjectStatus,
    ) -> Result<UpdateResult<Project>> {
        let project = self.set_project_status(params).await?;
        let change = format!("status: {}", project.status);
        Ok(UpdateResult::with_changes(project, vec![change]))
    }

    pub async fn create_milestone_result(
        &self,
        params: &CreateMilestone,
    ) -> Result<CreateResult<Milestone>> {
        Ok(CreateResult::new(self.create_milestone(params).await?))
    }

    pub async fn update_milestone_result(
        &self,
        params: &UpdateMilestone,
    ) -> Result<UpdateResult<Milestone>> {
        let (milestone, changes) = self.update_milestone(params).await?;
        Ok(UpdateResult::with_changes(milestone, changes.describe()))
    }

    pub async fn list_milestones_view(&self, params: &Id) -> Result<Milestones> {
        Ok(Milestones(self.list_milestones(params).await?))
    }

    /// Adds an edge, reporting whether it was new.
    pub async fn add_dependency_status(&self, params: &AddDependency) -> Result<OperationStatus> {
        let message = if self.add_dependency(params).await? {
            format!(
                "Milestone {} now depends on {}",
                params.milestone_id, params.depends_on
            )
        } else {
            format!(
                "Milestone {} already depends on {}",
                params.milestone_id, params.depends_on
            )
        };
        Ok(OperationStatus::success(message))
    }

    /// Removes an edge; a missing edge is reported as a failure status, not
    /// an error.
    pub async fn remove_dependency_status(
        &self,
        params: &AddDependency,
    ) -> Result<OperationStatus> {
        if self.remove_dependency(params).await? {
            Ok(OperationStatus::success(format!(
                "Removed dependency {} -> {}",
                params.milestone_id, params.depends_on
            )))
        } else {
            Ok(OperationStatus::failure(format!(
                "No dependency {} -> {}",
                params.milestone_id, params.depends_on
            )))
        }
    }
}

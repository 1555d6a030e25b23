//! Project operations for the Tracker.

use log::info;

use super::Tracker;
use crate::{
    error::Result,
    models::Project,
    params::{CreateProject, Id, SetProjectStatus},
};

impl Tracker {
    /// Creates an active project.
    pub async fn create_project(&self, params: &CreateProject) -> Result<Project> {
        let (name, priority) = params.validate()?;
        let project = self
            .with_database(move |db| db.create_project(&name, priority))
            .await?;
        info!("Created project {} ({})", project.id, project.name);
        Ok(project)
    }

    /// Retrieves a project by its ID.
    pub async fn get_project(&self, params: &Id) -> Result<Option<Project>> {
        let id = params.id;
        self.with_database(move |db| db.get_project(id)).await
    }

    /// Lists projects by ID; archived ones only when asked.
    pub async fn list_projects(&self, include_archived: bool) -> Result<Vec<Project>> {
        self.with_database(move |db| db.list_projects(include_archived))
            .await
    }

    /// Changes a project's lifecycle state.
    pub async fn set_project_status(&self, params: &SetProjectStatus) -> Result<Project> {
        let status = params.validate()?;
        let id = params.id;
        let project = self
            .with_database(move |db| db.set_project_status(id, status))
            .await?;
        info!("Project {} is now {}", project.id, project.status);
        Ok(project)
    }
}

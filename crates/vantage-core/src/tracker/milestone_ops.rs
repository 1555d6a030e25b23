//! Milestone and dependency operations for the Tracker.

use log::info;

use super::Tracker;
use crate::{
    error::Result,
    models::{Milestone, MilestoneDependency, Snapshot},
    params::{AddDependency, CreateMilestone, Id, MilestoneChanges, UpdateMilestone},
};

impl Tracker {
    /// Adds a milestone to an existing project.
    pub async fn create_milestone(&self, params: &CreateMilestone) -> Result<Milestone> {
        let (title, target_date) = params.validate()?;
        let project_id = params.project_id;
        let sort_order = params.sort_order;
        let milestone = self
            .with_database(move |db| {
                db.create_milestone(project_id, &title, target_date, sort_order)
            })
            .await?;
        info!(
            "Created milestone {} in project {}",
            milestone.id, milestone.project_id
        );
        Ok(milestone)
    }

    /// Applies a partial update, returning the stored milestone and the
    /// parsed changes.
    pub async fn update_milestone(
        &self,
        params: &UpdateMilestone,
    ) -> Result<(Milestone, MilestoneChanges)> {
        let changes = params.validate()?;
        let id = params.id;
        let applied = changes.clone();
        let milestone = self
            .with_database(move |db| db.update_milestone(id, &applied))
            .await?;
        info!("Updated milestone {id}");
        Ok((milestone, changes))
    }

    /// Milestones of one project in `(sort_order, id)` order.
    pub async fn list_milestones(&self, params: &Id) -> Result<Vec<Milestone>> {
        let project_id = params.id;
        self.with_database(move |db| db.list_milestones(project_id))
            .await
    }

    /// Edges whose dependent milestone belongs to the project.
    pub async fn list_dependencies(&self, params: &Id) -> Result<Vec<MilestoneDependency>> {
        let project_id = params.id;
        self.with_database(move |db| db.list_dependencies(project_id))
            .await
    }

    /// Records a dependency edge. Returns `false` if it already existed.
    pub async fn add_dependency(&self, params: &AddDependency) -> Result<bool> {
        params.validate()?;
        let AddDependency {
            milestone_id,
            depends_on,
        } = *params;
        self.with_database(move |db| db.add_dependency(milestone_id, depends_on))
            .await
    }

    /// Deletes a dependency edge. Returns `false` if there was none.
    pub async fn remove_dependency(&self, params: &AddDependency) -> Result<bool> {
        let AddDependency {
            milestone_id,
            depends_on,
        } = *params;
        self.with_database(move |db| db.remove_dependency(milestone_id, depends_on))
            .await
    }

    /// Reads the whole store.
    pub async fn snapshot(&self) -> Result<Snapshot> {
        self.with_database(|db| db.load_snapshot()).await
    }

    /// Replaces the store contents with `snapshot`.
    pub async fn import_snapshot(&self, snapshot: Snapshot) -> Result<()> {
        let counts = (
            snapshot.projects.len(),
            snapshot.milestones.len(),
            snapshot.dependencies.len(),
        );
        self.with_database(move |db| db.import_snapshot(&snapshot))
            .await?;
        info!(
            "Imported {} projects, {} milestones, {} dependencies",
            counts.0, counts.1, counts.2
        );
        Ok(())
    }
}

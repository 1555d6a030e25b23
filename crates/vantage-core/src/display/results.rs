//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use crate::models::{Milestone, Project};

/// Wrapper type for displaying the result of create operations.
///
/// # Examples
///
/// ```rust
/// use vantage_core::{
///     display::CreateResult,
///     models::{Priority, Project, ProjectStatus},
/// };
/// use jiff::Timestamp;
///
/// let project = Project {
///     id: 1,
///     name: "Website".to_string(),
///     status: ProjectStatus::Active,
///     priority: Priority::High,
///     updated_at: Timestamp::now(),
/// };
///
/// let output = CreateResult::new(project).to_string();
/// assert!(output.starts_with("Created project with ID: 1"));
/// ```
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<Project> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created project with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

impl fmt::Display for CreateResult<Milestone> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Created milestone with ID: {} in project {}",
            self.resource.id, self.resource.project_id
        )?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of update operations, optionally
/// listing what changed.
pub struct UpdateResult<T> {
    pub resource: T,
    pub changes: Vec<String>,
}

impl<T> UpdateResult<T> {
    pub fn new(resource: T) -> Self {
        Self {
            resource,
            changes: Vec::new(),
        }
    }

    pub fn with_changes(resource: T, changes: Vec<String>) -> Self {
        Self { resource, changes }
    }

    fn write_changes(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }
        writeln!(f)
    }
}

impl fmt::Display for UpdateResult<Project> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated project with ID: {}", self.resource.id)?;
        self.write_changes(f)?;
        write!(f, "{}", self.resource)
    }
}

impl fmt::Display for UpdateResult<Milestone> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated milestone with ID: {}", self.resource.id)?;
        self.write_changes(f)?;
        write!(f, "{}", self.resource)
    }
}

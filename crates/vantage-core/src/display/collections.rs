//! Collection wrapper types for displaying groups of records.

use std::{fmt, ops::Index};

use crate::models::{Milestone, Project};

/// Newtype wrapper for displaying a list of projects.
///
/// # Examples
///
/// ```rust
/// use vantage_core::display::Projects;
///
/// let projects = Projects(Vec::new());
/// assert_eq!(projects.to_string(), "No projects found.\n");
/// ```
pub struct Projects(pub Vec<Project>);

impl Projects {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Project> {
        self.0.iter()
    }
}

impl Index<usize> for Projects {
    type Output = Project;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for Projects {
    type Item = Project;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl fmt::Display for Projects {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No projects found.");
        }
        for project in &self.0 {
            write!(f, "{project}")?;
        }
        Ok(())
    }
}

/// Newtype wrapper for displaying the milestones of one project in
/// `sort_order` order.
pub struct Milestones(pub Vec<Milestone>);

impl Milestones {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Milestone> {
        self.0.iter()
    }

    /// Count of milestones marked completed.
    pub fn completed(&self) -> usize {
        self.0.iter().filter(|m| m.is_completed()).count()
    }
}

impl Index<usize> for Milestones {
    type Output = Milestone;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for Milestones {
    type Item = Milestone;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl fmt::Display for Milestones {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No milestones found.");
        }
        writeln!(f, "{} of {} completed", self.completed(), self.len())?;
        writeln!(f)?;
        for milestone in &self.0 {
            write!(f, "{milestone}")?;
        }
        Ok(())
    }
}

//! Display implementations for domain models.
//!
//! Kept apart from the model definitions so the records stay plain data.

use std::fmt;

use super::datetime::{LocalDateTime, TargetDate};
use crate::models::{
    ActivityLabel, DataQualityWarning, Milestone, MilestoneStatus, Priority, Project,
    ProjectStatus,
};

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for MilestoneStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for ActivityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {} (ID: {})", self.name, self.id)?;
        writeln!(f)?;
        writeln!(f, "- **Status**: {}", self.status)?;
        writeln!(f, "- **Priority**: {}", self.priority)?;
        writeln!(f, "- **Updated**: {}", LocalDateTime(&self.updated_at))?;
        writeln!(f)
    }
}

impl fmt::Display for Milestone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "### {}. {} ({})",
            self.id,
            self.title,
            self.status.with_icon()
        )?;
        writeln!(f)?;
        writeln!(f, "- **Progress**: {}%", self.percent_complete)?;
        writeln!(f, "- **Target**: {}", TargetDate(self.target_date.as_ref()))?;
        writeln!(f, "- **Order**: {}", self.sort_order)?;
        writeln!(f)
    }
}

impl fmt::Display for DataQualityWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataQualityWarning::DanglingReference {
                milestone_id,
                depends_on,
                missing,
            } => write!(
                f,
                "dropped dependency {milestone_id} -> {depends_on}: milestone {missing} is not in this project"
            ),
            DataQualityWarning::DuplicateDependency {
                milestone_id,
                depends_on,
            } => write!(
                f,
                "ignored repeated dependency {milestone_id} -> {depends_on}"
            ),
            DataQualityWarning::OrphanMilestone {
                milestone_id,
                project_id,
            } => write!(
                f,
                "milestone {milestone_id} belongs to unknown project {project_id}"
            ),
            DataQualityWarning::OrphanDependency {
                milestone_id,
                depends_on,
            } => write!(
                f,
                "dependency {milestone_id} -> {depends_on} references no known milestone"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use jiff::{Timestamp, civil::date};

    use super::*;

    #[test]
    fn test_milestone_display_shows_icon_and_target() {
        let milestone = Milestone {
            id: 4,
            project_id: 1,
            title: "Ship beta".to_string(),
            status: MilestoneStatus::InProgress,
            percent_complete: 40,
            target_date: Some(date(2024, 5, 1)),
            sort_order: 2,
        };
        let output = milestone.to_string();
        assert!(output.contains("### 4. Ship beta (➤ In Progress)"));
        assert!(output.contains("- **Progress**: 40%"));
        assert!(output.contains("- **Target**: 2024-05-01"));
    }

    #[test]
    fn test_project_display_header() {
        let project = Project {
            id: 3,
            name: "Website".to_string(),
            status: ProjectStatus::Paused,
            priority: Priority::Low,
            updated_at: Timestamp::UNIX_EPOCH,
        };
        let output = project.to_string();
        assert!(output.contains("## Website (ID: 3)"));
        assert!(output.contains("- **Status**: paused"));
        assert!(output.contains("- **Priority**: low"));
    }

    #[test]
    fn test_dangling_warning_names_missing_milestone() {
        let warning = DataQualityWarning::DanglingReference {
            milestone_id: 2,
            depends_on: 9,
            missing: 9,
        };
        assert_eq!(
            warning.to_string(),
            "dropped dependency 2 -> 9: milestone 9 is not in this project"
        );
    }
}

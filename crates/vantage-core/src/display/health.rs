//! Health board: per-project scores followed by the portfolio roll-up.

use std::fmt;

use crate::{engine::PortfolioReport, models::ActivityLabel, models::Project};

/// Renders the health section of a [`PortfolioReport`] as a markdown table.
///
/// Projects are listed in the order given, paired with their score by id.
/// Projects absent from the report are skipped.
pub struct HealthBoard<'a> {
    pub projects: &'a [Project],
    pub report: &'a PortfolioReport,
}

impl<'a> HealthBoard<'a> {
    pub fn new(projects: &'a [Project], report: &'a PortfolioReport) -> Self {
        Self { projects, report }
    }
}

impl fmt::Display for HealthBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.projects.is_empty() {
            return writeln!(f, "No projects found.");
        }

        writeln!(f, "# Portfolio Health")?;
        writeln!(f)?;
        writeln!(
            f,
            "| ID | Project | Status | Score | Activity | Days | Progress | Attention |"
        )?;
        writeln!(f, "|---:|---|---|---:|---|---:|---:|:---:|")?;
        for project in self.projects {
            let Some(health) = self.report.health.get(&project.id) else {
                continue;
            };
            writeln!(
                f,
                "| {} | {} | {} | {} | {} | {} | {:.0}% | {} |",
                project.id,
                project.name,
                project.status,
                health.score,
                health.label,
                health.days_since_update,
                health.progress,
                if health.needs_attention { "⚠" } else { "" }
            )?;
        }
        writeln!(f)?;

        let portfolio = &self.report.portfolio;
        writeln!(f, "## Summary")?;
        writeln!(f)?;
        writeln!(f, "- **Active projects**: {}", portfolio.active_projects)?;
        writeln!(f, "- **Average health**: {:.1}", portfolio.average_health)?;
        let labels = ActivityLabel::ALL
            .iter()
            .map(|label| format!("{label} {}", portfolio.labels.get(*label)))
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(f, "- **Activity**: {labels}")?;
        if portfolio.attention.is_empty() {
            writeln!(f, "- **Needs attention**: none")?;
        } else {
            writeln!(f, "- **Needs attention**: {}", portfolio.attention.join(", "))?;
        }

        if !self.report.warnings.is_empty() {
            writeln!(f)?;
            writeln!(f, "## Data Quality")?;
            writeln!(f)?;
            for warning in &self.report.warnings {
                writeln!(f, "- {warning}")?;
            }
        }
        Ok(())
    }
}

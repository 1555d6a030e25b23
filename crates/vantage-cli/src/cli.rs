//! Command handlers: call the tracker, render the result.

use std::fs;

use anyhow::{Context, Result};
use jiff::Timestamp;
use log::debug;
use vantage_core::{
    HealthBoard, OperationStatus, ProjectStatus, RoadmapView, Tracker,
    models::Snapshot,
    params::{Id, RoadmapQuery},
};

use crate::{
    commands::{DependencyCommands, ImportArgs, MilestoneCommands, ProjectCommands},
    renderer::TerminalRenderer,
};

/// Runs one parsed command against a tracker.
pub struct Cli {
    tracker: Tracker,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(tracker: Tracker, renderer: TerminalRenderer) -> Self {
        Self { tracker, renderer }
    }

    pub async fn handle_project_command(&self, command: ProjectCommands) -> Result<()> {
        let output = match command {
            ProjectCommands::Add(args) => self
                .tracker
                .create_project_result(&args.into())
                .await?
                .to_string(),
            ProjectCommands::List(args) => {
                self.tracker.list_projects_view(args.all).await?.to_string()
            }
            ProjectCommands::Status(args) => self
                .tracker
                .set_project_status_result(&args.into())
                .await?
                .to_string(),
        };
        self.renderer.render(&output)
    }

    pub async fn handle_milestone_command(&self, command: MilestoneCommands) -> Result<()> {
        let output = match command {
            MilestoneCommands::Add(args) => self
                .tracker
                .create_milestone_result(&args.into())
                .await?
                .to_string(),
            MilestoneCommands::Update(args) => self
                .tracker
                .update_milestone_result(&args.into())
                .await?
                .to_string(),
            MilestoneCommands::List(args) => {
                let params: Id = args.into();
                self.tracker.list_milestones_view(&params).await?.to_string()
            }
        };
        self.renderer.render(&output)
    }

    pub async fn handle_dependency_command(&self, command: DependencyCommands) -> Result<()> {
        let status = match command {
            DependencyCommands::Add(args) => {
                self.tracker.add_dependency_status(&args.into()).await?
            }
            DependencyCommands::Remove(args) => {
                self.tracker.remove_dependency_status(&args.into()).await?
            }
        };
        self.renderer.render(&status.to_string())
    }

    /// Health board for every project that is not archived.
    pub async fn health(&self, at: Option<Timestamp>) -> Result<()> {
        let now = at.unwrap_or_else(Timestamp::now);
        let (snapshot, report) = self
            .tracker
            .evaluate_snapshot(now)
            .await
            .context("Failed to evaluate portfolio")?;

        let visible: Vec<_> = snapshot
            .projects
            .iter()
            .filter(|p| p.status != ProjectStatus::Archived)
            .cloned()
            .collect();
        let board = HealthBoard::new(&visible, &report);
        self.renderer.render(&board.to_string())
    }

    pub async fn roadmap(&self, query: RoadmapQuery) -> Result<()> {
        let plans = self.tracker.roadmaps(&query).await?;
        if plans.is_empty() {
            return self.renderer.render("No projects found.\n");
        }

        let output = plans
            .iter()
            .map(|plan| RoadmapView::new(&plan.project, &plan.milestones, &plan.roadmap).to_string())
            .collect::<Vec<_>>()
            .join("\n");
        self.renderer.render(&output)
    }

    /// Prints the full report as pretty JSON, bypassing the renderer.
    pub async fn report(&self, at: Option<Timestamp>) -> Result<()> {
        let now = at.unwrap_or_else(Timestamp::now);
        let report = self
            .tracker
            .evaluate(now)
            .await
            .context("Failed to evaluate portfolio")?;
        let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        println!("{json}");
        Ok(())
    }

    pub async fn import(&self, args: ImportArgs) -> Result<()> {
        let content = fs::read_to_string(&args.file)
            .with_context(|| format!("Failed to read {}", args.file.display()))?;
        let snapshot: Snapshot = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {}", args.file.display()))?;
        debug!(
            "Parsed snapshot with {} projects from {}",
            snapshot.projects.len(),
            args.file.display()
        );

        let message = format!(
            "Imported {} projects, {} milestones and {} dependencies",
            snapshot.projects.len(),
            snapshot.milestones.len(),
            snapshot.dependencies.len()
        );
        self.tracker.import_snapshot(snapshot).await?;
        self.renderer
            .render(&OperationStatus::success(message).to_string())
    }
}

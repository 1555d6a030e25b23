//! Subcommands and their argument wrappers.
//!
//! Each wrapper adds clap derives on top of a core parameter type and
//! converts into it with `From`, so `vantage-core` stays free of CLI
//! framework concerns.
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Tracker
//! ```

use std::{fmt, path::PathBuf};

use clap::{Args, Subcommand, ValueEnum};
use vantage_core::params::{
    AddDependency, CreateMilestone, CreateProject, Id, RoadmapQuery, SetProjectStatus,
    UpdateMilestone,
};

/// Create a new project
#[derive(Args)]
pub struct CreateProjectArgs {
    /// Name of the project
    pub name: String,
    #[arg(short, long, help = "Priority of the project (default: medium)")]
    pub priority: Option<PriorityArg>,
}

impl From<CreateProjectArgs> for CreateProject {
    fn from(val: CreateProjectArgs) -> Self {
        CreateProject {
            name: val.name,
            priority: val.priority.map(|p| p.to_string()),
        }
    }
}

/// List projects
#[derive(Args)]
pub struct ListProjectsArgs {
    #[arg(short, long, help = "Include archived projects")]
    pub all: bool,
}

/// Change a project's lifecycle state
#[derive(Args)]
pub struct SetProjectStatusArgs {
    #[arg(help = "Unique identifier of the project")]
    pub id: u64,
    #[arg(help = "New status for the project")]
    pub status: ProjectStatusArg,
}

impl From<SetProjectStatusArgs> for SetProjectStatus {
    fn from(val: SetProjectStatusArgs) -> Self {
        SetProjectStatus {
            id: val.id,
            status: val.status.to_string(),
        }
    }
}

/// Project management subcommands
#[derive(Subcommand)]
pub enum ProjectCommands {
    /// Create a new project
    #[command(aliases = ["a", "create"])]
    Add(CreateProjectArgs),
    /// List projects
    #[command(alias = "ls")]
    List(ListProjectsArgs),
    /// Change a project's status
    Status(SetProjectStatusArgs),
}

/// Add a milestone to a project
#[derive(Args)]
pub struct CreateMilestoneArgs {
    #[arg(help = "Unique identifier of the project to add this milestone to")]
    pub project_id: u64,
    /// Title of the milestone
    pub title: String,
    #[arg(short, long, help = "Target date as YYYY-MM-DD")]
    pub target_date: Option<String>,
    #[arg(
        short,
        long,
        allow_negative_numbers = true,
        help = "Position among the project's milestones (default: last)"
    )]
    pub sort_order: Option<i64>,
}

impl From<CreateMilestoneArgs> for CreateMilestone {
    fn from(val: CreateMilestoneArgs) -> Self {
        CreateMilestone {
            project_id: val.project_id,
            title: val.title,
            target_date: val.target_date,
            sort_order: val.sort_order,
        }
    }
}

/// Update a milestone's progress or details
///
/// Marking a milestone completed without `--percent` sets it to 100%.
#[derive(Args)]
pub struct UpdateMilestoneArgs {
    #[arg(help = "Unique identifier of the milestone to update")]
    pub id: u64,
    #[arg(short = 'T', long, help = "Updated title")]
    pub title: Option<String>,
    #[arg(short, long, help = "New status for the milestone")]
    pub status: Option<MilestoneStatusArg>,
    #[arg(short, long, help = "Completion percentage, 0-100")]
    pub percent: Option<u8>,
    #[arg(short, long, help = "Target date as YYYY-MM-DD")]
    pub target_date: Option<String>,
    #[arg(long, conflicts_with = "target_date", help = "Remove the target date")]
    pub clear_target_date: bool,
    #[arg(long, allow_negative_numbers = true, help = "New sort position")]
    pub sort_order: Option<i64>,
}

impl From<UpdateMilestoneArgs> for UpdateMilestone {
    fn from(val: UpdateMilestoneArgs) -> Self {
        UpdateMilestone {
            id: val.id,
            title: val.title,
            status: val.status.map(|s| s.to_string()),
            percent_complete: val.percent,
            target_date: val.target_date,
            clear_target_date: val.clear_target_date,
            sort_order: val.sort_order,
        }
    }
}

/// List the milestones of a project
#[derive(Args)]
pub struct ListMilestonesArgs {
    #[arg(help = "Unique identifier of the project")]
    pub project_id: u64,
}

impl From<ListMilestonesArgs> for Id {
    fn from(val: ListMilestonesArgs) -> Self {
        Id { id: val.project_id }
    }
}

/// Milestone management subcommands
#[derive(Subcommand)]
pub enum MilestoneCommands {
    /// Add a milestone to a project
    #[command(aliases = ["a", "create"])]
    Add(CreateMilestoneArgs),
    /// Update a milestone
    #[command(alias = "u")]
    Update(UpdateMilestoneArgs),
    /// List a project's milestones
    #[command(alias = "ls")]
    List(ListMilestonesArgs),
}

/// A dependency edge between two milestones
#[derive(Args)]
pub struct DependencyArgs {
    #[arg(help = "The milestone that has to wait")]
    pub milestone_id: u64,
    #[arg(help = "The milestone that has to complete first")]
    pub depends_on: u64,
}

impl From<DependencyArgs> for AddDependency {
    fn from(val: DependencyArgs) -> Self {
        AddDependency {
            milestone_id: val.milestone_id,
            depends_on: val.depends_on,
        }
    }
}

/// Dependency management subcommands
#[derive(Subcommand)]
pub enum DependencyCommands {
    /// Make a milestone wait for another
    #[command(alias = "a")]
    Add(DependencyArgs),
    /// Remove a dependency
    #[command(aliases = ["rm", "r"])]
    Remove(DependencyArgs),
}

/// Show roadmaps
#[derive(Args)]
pub struct RoadmapArgs {
    #[arg(help = "Only show this project (default: all projects)")]
    pub project_id: Option<u64>,
}

impl From<RoadmapArgs> for RoadmapQuery {
    fn from(val: RoadmapArgs) -> Self {
        RoadmapQuery {
            project_id: val.project_id,
        }
    }
}

/// Import a JSON snapshot
#[derive(Args)]
pub struct ImportArgs {
    #[arg(help = "Path to a JSON file with projects, milestones and dependencies")]
    pub file: PathBuf,
}

/// Project status values accepted on the command line.
#[derive(Clone, Copy, ValueEnum)]
pub enum ProjectStatusArg {
    Active,
    Paused,
    Completed,
    Archived,
}

impl fmt::Display for ProjectStatusArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ProjectStatusArg::Active => "active",
            ProjectStatusArg::Paused => "paused",
            ProjectStatusArg::Completed => "completed",
            ProjectStatusArg::Archived => "archived",
        };
        write!(f, "{s}")
    }
}

/// Priority values accepted on the command line.
#[derive(Clone, Copy, ValueEnum)]
pub enum PriorityArg {
    High,
    Medium,
    Low,
}

impl fmt::Display for PriorityArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PriorityArg::High => "high",
            PriorityArg::Medium => "medium",
            PriorityArg::Low => "low",
        };
        write!(f, "{s}")
    }
}

/// Milestone status values accepted on the command line.
#[derive(Clone, Copy, ValueEnum)]
pub enum MilestoneStatusArg {
    #[value(aliases = ["todo", "not_started"])]
    NotStarted,
    #[value(aliases = ["wip", "in_progress"])]
    InProgress,
    #[value(alias = "done")]
    Completed,
}

impl fmt::Display for MilestoneStatusArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MilestoneStatusArg::NotStarted => "not_started",
            MilestoneStatusArg::InProgress => "in_progress",
            MilestoneStatusArg::Completed => "completed",
        };
        write!(f, "{s}")
    }
}

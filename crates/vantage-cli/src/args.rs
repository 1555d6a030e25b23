use std::path::PathBuf;

use clap::{Parser, Subcommand};
use jiff::Timestamp;

use crate::commands::{
    DependencyCommands, ImportArgs, MilestoneCommands, ProjectCommands, RoadmapArgs,
};

/// Personal project-tracking dashboard
///
/// Vantage keeps projects, their milestones, and the dependencies between
/// milestones in a local SQLite database. It scores each project's health
/// from progress and recency, and orders milestones into a roadmap that
/// respects their dependencies.
#[derive(Parser)]
#[command(version, about, name = "vantage")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/vantage/vantage.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Path to a JSON engine configuration. Defaults to
    /// $XDG_CONFIG_HOME/vantage/config.json when present
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Vantage CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Manage projects
    #[command(alias = "p")]
    Project {
        #[command(subcommand)]
        command: ProjectCommands,
    },
    /// Manage milestones within projects
    #[command(alias = "m")]
    Milestone {
        #[command(subcommand)]
        command: MilestoneCommands,
    },
    /// Manage dependencies between milestones
    #[command(alias = "d")]
    Dep {
        #[command(subcommand)]
        command: DependencyCommands,
    },
    /// Show the portfolio health board (default)
    #[command(alias = "h")]
    Health {
        /// Reference time for scoring, RFC 3339. Defaults to now
        #[arg(long)]
        at: Option<Timestamp>,
    },
    /// Show roadmaps ordered by dependencies
    #[command(alias = "r")]
    Roadmap(RoadmapArgs),
    /// Print the full evaluation as JSON
    Report {
        /// Reference time for scoring, RFC 3339. Defaults to now
        #[arg(long)]
        at: Option<Timestamp>,
    },
    /// Replace the database contents with a JSON snapshot
    Import(ImportArgs),
}

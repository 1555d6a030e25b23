//! Vantage CLI Application
//!
//! Command-line interface for the vantage project tracker.

mod args;
mod cli;
mod commands;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use vantage_core::{EngineConfig, TrackerBuilder};
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        config,
        no_color,
        command,
    } = Args::parse();

    let config = match config {
        Some(path) => EngineConfig::load(&path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => EngineConfig::discover().context("Failed to load config")?,
    };

    let tracker = TrackerBuilder::new()
        .with_database_path(database_file)
        .with_config(config)
        .build()
        .await
        .context("Failed to initialize tracker")?;

    let cli = Cli::new(tracker, TerminalRenderer::new(!no_color));

    info!("Vantage started");

    match command {
        Some(Project { command }) => cli.handle_project_command(command).await,
        Some(Milestone { command }) => cli.handle_milestone_command(command).await,
        Some(Dep { command }) => cli.handle_dependency_command(command).await,
        Some(Health { at }) => cli.health(at).await,
        Some(Roadmap(args)) => cli.roadmap(args.into()).await,
        Some(Report { at }) => cli.report(at).await,
        Some(Import(args)) => cli.import(args).await,
        None => cli.health(None).await,
    }
}

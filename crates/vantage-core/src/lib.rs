//! Core library for the Vantage portfolio tracker.
//!
//! The crate has two halves. The engine ([`health`], [`roadmap`], [`engine`])
//! is pure: it takes a [`models::Snapshot`] and a reference time and returns
//! derived results. The tracker ([`db`], [`tracker`]) stores projects,
//! milestones, and dependency edges in SQLite and feeds them to the engine.
//!
//! # Display Architecture
//!
//! - **Domain Models** ([`models`]): Implement [`std::fmt::Display`] for direct
//!   formatting
//! - **Display Wrappers** ([`display`]): Health boards, roadmaps, and
//!   operation outcomes
//! - **Terminal Rendering**: Rich markdown output via the CLI's terminal
//!   renderer
//!
//! # Quick Start
//!
//! ```rust
//! use jiff::{Timestamp, civil::date};
//! use vantage_core::{
//!     Engine,
//!     models::{Milestone, MilestoneDependency, MilestoneStatus, Priority, Project, ProjectStatus, Snapshot},
//! };
//!
//! let snapshot = Snapshot {
//!     projects: vec![Project {
//!         id: 1,
//!         name: "Website".to_string(),
//!         status: ProjectStatus::Active,
//!         priority: Priority::High,
//!         updated_at: Timestamp::UNIX_EPOCH,
//!     }],
//!     milestones: vec![
//!         Milestone {
//!             id: 1,
//!             project_id: 1,
//!             title: "Design".to_string(),
//!             status: MilestoneStatus::Completed,
//!             percent_complete: 100,
//!             target_date: Some(date(2024, 1, 10)),
//!             sort_order: 0,
//!         },
//!         Milestone {
//!             id: 2,
//!             project_id: 1,
//!             title: "Launch".to_string(),
//!             status: MilestoneStatus::NotStarted,
//!             percent_complete: 0,
//!             target_date: Some(date(2024, 2, 1)),
//!             sort_order: 1,
//!         },
//!     ],
//!     dependencies: vec![MilestoneDependency::new(2, 1)],
//! };
//!
//! let report = Engine::default().evaluate(&snapshot, Timestamp::UNIX_EPOCH)?;
//! assert_eq!(report.health[&1].score, 75);
//! assert_eq!(report.roadmaps[0].schedule[1].milestone_id, 2);
//! # Ok::<(), vantage_core::VantageError>(())
//! ```

pub mod config;
pub mod db;
pub mod display;
pub mod engine;
pub mod error;
pub mod health;
pub mod models;
pub mod params;
pub mod roadmap;
pub mod tracker;

// Re-export commonly used types
pub use config::{EngineConfig, HealthConfig};
pub use db::Database;
pub use display::{
    CreateResult, HealthBoard, Milestones, OperationStatus, Projects, RoadmapView, UpdateResult,
};
pub use engine::{Engine, PortfolioReport};
pub use error::{Result, VantageError};
pub use health::{HealthResult, HealthScorer, PortfolioAggregator, PortfolioSummary};
pub use models::{
    ActivityLabel, DataQualityWarning, Milestone, MilestoneDependency, MilestoneStatus, Priority,
    Project, ProjectStatus, Snapshot,
};
pub use params::{
    AddDependency, CreateMilestone, CreateProject, Id, RoadmapQuery, SetProjectStatus,
    UpdateMilestone,
};
pub use roadmap::{
    DependencyGraph, DependencyGraphBuilder, ProjectRoadmap, RoadmapError, ScheduleResult,
    TopologicalScheduler,
};
pub use tracker::{ProjectPlan, Tracker, TrackerBuilder};

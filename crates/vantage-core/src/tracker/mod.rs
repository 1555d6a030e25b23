//! Async facade over the store and the engine.
//!
//! A [`Tracker`] owns a database path and an [`Engine`]. Every operation opens
//! the database on a blocking task, so callers on a Tokio runtime never block
//! on SQLite.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Handlers     │    │   Operations    │    │    Database     │
//! │ (display types) │───▶│ (project_ops,   │───▶│   (via db/)     │
//! │                 │    │  milestone_ops) │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!                              │
//!                              ▼
//!                        ┌─────────────────┐
//!                        │   Evaluation    │
//!                        │ (engine over a  │
//!                        │  loaded store)  │
//!                        └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,no_run
//! use vantage_core::{TrackerBuilder, params::{CreateMilestone, CreateProject}};
//! use jiff::Timestamp;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let tracker = TrackerBuilder::new()
//!     .with_database_path(Some("/tmp/vantage.db"))
//!     .build()
//!     .await?;
//!
//! let project = tracker
//!     .create_project(&CreateProject {
//!         name: "Website".to_string(),
//!         priority: Some("high".to_string()),
//!     })
//!     .await?;
//! tracker
//!     .create_milestone(&CreateMilestone {
//!         project_id: project.id,
//!         title: "Launch".to_string(),
//!         target_date: Some("2025-01-31".to_string()),
//!         sort_order: None,
//!     })
//!     .await?;
//!
//! let report = tracker.evaluate(Timestamp::now()).await?;
//! println!("average health: {:.1}", report.portfolio.average_health);
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

use tokio::task;

use crate::{
    db::Database,
    engine::Engine,
    error::{Result, VantageError},
};

pub mod builder;
pub mod evaluation;
pub mod handlers;
pub mod milestone_ops;
pub mod project_ops;


pub use builder::TrackerBuilder;
pub use evaluation::ProjectPlan;

/// Main entry point for reading and changing tracked projects.
pub struct Tracker {
    pub(crate) db_path: PathBuf,
    pub(crate) engine: Engine,
}

impl Tracker {
    pub(crate) fn new(db_path: PathBuf, engine: Engine) -> Self {
        Self { db_path, engine }
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Runs `f` against a freshly opened database on a blocking task.
    pub(crate) async fn with_database<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Database) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let db_path = self.db_path.clone();
        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            f(&mut db)
        })
        .await
        .map_err(VantageError::join)?
    }
}

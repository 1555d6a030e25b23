//! Data models for projects, milestones, and dependency edges.
//!
//! These are the plain records the store hands to the engine. The engine
//! treats them as read-only input; every derived value lives in the result
//! types of [`crate::health`] and [`crate::roadmap`]. Display implementations
//! for these models are located in [`crate::display::models`].
//!
//! Status-like fields are closed enums so that a bad value is rejected when a
//! row or JSON document is decoded, never silently mis-scored.
//!
//! # Examples
//!
//! ```rust
//! use vantage_core::models::{Milestone, MilestoneStatus, Project, ProjectStatus, Priority};
//! use jiff::Timestamp;
//!
//! let project = Project {
//!     id: 1,
//!     name: "Garden shed".to_string(),
//!     status: ProjectStatus::Active,
//!     priority: Priority::High,
//!     updated_at: Timestamp::UNIX_EPOCH,
//! };
//! assert!(project.is_active());
//!
//! let status: MilestoneStatus = "in_progress".parse().unwrap();
//! assert_eq!(status, MilestoneStatus::InProgress);
//! ```

pub mod milestone;
pub mod project;
pub mod snapshot;
pub mod status;
pub mod warning;

#[cfg(test)]
mod tests;

pub use milestone::{Milestone, MilestoneDependency, MilestoneId};
pub use project::{Project, ProjectId};
pub use snapshot::{Partition, ProjectRecords, Snapshot};
pub use status::{ActivityLabel, MilestoneStatus, Priority, ProjectStatus};
pub use warning::DataQualityWarning;

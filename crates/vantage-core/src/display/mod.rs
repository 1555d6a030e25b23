//! Markdown formatting for records, engine results, and operation outcomes.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! views that need more than one value, such as a health board that pairs
//! scores with project names, are small wrapper structs holding references.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │ Records/Results │    │ Wrapper Views   │    │    Markdown     │
//! │ (Project, ...)  │───▶│ (HealthBoard,   │───▶│   (Terminal)    │
//! │                 │    │  RoadmapView)   │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: Collection wrapper types (Projects, Milestones)
//! - [`health`]: Health board and portfolio summary
//! - [`roadmap`]: Ordered roadmap with blocked items and faults
//! - [`results`]: Create/update outcomes
//! - [`status`]: Confirmation messages (OperationStatus)
//! - [`datetime`]: Timestamp and date formatting
//! - [`models`]: Display implementations for domain models
//!
//! ## Usage
//!
//! ```rust
//! use vantage_core::display::OperationStatus;
//!
//! let done = OperationStatus::success("Dependency added".to_string());
//! assert!(format!("{done}").contains("Success:"));
//! ```

pub mod collections;
pub mod datetime;
pub mod health;
pub mod models;
pub mod results;
pub mod roadmap;
pub mod status;

pub use collections::{Milestones, Projects};
pub use datetime::{LocalDateTime, TargetDate};
pub use health::HealthBoard;
pub use results::{CreateResult, UpdateResult};
pub use roadmap::RoadmapView;
pub use status::OperationStatus;

//! Closed enumerations for project, milestone, and activity states.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Lifecycle state of a tracked project.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    /// Project is being worked on and counts toward portfolio health
    #[default]
    Active,

    /// Work is on hold
    Paused,

    /// Project reached its goal
    Completed,

    /// Project is hidden from normal views
    Archived,
}

impl FromStr for ProjectStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(ProjectStatus::Active),
            "paused" => Ok(ProjectStatus::Paused),
            "completed" => Ok(ProjectStatus::Completed),
            "archived" => Ok(ProjectStatus::Archived),
            _ => Err(format!("Invalid project status: {s}")),
        }
    }
}

impl ProjectStatus {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Active => "active",
            ProjectStatus::Paused => "paused",
            ProjectStatus::Completed => "completed",
            ProjectStatus::Archived => "archived",
        }
    }
}

/// Relative importance of a project.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "high" => Ok(Priority::High),
            "medium" => Ok(Priority::Medium),
            "low" => Ok(Priority::Low),
            _ => Err(format!("Invalid priority: {s}")),
        }
    }
}

impl Priority {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

/// Progress state of a single milestone.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum MilestoneStatus {
    /// Work has not begun
    #[default]
    NotStarted,

    /// Milestone is being worked on
    InProgress,

    /// Milestone has been delivered
    Completed,
}

impl FromStr for MilestoneStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "not_started" | "notstarted" => Ok(MilestoneStatus::NotStarted),
            "in_progress" | "inprogress" => Ok(MilestoneStatus::InProgress),
            "completed" => Ok(MilestoneStatus::Completed),
            _ => Err(format!("Invalid milestone status: {s}")),
        }
    }
}

impl MilestoneStatus {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            MilestoneStatus::NotStarted => "not_started",
            MilestoneStatus::InProgress => "in_progress",
            MilestoneStatus::Completed => "completed",
        }
    }

    /// Get status with consistent icon formatting for display.
    ///
    /// ```rust
    /// use vantage_core::models::MilestoneStatus;
    ///
    /// assert_eq!(MilestoneStatus::Completed.with_icon(), "✓ Completed");
    /// assert_eq!(MilestoneStatus::InProgress.with_icon(), "➤ In Progress");
    /// assert_eq!(MilestoneStatus::NotStarted.with_icon(), "○ Not Started");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            MilestoneStatus::Completed => "✓ Completed",
            MilestoneStatus::InProgress => "➤ In Progress",
            MilestoneStatus::NotStarted => "○ Not Started",
        }
    }
}

/// Staleness classification derived purely from days since the last update.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum ActivityLabel {
    /// Updated within the last week
    Hot,
    /// Updated within the last month
    Warm,
    /// Updated within the last quarter
    Cold,
    /// Untouched for longer than a quarter
    Frozen,
}

impl ActivityLabel {
    /// All labels, hottest first.
    pub const ALL: [ActivityLabel; 4] = [
        ActivityLabel::Hot,
        ActivityLabel::Warm,
        ActivityLabel::Cold,
        ActivityLabel::Frozen,
    ];

    /// Classify a staleness in whole days.
    pub fn from_days(days_since_update: i64) -> Self {
        match days_since_update {
            d if d <= 7 => ActivityLabel::Hot,
            d if d <= 30 => ActivityLabel::Warm,
            d if d <= 90 => ActivityLabel::Cold,
            _ => ActivityLabel::Frozen,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLabel::Hot => "hot",
            ActivityLabel::Warm => "warm",
            ActivityLabel::Cold => "cold",
            ActivityLabel::Frozen => "frozen",
        }
    }
}

impl FromStr for ActivityLabel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hot" => Ok(ActivityLabel::Hot),
            "warm" => Ok(ActivityLabel::Warm),
            "cold" => Ok(ActivityLabel::Cold),
            "frozen" => Ok(ActivityLabel::Frozen),
            _ => Err(format!("Invalid activity label: {s}")),
        }
    }
}

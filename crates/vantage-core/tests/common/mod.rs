#![allow(dead_code)]

use jiff::{Timestamp, civil::Date};
use vantage_core::models::{
    Milestone, MilestoneDependency, MilestoneStatus, Priority, Project, ProjectStatus, Snapshot,
};

/// 2024-03-01 12:00:00 UTC
pub const NOW: i64 = 1_709_294_400;

pub fn now() -> Timestamp {
    Timestamp::from_second(NOW).expect("valid timestamp")
}

pub fn days_ago(days: i64) -> Timestamp {
    Timestamp::from_second(NOW - days * 86_400).expect("valid timestamp")
}

pub fn project(id: u64, name: &str, status: ProjectStatus, updated_days_ago: i64) -> Project {
    Project {
        id,
        name: name.to_string(),
        status,
        priority: Priority::Medium,
        updated_at: days_ago(updated_days_ago),
    }
}

pub fn milestone(
    id: u64,
    project_id: u64,
    status: MilestoneStatus,
    percent_complete: u8,
    target_date: Option<Date>,
) -> Milestone {
    Milestone {
        id,
        project_id,
        title: format!("Milestone {id}"),
        status,
        percent_complete,
        target_date,
        sort_order: 0,
    }
}

pub fn edges(pairs: &[(u64, u64)]) -> Vec<MilestoneDependency> {
    pairs
        .iter()
        .map(|&(from, to)| MilestoneDependency::new(from, to))
        .collect()
}

/// Three projects: a healthy one, a stale one with a dangling edge, and a
/// paused one whose roadmap has a cycle.
pub fn portfolio() -> Snapshot {
    use jiff::civil::date;

    Snapshot {
        projects: vec![
            project(1, "Healthy", ProjectStatus::Active, 2),
            project(2, "Stale", ProjectStatus::Active, 45),
            project(3, "Tangled", ProjectStatus::Paused, 1),
        ],
        milestones: vec![
            milestone(10, 1, MilestoneStatus::InProgress, 50, Some(date(2024, 3, 10))),
            milestone(11, 1, MilestoneStatus::Completed, 100, Some(date(2024, 2, 1))),
            milestone(20, 2, MilestoneStatus::NotStarted, 0, None),
            milestone(21, 2, MilestoneStatus::InProgress, 30, Some(date(2024, 4, 1))),
            milestone(30, 3, MilestoneStatus::NotStarted, 0, None),
            milestone(31, 3, MilestoneStatus::NotStarted, 0, None),
            milestone(32, 3, MilestoneStatus::NotStarted, 0, None),
        ],
        dependencies: edges(&[
            (10, 11),
            (20, 21),
            (20, 404),
            (30, 31),
            (31, 32),
            (32, 30),
        ]),
    }
}

mod common;

use std::sync::Arc;

use common::{days_ago, edges, milestone, now, portfolio, project};
use jiff::civil::date;
use vantage_core::{
    Engine, HealthScorer,
    models::{ActivityLabel, DataQualityWarning, MilestoneStatus, ProjectStatus, Snapshot},
    roadmap::{
        DependencyGraphBuilder, RoadmapError, RoadmapPipeline, TopologicalScheduler,
        detect_cycles,
    },
};

#[test]
fn test_reference_health_scenario() {
    let p = project(1, "Ref", ProjectStatus::Active, 2);
    let milestones = [
        milestone(1, 1, MilestoneStatus::InProgress, 50, None),
        milestone(2, 1, MilestoneStatus::Completed, 100, None),
    ];
    let result = HealthScorer::default().score(&p, &milestones, now());

    assert_eq!(result.days_since_update, 2);
    assert_eq!(result.progress, 75.0);
    assert_eq!(result.label, ActivityLabel::Hot);
    assert!(!result.needs_attention);
    assert!(result.score >= 40);
}

#[test]
fn test_score_never_rises_with_staleness() {
    let scorer = HealthScorer::default();
    let milestones = [milestone(1, 1, MilestoneStatus::InProgress, 60, None)];
    let mut previous = u8::MAX;
    for days in 0..200 {
        let mut p = project(1, "Decay", ProjectStatus::Active, 0);
        p.updated_at = days_ago(days);
        let score = scorer.score(&p, &milestones, now()).score;
        assert!(score <= previous, "score rose at day {days}");
        previous = score;
    }
}

#[test]
fn test_score_never_falls_with_progress() {
    let scorer = HealthScorer::default();
    let p = project(1, "Progress", ProjectStatus::Active, 20);
    let mut previous = 0;
    for percent in 0..=100u8 {
        let milestones = [milestone(1, 1, MilestoneStatus::InProgress, percent, None)];
        let score = scorer.score(&p, &milestones, now()).score;
        assert!(score >= previous, "score fell at {percent}%");
        previous = score;
    }
}

#[test]
fn test_attention_thresholds() {
    let scorer = HealthScorer::default();

    let done = [milestone(1, 1, MilestoneStatus::Completed, 100, None)];
    let stale = project(1, "Stale", ProjectStatus::Active, 8);
    let result = scorer.score(&stale, &done, now());
    assert!(result.score >= 40);
    assert!(result.needs_attention);

    let fresh = project(2, "Fresh", ProjectStatus::Active, 0);
    let empty = [milestone(2, 2, MilestoneStatus::NotStarted, 0, None)];
    let result = scorer.score(&fresh, &empty, now());
    assert_eq!(result.days_since_update, 0);
    assert!(result.score >= 40);
    assert!(!result.needs_attention);
}

#[test]
fn test_three_cycle_reports_every_member() {
    let milestones: Vec<_> = (1..=3)
        .map(|id| milestone(id, 1, MilestoneStatus::NotStarted, 0, None))
        .collect();
    let graph = DependencyGraphBuilder::new()
        .build(&milestones, &edges(&[(1, 2), (2, 3), (3, 1)]))
        .unwrap();

    match detect_cycles(&graph) {
        Err(RoadmapError::CycleDetected { members, .. }) => assert_eq!(members, vec![1, 2, 3]),
        other => panic!("expected a cycle, got {other:?}"),
    }
}

#[test]
fn test_schedule_respects_every_edge() {
    let milestones: Vec<_> = (1..=8)
        .map(|id| {
            let mut m = milestone(id, 1, MilestoneStatus::NotStarted, 0, None);
            m.sort_order = (8 - id) as i64;
            m
        })
        .collect();
    let pairs = [(2, 1), (3, 1), (4, 2), (4, 3), (5, 4), (6, 5), (7, 3), (8, 7), (8, 6)];
    let graph = DependencyGraphBuilder::new()
        .build(&milestones, &edges(&pairs))
        .unwrap();
    let schedule = TopologicalScheduler.schedule(&graph, &milestones).unwrap();

    let position = |id: u64| schedule.iter().position(|r| r.milestone_id == id).unwrap();
    for (from, to) in pairs {
        assert!(position(to) < position(from), "{to} must precede {from}");
    }
    for (i, entry) in schedule.iter().enumerate() {
        assert_eq!(entry.order_index, i);
    }
}

#[test]
fn test_completed_dependency_does_not_block() {
    let milestones = [
        milestone(1, 1, MilestoneStatus::Completed, 100, Some(date(2024, 1, 1))),
        milestone(2, 1, MilestoneStatus::NotStarted, 0, Some(date(2024, 1, 10))),
    ];
    let roadmap = RoadmapPipeline.plan(1, &milestones, &edges(&[(2, 1)]));

    let order: Vec<_> = roadmap.schedule.iter().map(|r| r.milestone_id).collect();
    assert_eq!(order, vec![1, 2]);
    assert!(!roadmap.schedule[1].blocked);
    assert_eq!(roadmap.schedule[1].earliest_feasible, Some(date(2024, 1, 10)));
}

#[test]
fn test_in_progress_dependency_blocks() {
    let milestones = [
        milestone(3, 1, MilestoneStatus::NotStarted, 0, None),
        milestone(4, 1, MilestoneStatus::InProgress, 40, None),
    ];
    let roadmap = RoadmapPipeline.plan(1, &milestones, &edges(&[(3, 4)]));
    let m3 = roadmap
        .schedule
        .iter()
        .find(|r| r.milestone_id == 3)
        .unwrap();
    assert!(m3.blocked);
    assert_eq!(m3.blocked_by, vec![4]);
    assert_eq!(m3.earliest_feasible, None);
}

#[test]
fn test_dangling_edge_is_reported_not_fatal() {
    let milestones = [
        milestone(1, 1, MilestoneStatus::NotStarted, 0, None),
        milestone(2, 1, MilestoneStatus::NotStarted, 0, None),
    ];
    let roadmap = RoadmapPipeline.plan(1, &milestones, &edges(&[(2, 1), (2, 77)]));

    assert!(roadmap.is_scheduled());
    assert_eq!(roadmap.schedule.len(), 2);
    assert_eq!(
        roadmap.warnings,
        vec![DataQualityWarning::DanglingReference {
            milestone_id: 2,
            depends_on: 77,
            missing: 77
        }]
    );
}

#[test]
fn test_cycle_in_one_project_leaves_others_intact() {
    let report = Engine::default().evaluate(&portfolio(), now()).unwrap();

    assert_eq!(report.health.len(), 3);
    assert!(report.roadmap(1).unwrap().is_scheduled());
    assert!(report.roadmap(2).unwrap().is_scheduled());
    assert_eq!(report.roadmap(2).unwrap().warnings.len(), 1);

    let tangled = report.roadmap(3).unwrap();
    assert!(matches!(
        tangled.error,
        Some(RoadmapError::CycleDetected { ref members, .. }) if members == &vec![30, 31, 32]
    ));
    assert!(report.health.contains_key(&3));
}

#[test]
fn test_portfolio_filters_to_active() {
    let report = Engine::default().evaluate(&portfolio(), now()).unwrap();

    assert_eq!(report.portfolio.active_projects, 2);
    let expected = (f64::from(report.health[&1].score) + f64::from(report.health[&2].score)) / 2.0;
    assert_eq!(report.portfolio.average_health, expected);
    assert_eq!(report.portfolio.attention, vec!["Stale".to_string()]);
}

#[test]
fn test_empty_portfolio_average_is_zero() {
    let report = Engine::default()
        .evaluate(&Snapshot::default(), now())
        .unwrap();
    assert_eq!(report.portfolio.average_health, 0.0);
    assert!(report.portfolio.attention.is_empty());
    assert!(report.roadmaps.is_empty());
}

#[test]
fn test_repeated_runs_are_byte_identical() {
    let engine = Engine::default();
    let snapshot = portfolio();

    let first = serde_json::to_string(&engine.evaluate(&snapshot, now()).unwrap()).unwrap();
    let second = serde_json::to_string(&engine.evaluate(&snapshot, now()).unwrap()).unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_concurrent_evaluation_matches_json() {
    let engine = Engine::default();
    let snapshot = Arc::new(portfolio());

    let sequential = engine.evaluate(&snapshot, now()).unwrap();
    let concurrent = engine
        .evaluate_concurrent(Arc::clone(&snapshot), now())
        .await
        .unwrap();
    assert_eq!(
        serde_json::to_string(&sequential).unwrap(),
        serde_json::to_string(&concurrent).unwrap()
    );
}

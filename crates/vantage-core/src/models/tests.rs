#[cfg(test)]
mod model_tests {
    use jiff::{Timestamp, civil::date};

    use crate::{
        error::VantageError,
        models::{
            ActivityLabel, DataQualityWarning, Milestone, MilestoneDependency, MilestoneStatus,
            Priority, Project, ProjectStatus, Snapshot,
        },
    };

    fn create_test_project(id: u64) -> Project {
        Project {
            id,
            name: format!("Project {id}"),
            status: ProjectStatus::Active,
            priority: Priority::Medium,
            updated_at: Timestamp::from_second(1640995200).unwrap(), // 2022-01-01 00:00:00 UTC
        }
    }

    fn create_test_milestone(id: u64, project_id: u64) -> Milestone {
        Milestone {
            id,
            project_id,
            title: format!("Milestone {id}"),
            status: MilestoneStatus::NotStarted,
            percent_complete: 0,
            target_date: Some(date(2022, 3, 1)),
            sort_order: id as i64,
        }
    }

    #[test]
    fn test_status_parsing_accepts_aliases() {
        assert_eq!(
            "In_Progress".parse::<MilestoneStatus>().unwrap(),
            MilestoneStatus::InProgress
        );
        assert_eq!(
            "notstarted".parse::<MilestoneStatus>().unwrap(),
            MilestoneStatus::NotStarted
        );
        assert_eq!("ARCHIVED".parse::<ProjectStatus>().unwrap(), ProjectStatus::Archived);
        assert_eq!("high".parse::<Priority>().unwrap(), Priority::High);

        let err = "done".parse::<MilestoneStatus>().unwrap_err();
        assert!(err.contains("done"));
    }

    #[test]
    fn test_activity_label_boundaries() {
        assert_eq!(ActivityLabel::from_days(0), ActivityLabel::Hot);
        assert_eq!(ActivityLabel::from_days(7), ActivityLabel::Hot);
        assert_eq!(ActivityLabel::from_days(8), ActivityLabel::Warm);
        assert_eq!(ActivityLabel::from_days(30), ActivityLabel::Warm);
        assert_eq!(ActivityLabel::from_days(31), ActivityLabel::Cold);
        assert_eq!(ActivityLabel::from_days(90), ActivityLabel::Cold);
        assert_eq!(ActivityLabel::from_days(91), ActivityLabel::Frozen);
    }

    #[test]
    fn test_milestone_json_optional_fields() {
        let milestone: Milestone = serde_json::from_str(
            r#"{"id": 5, "project_id": 2, "status": "in_progress", "percent_complete": 30, "sort_order": 1}"#,
        )
        .unwrap();
        assert_eq!(milestone.status, MilestoneStatus::InProgress);
        assert_eq!(milestone.title, "");
        assert_eq!(milestone.target_date, None);

        let json = serde_json::to_string(&milestone).unwrap();
        assert!(!json.contains("target_date"));
    }

    #[test]
    fn test_milestone_json_requires_scored_fields() {
        for json in [
            r#"{"id": 5, "project_id": 2, "percent_complete": 30, "sort_order": 1}"#,
            r#"{"id": 5, "project_id": 2, "status": "in_progress", "sort_order": 1}"#,
            r#"{"id": 5, "project_id": 2, "status": "in_progress", "percent_complete": 30}"#,
        ] {
            assert!(serde_json::from_str::<Milestone>(json).is_err(), "{json}");
        }
        let project = serde_json::from_str::<Project>(
            r#"{"id": 1, "name": "x", "updated_at": "2024-01-01T00:00:00Z"}"#,
        );
        assert!(project.is_err());
    }

    #[test]
    fn test_activity_label_text_round_trips() {
        for label in ActivityLabel::ALL {
            assert_eq!(label.as_str().parse::<ActivityLabel>(), Ok(label));
            assert_eq!(
                serde_json::to_string(&label).unwrap(),
                format!("\"{}\"", label.as_str())
            );
        }
        assert_eq!("COLD".parse::<ActivityLabel>(), Ok(ActivityLabel::Cold));
        assert!("tepid".parse::<ActivityLabel>().is_err());
    }

    #[test]
    fn test_project_json_rejects_unknown_status() {
        let result = serde_json::from_str::<Project>(
            r#"{"id": 1, "name": "x", "status": "dormant", "updated_at": "2024-01-01T00:00:00Z"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_rejects_bad_percent() {
        let mut milestone = create_test_milestone(1, 1);
        milestone.percent_complete = 150;
        let snapshot = Snapshot {
            projects: vec![create_test_project(1)],
            milestones: vec![milestone],
            dependencies: vec![],
        };

        let err = snapshot.validate().unwrap_err();
        assert!(matches!(
            err,
            VantageError::InvalidInput { ref field, .. } if field == "percent_complete"
        ));
    }

    #[test]
    fn test_validate_rejects_duplicate_ids() {
        let snapshot = Snapshot {
            projects: vec![create_test_project(1), create_test_project(1)],
            ..Snapshot::default()
        };
        assert!(snapshot.validate().is_err());

        let snapshot = Snapshot {
            projects: vec![create_test_project(1)],
            milestones: vec![create_test_milestone(3, 1), create_test_milestone(3, 1)],
            dependencies: vec![],
        };
        assert!(snapshot.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_blank_name() {
        let mut project = create_test_project(1);
        project.name = "   ".to_string();
        let snapshot = Snapshot {
            projects: vec![project],
            ..Snapshot::default()
        };
        assert!(snapshot.validate().is_err());
    }

    #[test]
    fn test_partition_groups_by_owner() {
        let snapshot = Snapshot {
            projects: vec![create_test_project(1), create_test_project(2)],
            milestones: vec![
                create_test_milestone(10, 1),
                create_test_milestone(11, 1),
                create_test_milestone(20, 2),
            ],
            dependencies: vec![
                MilestoneDependency::new(11, 10),
                // cross-project edge belongs to the dependent's project
                MilestoneDependency::new(20, 10),
                // dependent unknown, falls back to the dependency's owner
                MilestoneDependency::new(404, 20),
            ],
        };

        let partition = snapshot.partition();
        assert!(partition.warnings.is_empty());
        assert_eq!(partition.groups.len(), 2);
        assert_eq!(partition.groups[0].milestones.len(), 2);
        assert_eq!(
            partition.groups[0].dependencies,
            vec![MilestoneDependency::new(11, 10)]
        );
        assert_eq!(
            partition.groups[1].dependencies,
            vec![
                MilestoneDependency::new(20, 10),
                MilestoneDependency::new(404, 20)
            ]
        );
    }

    #[test]
    fn test_partition_reports_orphans() {
        let snapshot = Snapshot {
            projects: vec![create_test_project(1)],
            milestones: vec![create_test_milestone(10, 1), create_test_milestone(30, 3)],
            dependencies: vec![MilestoneDependency::new(98, 99)],
        };

        let partition = snapshot.partition();
        assert_eq!(
            partition.warnings,
            vec![
                DataQualityWarning::OrphanMilestone {
                    milestone_id: 30,
                    project_id: 3
                },
                DataQualityWarning::OrphanDependency {
                    milestone_id: 98,
                    depends_on: 99
                },
            ]
        );
        assert_eq!(snapshot.milestones_of(3).count(), 1);
    }
}

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Keeps the temp dir alive alongside the database path inside it.
struct TestEnv {
    _dir: TempDir,
    db_path: String,
}

impl TestEnv {
    fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temporary directory");
        let db_path = dir
            .path()
            .join("cli_test.db")
            .to_str()
            .expect("Temp path is not UTF-8")
            .to_string();
        Self { _dir: dir, db_path }
    }

    /// A command with --no-color and the test database preset.
    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("vantage").expect("Failed to find vantage binary");
        cmd.args(["--no-color", "--database-file", &self.db_path]);
        cmd
    }

    fn run(&self, args: &[&str]) -> String {
        let output = self.cmd().args(args).output().expect("Failed to run vantage");
        assert!(
            output.status.success(),
            "vantage {args:?} failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8(output.stdout).expect("stdout is not UTF-8")
    }
}

#[test]
fn test_cli_project_add_and_list() {
    let env = TestEnv::new();

    env.cmd()
        .args(["project", "add", "Website", "--priority", "high"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created project with ID: 1"))
        .stdout(predicate::str::contains("- **Priority**: high"));

    env.cmd()
        .args(["project", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## Website (ID: 1)"));
}

#[test]
fn test_cli_list_empty_projects() {
    let env = TestEnv::new();

    env.cmd()
        .args(["project", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No projects found."));
}

#[test]
fn test_cli_archived_projects_hidden_by_default() {
    let env = TestEnv::new();
    env.run(&["project", "add", "Old thing"]);

    env.cmd()
        .args(["project", "status", "1", "archived"])
        .assert()
        .success()
        .stdout(predicate::str::contains("status: archived"));

    env.cmd()
        .args(["project", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No projects found."));

    env.cmd()
        .args(["project", "list", "--all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Old thing"));
}

#[test]
fn test_cli_milestone_add_update_list() {
    let env = TestEnv::new();
    env.run(&["project", "add", "Website"]);

    env.cmd()
        .args(["milestone", "add", "1", "Design", "-t", "2024-05-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Created milestone with ID: 1 in project 1",
        ))
        .stdout(predicate::str::contains("- **Target**: 2024-05-01"));

    env.cmd()
        .args(["milestone", "update", "1", "-s", "done"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated milestone with ID: 1"))
        .stdout(predicate::str::contains("- progress: 100%"));

    env.run(&["milestone", "add", "1", "Launch"]);
    env.cmd()
        .args(["milestone", "list", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 of 2 completed"))
        .stdout(predicate::str::contains("Launch"));
}

#[test]
fn test_cli_milestone_rejects_bad_input() {
    let env = TestEnv::new();
    env.run(&["project", "add", "Website"]);
    env.run(&["milestone", "add", "1", "Design"]);

    env.cmd()
        .args(["milestone", "add", "1", "Beta", "-t", "next week"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("target_date"));

    env.cmd()
        .args(["milestone", "update", "1", "--percent", "150"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("percent_complete"));

    env.cmd()
        .args(["milestone", "update", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No fields to update"));
}

#[test]
fn test_cli_unknown_project_fails() {
    let env = TestEnv::new();

    env.cmd()
        .args(["milestone", "add", "99", "Orphan"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Project with ID 99 not found"));

    env.cmd()
        .args(["roadmap", "99"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Project with ID 99 not found"));
}

#[test]
fn test_cli_dependency_add_and_remove() {
    let env = TestEnv::new();
    env.run(&["project", "add", "Website"]);
    env.run(&["milestone", "add", "1", "Design"]);
    env.run(&["milestone", "add", "1", "Launch"]);

    env.cmd()
        .args(["dep", "add", "2", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Milestone 2 now depends on 1"));

    env.cmd()
        .args(["dep", "add", "2", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already depends on"));

    env.cmd()
        .args(["dep", "add", "2", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot depend on itself"));

    env.cmd()
        .args(["dep", "remove", "2", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Success: Removed dependency 2 -> 1"));

    env.cmd()
        .args(["dep", "remove", "2", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Error: No dependency 2 -> 1"));
}

#[test]
fn test_cli_roadmap_follows_dependencies() {
    let env = TestEnv::new();
    env.run(&["project", "add", "Website"]);
    env.run(&["milestone", "add", "1", "Launch", "-t", "2024-06-01"]);
    env.run(&["milestone", "add", "1", "Design", "-t", "2024-07-01"]);
    env.run(&["dep", "add", "1", "2"]);

    let output = env.run(&["roadmap", "1"]);
    assert!(output.contains("# Roadmap: Website (ID: 1)"));
    let design = output.find("Design (ID: 2)").expect("Design missing");
    let launch = output.find("Launch (ID: 1)").expect("Launch missing");
    assert!(design < launch, "dependency must come first:\n{output}");
    assert!(output.contains("feasible 2024-07-01 **slipped**"));
    assert!(output.contains("blocked by 2"));
}

#[test]
fn test_cli_roadmap_reports_cycle() {
    let env = TestEnv::new();
    env.run(&["project", "add", "Website"]);
    env.run(&["milestone", "add", "1", "Design"]);
    env.run(&["milestone", "add", "1", "Launch"]);
    env.run(&["dep", "add", "1", "2"]);
    env.run(&["dep", "add", "2", "1"]);

    env.cmd()
        .args(["roadmap"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Roadmap blocked by dependency cycles",
        ));
}

#[test]
fn test_cli_health_board() {
    let env = TestEnv::new();
    env.run(&["project", "add", "Website"]);

    env.cmd()
        .args(["health"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Portfolio Health"))
        .stdout(predicate::str::contains("| 1 | Website | active |"))
        .stdout(predicate::str::contains("- **Active projects**: 1"));
}

#[test]
fn test_cli_default_command_is_health() {
    let env = TestEnv::new();

    env.cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("No projects found."));
}

fn write_snapshot(env: &TestEnv) -> String {
    let path = format!("{}.json", env.db_path);
    let snapshot = r#"{
        "projects": [
            {"id": 1, "name": "Website", "status": "active", "priority": "high",
             "updated_at": "2024-03-01T00:00:00Z"}
        ],
        "milestones": [
            {"id": 1, "project_id": 1, "title": "Design", "status": "completed",
             "percent_complete": 100, "target_date": "2024-01-10", "sort_order": 0},
            {"id": 2, "project_id": 1, "title": "Launch", "status": "not_started",
             "percent_complete": 0, "target_date": "2024-02-01", "sort_order": 1}
        ],
        "dependencies": [
            {"milestone_id": 2, "depends_on": 1},
            {"milestone_id": 2, "depends_on": 404}
        ]
    }"#;
    fs::write(&path, snapshot).expect("Failed to write snapshot");
    path
}

#[test]
fn test_cli_import_and_report() {
    let env = TestEnv::new();
    let path = write_snapshot(&env);

    env.cmd()
        .args(["import", &path])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Imported 1 projects, 2 milestones and 2 dependencies",
        ));

    let output = env.run(&["report", "--at", "2024-03-01T00:00:00Z"]);
    let report: serde_json::Value =
        serde_json::from_str(&output).expect("report is not valid JSON");
    assert_eq!(report["health"]["1"]["score"], 75);
    assert_eq!(report["health"]["1"]["days_since_update"], 0);
    assert_eq!(report["portfolio"]["active_projects"], 1);
    assert_eq!(report["roadmaps"][0]["schedule"][1]["milestone_id"], 2);
    assert_eq!(
        report["roadmaps"][0]["warnings"][0]["kind"],
        "dangling_reference"
    );
}

#[test]
fn test_cli_import_rejects_malformed_file() {
    let env = TestEnv::new();
    let path = format!("{}.json", env.db_path);
    fs::write(&path, "{ not json").expect("Failed to write file");

    env.cmd()
        .args(["import", &path])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse"));
}

#[test]
fn test_cli_import_requires_milestone_status() {
    let env = TestEnv::new();
    let path = format!("{}.json", env.db_path);
    let snapshot = r#"{
        "projects": [
            {"id": 1, "name": "Website", "status": "active", "updated_at": "2024-03-01T00:00:00Z"}
        ],
        "milestones": [
            {"id": 1, "project_id": 1, "title": "Design", "percent_complete": 0, "sort_order": 0}
        ]
    }"#;
    fs::write(&path, snapshot).expect("Failed to write snapshot");

    env.cmd()
        .args(["import", &path])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing field `status`"));
}

#[test]
fn test_cli_rejects_invalid_config() {
    let env = TestEnv::new();
    let path = format!("{}.config.json", env.db_path);
    fs::write(&path, r#"{"health": {"horizon_days": 0}}"#).expect("Failed to write config");

    env.cmd()
        .args(["--config", &path, "health"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}

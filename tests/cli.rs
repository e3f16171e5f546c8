use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const SNAPSHOT: &str = r#"{
  "progressEntries": [
    {
      "id": "e1", "programId": "a", "workoutDate": "2024-01-01T09:00:00Z", "totalDuration": 50, "rating": 4,
      "completed": true,
      "exercises": [{"exerciseId": "x", "exerciseName": "Bench", "sets": [
        {"setNumber": 1, "weight": 100, "reps": 8, "restTime": 90, "completed": true},
        {"setNumber": 2, "weight": 100, "reps": 8, "restTime": 90, "completed": true}
      ]}]
    },
    {
      "id": "e2", "programId": "a", "workoutDate": "2024-01-02T09:00:00Z", "totalDuration": 40, "rating": 5,
      "completed": true,
      "exercises": [{"exerciseId": "x", "exerciseName": "Bench", "sets": [
        {"setNumber": 1, "weight": 95, "reps": 6, "restTime": 90, "completed": true},
        {"setNumber": 2, "weight": 105, "reps": 8, "restTime": 90, "completed": true}
      ]}]
    },
    {
      "id": "e3", "programId": "b", "workoutDate": "2024-01-03T09:00:00Z", "totalDuration": 30,
      "completed": true,
      "exercises": [{"exerciseId": "x", "exerciseName": "Bench", "sets": [
        {"setNumber": 1, "weight": 105, "reps": 8, "restTime": 90, "completed": true},
        {"setNumber": 2, "weight": 100, "reps": 7, "restTime": 90, "completed": true},
        {"setNumber": 3, "weight": 0, "reps": 20, "restTime": 90, "completed": true},
        {"setNumber": 4, "weight": 0, "reps": 18, "restTime": 90, "completed": false}
      ]}]
    }
  ],
  "programs": [{"id": "a", "name": "Upper"}, {"id": "b", "name": "Lower"}],
  "goals": [
    {"id": "g1", "title": "Ten sessions", "type": "TOTAL_WORKOUTS", "target": 10, "unit": "sessions",
     "startDate": "2024-01-01T00:00:00Z", "targetDate": "2024-01-10T00:00:00Z"}
  ]
}"#;

const NOW: &str = "2024-01-03T20:00:00+00:00";

fn setup() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("progress.json"), SNAPSHOT).unwrap();
    dir
}

fn fitstats(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("fitstats").unwrap();
    cmd.env("FITSTATS_CONFIG_DIR", dir.join("cfg"))
        .env_remove("FITSTATS_SNAPSHOT")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1")
        .arg("--file")
        .arg(dir.join("progress.json"))
        .arg("--now")
        .arg(NOW);
    cmd
}

#[test]
fn summary_json() {
    let dir = setup();
    fitstats(dir.path())
        .args(["--json", "summary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"completionRate\": 88"))
        .stdout(predicate::str::contains("\"averageWeight\": 76.0"))
        .stdout(predicate::str::contains("\"mostUsedProgram\": \"Upper\""));
}

#[test]
fn empty_range_prints_null() {
    let dir = setup();
    fitstats(dir.path())
        .args(["--json", "--range", "today", "summary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"totalWorkouts\": 1"));

    fitstats(dir.path())
        .args(["--json", "--now", "2024-03-01T00:00:00Z", "--range", "month", "summary"])
        .assert()
        .success()
        .stdout(predicate::str::diff("null\n"));
}

#[test]
fn unknown_range_warns_and_shows_everything() {
    let dir = setup();
    fitstats(dir.path())
        .args(["--json", "--range", "mnth", "summary"])
        .assert()
        .success()
        .stderr(predicate::str::contains("did you mean `month`"))
        .stdout(predicate::str::contains("\"totalWorkouts\": 3"));
}

#[test]
fn program_chart_json() {
    let dir = setup();
    let out = fitstats(dir.path())
        .args(["--json", "chart", "programs"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let chart: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(chart["labels"], serde_json::json!(["Upper", "Lower"]));
    assert_eq!(chart["datasets"][0]["data"], serde_json::json!([2.0, 1.0]));
}

#[test]
fn goals_and_streak() {
    let dir = setup();
    fitstats(dir.path())
        .args(["--json", "goals"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"percentage\": 30"))
        .stdout(predicate::str::contains("\"remainingDays\": 7"));

    fitstats(dir.path())
        .args(["--json", "streak"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"current\": 3"))
        .stdout(predicate::str::contains("\"best\": 3"));
}

#[test]
fn report_contains_every_section() {
    let dir = setup();
    fitstats(dir.path())
        .arg("report")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"summary\""))
        .stdout(predicate::str::contains("\"weeklyFrequency\""))
        .stdout(predicate::str::contains("\"goalProgress\""));
}

#[test]
fn config_roundtrip_and_default_range() {
    let dir = setup();
    fitstats(dir.path()).args(["config", "set", "range", "today"]).assert().success();
    fitstats(dir.path())
        .args(["config", "get", "range"])
        .assert()
        .success()
        .stdout(predicate::str::contains("today"));

    fitstats(dir.path())
        .args(["--json", "summary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"totalWorkouts\": 1"));

    fitstats(dir.path()).args(["config", "unset", "range"]).assert().success();
    fitstats(dir.path())
        .args(["--json", "summary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"totalWorkouts\": 3"));
}

#[test]
fn bad_inputs_fail_cleanly() {
    let dir = setup();
    fitstats(dir.path())
        .args(["--now", "yesterday", "summary"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid --now value"));

    fitstats(dir.path())
        .args(["--file"])
        .arg(dir.path().join("missing.json"))
        .arg("summary")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not load snapshot"));
}

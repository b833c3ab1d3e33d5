//! End-to-end tests for the `label-hours` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ENV_VARS: [&str; 3] = ["GITLAB_TOKEN", "GITLAB_GROUP_ID", "GITLAB_URL"];

fn label_hours() -> Command {
    let mut cmd = Command::cargo_bin("label-hours").unwrap();
    for var in ENV_VARS {
        cmd.env_remove(var);
    }
    cmd.env_remove("RUST_LOG");
    cmd
}

fn event(created_at: &str, action: &str) -> serde_json::Value {
    json!({
        "id": 1,
        "created_at": created_at,
        "resource_type": "Issue",
        "resource_id": 100,
        "label": { "id": 5, "name": "Doing" },
        "action": action,
    })
}

async fn mock_gitlab() -> MockServer {
    let server = MockServer::start().await;
    // Sydney is UTC+11 in March 2026: Tue 17th 09:00–10:30 and 14:00–15:00,
    // then Fri 20th 16:00 to Mon 23rd 10:00.
    Mock::given(method("GET"))
        .and(path("/api/v4/projects/42/issues/7/resource_label_events"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            event("2026-03-16T22:00:00Z", "add"),
            event("2026-03-16T23:30:00Z", "remove"),
            event("2026-03-17T03:00:00Z", "add"),
            event("2026-03-17T04:00:00Z", "remove"),
            event("2026-03-20T05:00:00Z", "add"),
            event("2026-03-22T23:00:00Z", "remove"),
        ])))
        .mount(&server)
        .await;
    server
}

#[test]
fn test_help_lists_options() {
    label_hours()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--project-id"))
        .stdout(predicate::str::contains("--issue-number"));
}

#[test]
fn test_requires_project_and_issue() {
    label_hours()
        .assert()
        .failure()
        .stderr(predicate::str::contains("--project-id"));
}

#[test]
fn test_missing_env_vars_are_listed() {
    label_hours()
        .args(["-p", "42", "-i", "7"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "error: Missing environment variable(s): GITLAB_TOKEN, GITLAB_GROUP_ID.",
        ));
}

#[test]
fn test_missing_group_only() {
    label_hours()
        .args(["-p", "42", "-i", "7"])
        .env("GITLAB_TOKEN", "secret")
        .assert()
        .failure()
        .stderr(predicate::str::contains("GITLAB_GROUP_ID"))
        .stderr(predicate::str::contains("GITLAB_TOKEN").not());
}

#[test]
fn test_dotenv_is_loaded_before_logging() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join(".env"),
        "RUST_LOG=debug\nGITLAB_TOKEN=from-dotenv\n",
    )
    .unwrap();

    label_hours()
        .current_dir(dir.path())
        .args(["-p", "42", "-i", "7"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("loaded .env"))
        .stderr(predicate::str::contains(
            "error: Missing environment variable(s): GITLAB_GROUP_ID.",
        ));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_prints_weekday_table() {
    let server = mock_gitlab().await;

    label_hours()
        .args(["-p", "42", "-i", "7"])
        .env("GITLAB_TOKEN", "secret")
        .env("GITLAB_GROUP_ID", "1234")
        .env("GITLAB_URL", server.uri())
        .assert()
        .success()
        .stdout(
            "Day       | Hours\n\
             -----------------\n\
             Monday    | 1h 0m\n\
             Tuesday   | 2h 30m\n\
             Friday    | 1h 0m\n",
        );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_prints_json_rows() {
    let server = mock_gitlab().await;

    let output = label_hours()
        .args(["-p", "42", "-i", "7", "--json"])
        .env("GITLAB_TOKEN", "secret")
        .env("GITLAB_GROUP_ID", "1234")
        .env("GITLAB_URL", server.uri())
        .output()
        .unwrap();

    assert!(output.status.success());
    let rows: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(rows[1]["day"], "Tuesday");
    assert_eq!(rows[1]["seconds"], 9000);
    assert_eq!(rows.as_array().unwrap().len(), 3);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_unknown_issue_fails() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    label_hours()
        .args(["-p", "42", "-i", "999"])
        .env("GITLAB_TOKEN", "secret")
        .env("GITLAB_GROUP_ID", "1234")
        .env("GITLAB_URL", server.uri())
        .assert()
        .failure()
        .stderr(predicate::str::contains("HTTP 404"));
}

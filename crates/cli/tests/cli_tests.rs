use assert_cmd::Command;
use predicates::prelude::*;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const RECORD_COUNT_PATH: &str = "/services/data/v58.0/limits/recordCount";

fn bin() -> Command {
    let mut cmd = Command::cargo_bin("sobject-counts").unwrap();
    cmd.env_remove("SF_INSTANCE_URL")
        .env_remove("SF_ACCESS_TOKEN")
        .env_remove("SF_API_VERSION")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_cli_help() {
    bin()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Display record counts for the specified sObject types"));
}

#[test]
fn test_cli_display_help() {
    bin()
        .args(["display", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--sobjecttype"))
        .stdout(predicate::str::contains("--json"));
}

#[test]
fn test_sobjecttype_is_required() {
    bin().arg("display").assert().failure().stderr(predicate::str::contains("--sobjecttype"));
}

#[test]
fn test_blank_sobjecttype_is_rejected() {
    bin()
        .args(["display", "-s", ","])
        .env("SF_INSTANCE_URL", "http://127.0.0.1:9")
        .env("SF_ACCESS_TOKEN", "token")
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least one sObject type"));
}

#[test]
fn test_missing_instance_url() {
    bin()
        .args(["display", "-s", "Account", "--access-token", "token"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("SF_INSTANCE_URL"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_display_prints_zero_filled_table() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(RECORD_COUNT_PATH))
        .and(query_param("sObjects", "Account,Contact,Lead"))
        .and(header("Authorization", "Bearer token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "sObjects": [{ "name": "Account", "count": 42 }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let uri = server.uri();
    tokio::task::spawn_blocking(move || {
        bin()
            .args(["display", "-s", "Account,Contact", "-s", "Lead,Account"])
            .env("SF_INSTANCE_URL", &uri)
            .env("SF_ACCESS_TOKEN", "token")
            .assert()
            .success()
            .stdout(
                "sObject  Record Count\n\
                 -------  ------------\n\
                 Account  42\n\
                 Contact  0\n\
                 Lead     0\n",
            );
    })
    .await
    .unwrap();
}

#[tokio::test(flavor = "multi_thread")]
async fn test_display_json_output() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(RECORD_COUNT_PATH))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "sObjects": [] })),
        )
        .mount(&server)
        .await;

    let uri = server.uri();
    let output = tokio::task::spawn_blocking(move || {
        bin()
            .args(["display", "-s", "Case", "--json", "--instance-url", uri.as_str()])
            .args(["--access-token", "token"])
            .output()
            .unwrap()
    })
    .await
    .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["result"], serde_json::json!([{ "name": "Case", "count": 0 }]));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_display_surfaces_auth_error_without_table() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(RECORD_COUNT_PATH))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!([{
            "message": "Session expired or invalid",
            "errorCode": "INVALID_SESSION_ID"
        }])))
        .mount(&server)
        .await;

    let uri = server.uri();
    tokio::task::spawn_blocking(move || {
        bin()
            .args(["display", "-s", "Account"])
            .env("SF_INSTANCE_URL", &uri)
            .env("SF_ACCESS_TOKEN", "expired")
            .assert()
            .failure()
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains("failed to fetch record counts"))
            .stderr(predicate::str::contains("INVALID_SESSION_ID"));
    })
    .await
    .unwrap();
}

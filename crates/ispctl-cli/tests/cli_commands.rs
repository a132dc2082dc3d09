use assert_cmd::Command;
use mockito::Server;
use predicates::prelude::*;
use serde_json::json;
use std::path::Path;
use tempfile::tempdir;

fn base_cmd(config_dir: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("ispctl"));
    cmd.env("ISPCTL_CONFIG_DIR", config_dir)
        .env_remove("ISPCTL_API_URL")
        .env_remove("ISPCTL_TOKEN")
        .env_remove("ISPCTL_TENANT");
    cmd
}

#[test]
fn status_reports_logged_out() {
    let config_dir = tempdir().expect("tempdir");

    base_cmd(config_dir.path())
        .args(["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Not logged in"));
}

#[test]
fn config_set_url_roundtrips_through_show() {
    let config_dir = tempdir().expect("tempdir");

    base_cmd(config_dir.path())
        .args(["config", "set-url", "https://billing.example.net/api"])
        .assert()
        .success();

    base_cmd(config_dir.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("https://billing.example.net/api"));
}

#[test]
fn customer_list_uses_flag_credentials() {
    let config_dir = tempdir().expect("tempdir");
    let mut server = Server::new();

    server
        .mock("GET", "/customers")
        .match_header("authorization", "Bearer cli-token")
        .match_header("x-isp-id", "isp-9")
        .with_status(200)
        .with_body(
            json!([{
                "_id": "c1",
                "accountNumber": "ACC001",
                "name": "Asha Njeri",
                "status": "active",
                "plan": {"name": "Home 10"},
                "expiryDate": "2026-09-01T00:00:00.000Z"
            }])
            .to_string(),
        )
        .create();

    base_cmd(config_dir.path())
        .args([
            "--api-url",
            &server.url(),
            "--token",
            "cli-token",
            "--tenant",
            "isp-9",
            "--insecure",
            "customer",
            "list",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Asha Njeri"));
}

#[test]
fn health_probe_needs_no_credentials() {
    let config_dir = tempdir().expect("tempdir");
    let mut server = Server::new();

    server
        .mock("GET", "/health")
        .with_status(200)
        .with_body(json!({"ok": true, "uptime": 12.5}).to_string())
        .create();

    base_cmd(config_dir.path())
        .args(["--api-url", &server.url(), "--insecure", "health"])
        .assert()
        .success()
        .stdout(predicate::str::contains("uptime"));
}

#[test]
fn plain_http_requires_the_insecure_flag() {
    let config_dir = tempdir().expect("tempdir");

    base_cmd(config_dir.path())
        .args(["--api-url", "http://127.0.0.1:1/api", "customer", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("refusing to use http://"));
}

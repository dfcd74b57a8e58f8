//! Integration tests for the envlink binary

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn write_profile(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("profile.json");
    let profile = serde_json::json!({
        "home_url": "https://backend.example.com",
        "graphql_endpoint": "index.php?graphql",
        "rest_url_prefix": "/wp-json",
        "introspection_token": "super-secret-token"
    });
    fs::write(&path, serde_json::to_string_pretty(&profile).unwrap()).unwrap();
    path
}

#[test]
fn generate_prints_env_to_stdout() {
    let dir = TempDir::new().unwrap();
    let profile = write_profile(&dir);

    Command::cargo_bin("envlink")
        .unwrap()
        .args(["generate", "--profile"])
        .arg(&profile)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "NEXT_PUBLIC_WP_HOME_URL=https://backend.example.com",
        ))
        .stdout(predicate::str::contains(
            "INTROSPECTION_TOKEN=super-secret-token",
        ))
        .stdout(predicate::str::contains("# CORS_PROXY_PREFIX=/proxy"));
}

#[test]
fn generate_writes_output_file_and_respects_force() {
    let dir = TempDir::new().unwrap();
    let profile = write_profile(&dir);
    let output = dir.path().join(".env");

    Command::cargo_bin("envlink")
        .unwrap()
        .args(["generate", "--profile"])
        .arg(&profile)
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    let contents = fs::read_to_string(&output).unwrap();
    assert!(contents.contains("GRAPHQL_ENDPOINT=index.php?graphql"));
    assert!(contents.ends_with('\n'));

    // A second run without --force must refuse to clobber.
    Command::cargo_bin("envlink")
        .unwrap()
        .args(["generate", "--profile"])
        .arg(&profile)
        .arg("--output")
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    Command::cargo_bin("envlink")
        .unwrap()
        .args(["generate", "--profile"])
        .arg(&profile)
        .arg("--output")
        .arg(&output)
        .arg("--force")
        .assert()
        .success();
}

#[test]
fn generate_fails_on_missing_required_token() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("profile.json");
    fs::write(
        &path,
        serde_json::json!({"home_url": "https://backend.example.com"}).to_string(),
    )
    .unwrap();

    Command::cargo_bin("envlink")
        .unwrap()
        .args(["generate", "--profile"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("INTROSPECTION_TOKEN"));
}

#[test]
fn overrides_file_is_applied() {
    let dir = TempDir::new().unwrap();
    let profile = write_profile(&dir);
    let overrides = dir.path().join("overrides.json");
    fs::write(
        &overrides,
        serde_json::json!({
            "NEXT_PUBLIC_FRONTEND_URL": {"value": "https://www.example.com"}
        })
        .to_string(),
    )
    .unwrap();

    Command::cargo_bin("envlink")
        .unwrap()
        .args(["generate", "--profile"])
        .arg(&profile)
        .arg("--overrides")
        .arg(&overrides)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "NEXT_PUBLIC_FRONTEND_URL=https://www.example.com",
        ))
        .stdout(predicate::str::contains("NODE_TLS_REJECT_UNAUTHORIZED=1"));
}

#[test]
fn list_shows_hidden_variables() {
    let dir = TempDir::new().unwrap();
    let profile = write_profile(&dir);

    Command::cargo_bin("envlink")
        .unwrap()
        .args(["list", "--profile"])
        .arg(&profile)
        .assert()
        .success()
        .stdout(predicate::str::contains("REST_URL_PREFIX=/wp-json (hidden)"))
        .stdout(predicate::str::contains(
            "INTROSPECTION_TOKEN=super-secret-token [required]",
        ));
}

// Integration tests for the pagescore CLI surface: help, argument
// validation, configuration handling and exit codes.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Command for the pagescore binary, isolated from the user's config files.
fn pagescore(workdir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("pagescore").expect("binary should exist");
    cmd.current_dir(workdir.path())
        .env("HOME", workdir.path())
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn cli_version_flag() {
    let dir = TempDir::new().expect("temp dir should be created");
    pagescore(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("pagescore"));
}

#[test]
fn cli_help_flag() {
    let dir = TempDir::new().expect("temp dir should be created");
    pagescore(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Blog page quality"));
}

#[test]
fn analyze_requires_html_path() {
    let dir = TempDir::new().expect("temp dir should be created");
    pagescore(&dir)
        .arg("analyze")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn weights_prints_default_table() {
    let dir = TempDir::new().expect("temp dir should be created");
    pagescore(&dir)
        .arg("weights")
        .assert()
        .success()
        .stdout(predicate::str::contains("informativeness"))
        .stdout(predicate::str::contains("0.200"))
        .stdout(predicate::str::contains("social_integration"))
        .stdout(predicate::str::is_match(r"total\s+1\.000").expect("valid regex"));
}

#[test]
fn local_override_replaces_project_weights() {
    let dir = TempDir::new().expect("temp dir should be created");
    fs::write(
        dir.path().join("pagescore.toml"),
        r#"
[weights]
informativeness = 0.20
readability = 0.15
engagement = 0.15
uniqueness = 0.15
layout_quality = 0.10
discoverability = 0.10
seo_keywords = 0.05
ad_experience = 0.05
social_integration = 0.05
"#,
    )
    .expect("project config should write");
    fs::create_dir_all(dir.path().join(".pagescore")).expect("local dir should be created");
    fs::write(
        dir.path().join(".pagescore/local.toml"),
        "[weights]\ninformativeness = 0.10\nreadability = 0.25\n",
    )
    .expect("local config should write");

    pagescore(&dir)
        .arg("weights")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"informativeness\s+0\.100").expect("valid regex"))
        .stdout(predicate::str::is_match(r"readability\s+0\.250").expect("valid regex"));
}

#[test]
fn weights_not_summing_to_one_is_a_config_failure() {
    let dir = TempDir::new().expect("temp dir should be created");
    fs::write(
        dir.path().join("bad.toml"),
        r#"
[weights]
informativeness = 0.50
readability = 0.15
engagement = 0.15
uniqueness = 0.15
layout_quality = 0.10
discoverability = 0.10
seo_keywords = 0.05
ad_experience = 0.05
social_integration = 0.05
"#,
    )
    .expect("config should write");

    pagescore(&dir)
        .args(["weights", "--config", "bad.toml"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("configuration error"));
}

#[test]
fn unknown_criterion_is_a_config_failure() {
    let dir = TempDir::new().expect("temp dir should be created");
    fs::write(
        dir.path().join("pagescore.toml"),
        "[weights]\npage_speed = 1.0\n",
    )
    .expect("config should write");

    pagescore(&dir).arg("weights").assert().code(2);
}

#[test]
fn missing_explicit_config_is_a_config_failure() {
    let dir = TempDir::new().expect("temp dir should be created");
    pagescore(&dir)
        .args(["weights", "--config", "absent.toml"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn malformed_toml_is_a_config_failure() {
    let dir = TempDir::new().expect("temp dir should be created");
    fs::write(dir.path().join("pagescore.toml"), "[weights\n").expect("config should write");
    pagescore(&dir).arg("weights").assert().code(2);
}

#[test]
fn missing_html_is_a_runtime_failure() {
    let dir = TempDir::new().expect("temp dir should be created");
    pagescore(&dir)
        .args(["analyze", "absent.html"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("path does not exist"));
}

#[test]
fn fail_under_outside_score_range_is_rejected() {
    let dir = TempDir::new().expect("temp dir should be created");
    fs::write(dir.path().join("page.html"), "<p>hi</p>").expect("page should write");
    pagescore(&dir)
        .args(["analyze", "page.html", "--fail-under", "150"])
        .assert()
        .code(2);
}

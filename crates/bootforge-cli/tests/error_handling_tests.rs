//! Error handling and exit-code tests for the bootforge binary.

use std::fs;
use std::path::Path;

use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

fn bootforge(home: &Path) -> assert_cmd::Command {
    let mut cmd = cargo::cargo_bin_cmd!("bootforge");
    cmd.env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

// ── User errors (exit 2) ──────────────────────────────────────────────────────

#[test]
fn test_generate_without_input() {
    let temp = TempDir::new().unwrap();
    bootforge(temp.path())
        .arg("generate")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Nothing to generate"))
        .stderr(predicate::str::contains("bootforge init"));
}

#[test]
fn test_unknown_subcommand() {
    let temp = TempDir::new().unwrap();
    bootforge(temp.path())
        .arg("scaffold")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

#[test]
fn test_existing_project_requires_force() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("out");
    fs::create_dir_all(out.join("github")).unwrap();
    fs::write(out.join("github/notes.txt"), "keep").unwrap();

    bootforge(temp.path())
        .args(["generate", "--template", "github", "--yes", "--output"])
        .arg(&out)
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("already exists"))
        .stderr(predicate::str::contains("--force"));
    assert!(out.join("github/notes.txt").exists());

    bootforge(temp.path())
        .args(["generate", "--template", "github", "--force", "--output"])
        .arg(&out)
        .assert()
        .success();
    assert!(out.join("github/pom.xml").exists());
    assert!(!out.join("github/notes.txt").exists());
}

#[test]
fn test_privileged_server_port() {
    let temp = TempDir::new().unwrap();
    let spec = temp.path().join("bootforge.toml");
    fs::write(
        &spec,
        "name = \"Shop\"\nserver-port = 80\n[[apis]]\nname = \"Products\"\npurpose = \"product-catalog\"\n",
    )
    .unwrap();

    bootforge(temp.path())
        .arg("generate")
        .arg(&spec)
        .args(["--dry-run"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("1024-65535"));
}

#[test]
fn test_missing_spec_file() {
    let temp = TempDir::new().unwrap();
    bootforge(temp.path())
        .arg("generate")
        .arg(temp.path().join("missing.toml"))
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Failed to load project spec"));
}

#[test]
fn test_spec_with_template_and_apis() {
    let temp = TempDir::new().unwrap();
    let spec = temp.path().join("bootforge.toml");
    fs::write(
        &spec,
        "name = \"Mixed\"\ntemplate = \"instagram\"\n[[apis]]\nname = \"Products\"\n",
    )
    .unwrap();

    bootforge(temp.path())
        .arg("analyze")
        .arg(&spec)
        .assert()
        .failure()
        .code(2);
}

#[test]
fn test_init_refuses_to_overwrite() {
    let temp = TempDir::new().unwrap();

    bootforge(temp.path())
        .current_dir(temp.path())
        .arg("init")
        .assert()
        .success();

    bootforge(temp.path())
        .current_dir(temp.path())
        .arg("init")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("File already exists"));

    bootforge(temp.path())
        .current_dir(temp.path())
        .args(["init", "--force"])
        .assert()
        .success();
}

// ── Not found (exit 3) ────────────────────────────────────────────────────────

#[test]
fn test_unknown_template() {
    let temp = TempDir::new().unwrap();
    bootforge(temp.path())
        .args(["templates", "show", "myspace"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("No template with id 'myspace'"))
        .stderr(predicate::str::contains("bootforge templates list"));
}

#[test]
fn test_json_error_output() {
    let temp = TempDir::new().unwrap();
    let assert = bootforge(temp.path())
        .args(["--output-format", "json", "templates", "show", "nope"])
        .assert()
        .failure()
        .code(3);

    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).into_owned();
    let last = stderr.lines().rev().find(|l| !l.trim().is_empty()).unwrap();
    let error: serde_json::Value = serde_json::from_str(last).unwrap();
    assert_eq!(error["exit_code"], 3);
    assert_eq!(error["category"], "not-found");
    assert!(error["suggestions"].as_array().is_some_and(|s| !s.is_empty()));
}

// ── Configuration errors (exit 4) ─────────────────────────────────────────────

#[test]
fn test_missing_explicit_config() {
    let temp = TempDir::new().unwrap();
    bootforge(temp.path())
        .arg("--config")
        .arg(temp.path().join("absent.toml"))
        .args(["templates", "list"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_invalid_config_file() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("broken.toml");
    fs::write(&config, "[defaults\nnamespace = ").unwrap();

    bootforge(temp.path())
        .arg("--config")
        .arg(&config)
        .args(["databases", "list"])
        .assert()
        .failure()
        .code(4);
}

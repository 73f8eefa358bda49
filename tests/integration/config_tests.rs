//! Integration tests for configuration files.

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use crate::integration::fixtures::{create_repo, read_file, write_file, ESM_MANIFEST};

fn modshift(repo: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("modshift");
    cmd.current_dir(repo.path())
        .env("XDG_CONFIG_HOME", repo.path().join(".config"));
    cmd
}

#[test]
fn test_project_config_overrides_package_list() {
    let repo = create_repo();
    write_file(
        &repo,
        ".modshiftrc.toml",
        "[packages]\npaths = [\"libs/ui\"]\n",
    );
    write_file(&repo, "libs/ui/package.json", ESM_MANIFEST);
    write_file(&repo, "packages/logger/package.json", ESM_MANIFEST);

    modshift(&repo)
        .arg("convert")
        .assert()
        .success()
        .stdout(predicate::str::contains("Processing libs/ui/package.json"))
        .stdout(predicate::str::contains("packages/logger").not());

    assert_eq!(read_file(&repo, "packages/logger/package.json"), ESM_MANIFEST);
}

#[test]
fn test_indent_from_config() {
    let repo = create_repo();
    write_file(
        &repo,
        ".modshiftrc.toml",
        "[packages]\npaths = [\"libs/ui\"]\n\n[output]\nindent = 4\n",
    );
    write_file(&repo, "libs/ui/package.json", "{\"name\": \"ui\"}");

    modshift(&repo).arg("convert").assert().success();

    assert_eq!(
        read_file(&repo, "libs/ui/package.json"),
        "{\n    \"name\": \"ui\",\n    \"main\": \"dist/index.js\",\n    \"types\": \"dist/index.d.ts\"\n}\n"
    );
}

#[test]
fn test_no_config_ignores_project_config() {
    let repo = create_repo();
    write_file(
        &repo,
        ".modshiftrc.toml",
        "[packages]\npaths = [\"libs/ui\"]\n",
    );
    write_file(&repo, "packages/logger/package.json", ESM_MANIFEST);

    modshift(&repo)
        .args(["convert", "--no-config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Processing packages/logger/package.json"));
}

#[test]
fn test_broken_project_config_is_ignored() {
    let repo = create_repo();
    write_file(&repo, ".modshiftrc.toml", "[packages\n");
    write_file(&repo, "packages/logger/package.json", ESM_MANIFEST);

    modshift(&repo)
        .arg("convert")
        .assert()
        .success()
        .stdout(predicate::str::contains("Processing packages/logger/package.json"))
        .stderr(predicate::str::contains("Failed to load project config"));
}

#[test]
fn test_invalid_cli_config_fails() {
    let repo = create_repo();
    write_file(&repo, "custom.toml", "[output]\nindent = \"wide\"\n");

    modshift(&repo)
        .args(["convert", "--config", "custom.toml"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("Invalid config"));
}

#[test]
fn test_missing_cli_config_fails() {
    let repo = create_repo();

    modshift(&repo)
        .args(["verify", "--config", "nope.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load config"));
}

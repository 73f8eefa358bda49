//! Snapshot tests using insta.
//!
//! These tests capture and verify the trace output and rewritten files.

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use tempfile::TempDir;

use crate::integration::fixtures::{create_repo, read_file, write_file};

const UI_MANIFEST: &str = r#"{
  "name": "@acme/ui",
  "type": "module",
  "exports": {
    ".": {
      "import": "./src/index.tsx",
      "types": "./src/index.tsx"
    },
    "./theme.css": "./src/theme.css"
  }
}
"#;

const UI_TSCONFIG: &str = r#"{
  "compilerOptions": {
    "jsx": "react-jsx",
    "module": "ESNext"
  }
}
"#;

fn ui_repo() -> TempDir {
    let repo = create_repo();
    write_file(&repo, ".modshiftrc.toml", "[packages]\npaths = [\"libs/ui\"]\n");
    write_file(&repo, "libs/ui/package.json", UI_MANIFEST);
    write_file(&repo, "libs/ui/tsconfig.json", UI_TSCONFIG);
    repo
}

fn modshift(repo: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("modshift");
    cmd.current_dir(repo.path())
        .env("XDG_CONFIG_HOME", repo.path().join(".config"));
    cmd
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.output().expect("Failed to run modshift");
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_snapshot_convert_trace() {
    let repo = ui_repo();
    let stdout = stdout_of(modshift(&repo).arg("convert"));

    insta::assert_snapshot!(stdout, @r###"
    Processing libs/ui/package.json
      Removed 'type'
      Set main and types
      Warning: Target ./src/theme.css does not start with ./dist/
      Simplified exports: {".":"./dist/index.js","./theme.css":"./src/theme.css"}
    Processing libs/ui/tsconfig.json
    "###);
}

#[test]
fn test_snapshot_converted_files() {
    let repo = ui_repo();
    modshift(&repo).arg("convert").assert().success();

    insta::assert_snapshot!(read_file(&repo, "libs/ui/package.json"), @r###"
    {
      "name": "@acme/ui",
      "exports": {
        ".": "./dist/index.js",
        "./theme.css": "./src/theme.css"
      },
      "main": "dist/index.js",
      "types": "dist/index.d.ts"
    }
    "###);

    insta::assert_snapshot!(read_file(&repo, "libs/ui/tsconfig.json"), @r###"
    {
      "compilerOptions": {
        "jsx": "react-jsx",
        "module": "CommonJS",
        "moduleResolution": "Node",
        "outDir": "dist"
      }
    }
    "###);
}

#[test]
fn test_snapshot_verify_trace() {
    let repo = ui_repo();
    let stdout = stdout_of(modshift(&repo).arg("verify"));

    insta::assert_snapshot!(stdout, @r###"
    FIXING: libs/ui/package.json has type: module
    FIXING: libs/ui/tsconfig.json module is ESNext
    FIXING: libs/ui/tsconfig.json moduleResolution is None
    "###);
}

#[test]
fn test_snapshot_non_ascii_escaped() {
    let repo = create_repo();
    write_file(&repo, ".modshiftrc.toml", "[packages]\npaths = [\"libs/i18n\"]\n");
    write_file(
        &repo,
        "libs/i18n/package.json",
        "{\n  \"name\": \"@acme/i18n\",\n  \"author\": \"José Ñúñez\",\n  \"type\": \"module\"\n}\n",
    );
    modshift(&repo).arg("verify").assert().success();

    insta::assert_snapshot!(read_file(&repo, "libs/i18n/package.json"), @r###"
    {
      "name": "@acme/i18n",
      "author": "Jos\u00e9 \u00d1\u00fa\u00f1ez"
    }
    "###);
}

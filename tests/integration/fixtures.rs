//! Helpers for building throwaway monorepos.

use std::fs;

use tempfile::TempDir;

/// Package directories visited when no config overrides the list.
pub const BUILTIN_PACKAGES: &[&str] = &[
    "packages/medusa/plugins/ai/agent",
    "packages/medusa/plugins/erp/bling",
    "packages/medusa/plugins/payment/mercadopago",
    "packages/medusa/plugins/search/neon",
    "packages/analytics",
    "packages/logger",
    "packages/utils",
];

/// An ESM package.json with a single root export.
pub const ESM_MANIFEST: &str = r#"{
  "name": "pkg",
  "type": "module",
  "exports": {
    ".": "./src/index.ts"
  }
}
"#;

/// An ESM tsconfig.json.
pub const ESM_TSCONFIG: &str = r#"{
  "compilerOptions": {
    "module": "ESNext",
    "moduleResolution": "Bundler"
  }
}
"#;

/// Create an empty repository.
pub fn create_repo() -> TempDir {
    TempDir::new().expect("Failed to create temp directory")
}

/// Write a file below the repository root, creating parent directories.
pub fn write_file(repo: &TempDir, relative: &str, content: &str) {
    let path = repo.path().join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create package directory");
    }
    fs::write(&path, content).expect("Failed to write file");
}

/// Read a file below the repository root.
pub fn read_file(repo: &TempDir, relative: &str) -> String {
    fs::read_to_string(repo.path().join(relative))
        .unwrap_or_else(|e| panic!("Failed to read {relative}: {e}"))
}

/// Create a repository where every built-in package is ESM.
pub fn create_esm_monorepo() -> TempDir {
    let repo = create_repo();
    for package in BUILTIN_PACKAGES {
        write_file(&repo, &format!("{package}/package.json"), ESM_MANIFEST);
        write_file(&repo, &format!("{package}/tsconfig.json"), ESM_TSCONFIG);
    }
    repo
}

/// Check whether a file exists below the repository root.
pub fn exists(repo: &TempDir, relative: &str) -> bool {
    repo.path().join(relative).exists()
}

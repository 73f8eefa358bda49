//! Rewriting of the package.json `exports` map.
//!
//! Every export entry is collapsed to a single target path. Conditional
//! entries pick `require`, then `import`, then `default`, and sources under
//! `./src/` are pointed at their compiled `./dist/` counterparts.

use serde_json::{Map, Value};

/// Condition keys in priority order.
pub const CONDITION_PRIORITY: &[&str] = &["require", "import", "default"];

/// Export target that makes an `exports` map redundant with `main`.
pub const ROOT_ENTRY: &str = "./dist/index.js";

/// Target that may legitimately live outside `dist/`.
const PACKAGE_JSON_EXPORT: &str = "./package.json";

/// Result of rewriting an `exports` field.
#[derive(Debug, Clone, PartialEq)]
pub enum ExportsRewrite {
    /// The rewritten map only re-exports the root entry, so `main` covers it.
    Redundant,
    /// The rewritten map to store back.
    Simplified {
        entries: Map<String, Value>,
        /// Targets left pointing outside `dist/`.
        stray_targets: Vec<String>,
    },
    /// `exports` was neither a string nor an object and was left alone.
    Unsupported,
}

/// Rewrite an `exports` value.
///
/// A bare string is treated as the `"."` entry.
pub fn rewrite_exports(exports: &Value) -> ExportsRewrite {
    let mut entries = Map::new();
    let mut stray_targets = Vec::new();

    let source: Vec<(&str, &Value)> = match exports {
        Value::String(_) => vec![(".", exports)],
        Value::Object(map) => map.iter().map(|(k, v)| (k.as_str(), v)).collect(),
        _ => return ExportsRewrite::Unsupported,
    };

    for (key, value) in source {
        let Some(target) = resolve_target(value) else {
            tracing::debug!(key, "export has no usable target, dropping");
            continue;
        };

        let target = rewrite_target(target);
        if !points_into_dist(&target) && target != PACKAGE_JSON_EXPORT {
            stray_targets.push(target.clone());
        }
        entries.insert(key.to_string(), Value::String(target));
    }

    if is_redundant(&entries) {
        ExportsRewrite::Redundant
    } else {
        ExportsRewrite::Simplified {
            entries,
            stray_targets,
        }
    }
}

/// Pick the target path of a single export entry.
///
/// The first condition present wins even when it does not resolve, matching
/// how the entry is read by the rewrite: `{"require": null, "import": "x"}`
/// has no target. Nested conditions resolve with the same priority.
pub fn resolve_target(value: &Value) -> Option<&str> {
    match value {
        Value::String(target) if !target.is_empty() => Some(target.as_str()),
        Value::Object(conditions) => CONDITION_PRIORITY
            .iter()
            .find_map(|key| conditions.get(*key))
            .and_then(resolve_target),
        _ => None,
    }
}

/// Map `./src/<name>.ts` and `./src/<name>.tsx` to `./dist/<name>.js`.
///
/// Any other target is returned unchanged.
pub fn rewrite_target(target: &str) -> String {
    if let Some(rest) = target.strip_prefix("./src/") {
        if let Some(stem) = rest
            .strip_suffix(".tsx")
            .or_else(|| rest.strip_suffix(".ts"))
        {
            return format!("./dist/{stem}.js");
        }
    }
    target.to_string()
}

/// Check if a target points into the build output.
pub fn points_into_dist(target: &str) -> bool {
    target.starts_with("./dist/") || target.starts_with("dist/")
}

fn is_redundant(entries: &Map<String, Value>) -> bool {
    entries.len() == 1 && entries.get(".").and_then(Value::as_str) == Some(ROOT_ENTRY)
}

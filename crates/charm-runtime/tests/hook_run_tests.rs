//! # Hook Run Tests
//!
//! Runs whole hooks against fake hook tools. Each tool is a small shell
//! script in a temporary directory that records its arguments and stdin
//! next to itself.

#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use charm_runtime::adapters::{HookToolRelationStore, HookTools};
use charm_runtime::config::RuntimeConfig;
use charm_runtime::CharmRuntime;
use lb_feature::{RelationData, RelationId, RelationStore};
use tempfile::TempDir;

const RELATION: &str = "k8s-load-balancer-feature:3";

fn write_tool(dir: &Path, name: &str, body: &str) {
    let path = dir.join(name);
    fs::write(&path, format!("#!/bin/sh\n{body}\n")).expect("write tool");
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).expect("chmod tool");
}

/// Fake tools; `relation_ids` is the JSON printed by `relation-ids`.
fn fake_tools(relation_ids: &str) -> TempDir {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path();

    write_tool(path, "relation-ids", &format!("echo '{relation_ids}'"));
    write_tool(
        path,
        "relation-set",
        r#"here="$(dirname "$0")"
for a in "$@"; do printf '%s\n' "$a"; done > "$here/relation-set.args"
cat > "$here/relation-set.stdin""#,
    );
    write_tool(
        path,
        "relation-get",
        r#"for a in "$@"; do printf '%s\n' "$a"; done > "$(dirname "$0")/relation-get.args"
echo '"load-balancer"'"#,
    );
    write_tool(
        path,
        "status-set",
        r#"for a in "$@"; do printf '%s\n' "$a"; done > "$(dirname "$0")/status-set.args""#,
    );
    dir
}

fn config(hook: &str, tools_dir: PathBuf) -> RuntimeConfig {
    RuntimeConfig {
        unit_name: "unit/0".to_string(),
        hook: hook.to_string(),
        tools_dir: Some(tools_dir),
        ..Default::default()
    }
}

fn recorded_args(dir: &Path, tool: &str) -> Option<Vec<String>> {
    fs::read_to_string(dir.join(format!("{tool}.args")))
        .ok()
        .map(|raw| raw.lines().map(str::to_string).collect())
}

#[tokio::test]
async fn test_config_changed_sets_relation_data_in_one_call() {
    let tools = fake_tools(&format!(r#"["{RELATION}"]"#));
    let runtime = CharmRuntime::new(config("config-changed", tools.path().to_path_buf())).unwrap();

    assert!(runtime.run().await.unwrap());

    assert_eq!(
        recorded_args(tools.path(), "relation-set").unwrap(),
        vec!["-r", RELATION, "--file", "-"]
    );

    let stdin = fs::read_to_string(tools.path().join("relation-set.stdin")).unwrap();
    let data: RelationData = serde_json::from_str(&stdin).unwrap();
    assert_eq!(data.len(), 3);
    assert_eq!(data["feature-name"], "load-balancer");
    assert_eq!(data["feature-version"], "0.2");

    let attributes: serde_json::Value = serde_json::from_str(&data["feature-attributes"]).unwrap();
    assert_eq!(attributes, serde_json::json!({ "enabled": true }));
}

#[tokio::test]
async fn test_config_changed_without_relation_skips_write() {
    let tools = fake_tools("[]");
    let runtime = CharmRuntime::new(config("config-changed", tools.path().to_path_buf())).unwrap();

    assert!(runtime.run().await.unwrap());
    assert!(recorded_args(tools.path(), "relation-set").is_none());
}

#[tokio::test]
async fn test_start_sets_active_status() {
    let tools = fake_tools("[]");
    let runtime = CharmRuntime::new(config("hooks/start", tools.path().to_path_buf())).unwrap();

    runtime.run().await.unwrap();
    runtime.run().await.unwrap();

    assert_eq!(
        recorded_args(tools.path(), "status-set").unwrap(),
        vec!["active", ""]
    );
}

#[tokio::test]
async fn test_unobserved_hook_runs_no_tools() {
    let tools = fake_tools(&format!(r#"["{RELATION}"]"#));
    let runtime = CharmRuntime::new(config("update-status", tools.path().to_path_buf())).unwrap();

    assert!(!runtime.run().await.unwrap());
    assert!(recorded_args(tools.path(), "relation-set").is_none());
    assert!(recorded_args(tools.path(), "status-set").is_none());
}

#[tokio::test]
async fn test_leader_elected_hook_succeeds_without_tools() {
    let tools = fake_tools(&format!(r#"["{RELATION}"]"#));
    let runtime =
        CharmRuntime::new(config("hooks/leader-elected", tools.path().to_path_buf())).unwrap();

    assert!(!runtime.run().await.unwrap());

    // Only the four tool scripts; nothing recorded arguments.
    assert_eq!(fs::read_dir(tools.path()).unwrap().count(), 4);
}

#[tokio::test]
async fn test_failing_relation_set_fails_hook() {
    let tools = fake_tools(&format!(r#"["{RELATION}"]"#));
    write_tool(
        tools.path(),
        "relation-set",
        "echo 'ERROR permission denied' >&2\nexit 1",
    );
    let runtime = CharmRuntime::new(config("config-changed", tools.path().to_path_buf())).unwrap();

    let err = runtime.run().await.unwrap_err();
    assert!(format!("{err:#}").contains("permission denied"));
}

#[tokio::test]
async fn test_missing_tool_fails_hook() {
    let tools = TempDir::new().unwrap();
    let runtime = CharmRuntime::new(config("start", tools.path().to_path_buf())).unwrap();

    assert!(runtime.run().await.is_err());
}

#[tokio::test]
async fn test_relation_get_reads_local_unit() {
    let tools = fake_tools(&format!(r#"["{RELATION}"]"#));
    let store = HookToolRelationStore::new(
        HookTools::new(Some(tools.path().to_path_buf())),
        "unit/0",
    );
    let relation: RelationId = RELATION.parse().unwrap();

    let value = store.get(&relation, "feature-name").await.unwrap();

    assert_eq!(value.as_deref(), Some("load-balancer"));
    assert_eq!(
        recorded_args(tools.path(), "relation-get").unwrap(),
        vec!["--format=json", "-r", RELATION, "feature-name", "unit/0"]
    );
}

#[tokio::test]
async fn test_relation_ids_picks_first_relation() {
    let tools = fake_tools(r#"["k8s-load-balancer-feature:5", "k8s-load-balancer-feature:9"]"#);
    let store = HookToolRelationStore::new(
        HookTools::new(Some(tools.path().to_path_buf())),
        "unit/0",
    );

    let relation = store
        .relation_id("k8s-load-balancer-feature")
        .await
        .unwrap()
        .unwrap();

    assert_eq!(relation, RelationId::new("k8s-load-balancer-feature", 5));
}

//! Hook Tool Adapters
//!
//! Implement the publisher's driven ports by running the framework's hook
//! tools as subprocesses:
//!
//! - `relation-ids <endpoint> --format=json`
//! - `relation-get --format=json -r <id> <key> <unit>`
//! - `relation-set -r <id> --file -` (batch on stdin)
//! - `status-set <state> <message>`

use std::path::PathBuf;
use std::process::Stdio;

use async_trait::async_trait;
use lb_feature::{RelationData, RelationId, RelationStore, StatusSink, StoreError, UnitStatus};
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::{debug, warn};

/// Runs hook tools, from `tools_dir` when set or from `PATH`.
#[derive(Debug, Clone, Default)]
pub struct HookTools {
    tools_dir: Option<PathBuf>,
}

impl HookTools {
    pub fn new(tools_dir: Option<PathBuf>) -> Self {
        Self { tools_dir }
    }

    fn program(&self, tool: &str) -> PathBuf {
        match &self.tools_dir {
            Some(dir) => dir.join(tool),
            None => PathBuf::from(tool),
        }
    }

    /// Run `tool` with `args`, feeding `stdin` if given, and return stdout.
    pub async fn run(
        &self,
        tool: &str,
        args: &[String],
        stdin: Option<&[u8]>,
    ) -> Result<String, StoreError> {
        let spawn_err = |source| StoreError::Spawn {
            tool: tool.to_string(),
            source,
        };

        debug!(tool, ?args, "Running hook tool");
        let mut child = Command::new(self.program(tool))
            .args(args)
            .stdin(if stdin.is_some() {
                Stdio::piped()
            } else {
                Stdio::null()
            })
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(spawn_err)?;

        if let (Some(input), Some(mut pipe)) = (stdin, child.stdin.take()) {
            pipe.write_all(input).await.map_err(spawn_err)?;
        }

        let output = child.wait_with_output().await.map_err(spawn_err)?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            warn!(tool, code = ?output.status.code(), %stderr, "Hook tool failed");
            return Err(StoreError::ToolFailed {
                tool: tool.to_string(),
                code: output.status.code(),
                stderr,
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

fn decode<T: serde::de::DeserializeOwned>(tool: &str, raw: &str) -> Result<Option<T>, StoreError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    serde_json::from_str(raw).map_err(|source| StoreError::Decode {
        tool: tool.to_string(),
        source,
    })
}

pub(crate) fn relation_ids_args(endpoint: &str) -> Vec<String> {
    vec![endpoint.to_string(), "--format=json".to_string()]
}

pub(crate) fn relation_get_args(relation: &RelationId, key: &str, unit: &str) -> Vec<String> {
    vec![
        "--format=json".to_string(),
        "-r".to_string(),
        relation.to_string(),
        key.to_string(),
        unit.to_string(),
    ]
}

pub(crate) fn relation_set_args(relation: &RelationId) -> Vec<String> {
    vec![
        "-r".to_string(),
        relation.to_string(),
        "--file".to_string(),
        "-".to_string(),
    ]
}

pub(crate) fn status_set_args(status: &UnitStatus) -> Vec<String> {
    vec![status.name().to_string(), status.message().to_string()]
}

/// Relation store backed by `relation-ids`, `relation-get` and `relation-set`.
pub struct HookToolRelationStore {
    tools: HookTools,
    unit: String,
}

impl HookToolRelationStore {
    pub fn new(tools: HookTools, unit: impl Into<String>) -> Self {
        Self {
            tools,
            unit: unit.into(),
        }
    }
}

#[async_trait]
impl RelationStore for HookToolRelationStore {
    async fn relation_id(&self, endpoint: &str) -> Result<Option<RelationId>, StoreError> {
        const TOOL: &str = "relation-ids";
        let raw = self.tools.run(TOOL, &relation_ids_args(endpoint), None).await?;
        let ids: Vec<String> = decode(TOOL, &raw)?.unwrap_or_default();

        match ids.first() {
            Some(id) => Ok(Some(id.parse()?)),
            None => Ok(None),
        }
    }

    async fn get(&self, relation: &RelationId, key: &str) -> Result<Option<String>, StoreError> {
        const TOOL: &str = "relation-get";
        let raw = self
            .tools
            .run(TOOL, &relation_get_args(relation, key, &self.unit), None)
            .await?;
        // `null` decodes to None as well
        Ok(decode::<Option<String>>(TOOL, &raw)?.flatten())
    }

    async fn set_batch(&self, relation: &RelationId, data: RelationData) -> Result<(), StoreError> {
        const TOOL: &str = "relation-set";
        let payload = serde_json::to_vec(&data).map_err(|source| StoreError::Decode {
            tool: TOOL.to_string(),
            source,
        })?;
        self.tools
            .run(TOOL, &relation_set_args(relation), Some(&payload))
            .await?;
        Ok(())
    }
}

/// Status sink backed by `status-set`.
pub struct HookToolStatus {
    tools: HookTools,
}

impl HookToolStatus {
    pub fn new(tools: HookTools) -> Self {
        Self { tools }
    }
}

#[async_trait]
impl StatusSink for HookToolStatus {
    async fn set_status(&self, status: UnitStatus) -> Result<(), StoreError> {
        self.tools
            .run("status-set", &status_set_args(&status), None)
            .await?;
        Ok(())
    }
}

//! Outbound Ports (Driven Ports)
//!
//! Framework state the publisher depends on. Both are scoped to the local
//! unit: reads and writes only ever touch this unit's slice.

use async_trait::async_trait;

use crate::domain::{RelationData, RelationId, UnitStatus};
use crate::error::StoreError;

/// Relation data store (Driven Port)
#[async_trait]
pub trait RelationStore: Send + Sync {
    /// Relation currently bound to `endpoint`, if any.
    async fn relation_id(&self, endpoint: &str) -> Result<Option<RelationId>, StoreError>;

    /// Read `key` from this unit's data on `relation`.
    async fn get(&self, relation: &RelationId, key: &str) -> Result<Option<String>, StoreError>;

    /// Write `data` into this unit's data on `relation` as one update.
    ///
    /// Keys in `data` overwrite existing values; other keys are untouched.
    async fn set_batch(&self, relation: &RelationId, data: RelationData) -> Result<(), StoreError>;
}

/// Unit status sink (Driven Port)
#[async_trait]
pub trait StatusSink: Send + Sync {
    async fn set_status(&self, status: UnitStatus) -> Result<(), StoreError>;
}

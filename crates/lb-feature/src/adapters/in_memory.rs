//! In-memory framework state
//!
//! Stands in for the framework's relation data and status when running
//! without it, e.g. under test. Only this unit's slice is modelled.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU32, AtomicUsize, Ordering};

use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::debug;

use crate::domain::{RelationData, RelationId, UnitStatus};
use crate::error::StoreError;
use crate::ports::{RelationStore, StatusSink};

/// In-memory relation store for a single unit
pub struct InMemoryRelationStore {
    /// Name of the local unit (`<app>/<n>`)
    unit: String,
    /// This unit's data, per relation
    relations: RwLock<BTreeMap<RelationId, RelationData>>,
    /// Reason given for rejecting writes, if set
    reject_reason: RwLock<Option<String>>,
    /// Next relation number to hand out
    next_id: AtomicU32,
    /// Successful `set_batch` calls
    writes: AtomicUsize,
}

impl InMemoryRelationStore {
    pub fn new(unit: impl Into<String>) -> Self {
        Self {
            unit: unit.into(),
            relations: RwLock::new(BTreeMap::new()),
            reject_reason: RwLock::new(None),
            next_id: AtomicU32::new(0),
            writes: AtomicUsize::new(0),
        }
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }

    /// Establish a relation on `endpoint` with empty data.
    pub fn add_relation(&self, endpoint: &str) -> RelationId {
        let id = RelationId::new(endpoint, self.next_id.fetch_add(1, Ordering::SeqCst));
        self.relations.write().insert(id.clone(), RelationData::new());
        debug!(relation = %id, unit = %self.unit, "Relation added");
        id
    }

    /// Tear down a relation and drop its data.
    pub fn remove_relation(&self, relation: &RelationId) -> bool {
        self.relations.write().remove(relation).is_some()
    }

    /// Snapshot of this unit's data on `relation`.
    pub fn unit_data(&self, relation: &RelationId) -> RelationData {
        self.relations
            .read()
            .get(relation)
            .cloned()
            .unwrap_or_default()
    }

    /// Make subsequent writes fail with `reason`.
    pub fn reject_writes(&self, reason: impl Into<String>) {
        *self.reject_reason.write() = Some(reason.into());
    }

    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RelationStore for InMemoryRelationStore {
    async fn relation_id(&self, endpoint: &str) -> Result<Option<RelationId>, StoreError> {
        Ok(self
            .relations
            .read()
            .keys()
            .find(|id| id.endpoint() == endpoint)
            .cloned())
    }

    async fn get(&self, relation: &RelationId, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self
            .relations
            .read()
            .get(relation)
            .and_then(|data| data.get(key).cloned()))
    }

    async fn set_batch(&self, relation: &RelationId, data: RelationData) -> Result<(), StoreError> {
        if let Some(reason) = self.reject_reason.read().clone() {
            return Err(StoreError::WriteRejected(reason));
        }

        let mut relations = self.relations.write();
        let slot = relations
            .get_mut(relation)
            .ok_or_else(|| StoreError::InvalidRelationId(relation.to_string()))?;
        slot.extend(data);
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// In-memory unit status with full history
#[derive(Default)]
pub struct InMemoryStatus {
    history: RwLock<Vec<UnitStatus>>,
}

impl InMemoryStatus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recent status, `Unknown` if never set.
    pub fn current(&self) -> UnitStatus {
        self.history.read().last().cloned().unwrap_or_default()
    }

    pub fn history(&self) -> Vec<UnitStatus> {
        self.history.read().clone()
    }
}

#[async_trait]
impl StatusSink for InMemoryStatus {
    async fn set_status(&self, status: UnitStatus) -> Result<(), StoreError> {
        self.history.write().push(status);
        Ok(())
    }
}

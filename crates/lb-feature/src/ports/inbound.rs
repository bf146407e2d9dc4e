//! Inbound Ports (Driving Ports)
//!
//! Handlers are triggered by lifecycle events, never called directly by
//! peer units.

use async_trait::async_trait;

use crate::domain::RelationId;
use crate::error::CharmError;

/// Result of a configuration-changed publication.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PublishOutcome {
    /// The descriptor was written to this relation.
    Published(RelationId),
    /// The endpoint has no relation yet; nothing was written.
    NoRelation,
}

/// Feature publisher API (Driving Port)
#[async_trait]
pub trait FeaturePublisherApi: Send + Sync {
    /// Handle `start`: mark the unit active.
    ///
    /// Idempotent.
    async fn on_start(&self) -> Result<(), CharmError>;

    /// Handle `config-changed`: publish the feature descriptor.
    ///
    /// Writes all three relation keys in one batch if the relation exists;
    /// otherwise writes nothing and returns [`PublishOutcome::NoRelation`].
    async fn on_config_changed(&self) -> Result<PublishOutcome, CharmError>;
}

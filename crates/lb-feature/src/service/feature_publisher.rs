//! Feature Publisher Service
//!
//! Implements the two lifecycle handlers on top of the injected relation
//! store and status sink.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::domain::{FeatureDescriptor, LoadBalancerConfig, UnitStatus};
use crate::error::CharmError;
use crate::ports::{FeaturePublisherApi, PublishOutcome, RelationStore, StatusSink};
use crate::ENDPOINT_NAME;

/// Feature Publisher service
///
/// Implements the `FeaturePublisherApi` port using injected dependencies.
pub struct FeaturePublisher<R: RelationStore, S: StatusSink> {
    /// Relation data store (driven port)
    relations: Arc<R>,
    /// Unit status sink (driven port)
    status: Arc<S>,
    /// Endpoint the feature is announced on
    endpoint: String,
}

impl<R: RelationStore, S: StatusSink> FeaturePublisher<R, S> {
    /// Create a publisher announcing on [`ENDPOINT_NAME`].
    pub fn new(relations: Arc<R>, status: Arc<S>) -> Self {
        Self::with_endpoint(relations, status, ENDPOINT_NAME)
    }

    /// Create a publisher announcing on a custom endpoint.
    pub fn with_endpoint(relations: Arc<R>, status: Arc<S>, endpoint: impl Into<String>) -> Self {
        Self {
            relations,
            status,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl<R, S> FeaturePublisherApi for FeaturePublisher<R, S>
where
    R: RelationStore + 'static,
    S: StatusSink + 'static,
{
    async fn on_start(&self) -> Result<(), CharmError> {
        self.status.set_status(UnitStatus::active()).await?;
        info!("Unit status set to active");
        Ok(())
    }

    async fn on_config_changed(&self) -> Result<PublishOutcome, CharmError> {
        info!(endpoint = %self.endpoint, "Publishing load-balancer feature");

        let config = LoadBalancerConfig::enabled();

        let Some(relation) = self.relations.relation_id(&self.endpoint).await? else {
            info!(endpoint = %self.endpoint, "Relation not established, nothing to publish");
            return Ok(PublishOutcome::NoRelation);
        };

        let descriptor = FeatureDescriptor::load_balancer(&config)?;
        let data = descriptor.to_relation_data()?;
        debug!(relation = %relation, ?data, "Writing feature descriptor");

        self.relations.set_batch(&relation, data).await?;

        info!(
            relation = %relation,
            feature = descriptor.feature(),
            version = descriptor.version(),
            "Feature descriptor published"
        );
        Ok(PublishOutcome::Published(relation))
    }
}

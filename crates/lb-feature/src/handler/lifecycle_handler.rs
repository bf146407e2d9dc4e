//! Lifecycle handler for the feature publisher
//!
//! Observes:
//! - `start` → [`FeaturePublisherApi::on_start`]
//! - `config-changed` → [`FeaturePublisherApi::on_config_changed`]

use std::sync::Arc;

use async_trait::async_trait;
use charm_bus::{DispatchError, Dispatcher, EventHandler, EventKind, HandlerError, LifecycleEvent};
use tracing::debug;

use crate::ports::FeaturePublisherApi;

/// Event kinds this handler observes.
pub const OBSERVED_KINDS: [EventKind; 2] = [EventKind::Start, EventKind::ConfigChanged];

/// Routes lifecycle events to a [`FeaturePublisherApi`].
pub struct FeatureLifecycleHandler<P: FeaturePublisherApi> {
    publisher: P,
}

impl<P: FeaturePublisherApi + 'static> FeatureLifecycleHandler<P> {
    pub fn new(publisher: P) -> Self {
        Self { publisher }
    }

    /// Observe every kind in [`OBSERVED_KINDS`] on `dispatcher`.
    pub fn register(self: Arc<Self>, dispatcher: &mut Dispatcher) -> Result<(), DispatchError> {
        for kind in OBSERVED_KINDS {
            dispatcher.observe(kind, self.clone())?;
        }
        Ok(())
    }
}

#[async_trait]
impl<P: FeaturePublisherApi + 'static> EventHandler for FeatureLifecycleHandler<P> {
    async fn handle(&self, event: &LifecycleEvent) -> Result<(), HandlerError> {
        match event.kind() {
            EventKind::Start => self.publisher.on_start().await?,
            EventKind::ConfigChanged => {
                self.publisher.on_config_changed().await?;
            }
            other => debug!(kind = %other, "Event not handled by feature publisher"),
        }
        Ok(())
    }
}

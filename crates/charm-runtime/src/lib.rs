//! # Load-Balancer Feature Charm Runtime
//!
//! The hook executable. The framework runs it once per lifecycle event.
//!
//! ## Modular Structure
//!
//! - `config` - Runtime configuration from the hook environment
//! - `adapters/` - Hook-tool implementations of the publisher's ports
//!
//! ## Hook Run
//!
//! 1. Load configuration (unit name, hook name, tools directory)
//! 2. Install the tracing subscriber
//! 3. Build the dispatcher and register the feature publisher
//! 4. Dispatch the one event for this run
//! 5. Exit; a failed handler yields a non-zero exit status

pub mod adapters;
pub mod config;

use std::sync::Arc;

use anyhow::{Context, Result};
use charm_bus::Dispatcher;
use lb_feature::{FeatureLifecycleHandler, FeaturePublisher, RelationStore, StatusSink};
use tracing::info;

use crate::adapters::{HookToolRelationStore, HookToolStatus, HookTools};
use crate::config::RuntimeConfig;

/// A configured hook run.
pub struct CharmRuntime {
    config: RuntimeConfig,
    dispatcher: Dispatcher,
}

impl CharmRuntime {
    /// Create a runtime talking to the framework through its hook tools.
    pub fn new(config: RuntimeConfig) -> Result<Self> {
        let tools = HookTools::new(config.tools_dir.clone());
        let relations = Arc::new(HookToolRelationStore::new(
            tools.clone(),
            config.unit_name.clone(),
        ));
        let status = Arc::new(HookToolStatus::new(tools));
        Self::with_stores(config, relations, status)
    }

    /// Create a runtime over the given framework stores.
    pub fn with_stores<R, S>(config: RuntimeConfig, relations: Arc<R>, status: Arc<S>) -> Result<Self>
    where
        R: RelationStore + 'static,
        S: StatusSink + 'static,
    {
        let publisher = FeaturePublisher::new(relations, status);
        let mut dispatcher = Dispatcher::new();
        Arc::new(FeatureLifecycleHandler::new(publisher))
            .register(&mut dispatcher)
            .context("Failed to register lifecycle handlers")?;

        Ok(Self { config, dispatcher })
    }

    /// Dispatch this run's event.
    ///
    /// Returns whether a handler observed the event.
    pub async fn run(&self) -> Result<bool> {
        let event = self.config.event().context("Failed to resolve hook")?;
        info!(unit = %self.config.unit_name, event = %event, "Hook run started");

        let handled = self
            .dispatcher
            .dispatch(&event)
            .await
            .with_context(|| format!("Hook {event} failed"))?;

        info!(event = %event, handled, "Hook run finished");
        Ok(handled)
    }
}

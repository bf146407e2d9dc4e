//! # Event Dispatcher
//!
//! Explicit mapping from [`EventKind`] to the handler observing it.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::error::DispatchError;
use crate::events::{EventKind, LifecycleEvent};

/// Error type returned by handlers.
pub type HandlerError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A handler observing one or more event kinds.
#[async_trait]
pub trait EventHandler: Send + Sync {
    /// Handle a single event. Runs to completion before the next dispatch.
    async fn handle(&self, event: &LifecycleEvent) -> Result<(), HandlerError>;
}

/// Routes lifecycle events to their observers.
#[derive(Default)]
pub struct Dispatcher {
    handlers: HashMap<EventKind, Arc<dyn EventHandler>>,
}

impl Dispatcher {
    /// Create a dispatcher with no observers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` for `kind`.
    ///
    /// Each kind can be observed once.
    pub fn observe(
        &mut self,
        kind: EventKind,
        handler: Arc<dyn EventHandler>,
    ) -> Result<(), DispatchError> {
        if self.handlers.contains_key(&kind) {
            return Err(DispatchError::AlreadyObserved(kind));
        }
        debug!(%kind, "Observer registered");
        self.handlers.insert(kind, handler);
        Ok(())
    }

    /// Whether `kind` has an observer.
    #[must_use]
    pub fn is_observed(&self, kind: EventKind) -> bool {
        self.handlers.contains_key(&kind)
    }

    /// Run the observer for `event`.
    ///
    /// # Returns
    ///
    /// - `Ok(true)` - A handler ran to completion
    /// - `Ok(false)` - No handler observes this kind, or the hook is
    ///   unrecognized
    pub async fn dispatch(&self, event: &LifecycleEvent) -> Result<bool, DispatchError> {
        if event.kind() == EventKind::Unrecognized {
            info!(event = %event, "Hook not recognized, ignoring");
            return Ok(false);
        }

        let Some(handler) = self.handlers.get(&event.kind()) else {
            debug!(event = %event, "No observer for event, skipping");
            return Ok(false);
        };

        info!(event = %event, "Dispatching event");
        handler
            .handle(event)
            .await
            .map_err(|source| DispatchError::Handler {
                kind: event.kind(),
                source,
            })?;
        Ok(true)
    }
}

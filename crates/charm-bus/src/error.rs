//! Error types for lifecycle dispatch

use thiserror::Error;

use crate::dispatcher::HandlerError;
use crate::events::EventKind;

/// Errors raised while resolving or dispatching lifecycle events.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("Unknown hook name: {0:?}")]
    UnknownHook(String),

    #[error("Event kind already observed: {0}")]
    AlreadyObserved(EventKind),

    #[error("Handler for {kind} failed: {source}")]
    Handler {
        kind: EventKind,
        #[source]
        source: HandlerError,
    },
}

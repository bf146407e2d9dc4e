//! # Charm Bus - Lifecycle Event Dispatch
//!
//! The lifecycle framework runs the charm once per event. Each run carries
//! exactly one hook name, which this crate resolves into a typed
//! [`LifecycleEvent`] and routes to the handler observed for its kind.
//!
//! ```text
//! ┌──────────────┐  hook name   ┌──────────────┐  observe()  ┌──────────────┐
//! │  Framework   │ ───────────→ │  Dispatcher  │ ←────────── │    Charm     │
//! │              │              │              │ ──────────→ │   handlers   │
//! └──────────────┘              └──────────────┘  dispatch() └──────────────┘
//! ```
//!
//! ## Rules
//!
//! - One handler per event kind, registered once at startup
//! - Events with no observer are acknowledged and ignored
//! - Handler errors propagate unchanged to the caller

// Nursery lints that are too strict
#![allow(clippy::missing_const_for_fn)]
// Allow in tests
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
#![cfg_attr(test, allow(clippy::panic))]

pub mod dispatcher;
pub mod error;
pub mod events;

// Re-export main types
pub use dispatcher::{Dispatcher, EventHandler, HandlerError};
pub use error::DispatchError;
pub use events::{EventKind, LifecycleEvent};

/// Environment variable carrying the hook path for the current run.
pub const DISPATCH_PATH_VAR: &str = "JUJU_DISPATCH_PATH";

/// Environment variable carrying the relation id for relation hooks.
pub const RELATION_ID_VAR: &str = "JUJU_RELATION_ID";

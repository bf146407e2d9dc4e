//! Ports Layer
//!
//! Defines the interfaces (traits) for:
//! - Driving Ports (inbound) - lifecycle handlers the framework triggers
//! - Driven Ports (outbound) - framework-owned relation data and unit status

pub mod inbound;
pub mod outbound;

pub use inbound::{FeaturePublisherApi, PublishOutcome};
pub use outbound::{RelationStore, StatusSink};

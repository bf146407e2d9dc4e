//! # Load-Balancer Feature Publisher
//!
//! Announces the `load-balancer` feature to a peer unit over the
//! `k8s-load-balancer-feature` relation.
//!
//! ## Architecture
//!
//! This crate follows Hexagonal Architecture (Ports & Adapters):
//!
//! - **Domain Layer** (`domain/`): Pure data, no I/O
//!   - `FeatureDescriptor`: Feature name, version and attributes
//!   - `LoadBalancerConfig`: Source of the attribute set
//!   - `UnitStatus`, `RelationId`: Framework value types
//!
//! - **Ports Layer** (`ports/`): Trait definitions
//!   - `FeaturePublisherApi`: Driving port (lifecycle handlers)
//!   - `RelationStore`, `StatusSink`: Driven ports (framework state)
//!
//! - **Service Layer** (`service/`): `FeaturePublisher`
//!
//! - **Handler Layer** (`handler/`): Binds the service to `charm-bus`
//!
//! - **Adapters Layer** (`adapters/`): In-memory framework state
//!
//! ## Relation Payload
//!
//! | Key                  | Value                      |
//! |----------------------|----------------------------|
//! | `feature-name`       | `load-balancer`            |
//! | `feature-version`    | `0.2`                      |
//! | `feature-attributes` | `{"enabled":true}`         |
//!
//! The three keys are always written in a single batch. When the relation
//! does not exist nothing is written and no error is raised.
//!
//! ## Wiring
//!
//! ```ignore
//! use charm_bus::{Dispatcher, EventKind, LifecycleEvent};
//! use lb_feature::{FeatureLifecycleHandler, FeaturePublisher, InMemoryRelationStore, InMemoryStatus};
//! use std::sync::Arc;
//!
//! let relations = Arc::new(InMemoryRelationStore::new("lb/0"));
//! let status = Arc::new(InMemoryStatus::new());
//! let publisher = FeaturePublisher::new(relations, status);
//!
//! let mut dispatcher = Dispatcher::new();
//! Arc::new(FeatureLifecycleHandler::new(publisher)).register(&mut dispatcher)?;
//! dispatcher.dispatch(&LifecycleEvent::new(EventKind::ConfigChanged)).await?;
//! ```

pub mod adapters;
pub mod domain;
pub mod error;
pub mod handler;
pub mod ports;
pub mod service;

// Re-exports for convenience
pub use adapters::{InMemoryRelationStore, InMemoryStatus};
pub use domain::{
    Attributes, FeatureDescriptor, LoadBalancerConfig, RelationData, RelationId, UnitStatus,
};
pub use error::{CharmError, StoreError};
pub use handler::FeatureLifecycleHandler;
pub use ports::{FeaturePublisherApi, PublishOutcome, RelationStore, StatusSink};
pub use service::FeaturePublisher;

/// Relation endpoint the feature is announced on.
pub const ENDPOINT_NAME: &str = "k8s-load-balancer-feature";

/// Feature announced by this charm.
pub const FEATURE_NAME: &str = "load-balancer";

/// Version of the feature's attribute shape.
pub const FEATURE_VERSION: &str = "0.2";

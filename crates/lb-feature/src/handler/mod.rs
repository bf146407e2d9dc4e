//! Handler Layer
//!
//! Binds the feature publisher to lifecycle events on the `charm-bus`
//! dispatcher.

pub mod lifecycle_handler;

pub use lifecycle_handler::FeatureLifecycleHandler;

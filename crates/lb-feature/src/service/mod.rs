//! Service Layer
//!
//! Application service that builds the descriptor and drives the ports.

pub mod feature_publisher;

pub use feature_publisher::FeaturePublisher;

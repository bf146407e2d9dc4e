//! Domain Layer - Pure data types
//!
//! RULES:
//! - No I/O operations
//! - No async code

pub mod descriptor;
pub mod load_balancer;
pub mod relation;
pub mod status;

pub use descriptor::{
    Attributes, FeatureDescriptor, RelationData, KEY_FEATURE_ATTRIBUTES, KEY_FEATURE_NAME,
    KEY_FEATURE_VERSION,
};
pub use load_balancer::LoadBalancerConfig;
pub use relation::RelationId;
pub use status::UnitStatus;

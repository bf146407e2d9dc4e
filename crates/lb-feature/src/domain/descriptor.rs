//! Feature descriptor announced over the relation

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::LoadBalancerConfig;
use crate::error::CharmError;
use crate::{FEATURE_NAME, FEATURE_VERSION};

/// Relation key holding the feature name.
pub const KEY_FEATURE_NAME: &str = "feature-name";
/// Relation key holding the feature version.
pub const KEY_FEATURE_VERSION: &str = "feature-version";
/// Relation key holding the JSON-encoded attributes.
pub const KEY_FEATURE_ATTRIBUTES: &str = "feature-attributes";

/// Feature attributes, key-sorted so the JSON encoding is canonical.
pub type Attributes = BTreeMap<String, serde_json::Value>;

/// One unit's slice of relation data.
pub type RelationData = BTreeMap<String, String>;

/// A single feature announcement.
///
/// Immutable once built; a fresh descriptor is built for every publication.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FeatureDescriptor {
    feature: String,
    version: String,
    attributes: Attributes,
}

impl FeatureDescriptor {
    pub fn new(feature: impl Into<String>, version: impl Into<String>, attributes: Attributes) -> Self {
        Self {
            feature: feature.into(),
            version: version.into(),
            attributes,
        }
    }

    /// Descriptor for the `load-balancer` feature built from `config`.
    pub fn load_balancer(config: &LoadBalancerConfig) -> Result<Self, CharmError> {
        Ok(Self::new(FEATURE_NAME, FEATURE_VERSION, config.to_attributes()?))
    }

    pub fn feature(&self) -> &str {
        &self.feature
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Encode into the three relation keys.
    pub fn to_relation_data(&self) -> Result<RelationData, CharmError> {
        let mut data = RelationData::new();
        data.insert(KEY_FEATURE_NAME.to_string(), self.feature.clone());
        data.insert(KEY_FEATURE_VERSION.to_string(), self.version.clone());
        data.insert(
            KEY_FEATURE_ATTRIBUTES.to_string(),
            serde_json::to_string(&self.attributes)?,
        );
        Ok(data)
    }

    /// Decode from a unit's relation data.
    ///
    /// All three keys must be present.
    pub fn from_relation_data(data: &RelationData) -> Result<Self, CharmError> {
        let field = |key: &str| {
            data.get(key)
                .ok_or_else(|| CharmError::MissingKey(key.to_string()))
        };

        let attributes: Attributes = serde_json::from_str(field(KEY_FEATURE_ATTRIBUTES)?)?;
        Ok(Self::new(
            field(KEY_FEATURE_NAME)?.as_str(),
            field(KEY_FEATURE_VERSION)?.as_str(),
            attributes,
        ))
    }
}

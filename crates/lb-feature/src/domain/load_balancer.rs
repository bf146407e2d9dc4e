//! Load-balancer configuration
//!
//! Mirrors the load-balancer section of the cluster API. Every field is
//! optional; unset fields are left out of the flattened attribute set.

use serde::{Deserialize, Serialize};

use crate::domain::Attributes;

/// Load-balancer configuration carried as feature attributes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadBalancerConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// Address pools handed out to `LoadBalancer` services.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cidrs: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub l2_mode: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub l2_interfaces: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bgp_mode: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bgp_local_asn: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bgp_peer_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bgp_peer_asn: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bgp_peer_port: Option<u16>,
}

impl LoadBalancerConfig {
    /// Configuration with only `enabled = true` set.
    pub fn enabled() -> Self {
        Self {
            enabled: Some(true),
            ..Default::default()
        }
    }

    /// Builder-style method to set the address pools
    pub fn with_cidrs(mut self, cidrs: Vec<String>) -> Self {
        self.cidrs = Some(cidrs);
        self
    }

    /// Builder-style method to enable L2 mode on `interfaces`
    pub fn with_l2_mode(mut self, interfaces: Vec<String>) -> Self {
        self.l2_mode = Some(true);
        self.l2_interfaces = Some(interfaces);
        self
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.unwrap_or(false)
    }

    /// Flatten the set fields into an attribute map.
    pub fn to_attributes(&self) -> Result<Attributes, serde_json::Error> {
        match serde_json::to_value(self)? {
            serde_json::Value::Object(map) => Ok(map.into_iter().collect()),
            _ => Ok(Attributes::new()),
        }
    }

    /// Rebuild a configuration from published attributes.
    pub fn from_attributes(attributes: &Attributes) -> Result<Self, serde_json::Error> {
        let map: serde_json::Map<String, serde_json::Value> = attributes
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        serde_json::from_value(serde_json::Value::Object(map))
    }
}

//! # Lifecycle Events
//!
//! Typed form of the hook names the framework invokes the charm with.
//! Unit-scoped hooks have fixed names (`start`, `config-changed`, ...).
//! Relation hooks are prefixed with the endpoint they fire for
//! (`<endpoint>-relation-changed`). Well-formed hook names this crate has
//! no kind for (`leader-elected`, `<container>-pebble-ready`, ...) resolve to
//! [`EventKind::Unrecognized`] and are never observed.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DispatchError;

/// Kinds of lifecycle events the framework can deliver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    Install,
    Start,
    ConfigChanged,
    UpgradeCharm,
    UpdateStatus,
    Stop,
    Remove,
    RelationCreated,
    RelationJoined,
    RelationChanged,
    RelationDeparted,
    RelationBroken,
    /// A well-formed hook name with no dedicated kind.
    Unrecognized,
}

/// Unit-scoped hook names and the kind they map to.
const UNIT_HOOKS: [(&str, EventKind); 7] = [
    ("install", EventKind::Install),
    ("start", EventKind::Start),
    ("config-changed", EventKind::ConfigChanged),
    ("upgrade-charm", EventKind::UpgradeCharm),
    ("update-status", EventKind::UpdateStatus),
    ("stop", EventKind::Stop),
    ("remove", EventKind::Remove),
];

/// Relation hook suffixes and the kind they map to.
const RELATION_HOOKS: [(&str, EventKind); 5] = [
    ("-relation-created", EventKind::RelationCreated),
    ("-relation-joined", EventKind::RelationJoined),
    ("-relation-changed", EventKind::RelationChanged),
    ("-relation-departed", EventKind::RelationDeparted),
    ("-relation-broken", EventKind::RelationBroken),
];

impl EventKind {
    /// Hook name (unit hooks) or hook suffix (relation hooks).
    ///
    /// Empty for [`EventKind::Unrecognized`].
    #[must_use]
    pub fn hook_name(self) -> &'static str {
        UNIT_HOOKS
            .iter()
            .chain(RELATION_HOOKS.iter())
            .find(|(_, kind)| *kind == self)
            .map_or("", |(name, _)| *name)
    }

    /// Whether this kind is scoped to a relation endpoint.
    #[must_use]
    pub fn is_relation_event(self) -> bool {
        RELATION_HOOKS.iter().any(|(_, kind)| *kind == self)
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unrecognized => f.write_str("unrecognized"),
            _ => f.write_str(self.hook_name().trim_start_matches('-')),
        }
    }
}

/// A single lifecycle event delivered to the charm.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifecycleEvent {
    kind: EventKind,
    /// Endpoint name, set for relation events only.
    endpoint: Option<String>,
    /// Framework relation id (`<endpoint>:<n>`), when known.
    relation_id: Option<String>,
    /// Raw hook name, kept for unrecognized hooks.
    hook: Option<String>,
}

impl LifecycleEvent {
    /// Create a unit-scoped event.
    #[must_use]
    pub fn new(kind: EventKind) -> Self {
        Self {
            kind,
            endpoint: None,
            relation_id: None,
            hook: None,
        }
    }

    /// Create a relation event for `endpoint`.
    #[must_use]
    pub fn relation(kind: EventKind, endpoint: impl Into<String>) -> Self {
        Self {
            kind,
            endpoint: Some(endpoint.into()),
            relation_id: None,
            hook: None,
        }
    }

    /// Create an event for a hook name with no dedicated kind.
    #[must_use]
    pub fn unrecognized(hook: impl Into<String>) -> Self {
        Self {
            kind: EventKind::Unrecognized,
            endpoint: None,
            relation_id: None,
            hook: Some(hook.into()),
        }
    }

    /// Attach the framework relation id.
    #[must_use]
    pub fn with_relation_id(mut self, relation_id: impl Into<String>) -> Self {
        self.relation_id = Some(relation_id.into());
        self
    }

    /// Resolve a hook name into an event.
    ///
    /// Accepts a bare name (`config-changed`) or a dispatch path
    /// (`hooks/config-changed`); only the final path segment is used.
    /// Names that are empty or not made of lowercase letters, digits and
    /// inner dashes are rejected; any other unknown name is
    /// [`EventKind::Unrecognized`].
    pub fn from_hook_name(hook: &str) -> Result<Self, DispatchError> {
        let name = hook.rsplit('/').next().unwrap_or(hook).trim();
        if !is_well_formed(name) {
            return Err(DispatchError::UnknownHook(hook.to_string()));
        }

        if let Some((_, kind)) = UNIT_HOOKS.iter().find(|(n, _)| *n == name) {
            return Ok(Self::new(*kind));
        }

        for (suffix, kind) in RELATION_HOOKS {
            if let Some(endpoint) = name.strip_suffix(suffix) {
                return Ok(Self::relation(kind, endpoint));
            }
        }

        Ok(Self::unrecognized(name))
    }

    /// Kind of this event.
    #[must_use]
    pub fn kind(&self) -> EventKind {
        self.kind
    }

    /// Endpoint of a relation event.
    #[must_use]
    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }

    /// Relation id of a relation event, when the framework supplied one.
    #[must_use]
    pub fn relation_id(&self) -> Option<&str> {
        self.relation_id.as_deref()
    }
}

fn is_well_formed(name: &str) -> bool {
    !name.is_empty()
        && !name.starts_with('-')
        && !name.ends_with('-')
        && name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

impl fmt::Display for LifecycleEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.hook, &self.endpoint) {
            (Some(hook), _) => f.write_str(hook),
            (None, Some(endpoint)) => write!(f, "{}{}", endpoint, self.kind.hook_name()),
            (None, None) => f.write_str(self.kind.hook_name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_hooks_resolve() {
        let start = LifecycleEvent::from_hook_name("start").unwrap();
        assert_eq!(start.kind(), EventKind::Start);
        assert_eq!(start.endpoint(), None);

        let changed = LifecycleEvent::from_hook_name("config-changed").unwrap();
        assert_eq!(changed.kind(), EventKind::ConfigChanged);
    }

    #[test]
    fn test_dispatch_path_uses_last_segment() {
        let event = LifecycleEvent::from_hook_name("hooks/config-changed").unwrap();
        assert_eq!(event.kind(), EventKind::ConfigChanged);
    }

    #[test]
    fn test_relation_hook_carries_endpoint() {
        let event =
            LifecycleEvent::from_hook_name("k8s-load-balancer-feature-relation-changed").unwrap();
        assert_eq!(event.kind(), EventKind::RelationChanged);
        assert_eq!(event.endpoint(), Some("k8s-load-balancer-feature"));
        assert!(event.kind().is_relation_event());
    }

    #[test]
    fn test_framework_hooks_without_kind_are_unrecognized() {
        for name in [
            "leader-elected",
            "leader-settings-changed",
            "workload-pebble-ready",
            "secret-changed",
            "data-storage-attached",
            "collect-metrics",
            "pre-series-upgrade",
        ] {
            let event = LifecycleEvent::from_hook_name(name).unwrap();
            assert_eq!(event.kind(), EventKind::Unrecognized);
            assert_eq!(event.endpoint(), None);
            assert_eq!(event.to_string(), name);
        }

        let event = LifecycleEvent::from_hook_name("hooks/leader-elected").unwrap();
        assert_eq!(event.to_string(), "leader-elected");
        assert!(!event.kind().is_relation_event());
    }

    #[test]
    fn test_malformed_hook_rejected() {
        for name in ["", "hooks/", "Start", "config changed", "start-", "hooks/a_b"] {
            let result = LifecycleEvent::from_hook_name(name);
            assert!(
                matches!(result, Err(DispatchError::UnknownHook(_))),
                "{name:?} accepted"
            );
        }
    }

    #[test]
    fn test_relation_suffix_without_endpoint_rejected() {
        let result = LifecycleEvent::from_hook_name("-relation-joined");
        assert!(matches!(result, Err(DispatchError::UnknownHook(_))));
    }

    #[test]
    fn test_display_round_trips_hook_name() {
        for name in ["install", "config-changed", "db-relation-broken"] {
            let event = LifecycleEvent::from_hook_name(name).unwrap();
            assert_eq!(event.to_string(), name);
        }
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(EventKind::ConfigChanged.to_string(), "config-changed");
        assert_eq!(EventKind::RelationJoined.to_string(), "relation-joined");
    }

    #[test]
    fn test_with_relation_id() {
        let event = LifecycleEvent::relation(EventKind::RelationJoined, "db")
            .with_relation_id("db:4");
        assert_eq!(event.relation_id(), Some("db:4"));
    }
}

//! # Runtime Configuration
//!
//! Everything the hook executable needs comes from the environment the
//! framework sets up for each hook run.
//!
//! | Variable               | Required | Meaning                               |
//! |------------------------|----------|---------------------------------------|
//! | `JUJU_UNIT_NAME`       | yes      | Local unit, e.g. `lb/0`               |
//! | `JUJU_DISPATCH_PATH`   | no       | Hook path; falls back to `argv[0]`    |
//! | `JUJU_RELATION_ID`     | no       | Relation id for relation hooks        |
//! | `JUJU_CHARM_TOOLS_DIR` | no       | Directory holding the hook tools      |
//! | `CHARM_LOG_LEVEL`      | no       | Tracing filter, default `info`        |

use std::path::{Path, PathBuf};

use charm_bus::{DispatchError, LifecycleEvent, DISPATCH_PATH_VAR, RELATION_ID_VAR};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Environment variable naming the local unit.
pub const UNIT_NAME_VAR: &str = "JUJU_UNIT_NAME";
/// Environment variable pointing at the hook tools directory.
pub const TOOLS_DIR_VAR: &str = "JUJU_CHARM_TOOLS_DIR";
/// Environment variable holding the tracing filter.
pub const LOG_LEVEL_VAR: &str = "CHARM_LOG_LEVEL";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Required environment variable {0} is not set")]
    MissingVar(&'static str),

    #[error("Cannot determine hook name from dispatch path or executable name")]
    NoHookName,

    #[error("Invalid hook: {0}")]
    InvalidHook(#[from] DispatchError),

    #[error("Invalid log filter {0:?}")]
    InvalidLogLevel(String),
}

/// Configuration for a single hook run.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Local unit name.
    pub unit_name: String,
    /// Hook being run (bare name or dispatch path).
    pub hook: String,
    /// Relation id supplied for relation hooks.
    pub relation_id: Option<String>,
    /// Directory holding the hook tools; `PATH` lookup when unset.
    pub tools_dir: Option<PathBuf>,
    /// Tracing filter directive.
    pub log_level: String,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            unit_name: String::new(),
            hook: String::new(),
            relation_id: None,
            tools_dir: None,
            log_level: "info".to_string(),
        }
    }
}

impl RuntimeConfig {
    /// Load from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let argv0 = std::env::args().next();
        Self::from_lookup(|key| std::env::var(key).ok(), argv0.as_deref())
    }

    /// Load using `lookup` for variables and `argv0` as the hook fallback.
    pub fn from_lookup<F>(lookup: F, argv0: Option<&str>) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let unit_name = non_empty(UNIT_NAME_VAR).ok_or(ConfigError::MissingVar(UNIT_NAME_VAR))?;

        let hook = non_empty(DISPATCH_PATH_VAR)
            .or_else(|| {
                argv0
                    .and_then(|path| Path::new(path).file_name())
                    .map(|name| name.to_string_lossy().into_owned())
            })
            .ok_or(ConfigError::NoHookName)?;

        let config = Self {
            unit_name,
            hook,
            relation_id: non_empty(RELATION_ID_VAR),
            tools_dir: non_empty(TOOLS_DIR_VAR).map(PathBuf::from),
            log_level: non_empty(LOG_LEVEL_VAR).unwrap_or_else(|| "info".to_string()),
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate the hook name and log filter.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.event()?;
        self.env_filter()?;
        Ok(())
    }

    /// Lifecycle event for this run.
    pub fn event(&self) -> Result<LifecycleEvent, ConfigError> {
        let event = LifecycleEvent::from_hook_name(&self.hook)?;
        Ok(match (&self.relation_id, event.kind().is_relation_event()) {
            (Some(id), true) => event.with_relation_id(id.clone()),
            _ => event,
        })
    }

    /// Tracing filter built from `log_level`.
    pub fn env_filter(&self) -> Result<EnvFilter, ConfigError> {
        EnvFilter::try_new(&self.log_level)
            .map_err(|_| ConfigError::InvalidLogLevel(self.log_level.clone()))
    }
}

//! Unit status as reported to the framework

use std::fmt;

use serde::{Deserialize, Serialize};

/// Workload status of this unit.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitStatus {
    #[default]
    Unknown,
    Maintenance(String),
    Waiting(String),
    Blocked(String),
    Active(String),
}

impl UnitStatus {
    /// Active with no message.
    pub fn active() -> Self {
        Self::Active(String::new())
    }

    /// Status name understood by `status-set`.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Maintenance(_) => "maintenance",
            Self::Waiting(_) => "waiting",
            Self::Blocked(_) => "blocked",
            Self::Active(_) => "active",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Unknown => "",
            Self::Maintenance(msg)
            | Self::Waiting(msg)
            | Self::Blocked(msg)
            | Self::Active(msg) => msg,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active(_))
    }
}

impl fmt::Display for UnitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.message().is_empty() {
            f.write_str(self.name())
        } else {
            write!(f, "{}: {}", self.name(), self.message())
        }
    }
}

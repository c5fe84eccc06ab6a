//! Log severity for emitted request lines

use crate::config::ConfigError;
use std::fmt;
use std::str::FromStr;

/// Severity assigned to an emitted log line.
///
/// This is distinct from `tracing::Level` (used for configuring the
/// subscriber side): `Level` is the domain severity a rule assigns, and
/// the configuration grammar accepts exactly these four. Suppression is
/// not a level but the absence of one, expressed as
/// [`RuleTable::resolve`](crate::RuleTable::resolve) returning `None`,
/// so a rule can never be configured to "log at none".
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Level {
    /// Diagnostic detail, normally filtered out in production.
    Debug,
    /// Routine request reporting.
    Info,
    /// Unexpected but tolerated outcomes.
    Warn,
    /// Failures that need attention.
    Error,
}

impl Level {
    /// Returns the lowercase configuration name (e.g. `"info"`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses a lowercase level name. Anything outside the four real levels is
/// a configuration error.
impl FromStr for Level {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            other => Err(ConfigError::InvalidLevel(other.to_string())),
        }
    }
}

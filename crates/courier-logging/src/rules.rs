//! Ordered status-to-level rule tables

use crate::config::{self, ConfigError, LevelSpec};
use crate::level::Level;

/// Predicate over response status codes.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StatusMatcher {
    /// Matches exactly one status code.
    Exact(u16),
    /// Matches every code in the inclusive range.
    Range(u16, u16),
    /// Catch-all. The parser admits at most one per table and always
    /// places it last.
    Any,
}

impl StatusMatcher {
    /// Whether this matcher covers `status`.
    pub fn matches(self, status: u16) -> bool {
        match self {
            Self::Exact(code) => code == status,
            Self::Range(from, to) => from <= status && status <= to,
            Self::Any => true,
        }
    }
}

/// A matcher paired with the level it assigns.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Rule {
    pub(crate) matcher: StatusMatcher,
    pub(crate) level: Level,
}

impl Rule {
    /// The matcher half of the pair.
    pub fn matcher(&self) -> StatusMatcher {
        self.matcher
    }

    /// The level half of the pair.
    pub fn level(&self) -> Level {
        self.level
    }
}

/// Ordered, immutable list of rules defining resolution precedence.
///
/// Built once from a [`LevelSpec`] and held by the logging layer for its
/// lifetime. There is no mutating API, so one table can serve concurrent
/// requests without locking.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct RuleTable {
    pub(crate) rules: Vec<Rule>,
}

impl RuleTable {
    /// Normalize a raw spec into a table. See [`parse`](crate::parse).
    pub fn from_spec(spec: &LevelSpec) -> Result<Self, ConfigError> {
        config::parse(spec)
    }

    /// The rules in precedence order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Whether the table has no rules (everything suppressed).
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Resolve `status` against the table.
    ///
    /// The first rule whose matcher covers `status` wins; insertion order
    /// is the only precedence, with no specificity or distance
    /// tie-breaking. `None` means the line is suppressed.
    pub fn resolve(&self, status: u16) -> Option<Level> {
        self.rules
            .iter()
            .find(|rule| rule.matcher.matches(status))
            .map(|rule| rule.level)
    }
}

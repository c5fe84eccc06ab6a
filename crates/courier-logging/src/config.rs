//! Configuration grammar for the logging layer
//!
//! User input is heterogeneous: a single bare level, or an ordered list of
//! `(matcher-source, level)` entries where a matcher source is a status
//! code, a group of codes, an inclusive range, or the symbolic `"default"`
//! marker. The shapes deserialize untagged so they can come straight out
//! of a JSON or YAML config file, and [`parse`] is the single
//! normalization pass that turns any of them into one canonical
//! [`RuleTable`].

use crate::level::Level;
use crate::rules::{Rule, RuleTable, StatusMatcher};
use serde::Deserialize;
use thiserror::Error;

/// Error for a logging spec that cannot be normalized.
///
/// Every variant is fatal at construction time: a layer is never built
/// from a partially-applied spec.
#[derive(Debug, Error, Eq, PartialEq)]
pub enum ConfigError {
    /// A level name outside `debug`/`info`/`warn`/`error`.
    #[error("invalid log level `{0}`")]
    InvalidLevel(String),

    /// A matcher source that is not a status code, code group, inclusive
    /// range, or the `default` marker.
    #[error("invalid status matcher `{0}`")]
    InvalidCode(String),

    /// Two `default` entries with different levels.
    #[error("conflicting default levels `{first}` and `{second}`")]
    ConflictingDefault {
        /// The level recorded first.
        first: Level,
        /// The later, disagreeing level.
        second: Level,
    },

    /// A bare default level given alongside a rule list.
    #[error("ambiguous default: use a `default` entry inside the rule list")]
    AmbiguousDefault,
}

/// Raw logging spec, before validation.
///
/// ```json
/// "info"
/// ```
///
/// ```json
/// [
///   { "on": { "from": 200, "to": 299 }, "level": "info" },
///   { "on": [404, 410], "level": "warn" },
///   { "on": "default", "level": "error" }
/// ]
/// ```
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum LevelSpec {
    /// A single bare level: every status resolves to it.
    All(String),
    /// An ordered list of per-status entries; list order is precedence.
    Rules(Vec<StatusRule>),
    /// A shorthand default alongside a rule list. Always rejected by
    /// [`parse`]: when the spec is list-shaped the default must be a
    /// `default` entry inside the list.
    Mixed {
        /// The shorthand default level.
        default: String,
        /// The accompanying rule list.
        rules: Vec<StatusRule>,
    },
}

/// One `(matcher-source, level)` entry of a [`LevelSpec::Rules`] list.
#[derive(Clone, Debug, Deserialize)]
pub struct StatusRule {
    /// What the entry matches on.
    pub on: StatusSpec,
    /// Level name; validated during parsing, not deserialization.
    pub level: String,
}

impl StatusRule {
    /// Entry matching `on` at `level`.
    pub fn new(on: StatusSpec, level: impl Into<String>) -> Self {
        Self {
            on,
            level: level.into(),
        }
    }
}

/// Matcher source of a single entry.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum StatusSpec {
    /// A single status code.
    Code(i64),
    /// A group of codes sharing one level, expanded in the group's own
    /// order.
    Codes(Vec<i64>),
    /// An inclusive `from..=to` range.
    Range {
        /// Lower bound, inclusive.
        from: i64,
        /// Upper bound, inclusive.
        to: i64,
    },
    /// A symbolic marker; only `"default"` is meaningful.
    Token(String),
}

/// Normalize a raw spec into an ordered [`RuleTable`].
///
/// A single left-to-right pass over the entries, preserving insertion
/// order. A recorded `default` level is appended as the final catch-all
/// rule so that, under first-match-wins resolution, it only applies when
/// no earlier rule matched. Re-declaring the same default level twice is
/// tolerated with a warning; two different default levels, or a bare
/// default alongside a rule list, are errors.
///
/// # Errors
///
/// Fails on the first invalid level name, invalid matcher source, or
/// default conflict. No partial table is ever produced.
pub fn parse(spec: &LevelSpec) -> Result<RuleTable, ConfigError> {
    match spec {
        LevelSpec::All(level) => {
            let level = level.parse::<Level>()?;
            Ok(RuleTable {
                rules: vec![Rule {
                    matcher: StatusMatcher::Any,
                    level,
                }],
            })
        }
        LevelSpec::Mixed { .. } => Err(ConfigError::AmbiguousDefault),
        LevelSpec::Rules(entries) => {
            let mut rules = Vec::with_capacity(entries.len());
            let mut default: Option<Level> = None;

            for entry in entries {
                let level = entry.level.parse::<Level>()?;
                match &entry.on {
                    StatusSpec::Token(token) if token == "default" => match default {
                        None => default = Some(level),
                        Some(existing) if existing == level => {
                            tracing::warn!(
                                level = %level,
                                "duplicate `default` declaration ignored"
                            );
                        }
                        Some(existing) => {
                            return Err(ConfigError::ConflictingDefault {
                                first: existing,
                                second: level,
                            });
                        }
                    },
                    StatusSpec::Token(token) => {
                        return Err(ConfigError::InvalidCode(token.clone()));
                    }
                    StatusSpec::Code(code) => {
                        rules.push(Rule {
                            matcher: StatusMatcher::Exact(validate_code(*code)?),
                            level,
                        });
                    }
                    StatusSpec::Codes(codes) => {
                        for code in codes {
                            rules.push(Rule {
                                matcher: StatusMatcher::Exact(validate_code(*code)?),
                                level,
                            });
                        }
                    }
                    StatusSpec::Range { from, to } => {
                        let from = validate_code(*from)?;
                        let to = validate_code(*to)?;
                        if from > to {
                            return Err(ConfigError::InvalidCode(format!("{from}..={to}")));
                        }
                        rules.push(Rule {
                            matcher: StatusMatcher::Range(from, to),
                            level,
                        });
                    }
                }
            }

            // Defaults are lowest precedence: appended after everything
            // declared in the list, whatever position the marker held.
            if let Some(level) = default {
                rules.push(Rule {
                    matcher: StatusMatcher::Any,
                    level,
                });
            }

            Ok(RuleTable { rules })
        }
    }
}

fn validate_code(code: i64) -> Result<u16, ConfigError> {
    u16::try_from(code).map_err(|_| ConfigError::InvalidCode(code.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules(entries: Vec<StatusRule>) -> LevelSpec {
        LevelSpec::Rules(entries)
    }

    fn default_entry(level: &str) -> StatusRule {
        StatusRule::new(StatusSpec::Token("default".to_string()), level)
    }

    #[test]
    fn bare_level_becomes_single_catch_all() {
        let table = parse(&LevelSpec::All("warn".to_string())).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.rules()[0].matcher(), StatusMatcher::Any);
        assert_eq!(table.rules()[0].level(), Level::Warn);
    }

    #[test]
    fn empty_list_yields_empty_table() {
        let table = parse(&rules(vec![])).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn entries_keep_declaration_order() {
        let table = parse(&rules(vec![
            StatusRule::new(StatusSpec::Range { from: 500, to: 599 }, "error"),
            StatusRule::new(StatusSpec::Code(503), "warn"),
        ]))
        .unwrap();

        assert_eq!(
            table.rules()[0].matcher(),
            StatusMatcher::Range(500, 599)
        );
        assert_eq!(table.rules()[1].matcher(), StatusMatcher::Exact(503));
        // The earlier range shadows the later exact entry.
        assert_eq!(table.resolve(503), Some(Level::Error));
    }

    #[test]
    fn code_groups_expand_in_group_order() {
        let table = parse(&rules(vec![StatusRule::new(
            StatusSpec::Codes(vec![410, 404, 418]),
            "warn",
        )]))
        .unwrap();

        let matchers: Vec<_> = table.rules().iter().map(|r| r.matcher()).collect();
        assert_eq!(
            matchers,
            vec![
                StatusMatcher::Exact(410),
                StatusMatcher::Exact(404),
                StatusMatcher::Exact(418),
            ]
        );
        assert!(table.rules().iter().all(|r| r.level() == Level::Warn));
    }

    #[test]
    fn default_is_appended_last_regardless_of_position() {
        let table = parse(&rules(vec![
            default_entry("error"),
            StatusRule::new(StatusSpec::Code(200), "info"),
        ]))
        .unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.rules()[0].matcher(), StatusMatcher::Exact(200));
        assert_eq!(table.rules()[1].matcher(), StatusMatcher::Any);
        assert_eq!(table.resolve(200), Some(Level::Info));
        assert_eq!(table.resolve(404), Some(Level::Error));
    }

    #[test]
    fn duplicate_same_default_is_tolerated() {
        let table = parse(&rules(vec![
            default_entry("info"),
            default_entry("info"),
        ]))
        .unwrap();

        assert_eq!(table.len(), 1);
        assert_eq!(table.resolve(404), Some(Level::Info));
    }

    #[test]
    fn conflicting_defaults_are_rejected() {
        let err = parse(&rules(vec![
            default_entry("info"),
            default_entry("error"),
        ]))
        .unwrap_err();

        assert_eq!(
            err,
            ConfigError::ConflictingDefault {
                first: Level::Info,
                second: Level::Error,
            }
        );
    }

    #[test]
    fn bare_default_alongside_list_is_ambiguous() {
        let err = parse(&LevelSpec::Mixed {
            default: "error".to_string(),
            rules: vec![StatusRule::new(StatusSpec::Code(200), "info")],
        })
        .unwrap_err();

        assert_eq!(err, ConfigError::AmbiguousDefault);
    }

    #[test]
    fn unknown_level_name_is_rejected() {
        let err = parse(&rules(vec![StatusRule::new(
            StatusSpec::Code(200),
            "silly",
        )]))
        .unwrap_err();

        assert_eq!(err, ConfigError::InvalidLevel("silly".to_string()));
    }

    #[test]
    fn unknown_token_is_an_invalid_matcher() {
        let err = parse(&rules(vec![StatusRule::new(
            StatusSpec::Token("fallback".to_string()),
            "info",
        )]))
        .unwrap_err();

        assert_eq!(err, ConfigError::InvalidCode("fallback".to_string()));
    }

    #[test]
    fn out_of_range_codes_are_rejected() {
        for code in [-1, 70_000] {
            let err = parse(&rules(vec![StatusRule::new(
                StatusSpec::Code(code),
                "info",
            )]))
            .unwrap_err();
            assert_eq!(err, ConfigError::InvalidCode(code.to_string()));
        }
    }

    #[test]
    fn inverted_range_is_rejected() {
        let err = parse(&rules(vec![StatusRule::new(
            StatusSpec::Range { from: 299, to: 200 },
            "info",
        )]))
        .unwrap_err();

        assert_eq!(err, ConfigError::InvalidCode("299..=200".to_string()));
    }

    #[test]
    fn json_shapes_deserialize_into_matching_variants() {
        let bare: LevelSpec = serde_json::from_value(serde_json::json!("info")).unwrap();
        assert!(matches!(bare, LevelSpec::All(_)));

        let listed: LevelSpec = serde_json::from_value(serde_json::json!([
            { "on": 200, "level": "info" },
            { "on": { "from": 500, "to": 599 }, "level": "error" },
            { "on": [404, 410], "level": "warn" },
            { "on": "default", "level": "debug" },
        ]))
        .unwrap();
        let table = parse(&listed).unwrap();
        assert_eq!(table.len(), 5);
        assert_eq!(table.resolve(504), Some(Level::Error));
        assert_eq!(table.resolve(410), Some(Level::Warn));
        assert_eq!(table.resolve(302), Some(Level::Debug));

        // The combined shape deserializes fine but parsing rejects it.
        let mixed: LevelSpec = serde_json::from_value(serde_json::json!({
            "default": "error",
            "rules": [ { "on": 200, "level": "info" } ],
        }))
        .unwrap();
        assert_eq!(parse(&mixed).unwrap_err(), ConfigError::AmbiguousDefault);
    }
}

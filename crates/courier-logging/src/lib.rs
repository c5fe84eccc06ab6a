//! # courier-logging
//!
//! Request/response logging middleware for the courier client pipeline.
//!
//! One line per request, at a severity chosen by a user-configurable
//! mapping from status code (or range) to log level. Failed exchanges
//! always log at `error`; statuses no rule covers are suppressed.
//!
//! ## Example
//!
//! ```rust,ignore
//! use courier_core::Client;
//! use courier_logging::{LevelSpec, LoggingLayer, StatusRule, StatusSpec};
//!
//! let spec = LevelSpec::Rules(vec![
//!     StatusRule::new(StatusSpec::Range { from: 200, to: 299 }, "info"),
//!     StatusRule::new(StatusSpec::Token("default".into()), "error"),
//! ]);
//!
//! let client = Client::new(transport)
//!     .layer(Box::new(LoggingLayer::from_spec(&spec)?));
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod config;
mod layer;
mod level;
mod rules;
mod sink;

pub use config::{parse, ConfigError, LevelSpec, StatusRule, StatusSpec};
pub use layer::LoggingLayer;
pub use level::Level;
pub use rules::{Rule, RuleTable, StatusMatcher};
pub use sink::{LogSink, MemorySink, TracingSink, DEFAULT_MAX_LINES};

//! Status-mapped request/response logging layer
//!
//! Sits between the caller and the transport, observes each outcome
//! exactly once, and emits at most one line per request:
//!
//! - a failed exchange logs at a fixed `error` severity,
//! - a response logs at whatever level the rule table resolves for its
//!   status, or not at all when no rule matches.
//!
//! The downstream result always passes through unchanged: this layer is
//! an observer, not a participant.
//!
//! # Example
//!
//! ```rust,ignore
//! use courier_core::Client;
//! use courier_logging::{LevelSpec, LoggingLayer};
//!
//! let layer = LoggingLayer::from_spec(&spec)?;
//! let client = Client::new(transport).layer(Box::new(layer));
//! ```

use crate::config::{self, ConfigError, LevelSpec};
use crate::level::Level;
use crate::rules::RuleTable;
use crate::sink::{LogSink, TracingSink};
use courier_core::{BoxFuture, BoxedNext, MiddlewareLayer, Request};
use std::sync::Arc;
use std::time::Instant;

/// Logging middleware layer for the courier client pipeline.
#[derive(Clone)]
pub struct LoggingLayer {
    table: Arc<RuleTable>,
    sink: Arc<dyn LogSink>,
}

impl LoggingLayer {
    /// Layer with an empty rule table: every response is suppressed until
    /// a spec is supplied. Failed exchanges still log at `error`.
    pub fn new() -> Self {
        Self {
            table: Arc::new(RuleTable::default()),
            sink: Arc::new(TracingSink),
        }
    }

    /// Build a layer from a raw level spec.
    ///
    /// # Errors
    ///
    /// Fails fast on an invalid spec; a layer is never constructed over a
    /// partially-applied configuration.
    pub fn from_spec(spec: &LevelSpec) -> Result<Self, ConfigError> {
        Ok(Self {
            table: Arc::new(config::parse(spec)?),
            sink: Arc::new(TracingSink),
        })
    }

    /// Replace the log sink (tests inject a recording sink here).
    pub fn sink(mut self, sink: Arc<dyn LogSink>) -> Self {
        self.sink = sink;
        self
    }

    /// The resolved rule table.
    pub fn table(&self) -> &RuleTable {
        &self.table
    }
}

impl Default for LoggingLayer {
    fn default() -> Self {
        Self::new()
    }
}

impl MiddlewareLayer for LoggingLayer {
    fn call(&self, req: Request, next: BoxedNext) -> BoxFuture {
        let table = Arc::clone(&self.table);
        let sink = Arc::clone(&self.sink);
        let method = req.method().clone();
        let url = req.url().clone();

        Box::pin(async move {
            let start = Instant::now();
            let result = next(req).await;

            match &result {
                // Failures never consult the table: always `error`.
                Err(err) => {
                    sink.emit(Level::Error, &format!("{method} {url}>> ERROR: {err}"));
                }
                Ok(response) => {
                    if let Some(level) = table.resolve(response.status().as_u16()) {
                        let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
                        sink.emit(
                            level,
                            &format!(
                                "{method} {url} <<{status}({elapsed_ms:.3}ms)\n{response:?}",
                                status = response.status().as_u16(),
                            ),
                        );
                    }
                }
            }

            result
        })
    }

    fn clone_box(&self) -> Box<dyn MiddlewareLayer> {
        Box::new(self.clone())
    }
}

//! Log sinks: where emitted lines go

use crate::level::Level;
use std::sync::RwLock;

/// Destination for emitted log lines.
///
/// The layer formats one message per request and hands it over; the sink
/// owns output and rotation. Emission is infallible from the layer's
/// point of view: a sink failure is the sink's concern.
pub trait LogSink: Send + Sync + 'static {
    /// Emit one message at `level`.
    fn emit(&self, level: Level, message: &str);
}

/// Default sink forwarding to the `tracing` macros.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn emit(&self, level: Level, message: &str) {
        match level {
            Level::Debug => tracing::debug!("{message}"),
            Level::Info => tracing::info!("{message}"),
            Level::Warn => tracing::warn!("{message}"),
            Level::Error => tracing::error!("{message}"),
        }
    }
}

/// Default capacity of a [`MemorySink`].
pub const DEFAULT_MAX_LINES: usize = 10_000;

/// In-memory sink recording emissions (for tests and demos).
///
/// Bounded: once `max_lines` is reached the oldest line is evicted, ring
/// buffer style, so a long-lived sink cannot grow without limit.
#[derive(Debug)]
pub struct MemorySink {
    lines: RwLock<Vec<(Level, String)>>,
    max_lines: usize,
}

impl MemorySink {
    /// Create an empty sink with the default capacity.
    pub fn new() -> Self {
        Self::bounded(DEFAULT_MAX_LINES)
    }

    /// Create an empty sink keeping at most `max_lines` lines.
    pub fn bounded(max_lines: usize) -> Self {
        Self {
            lines: RwLock::new(Vec::new()),
            max_lines,
        }
    }

    /// Snapshot of everything emitted so far, in emission order.
    pub fn lines(&self) -> Vec<(Level, String)> {
        self.lines
            .read()
            .map(|lines| lines.clone())
            .unwrap_or_default()
    }

    /// Number of lines emitted so far.
    pub fn len(&self) -> usize {
        self.lines.read().map(|lines| lines.len()).unwrap_or(0)
    }

    /// Whether nothing has been emitted yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for MemorySink {
    fn default() -> Self {
        Self::new()
    }
}

impl LogSink for MemorySink {
    fn emit(&self, level: Level, message: &str) {
        // A poisoned lock drops the line rather than propagating a panic
        // out of the logging path.
        if let Ok(mut lines) = self.lines.write() {
            if lines.len() >= self.max_lines && !lines.is_empty() {
                lines.remove(0);
            }
            lines.push((level, message.to_string()));
        }
    }
}

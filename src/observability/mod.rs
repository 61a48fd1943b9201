//! Observability subsystem for rollbook
//!
//! - Structured logging (JSON lines) through an injected sink
//! - Typed lifecycle and dispatch events
//! - Invocation counters
//!
//! Observability has no side effects on execution. A sink that fails to
//! write never fails an invocation.

mod events;
mod logger;
mod metrics;

pub use events::Event;
pub use logger::{DiscardSink, LogSink, Logger, MemorySink, Severity, StderrSink, StdoutSink};
pub use metrics::{InvocationMetrics, MetricsSnapshot};

impl Logger {
    /// Log a typed event
    pub fn event(&self, severity: Severity, event: Event, fields: &[(&str, &str)]) {
        self.log(severity, event.as_str(), fields);
    }
}

//! Per-invocation context handed to handlers

use uuid::Uuid;

use crate::ledger::LedgerStub;
use crate::observability::{Event, InvocationMetrics, Logger, Severity};

/// Everything a handler may touch during one invocation
///
/// Built fresh by the dispatcher for each call and dropped when it returns.
pub struct Invocation<'a> {
    /// Ledger for this invocation
    pub stub: &'a dyn LedgerStub,
    /// Parameters, function name excluded
    pub args: &'a [String],
    /// Transaction id stamped on every log line
    pub tx_id: Uuid,
    pub logger: &'a Logger,
    pub metrics: &'a InvocationMetrics,
}

impl<'a> Invocation<'a> {
    /// Log a typed event with the `tx_id` field added
    pub fn log(&self, severity: Severity, event: Event, fields: &[(&str, &str)]) {
        if !self.logger.enabled(severity) {
            return;
        }
        let tx_id = self.tx_id.to_string();
        let mut all: Vec<(&str, &str)> = Vec::with_capacity(fields.len() + 1);
        all.push(("tx_id", tx_id.as_str()));
        all.extend_from_slice(fields);
        self.logger.event(severity, event, &all);
    }
}

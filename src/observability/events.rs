//! Observable events
//!
//! Events are explicit and typed. The string form is stable and is what
//! appears in the `event` field of a log line.

use std::fmt;

/// Observable events in rollbook
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Lifecycle
    /// Chaincode instantiated by the platform
    ChaincodeInstantiated,

    // Dispatch
    /// Invocation received, before execution
    InvokeReceived,
    /// Handler returned a payload
    InvokeSucceeded,
    /// Handler failed; error payload returned
    InvokeFailed,
    /// No handler registered for the requested name
    UnknownOperation,

    // Seeding
    LedgerSeedBegin,
    LedgerSeedComplete,
    /// A seed write failed; earlier writes remain on the ledger
    LedgerSeedAborted,

    // Record access
    RecordWritten,
    RecordRead,
    RecordDeleted,

    // Range scans
    RangeScanBegin,
    RangeScanComplete,
    /// A listed value was not a record and was returned as text
    DecodeFallback,
}

impl Event {
    /// Returns the event name
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ChaincodeInstantiated => "CHAINCODE_INSTANTIATED",
            Event::InvokeReceived => "INVOKE_RECEIVED",
            Event::InvokeSucceeded => "INVOKE_SUCCEEDED",
            Event::InvokeFailed => "INVOKE_FAILED",
            Event::UnknownOperation => "UNKNOWN_OPERATION",
            Event::LedgerSeedBegin => "LEDGER_SEED_BEGIN",
            Event::LedgerSeedComplete => "LEDGER_SEED_COMPLETE",
            Event::LedgerSeedAborted => "LEDGER_SEED_ABORTED",
            Event::RecordWritten => "RECORD_WRITTEN",
            Event::RecordRead => "RECORD_READ",
            Event::RecordDeleted => "RECORD_DELETED",
            Event::RangeScanBegin => "RANGE_SCAN_BEGIN",
            Event::RangeScanComplete => "RANGE_SCAN_COMPLETE",
            Event::DecodeFallback => "DECODE_FALLBACK",
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
